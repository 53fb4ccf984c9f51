//! VehicleClass.lua rendering.

use std::collections::BTreeSet;

use crate::registry::GameData;
use crate::types::VehicleId;

/// IDs at or below this are engine placeholders and never emitted.
const RESERVED_MAX_ID: VehicleId = 1;

/// Render the vehicle table for `required`.
///
/// Returns the file text and the number of vehicle entries written.
pub(super) fn render_vehicle_classes(
    game: &GameData,
    label: &str,
    required: &BTreeSet<VehicleId>,
) -> (String, usize) {
    let always = game.always_include();
    let mission_line = format!("-- Mission: {}", label);

    let mut parts: Vec<&str> = vec!["VehicleClass = {}", mission_line.as_str()];

    if !always.is_empty() {
        parts.push("\n-- Always Include:");
        parts.push(&always.source);
    }

    parts.push("\n-- Global Logic:");
    if let Some(preamble) = &game.vehicles().preamble {
        parts.push(preamble);
    }

    parts.push("\n-- Mission Units:");
    let mut written = 0;
    for class in required
        .iter()
        .filter(|&&id| id > RESERVED_MAX_ID && !always.contains(id))
        .filter_map(|&id| game.vehicles().get(id))
    {
        parts.push(&class.source);
        written += 1;
    }

    (parts.join("\n\n"), written)
}
