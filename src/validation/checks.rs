//! Consistency checks over loaded game data.
//!
//! Each check takes a `&GameData` and returns `Diagnostics`.

use std::collections::HashSet;

use crate::registry::GameData;

use super::diagnostic::{Diagnostic, Diagnostics};

/// Missions whose scene file is absent cannot be generated.
pub fn check_scene_files(game: &GameData) -> Diagnostics {
    let mut result = Diagnostics::new();

    for mission in game.missions().missions() {
        if !mission.scene_file(game.root()).is_file() {
            result.push(
                Diagnostic::error(
                    "bsp::validate::missing-scene",
                    format!("Mission '{}' ({}) has no scene file", mission.id, mission.group),
                )
                .with_path(&mission.scene_path),
            );
        }
    }

    result
}

/// Mission IDs repeated inside one group make selection ambiguous.
pub fn check_duplicate_missions(game: &GameData) -> Diagnostics {
    let mut result = Diagnostics::new();
    let mut seen = HashSet::new();

    for mission in game.missions().missions() {
        if !seen.insert((mission.group.as_str(), mission.id.as_str())) {
            result.push(
                Diagnostic::warning(
                    "bsp::validate::duplicate-mission",
                    format!("Mission '{}' appears more than once in '{}'", mission.id, mission.group),
                )
                .with_help("Only one of them can be selected by ID"),
            );
        }
    }

    result
}

/// Unit-library entries for vehicle classes nobody defines are never emitted.
pub fn check_unit_lib_classes(game: &GameData) -> Diagnostics {
    let mut result = Diagnostics::new();

    for id in game.unit_lib().vehicle_classes() {
        if !game.vehicles().contains(id) && !game.always_include().contains(id) {
            result.push(Diagnostic::warning(
                "bsp::validate::unknown-unitlib-class",
                format!("Unit library has entries for undefined vehicle class {}", id),
            ));
        }
    }

    result
}

/// Vehicles whose code is not an enum name cannot be referenced from scenes.
pub fn check_vehicle_codes(game: &GameData) -> Diagnostics {
    let mut result = Diagnostics::new();

    for class in game.vehicles().iter() {
        if class.has_code() && game.enums().resolve(&class.code).is_none() {
            result.push(Diagnostic::warning(
                "bsp::validate::unresolved-code",
                format!(
                    "Vehicle class {} has code '{}' with no enum entry",
                    class.id, class.code
                ),
            ));
        }
    }

    result
}

/// An empty vehicle table produces empty output.
pub fn check_empty_catalog(game: &GameData) -> Diagnostics {
    let mut result = Diagnostics::new();

    if game.vehicles().is_empty() {
        result.push(
            Diagnostic::warning(
                "bsp::validate::empty-catalog",
                "Vehicle class table has no VehicleClass[ID] entries",
            )
            .with_path(&game.config().inputs.vehicle_classes),
        );
    }

    result
}
