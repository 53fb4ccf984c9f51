//! Always-include table parser.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::AlwaysInclude;

use super::vehicles::strip_initialiser;

static INDEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"VehicleClass\s*\[\s*(\d+)\s*\]").expect("vehicle index pattern")
});

/// Parse `AlwaysInclude_vehicleclasses.lua`.
///
/// The table is re-emitted as a whole, so only its IDs are extracted.
pub fn parse_always_include(source: &str) -> AlwaysInclude {
    let source = strip_initialiser(source);
    let ids = INDEX
        .captures_iter(&source)
        .filter_map(|caps| caps.get(1)?.as_str().parse().ok())
        .collect();

    AlwaysInclude { source, ids }
}
