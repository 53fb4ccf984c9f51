//! Vehicle class table parser.
//!
//! Parses `Master_vehicleclasses.lua` into a `VehicleCatalog`:
//!
//! ```text
//! VehicleClass = {}
//! -- shared helpers ...
//! VehicleClass[10] = {
//!     ["Code"] = "DD_Fletcher",
//!     ...
//! }
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{VehicleCatalog, VehicleClass, UNKNOWN_CODE};

use super::block::block_end;
use super::fields::CODE;

static ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"VehicleClass\s*\[\s*(\d+)\s*\]\s*=\s*\{").expect("vehicle assignment pattern")
});

static INDEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"VehicleClass\s*\[").expect("vehicle index pattern"));

static INITIALISER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"VehicleClass\s*=\s*\{\}").expect("vehicle initialiser pattern")
});

/// Remove the `VehicleClass = {}` initialiser and trim.
pub(crate) fn strip_initialiser(text: &str) -> String {
    INITIALISER.replace_all(text, "").trim().to_string()
}

/// Parse a vehicle class table.
///
/// Only top-level assignments count: an assignment that appears inside an
/// entry already taken is part of that entry's text. Assignments whose value
/// is not a table literal, an unterminated block or an ID beyond `u32` are
/// skipped.
pub fn parse_vehicle_classes(source: &str) -> VehicleCatalog {
    let mut catalog = VehicleCatalog::new();

    if let Some(first) = INDEX.find(source) {
        let preamble = strip_initialiser(&source[..first.start()]);
        if !preamble.is_empty() {
            catalog.preamble = Some(preamble);
        }
    }

    let mut consumed = 0;
    for caps in ASSIGNMENT.captures_iter(source) {
        let (Some(whole), Some(id)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() < consumed {
            continue;
        }
        let Ok(id) = id.as_str().parse() else {
            continue;
        };
        let open = whole.end() - 1;
        let Some(close) = block_end(source, open) else {
            continue;
        };

        let code = CODE.find(&source[open..close]).unwrap_or(UNKNOWN_CODE);
        catalog.insert(VehicleClass::new(id, code, &source[whole.start()..close]));
        consumed = close;
    }

    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TABLE: &str = r#"VehicleClass = {}
function Helper() return 1 end

VehicleClass[10] = {
    ["Code"] = "DD_Fletcher",
    ["Weapons"] = { { ["Type"] = "Gun" } },
}

VehicleClass [ 20 ] = {
    ["Code"] = "F4F",
}
"#;

    #[test]
    fn test_parse_entries_and_codes() {
        let catalog = parse_vehicle_classes(TABLE);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(10).unwrap().code, "DD_Fletcher");
        assert_eq!(catalog.get(20).unwrap().code, "F4F");
    }

    #[test]
    fn test_entry_source_is_verbatim() {
        let catalog = parse_vehicle_classes(TABLE);

        assert_eq!(
            catalog.get(20).unwrap().source,
            "VehicleClass [ 20 ] = {\n    [\"Code\"] = \"F4F\",\n}"
        );
    }

    #[test]
    fn test_preamble_strips_initialiser() {
        let catalog = parse_vehicle_classes(TABLE);

        assert_eq!(
            catalog.preamble.as_deref(),
            Some("function Helper() return 1 end")
        );
    }

    #[test]
    fn test_no_preamble_when_only_initialiser() {
        let catalog = parse_vehicle_classes("VehicleClass = {}\nVehicleClass[3] = {}");

        assert_eq!(catalog.preamble, None);
        assert!(catalog.contains(3));
    }

    #[test]
    fn test_duplicate_id_second_wins() {
        let source = r#"VehicleClass[7] = { ["Code"] = "Old" }
VehicleClass[7] = { ["Code"] = "New" }"#;

        let catalog = parse_vehicle_classes(source);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(7).unwrap().code, "New");
        assert!(catalog.get(7).unwrap().source.contains("\"New\""));
    }

    #[test]
    fn test_missing_code_uses_sentinel() {
        let catalog = parse_vehicle_classes("VehicleClass[4] = { ['x'] = 1 }");
        assert_eq!(catalog.get(4).unwrap().code, UNKNOWN_CODE);
    }

    #[test]
    fn test_nested_assignment_is_not_top_level() {
        let source = "VehicleClass[1] = { f = function() VehicleClass[2] = {} end }";

        let catalog = parse_vehicle_classes(source);

        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains(1));
    }

    #[test]
    fn test_unterminated_entry_is_skipped() {
        let source = "VehicleClass[1] = { [\"Code\"] = \"A\" }\nVehicleClass[2] = {";

        let catalog = parse_vehicle_classes(source);

        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_non_table_value_does_not_take_next_entry() {
        let source = "VehicleClass[12] = CopyTable(VehicleClass[5])\nVehicleClass[13] = { [\"Code\"] = \"Kongo\" }\n";

        let catalog = parse_vehicle_classes(source);

        assert!(!catalog.contains(12));
        assert_eq!(catalog.get(13).unwrap().code, "Kongo");
        assert_eq!(
            catalog.get(13).unwrap().source,
            "VehicleClass[13] = { [\"Code\"] = \"Kongo\" }"
        );
    }

    #[test]
    fn test_empty_source() {
        let catalog = parse_vehicle_classes("");
        assert!(catalog.is_empty());
        assert_eq!(catalog.preamble, None);
    }
}
