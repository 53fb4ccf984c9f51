//! UnitLib.lua rendering.

use std::collections::BTreeSet;

use crate::registry::GameData;
use crate::types::{VehicleId, DEFAULT_UNIT_LIB_HEADER};

use super::with_trailing_comma;

/// Render the unit library filtered to `required` plus the always-include set.
///
/// Groups left without entries are dropped. Returns the file text and the
/// number of entries written.
pub(super) fn render_unit_lib(
    game: &GameData,
    label: &str,
    required: &BTreeSet<VehicleId>,
) -> (String, usize) {
    let unit_lib = game.unit_lib();
    let always = game.always_include();
    let needed = |id: VehicleId| required.contains(&id) || always.contains(id);

    let header = match unit_lib.header.trim() {
        "" => DEFAULT_UNIT_LIB_HEADER,
        header => header,
    };
    let mut lines = vec![
        header.to_string(),
        format!("-- Filtered UnitLib for Mission: {}", label),
    ];
    let mut written = 0;

    for group in unit_lib.groups() {
        let entries: Vec<_> = group.filtered(needed).collect();
        if entries.is_empty() {
            continue;
        }

        lines.push("{".to_string());
        if let Some(header) = &group.header {
            lines.push(header.trim_end().to_string());
        }
        for (i, entry) in entries.iter().enumerate() {
            if i > 0 {
                lines.push(String::new());
            }
            lines.push(with_trailing_comma(&entry.source));
        }
        lines.push("},".to_string());
        written += entries.len();
    }

    lines.push("}".to_string());
    (lines.join("\n"), written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_unit_lib;
    use crate::registry::GameDataBuilder;
    use crate::types::AlwaysInclude;

    const UNIT_LIB: &str = r#"UnitLib = {
    {
        -- Ships
        { ["VehicleClass"] = 10, ["Hp"] = 900 },
        { ["VehicleClass"] = 11, ["Hp"] = 800 }
    },
    {
        -- Specials
        { ["VehicleClass"] = 99 },
    },
}"#;

    fn game(always: &[VehicleId]) -> GameData {
        let mut builder = GameDataBuilder::new(".");
        builder
            .unit_lib(parse_unit_lib(UNIT_LIB).unwrap())
            .always_include(AlwaysInclude {
                source: "VehicleClass[0] = {}".to_string(),
                ids: always.iter().copied().collect(),
            });
        builder.build()
    }

    #[test]
    fn test_keeps_group_header_and_needed_entries() {
        let (text, written) = render_unit_lib(&game(&[]), "Midway", &BTreeSet::from([10]));

        assert_eq!(written, 1);
        insta::assert_snapshot!(text, @r###"
        UnitLib = {
        -- Filtered UnitLib for Mission: Midway
        {
        -- Ships
        { ["VehicleClass"] = 10, ["Hp"] = 900 },
        },
        }
        "###);
    }

    #[test]
    fn test_always_include_ids_kept() {
        let (text, written) = render_unit_lib(&game(&[99]), "Midway", &BTreeSet::from([10, 11]));

        assert_eq!(written, 3);
        assert!(text.contains("{ [\"VehicleClass\"] = 11, [\"Hp\"] = 800 },\n\n"));
        assert!(text.contains("-- Specials\n{ [\"VehicleClass\"] = 99 },\n},"));
    }

    #[test]
    fn test_nothing_needed() {
        let (text, written) = render_unit_lib(&game(&[]), "Empty", &BTreeSet::new());

        assert_eq!(written, 0);
        assert_eq!(text, "UnitLib = {\n-- Filtered UnitLib for Mission: Empty\n}");
    }
}
