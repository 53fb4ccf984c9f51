//! Enum definition parser.
//!
//! Parses `global.enums` style sources into `EnumTable` values:
//!
//! ```text
//! enum ShipClasses
//! {
//!     DD_Fletcher = 10,
//!     BB_Yamato = 11,
//! }
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{BspError, Result};

use super::block::block_end;
use super::span::Location;

static ENUM_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"enum\s+(\w+)\s*\{").expect("enum header pattern"));

static ENUM_ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([a-zA-Z0-9_-]+)\s*=\s*(-?\d+)").expect("enum entry pattern")
});

/// One `enum Name { ... }` definition, entries in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumTable {
    pub name: String,
    pub entries: Vec<(String, i64)>,
}

/// Parse every enum definition in `source`.
///
/// A source without a single enum definition is an error; unterminated
/// bodies and values that do not fit `i64` are skipped.
pub fn parse_enums(source: &str) -> Result<Vec<EnumTable>> {
    let mut tables = Vec::new();
    let mut unterminated = None;

    for caps in ENUM_HEADER.captures_iter(source) {
        let (Some(header), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let open = header.end() - 1;
        let Some(close) = block_end(source, open) else {
            unterminated.get_or_insert(open);
            continue;
        };

        let body = &source[open + 1..close - 1];
        let entries = ENUM_ENTRY
            .captures_iter(body)
            .filter_map(|entry| {
                let value = entry.get(2)?.as_str().parse::<i64>().ok()?;
                Some((entry.get(1)?.as_str().to_string(), value))
            })
            .collect();

        tables.push(EnumTable {
            name: name.as_str().to_string(),
            entries,
        });
    }

    if tables.is_empty() {
        let message = match unterminated {
            Some(offset) => format!(
                "enum body opened at {} is never closed",
                Location::of(source, offset)
            ),
            None => "no enum definitions found".to_string(),
        };
        return Err(BspError::Parse {
            message,
            help: Some("Expected `enum Name { Entry = 1, ... }` blocks".to_string()),
        });
    }

    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_enum() {
        let tables = parse_enums("enum E { A = 1, B = 2 }").unwrap();

        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].name, "E");
        assert_eq!(
            tables[0].entries,
            vec![("A".to_string(), 1), ("B".to_string(), 2)]
        );
    }

    #[test]
    fn test_parse_multiple_enums_with_negatives() {
        let source = "enum ShipClasses\n{\n  DD-Fletcher = 10,\n}\n\nenum AILevel { AI_None = -1 }";

        let tables = parse_enums(source).unwrap();

        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].entries, vec![("DD-Fletcher".to_string(), 10)]);
        assert_eq!(tables[1].entries, vec![("AI_None".to_string(), -1)]);
    }

    #[test]
    fn test_parse_skips_overflowing_values() {
        let tables = parse_enums("enum E { Big = 99999999999999999999, Ok = 3 }").unwrap();
        assert_eq!(tables[0].entries, vec![("Ok".to_string(), 3)]);
    }

    #[test]
    fn test_parse_no_enums_is_error() {
        assert!(parse_enums("-- nothing here").is_err());
    }

    #[test]
    fn test_parse_unterminated_reports_location() {
        let err = parse_enums("\nenum E { A = 1").unwrap_err();
        assert!(err.to_string().contains("2:8"));
    }

    #[test]
    fn test_parse_skips_unterminated_after_valid() {
        let tables = parse_enums("enum A { X = 1 }\nenum B { Y = 2").unwrap();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].name, "A");
    }
}
