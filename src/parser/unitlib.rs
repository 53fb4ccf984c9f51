//! Unit-library table parser.
//!
//! Parses `master_unitlib.lua`:
//!
//! ```text
//! UnitLib = {
//!     {
//!         ["GroupName"] = "Ships", -- Ships
//!         { ["VehicleClass"] = 10, ... },
//!         { ["VehicleClass"] = 11, ... },
//!     },
//!     ...
//! }
//! ```

use crate::error::{BspError, Result};
use crate::types::{UnitLib, UnitLibEntry, UnitLibGroup, DEFAULT_UNIT_LIB_HEADER};

use super::block::{block_end, top_level_blocks};
use super::fields::VEHICLE_CLASS;
use super::span::Location;

/// Parse a unit-library table.
///
/// Entries without a `VehicleClass` field are dropped, and a group left with
/// no entries is dropped with them. A container that never closes is an
/// error.
pub fn parse_unit_lib(source: &str) -> Result<UnitLib> {
    let Some(open) = source.find('{') else {
        return Ok(UnitLib::new(DEFAULT_UNIT_LIB_HEADER));
    };

    let close = block_end(source, open).ok_or_else(|| BspError::Parse {
        message: format!(
            "UnitLib container opened at {} is never closed",
            Location::of(source, open)
        ),
        help: Some("Check master_unitlib.lua for unbalanced braces".to_string()),
    })?;

    let mut lib = UnitLib::new(&source[..=open]);
    let body = &source[open + 1..close - 1];

    for group_block in top_level_blocks(body) {
        let group_body = group_block.inner();
        let blocks = top_level_blocks(group_body);

        let header = blocks
            .first()
            .map(|first| group_body[..first.offset].trim())
            .filter(|text| !text.is_empty())
            .map(str::to_string);

        let entries = blocks
            .iter()
            .filter_map(|block| {
                Some(UnitLibEntry {
                    vehicle_class: VEHICLE_CLASS.find_u32(block.text)?,
                    source: block.text.to_string(),
                })
            })
            .collect();

        lib.push_group(UnitLibGroup { header, entries });
    }

    Ok(lib)
}
