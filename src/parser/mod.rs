//! Parser modules for the game's data tables.
//!
//! The tables are Lua source. Rather than parse Lua, every parser here is
//! built on the brace-depth scanner in [`block`] plus a few keyed-field
//! patterns from [`fields`]. Nothing beyond block boundaries, `["Key"]`
//! fields and quoted tokens is interpreted.
//!
//! # Usage
//!
//! ```ignore
//! use bsp_loader::parser::{parse_vehicle_classes, top_level_blocks};
//!
//! let catalog = parse_vehicle_classes(&source);
//! for class in catalog.iter() {
//!     println!("{} {}", class.id, class.code);
//! }
//! ```

pub mod always_include;
pub mod block;
pub mod enums;
pub mod fields;
pub mod missions;
pub mod span;
pub mod unitlib;
pub mod vehicles;

pub use always_include::parse_always_include;
pub use block::{block_end, enclosing_block_start, extract_block, top_level_blocks, Block};
pub use enums::{parse_enums, EnumTable};
pub use missions::parse_mission_tree;
pub use span::Location;
pub use unitlib::parse_unit_lib;
pub use vehicles::parse_vehicle_classes;
