//! Core domain types for bsp-loader.
//!
//! This module contains the data model shared by parsing, resolution and
//! generation:
//! - `EnumRegistry` - enum entry names to numeric values
//! - `VehicleCatalog` / `AlwaysInclude` - vehicle class definitions
//! - `UnitLib` - supplemental per-vehicle records, grouped
//! - `MissionTree` - missions and the templates wrapped around them

mod enums;
mod mission;
mod unitlib;
mod vehicle;

pub use enums::EnumRegistry;
pub use mission::{
    GroupTemplate, Mission, MissionTree, SceneLayout, DEFAULT_PREAMBLE, MULTIPLAYER_GROUP,
};
pub use unitlib::{UnitLib, UnitLibEntry, UnitLibGroup, DEFAULT_UNIT_LIB_HEADER};
pub use vehicle::{AlwaysInclude, VehicleCatalog, VehicleClass, VehicleId, UNKNOWN_CODE};
