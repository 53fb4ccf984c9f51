//! bsp-loader - Battlestations Pacific mission loader generator
//!
//! Reads the game's master data tables, works out which vehicle classes a
//! set of missions needs from their scene files, and writes trimmed copies of
//! the vehicle, unit-library and mission-tree tables.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod generate;
pub mod output;
pub mod parser;
pub mod registry;
pub mod resolve;
pub mod types;
pub mod validation;

pub use discovery::{load_game_data, Config, LoadReport};
pub use error::{BspError, Result};
pub use generate::{generate, prepare, render, GeneratedFiles, GenerationReport};
pub use registry::{Artifact, GameData, GameDataBuilder};
pub use resolve::{resolve_missions, Resolution};
pub use types::{
    AlwaysInclude, EnumRegistry, Mission, MissionTree, UnitLib, VehicleCatalog, VehicleClass,
    VehicleId,
};
pub use validation::{validate_game_data, Diagnostic, Diagnostics, Severity};
