//! Loaded game data.
//!
//! `GameData` bundles every table loaded from one game root. It is built once
//! with `GameDataBuilder` and then only read: resolution and generation take
//! it by shared reference and never modify it.
//!
//! # Example
//!
//! ```ignore
//! use bsp_loader::registry::GameDataBuilder;
//!
//! let mut builder = GameDataBuilder::new(root);
//! builder.enums(enums).vehicles(vehicles).missions(tree);
//!
//! let game = builder.build();
//! println!("{} missions", game.missions().len());
//! ```

pub mod types;

use std::path::{Path, PathBuf};

use crate::discovery::Config;
use crate::types::{AlwaysInclude, EnumRegistry, MissionTree, UnitLib, VehicleCatalog};

pub use types::Artifact;

/// Every table loaded from one game root.
#[derive(Debug, Clone)]
pub struct GameData {
    root: PathBuf,
    config: Config,
    enums: EnumRegistry,
    vehicles: VehicleCatalog,
    always_include: AlwaysInclude,
    unit_lib: UnitLib,
    missions: MissionTree,
}

impl GameData {
    /// The game root all paths are relative to.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn enums(&self) -> &EnumRegistry {
        &self.enums
    }

    pub fn vehicles(&self) -> &VehicleCatalog {
        &self.vehicles
    }

    pub fn always_include(&self) -> &AlwaysInclude {
        &self.always_include
    }

    pub fn unit_lib(&self) -> &UnitLib {
        &self.unit_lib
    }

    pub fn missions(&self) -> &MissionTree {
        &self.missions
    }
}

/// Builder for constructing a `GameData`.
///
/// Tables that are never set stay empty.
#[derive(Debug)]
pub struct GameDataBuilder {
    root: PathBuf,
    config: Config,
    enums: EnumRegistry,
    vehicles: VehicleCatalog,
    always_include: AlwaysInclude,
    unit_lib: UnitLib,
    missions: MissionTree,
}

impl GameDataBuilder {
    /// Create a builder for the given game root with default config.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            config: Config::default(),
            enums: EnumRegistry::default(),
            vehicles: VehicleCatalog::default(),
            always_include: AlwaysInclude::default(),
            unit_lib: UnitLib::default(),
            missions: MissionTree::default(),
        }
    }

    pub fn config(&mut self, config: Config) -> &mut Self {
        self.config = config;
        self
    }

    pub fn enums(&mut self, enums: EnumRegistry) -> &mut Self {
        self.enums = enums;
        self
    }

    pub fn vehicles(&mut self, vehicles: VehicleCatalog) -> &mut Self {
        self.vehicles = vehicles;
        self
    }

    pub fn always_include(&mut self, always_include: AlwaysInclude) -> &mut Self {
        self.always_include = always_include;
        self
    }

    pub fn unit_lib(&mut self, unit_lib: UnitLib) -> &mut Self {
        self.unit_lib = unit_lib;
        self
    }

    pub fn missions(&mut self, missions: MissionTree) -> &mut Self {
        self.missions = missions;
        self
    }

    /// Finish loading.
    pub fn build(self) -> GameData {
        GameData {
            root: self.root,
            config: self.config,
            enums: self.enums,
            vehicles: self.vehicles,
            always_include: self.always_include,
            unit_lib: self.unit_lib,
            missions: self.missions,
        }
    }
}
