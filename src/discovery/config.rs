//! Game root configuration (bsp.yaml) parsing.
//!
//! The config names the input and output tables relative to the game root,
//! where scene files live, and which scene reference categories name
//! vehicles. Every field has a default matching a stock install, so the file
//! is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BspError, Result};
use crate::registry::Artifact;
use crate::resolve::SceneFilter;
use crate::types::SceneLayout;

/// The name of the config file looked up in the game root.
pub const CONFIG_FILENAME: &str = "bsp.yaml";

/// Input table locations, relative to the game root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputPaths {
    pub enums: PathBuf,
    pub vehicle_classes: PathBuf,
    pub always_include: PathBuf,
    pub unit_lib: PathBuf,
    pub mission_tree: PathBuf,
}

impl Default for InputPaths {
    fn default() -> Self {
        Self {
            enums: PathBuf::from("universe/library/global.enums"),
            vehicle_classes: PathBuf::from("scripts/datatables/autoload/Master_vehicleclasses.lua"),
            always_include: PathBuf::from(
                "scripts/datatables/autoload/AlwaysInclude_vehicleclasses.lua",
            ),
            unit_lib: PathBuf::from("scripts/datatables/master_unitlib.lua"),
            mission_tree: PathBuf::from("scripts/datatables/master_missiontree.lua"),
        }
    }
}

impl InputPaths {
    /// Path of an artifact, relative to the game root.
    pub fn path(&self, artifact: Artifact) -> &Path {
        match artifact {
            Artifact::Enums => &self.enums,
            Artifact::VehicleClasses => &self.vehicle_classes,
            Artifact::AlwaysInclude => &self.always_include,
            Artifact::UnitLib => &self.unit_lib,
            Artifact::MissionTree => &self.mission_tree,
        }
    }
}

/// Generated table locations, relative to the game root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputPaths {
    pub vehicle_classes: PathBuf,
    pub unit_lib: PathBuf,
    pub mission_tree: PathBuf,
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self {
            vehicle_classes: PathBuf::from("scripts/datatables/autoload/VehicleClass.lua"),
            unit_lib: PathBuf::from("scripts/datatables/UnitLib.lua"),
            mission_tree: PathBuf::from("scripts/datatables/missiontree.lua"),
        }
    }
}

/// Configuration loaded from bsp.yaml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub inputs: InputPaths,
    pub outputs: OutputPaths,
    pub scenes: SceneLayout,
    /// Scene reference categories that name vehicles.
    pub references: SceneFilter,
}

impl Config {
    /// Load config from a bsp.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| BspError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse_at(&content, path)
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        Self::parse_at(content, Path::new(CONFIG_FILENAME))
    }

    fn parse_at(content: &str, path: &Path) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| BspError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load `bsp.yaml` from a game root, falling back to defaults.
    ///
    /// The flag reports whether a config file was found.
    pub fn for_root(root: &Path) -> Result<(Self, bool)> {
        let path = root.join(CONFIG_FILENAME);
        if path.is_file() {
            Ok((Self::load(&path)?, true))
        } else {
            Ok((Self::default(), false))
        }
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| BspError::Config {
            path: PathBuf::from(CONFIG_FILENAME),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_partial_config() {
        let yaml = r#"
outputs:
  unit_lib: out/UnitLib.lua
references:
  include: [ShipClasses]
"#;
        let config = Config::parse(yaml).unwrap();

        assert_eq!(config.outputs.unit_lib, PathBuf::from("out/UnitLib.lua"));
        assert_eq!(
            config.outputs.mission_tree,
            PathBuf::from("scripts/datatables/missiontree.lua")
        );
        assert!(config.references.accepts("ShipClasses"));
        assert!(!config.references.accepts("PlaneClasses"));
        // ignore list keeps its defaults
        assert!(config.references.ignore.contains("CamState"));
    }

    #[test]
    fn test_parse_empty_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let err = Config::parse("inputs: [not, a, map]").unwrap_err();
        assert!(matches!(err, BspError::Config { .. }));
    }

    #[test]
    fn test_yaml_round_trip_keeps_defaults() {
        let config = Config::default();
        let yaml = config.to_yaml().unwrap();

        assert!(yaml.contains("global.enums"));
        assert_eq!(Config::parse(&yaml).unwrap(), config);
    }

    #[test]
    fn test_for_root_without_file() {
        let dir = tempdir().unwrap();

        let (config, found) = Config::for_root(dir.path()).unwrap();

        assert!(!found);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_for_root_with_file() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILENAME),
            "scenes:\n  directory: custom/scenes\n",
        )
        .unwrap();

        let (config, found) = Config::for_root(dir.path()).unwrap();

        assert!(found);
        assert_eq!(config.scenes.directory, PathBuf::from("custom/scenes"));
        assert_eq!(config.scenes.path_variable, "sceneFilePath");
    }

    #[test]
    fn test_input_path_lookup() {
        let inputs = InputPaths::default();
        assert_eq!(
            inputs.path(Artifact::Enums),
            Path::new("universe/library/global.enums")
        );
    }
}
