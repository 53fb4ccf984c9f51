//! Game root discovery and loading.
//!
//! This module finds the data tables under a Battlestations Pacific install
//! (using `bsp.yaml` when present, stock paths otherwise) and loads them into
//! a `GameData`.
//!
//! # Example
//!
//! ```ignore
//! use bsp_loader::discovery::load_game_data;
//!
//! let report = load_game_data("C:/Games/BSP")?;
//! for mission in report.game.missions().missions() {
//!     println!("{} {}", mission.id, mission.name);
//! }
//! ```

mod config;
mod loader;

use std::path::Path;

use crate::error::{BspError, Result};

pub use config::{Config, InputPaths, OutputPaths, CONFIG_FILENAME};
pub use loader::{load_tables, LoadReport};

/// Load every table under a game root.
///
/// Reads `bsp.yaml` from the root if there is one.
pub fn load_game_data(root: impl AsRef<Path>) -> Result<LoadReport> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(BspError::Io {
            path: root.to_path_buf(),
            message: "game root is not a directory".to_string(),
        });
    }

    let (config, config_found) = Config::for_root(root)?;
    load_game_data_with(root, config, config_found)
}

/// Load every table under a game root with an explicit config.
pub fn load_game_data_with(root: &Path, config: Config, config_found: bool) -> Result<LoadReport> {
    let (game, warnings) = load_tables(root, config)?;
    Ok(LoadReport {
        game,
        config_found,
        warnings,
    })
}

/// Read a file as Latin-1.
///
/// Every byte maps to the code point of the same value, so any 8-bit input
/// decodes without loss.
pub fn read_latin1(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| BspError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read file: {}", e),
    })?;
    Ok(bytes.iter().map(|&b| char::from(b)).collect())
}
