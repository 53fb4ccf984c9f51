pub mod completions;
pub mod deps;
pub mod generate;
pub mod init;
pub mod missions;
pub mod validate;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::discovery::load_game_data;
use crate::error::{BspError, Result};
use crate::output::{display_path, plural, Printer};
use crate::registry::GameData;
use crate::types::Mission;
use crate::validation::print_diagnostics;

/// bsp-loader - Battlestations Pacific mission loader generator
#[derive(Parser, Debug)]
#[command(name = "bsp-loader")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Game install directory
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the missions in the mission tree
    Missions(missions::MissionsArgs),

    /// Write mission-specific loader tables for one or more missions
    Generate(generate::GenerateArgs),

    /// Print the vehicle classes one or more missions need
    Deps(deps::DepsArgs),

    /// Check the game data for inconsistencies
    Validate(validate::ValidateArgs),

    /// Write a default bsp.yaml into the game root
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Load the game root, reporting load warnings.
pub(crate) fn load(root: &Path, printer: &Printer) -> Result<GameData> {
    printer.status("Loading", &root.display().to_string());
    let report = load_game_data(root)?;

    if report.config_found {
        printer.info("Config", &display_path(&root.join(crate::discovery::CONFIG_FILENAME), root));
    }
    print_diagnostics(&report.warnings, printer);

    let game = report.game;
    printer.info(
        "Loaded",
        &format!(
            "{}, {}, {}",
            plural(game.vehicles().len(), "vehicle class", "vehicle classes"),
            plural(game.missions().len(), "mission", "missions"),
            plural(game.enums().len(), "enum value", "enum values"),
        ),
    );

    Ok(game)
}

/// Look up missions by exact ID, optionally restricted to one group.
///
/// Repeated IDs select the mission once.
pub(crate) fn select<'a>(
    game: &'a GameData,
    ids: &[String],
    group: Option<&str>,
) -> Result<Vec<&'a Mission>> {
    let mut selected: Vec<&Mission> = Vec::new();

    for id in ids {
        let found = game.missions().find(id, group);
        let mission = match found.as_slice() {
            [] => {
                return Err(BspError::Generate {
                    message: match group {
                        Some(group) => format!("no mission '{}' in group '{}'", id, group),
                        None => format!("no mission '{}'", id),
                    },
                    help: Some("Run `bsp-loader missions` to list mission IDs".to_string()),
                })
            }
            [mission] => *mission,
            several => {
                let groups: Vec<&str> = several.iter().map(|m| m.group.as_str()).collect();
                return Err(BspError::Generate {
                    message: format!("mission '{}' exists in {}", id, groups.join(", ")),
                    help: Some("Pass --group to choose one".to_string()),
                });
            }
        };

        if !selected.iter().any(|m| std::ptr::eq(*m, mission)) {
            selected.push(mission);
        }
    }

    Ok(selected)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::load_game_data;

    #[test]
    fn test_select_by_id() {
        let dir = fixture::game_root();
        let game = load_game_data(dir.path()).unwrap().game;

        let ids = vec!["mp1".to_string(), "c1".to_string(), "mp1".to_string()];
        let selected = select(&game, &ids, None).unwrap();

        let names: Vec<_> = selected.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Duel", "Landing"]);
    }

    #[test]
    fn test_select_ambiguous_needs_group() {
        let dir = fixture::game_root();
        let game = load_game_data(dir.path()).unwrap().game;
        let ids = vec!["shared".to_string()];

        let err = select(&game, &ids, None).unwrap_err();
        assert!(err.to_string().contains("Coral Sea"));

        let selected = select(&game, &ids, Some("Coral Sea")).unwrap();
        assert_eq!(selected[0].name, "Shared A");
    }

    #[test]
    fn test_select_unknown() {
        let dir = fixture::game_root();
        let game = load_game_data(dir.path()).unwrap().game;

        let err = select(&game, &["nope".to_string()], None).unwrap_err();

        assert!(matches!(err, BspError::Generate { .. }));
    }
}
