//! Table loader - reads every input artifact into a `GameDataBuilder`.

use std::path::{Path, PathBuf};

use crate::error::{BspError, Result};
use crate::parser::{parse_always_include, parse_mission_tree, parse_unit_lib, parse_vehicle_classes};
use crate::registry::{Artifact, GameData, GameDataBuilder};
use crate::types::EnumRegistry;
use crate::validation::{Diagnostic, Diagnostics};

use super::config::Config;
use super::read_latin1;

/// Outcome of loading a game root.
#[derive(Debug)]
pub struct LoadReport {
    pub game: GameData,
    /// Whether a bsp.yaml was found in the root.
    pub config_found: bool,
    /// Non-fatal problems (missing optional tables, unreadable unit library).
    pub warnings: Diagnostics,
}

/// Load all tables under `root` with the given config.
///
/// Missing or malformed required tables abort loading. Optional tables that
/// are missing or unparsable are replaced by empty ones and reported as
/// warnings.
pub fn load_tables(root: &Path, config: Config) -> Result<(GameData, Diagnostics)> {
    let mut warnings = Diagnostics::new();
    let mut builder = GameDataBuilder::new(root);

    if let Some(source) = read_optional(root, &config, Artifact::AlwaysInclude, &mut warnings)? {
        builder.always_include(parse_always_include(&source));
    }

    let (path, source) = read_required(root, &config, Artifact::Enums)?;
    let mut enums = EnumRegistry::new();
    enums
        .load(&source)
        .map_err(|e| in_artifact(e, Artifact::Enums, &path))?;
    builder.enums(enums);

    let (_, source) = read_required(root, &config, Artifact::VehicleClasses)?;
    builder.vehicles(parse_vehicle_classes(&source));

    if let Some(source) = read_optional(root, &config, Artifact::UnitLib, &mut warnings)? {
        match parse_unit_lib(&source) {
            Ok(unit_lib) => {
                builder.unit_lib(unit_lib);
            }
            Err(e) => warnings.push(
                Diagnostic::warning("bsp::load::unit-lib", e.to_string())
                    .with_path(config.inputs.path(Artifact::UnitLib))
                    .with_help("Continuing without supplemental unit data"),
            ),
        }
    }

    let (path, source) = read_required(root, &config, Artifact::MissionTree)?;
    let missions = parse_mission_tree(&source, &config.scenes)
        .map_err(|e| in_artifact(e, Artifact::MissionTree, &path))?;
    builder.missions(missions);

    builder.config(config);
    Ok((builder.build(), warnings))
}

fn read_required(root: &Path, config: &Config, artifact: Artifact) -> Result<(PathBuf, String)> {
    let path = root.join(config.inputs.path(artifact));
    if !path.is_file() {
        return Err(BspError::MissingFile { artifact, path });
    }
    let source = read_latin1(&path)?;
    Ok((path, source))
}

fn read_optional(
    root: &Path,
    config: &Config,
    artifact: Artifact,
    warnings: &mut Diagnostics,
) -> Result<Option<String>> {
    let relative = config.inputs.path(artifact);
    let path = root.join(relative);
    if !path.is_file() {
        warnings.push(
            Diagnostic::warning(
                "bsp::load::optional-missing",
                format!("{} not found", artifact),
            )
            .with_path(relative),
        );
        return Ok(None);
    }
    read_latin1(&path).map(Some)
}

fn in_artifact(error: BspError, artifact: Artifact, path: &Path) -> BspError {
    match error {
        BspError::Parse { message, help } => BspError::Parse {
            message: format!("{} ({}): {}", artifact, path.display(), message),
            help,
        },
        other => other,
    }
}
