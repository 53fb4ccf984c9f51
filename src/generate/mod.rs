//! Generation of the mission loader tables.
//!
//! For a mission selection this module writes three Lua files the game reads
//! at startup:
//!
//! - `VehicleClass.lua`: only the vehicle classes the missions need, after
//!   the always-include table and the catalog's global logic;
//! - `UnitLib.lua`: the unit library filtered to the same vehicles;
//! - `missiontree.lua`: the mission tree reduced to the selection, each
//!   group rebuilt from its source template.
//!
//! Rendering is pure (`render`); `generate` resolves, renders and writes.

mod missiontree;
mod unitlib;
mod vehicles;

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BspError, Result};
use crate::registry::GameData;
use crate::resolve::{resolve_missions, Resolution};
use crate::types::{Mission, VehicleId};

/// The rendered text of the three output tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFiles {
    pub vehicle_classes: String,
    pub unit_lib: String,
    pub mission_tree: String,
    /// Vehicle entries written under "Mission Units".
    pub vehicle_entries: usize,
    pub unit_lib_entries: usize,
}

/// What a generation run produced.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Names of the selected missions.
    pub labels: Vec<String>,
    pub resolution: Resolution,
    pub vehicle_entries: usize,
    pub unit_lib_entries: usize,
    pub mission_count: usize,
    /// Output files, absolute. Not written on a dry run.
    pub outputs: Vec<PathBuf>,
}

impl GenerationReport {
    /// Number of vehicle IDs the selection resolved to.
    pub fn required_count(&self) -> usize {
        self.resolution.required.len()
    }
}

/// Label used in generated file comments.
pub fn mission_label(missions: &[&Mission]) -> String {
    missions
        .iter()
        .map(|m| m.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render the three tables for a selection whose vehicles are already resolved.
pub fn render(
    game: &GameData,
    missions: &[&Mission],
    required: &BTreeSet<VehicleId>,
) -> GeneratedFiles {
    let label = mission_label(missions);
    let (vehicle_classes, vehicle_entries) =
        vehicles::render_vehicle_classes(game, &label, required);
    let (unit_lib, unit_lib_entries) = unitlib::render_unit_lib(game, &label, required);
    let mission_tree = missiontree::render_mission_tree(game, missions);

    GeneratedFiles {
        vehicle_classes,
        unit_lib,
        mission_tree,
        vehicle_entries,
        unit_lib_entries,
    }
}

/// Resolve and render a selection without writing anything.
///
/// A mission passed more than once is rendered once, at its first position.
pub fn prepare(
    game: &GameData,
    missions: &[&Mission],
) -> Result<(GeneratedFiles, GenerationReport)> {
    let missions = &distinct(missions);
    if missions.is_empty() {
        return Err(BspError::Generate {
            message: "no missions selected".to_string(),
            help: Some("Pass one or more mission IDs; `bsp-loader missions` lists them".to_string()),
        });
    }

    let resolution = resolve_missions(game, missions)?;
    let files = render(game, missions, &resolution.required);

    let outputs = game.config().outputs.clone();
    let report = GenerationReport {
        labels: missions.iter().map(|m| m.name.clone()).collect(),
        resolution,
        vehicle_entries: files.vehicle_entries,
        unit_lib_entries: files.unit_lib_entries,
        mission_count: missions.len(),
        outputs: [outputs.vehicle_classes, outputs.unit_lib, outputs.mission_tree]
            .iter()
            .map(|relative| game.root().join(relative))
            .collect(),
    };

    Ok((files, report))
}

fn distinct<'a>(missions: &[&'a Mission]) -> Vec<&'a Mission> {
    let mut unique: Vec<&Mission> = Vec::with_capacity(missions.len());
    for &mission in missions {
        if !unique.iter().any(|m| std::ptr::eq(*m, mission)) {
            unique.push(mission);
        }
    }
    unique
}

/// Resolve, render and write the tables for a selection.
///
/// Files are written in order; a failure leaves earlier files in place.
pub fn generate(game: &GameData, missions: &[&Mission]) -> Result<GenerationReport> {
    let (files, report) = prepare(game, missions)?;

    let contents = [&files.vehicle_classes, &files.unit_lib, &files.mission_tree];
    for (path, content) in report.outputs.iter().zip(contents) {
        write_output(path, content)?;
    }

    Ok(report)
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| BspError::Write {
            path: parent.to_path_buf(),
            message: format!("Failed to create directory: {}", e),
        })?;
    }

    fs::write(path, content).map_err(|e| BspError::Write {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Trim a Lua table item and make sure it ends with a separator.
fn with_trailing_comma(item: &str) -> String {
    let item = item.trim();
    if item.ends_with(',') {
        item.to_string()
    } else {
        format!("{},", item)
    }
}
