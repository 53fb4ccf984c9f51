//! Dependency resolution for selected missions.
//!
//! Resolution runs in two steps:
//! 1. each mission's scene file is scanned for typed vehicle references
//!    (the seeds);
//! 2. the union of all seeds is closed over the vehicle catalog, following
//!    quoted enum names inside vehicle definitions.
//!
//! Closing the union rather than each mission separately makes the result a
//! fixed point for the whole selection.
//!
//! Dependencies that are not written as quoted, enum-resolvable tokens are
//! not found.

mod closure;
mod scene;

use std::collections::BTreeSet;

use crate::discovery::read_latin1;
use crate::error::{BspError, Result};
use crate::registry::GameData;
use crate::types::{Mission, VehicleId};

pub use closure::{close_over, direct_dependencies};
pub use scene::{scan_scene, typed_references, SceneFilter, TypedReference};

/// Result of resolving a mission selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// IDs referenced directly by the scene files.
    pub seeds: BTreeSet<VehicleId>,
    /// Seeds plus everything reachable from them.
    pub required: BTreeSet<VehicleId>,
}

impl Resolution {
    /// IDs pulled in only through other vehicles' definitions.
    pub fn indirect(&self) -> impl Iterator<Item = VehicleId> + '_ {
        self.required.difference(&self.seeds).copied()
    }
}

/// Seeds for one mission, read from its scene file.
pub fn mission_seeds(game: &GameData, mission: &Mission) -> Result<BTreeSet<VehicleId>> {
    let path = mission.scene_file(game.root());
    if !path.is_file() {
        return Err(BspError::MissionScene {
            mission: mission.id.clone(),
            path,
        });
    }
    let scene = read_latin1(&path)?;
    Ok(scan_scene(&scene, game.enums(), &game.config().references))
}

/// Resolve every vehicle ID the selected missions need.
pub fn resolve_missions(game: &GameData, missions: &[&Mission]) -> Result<Resolution> {
    let mut seeds = BTreeSet::new();
    for mission in missions {
        seeds.extend(mission_seeds(game, mission)?);
    }

    let required = close_over(seeds.iter().copied(), game.enums(), game.vehicles());
    Ok(Resolution { seeds, required })
}
