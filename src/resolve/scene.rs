//! Scene file scanning.
//!
//! Scene descriptions reference units as `Type = E <Category> : <Code>`. The
//! same shape is used for plenty of non-vehicle data (AI levels, camera
//! states, music), so references are filtered by category before their codes
//! are resolved.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::{EnumRegistry, VehicleId};

static TYPED_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Type\s*=\s*E\s+([a-zA-Z0-9_]+)\s*:\s*([a-zA-Z0-9_-]+)")
        .expect("typed reference pattern")
});

const VEHICLE_CATEGORIES: &[&str] = &["PlaneClasses", "ShipClasses", "VehicleClasses"];

const IGNORED_CATEGORIES: &[&str] = &[
    "PlaneCount",
    "MaxSquadSize",
    "Races",
    "Party",
    "CommandType",
    "AttackMode",
    "FormationType",
    "MoveType",
    "MissionObjectives",
    "WeatherTypes",
    "mission_objectives",
    "RelationTypes",
    "NavpointType",
    "UnitType",
    "SpawnType",
    "WingCount",
    "AILevel",
    "LandingType",
    "InputId",
    "mission_objs",
    "CamState",
    "MusicType",
    "MovieType",
    "FlightDeckType",
    "HangarType",
    "GunType",
    "AmmoType",
];

/// Which enum categories in a scene file name vehicles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneFilter {
    /// Categories whose codes are vehicle classes.
    pub include: BTreeSet<String>,
    /// Categories that never name vehicles. Wins over `include`.
    pub ignore: BTreeSet<String>,
}

impl Default for SceneFilter {
    fn default() -> Self {
        Self {
            include: VEHICLE_CATEGORIES.iter().map(|s| s.to_string()).collect(),
            ignore: IGNORED_CATEGORIES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl SceneFilter {
    pub fn accepts(&self, category: &str) -> bool {
        !self.ignore.contains(category) && self.include.contains(category)
    }
}

/// A `Type = E <Category> : <Code>` reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypedReference<'a> {
    pub category: &'a str,
    pub code: &'a str,
}

/// All typed references in a scene, in order.
pub fn typed_references(scene: &str) -> impl Iterator<Item = TypedReference<'_>> {
    TYPED_REFERENCE.captures_iter(scene).filter_map(|caps| {
        Some(TypedReference {
            category: caps.get(1)?.as_str(),
            code: caps.get(2)?.as_str(),
        })
    })
}

/// Vehicle IDs directly referenced by a scene.
///
/// Codes that do not resolve are not vehicle references and are dropped.
pub fn scan_scene(scene: &str, enums: &EnumRegistry, filter: &SceneFilter) -> BTreeSet<VehicleId> {
    typed_references(scene)
        .filter(|reference| filter.accepts(reference.category))
        .filter_map(|reference| enums.resolve_vehicle(reference.code))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> EnumRegistry {
        let mut enums = EnumRegistry::new();
        enums.insert("Destroyer", 10);
        enums.insert("Fighter", 20);
        enums.insert("CAM_Free", 3);
        enums.insert("AI_Ace", 4);
        enums
    }

    #[test]
    fn test_typed_references() {
        let scene = "Unit { Type = E ShipClasses : Destroyer }\nType=E CamState:CAM_Free";

        let refs: Vec<_> = typed_references(scene).collect();

        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].category, "ShipClasses");
        assert_eq!(refs[0].code, "Destroyer");
        assert_eq!(refs[1].category, "CamState");
    }

    #[test]
    fn test_scan_keeps_vehicle_categories_only() {
        let scene = r#"
            Type = E ShipClasses : Destroyer
            Type = E PlaneClasses : Fighter
            Type = E CamState : CAM_Free
            Type = E AILevel : AI_Ace
        "#;

        let ids = scan_scene(scene, &registry(), &SceneFilter::default());

        assert_eq!(ids.into_iter().collect::<Vec<_>>(), vec![10, 20]);
    }

    #[test]
    fn test_scan_drops_unresolved_codes() {
        let scene = "Type = E ShipClasses : Ghost\nType = E ShipClasses : Destroyer";

        let ids = scan_scene(scene, &registry(), &SceneFilter::default());

        assert_eq!(ids.into_iter().collect::<Vec<_>>(), vec![10]);
    }

    #[test]
    fn test_ignore_wins_over_include() {
        let mut filter = SceneFilter::default();
        filter.ignore.insert("ShipClasses".to_string());

        assert!(!filter.accepts("ShipClasses"));
        assert!(filter.accepts("PlaneClasses"));
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        assert!(!SceneFilter::default().accepts("WeaponClasses"));
    }
}
