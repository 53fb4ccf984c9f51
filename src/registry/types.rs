//! Input artifact kinds.
//!
//! Every table read from the game root is one of these. Required artifacts
//! abort loading when absent; optional ones degrade to an empty table.

use std::fmt;

/// The kind of input table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    Enums,
    VehicleClasses,
    AlwaysInclude,
    UnitLib,
    MissionTree,
}

impl Artifact {
    /// All artifacts, in load order.
    pub const ALL: [Artifact; 5] = [
        Artifact::AlwaysInclude,
        Artifact::Enums,
        Artifact::VehicleClasses,
        Artifact::UnitLib,
        Artifact::MissionTree,
    ];

    /// Human-readable name for messages.
    pub fn name(&self) -> &'static str {
        match self {
            Artifact::Enums => "enum definitions",
            Artifact::VehicleClasses => "vehicle class table",
            Artifact::AlwaysInclude => "always-include table",
            Artifact::UnitLib => "unit library",
            Artifact::MissionTree => "mission tree",
        }
    }

    /// Whether loading fails when this artifact is missing.
    pub fn is_required(&self) -> bool {
        !matches!(self, Artifact::AlwaysInclude | Artifact::UnitLib)
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
