//! Mission tree definitions.
//!
//! Missions belong either to a campaign group (`["groupName"]` blocks under
//! `MissionTree["missionGroups"]`) or to the reserved multiplayer group
//! (`MissionTree["multiMissionInfos"]`). Each group keeps the text wrapped
//! around its missions list so a filtered tree can be rebuilt around any
//! subset of its missions.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Group name given to missions from the multiplayer section.
pub const MULTIPLAYER_GROUP: &str = "Multiplayer & Skirmish";

/// Preamble used when the source has no `MissionTree["missionGroups"]` assignment.
pub const DEFAULT_PREAMBLE: &str = "MissionTree = {}";

/// Where scene files live and how mission blocks refer to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneLayout {
    /// Scenes directory, relative to the game root.
    pub directory: PathBuf,
    /// Lua variable prefixed to `sceneFile` values (`sceneFilePath.."x.scn"`).
    pub path_variable: String,
}

impl Default for SceneLayout {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("universe/Scenes/missions"),
            path_variable: "sceneFilePath".to_string(),
        }
    }
}

impl SceneLayout {
    /// Reduce a `sceneFile` expression to a reference relative to the scenes directory.
    ///
    /// `sceneFilePath.."us/m01.scn"` becomes `us/m01.scn`.
    pub fn normalize(&self, expr: &str) -> String {
        let mut expr = expr.trim();
        if let Some(rest) = expr.strip_prefix(self.path_variable.as_str()) {
            if let Some(rest) = rest.trim_start().strip_prefix("..") {
                expr = rest;
            }
        }
        expr.replace('"', "").trim().to_string()
    }

    /// Scene path for a normalized reference, relative to the game root.
    pub fn scene_path(&self, scene_ref: &str) -> PathBuf {
        scene_ref
            .split(['/', '\\'])
            .filter(|part| !part.is_empty())
            .fold(self.directory.clone(), |path, part| path.join(part))
    }
}

/// One selectable mission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mission {
    pub id: String,
    pub name: String,
    pub group: String,
    /// Scene reference relative to the scenes directory.
    pub scene_ref: String,
    /// Scene file relative to the game root.
    pub scene_path: PathBuf,
    /// The mission block as it appears in the source.
    #[serde(skip)]
    pub source: String,
}

impl Mission {
    pub fn is_multiplayer(&self) -> bool {
        self.group == MULTIPLAYER_GROUP
    }

    /// The block to emit for this mission: the trimmed source, or a minimal
    /// block built from its fields when there is no source.
    pub fn block(&self, path_variable: &str) -> Cow<'_, str> {
        let source = self.source.trim();
        if !source.is_empty() {
            return Cow::Borrowed(source);
        }
        Cow::Owned(format!(
            r#"{{["id"] = "{}", ["name"] = "{}", ["sceneFile"] = {}.."{}"}}"#,
            self.id, self.name, path_variable, self.scene_ref
        ))
    }

    /// Absolute scene path under `root`.
    pub fn scene_file(&self, root: &Path) -> PathBuf {
        root.join(&self.scene_path)
    }
}

/// Text wrapped around a group's missions list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupTemplate {
    /// From the group body start through the missions list's opening brace.
    pub prefix: String,
    /// From the missions list's closing brace through the group body end.
    pub suffix: String,
}

impl GroupTemplate {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Wrapping for a campaign group whose template was never captured.
    pub fn bare_group() -> Self {
        Self::new("{", "},")
    }

    /// Wrapping for a multiplayer section missing from the source.
    pub fn default_multiplayer() -> Self {
        Self::new(r#"MissionTree["multiMissionInfos"] = {"#, "}")
    }
}

/// All missions and group templates from the mission tree.
#[derive(Debug, Clone)]
pub struct MissionTree {
    /// Runtime glue preceding the mission groups, re-emitted verbatim.
    pub preamble: String,
    pub multiplayer: GroupTemplate,
    missions: Vec<Mission>,
    templates: Vec<(String, GroupTemplate)>,
}

impl Default for MissionTree {
    fn default() -> Self {
        Self::new(DEFAULT_PREAMBLE)
    }
}

impl MissionTree {
    pub fn new(preamble: impl Into<String>) -> Self {
        Self {
            preamble: preamble.into(),
            multiplayer: GroupTemplate::default_multiplayer(),
            missions: Vec::new(),
            templates: Vec::new(),
        }
    }

    pub fn push(&mut self, mission: Mission) {
        self.missions.push(mission);
    }

    /// Store a group template. A group seen twice keeps its first position
    /// and its latest template.
    pub fn set_template(&mut self, group: &str, template: GroupTemplate) {
        match self.templates.iter_mut().find(|(name, _)| name == group) {
            Some((_, existing)) => *existing = template,
            None => self.templates.push((group.to_string(), template)),
        }
    }

    pub fn template(&self, group: &str) -> Option<&GroupTemplate> {
        self.templates
            .iter()
            .find(|(name, _)| name == group)
            .map(|(_, template)| template)
    }

    /// Missions in source order, campaign groups first.
    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }

    /// Distinct group names in order of first appearance.
    pub fn groups(&self) -> Vec<&str> {
        let mut groups: Vec<&str> = Vec::new();
        for mission in &self.missions {
            if !groups.contains(&mission.group.as_str()) {
                groups.push(&mission.group);
            }
        }
        groups
    }

    /// Missions with this ID, optionally restricted to one group.
    pub fn find(&self, id: &str, group: Option<&str>) -> Vec<&Mission> {
        self.missions
            .iter()
            .filter(|m| m.id == id && group.map_or(true, |g| m.group == g))
            .collect()
    }

    pub fn campaign_count(&self) -> usize {
        self.missions.iter().filter(|m| !m.is_multiplayer()).count()
    }

    pub fn multiplayer_count(&self) -> usize {
        self.missions.iter().filter(|m| m.is_multiplayer()).count()
    }

    pub fn len(&self) -> usize {
        self.missions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.missions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mission(id: &str, group: &str) -> Mission {
        Mission {
            id: id.to_string(),
            name: format!("Mission {}", id),
            group: group.to_string(),
            scene_ref: format!("{}.scn", id),
            scene_path: PathBuf::from(format!("universe/Scenes/missions/{}.scn", id)),
            source: String::new(),
        }
    }

    #[test]
    fn test_normalize_scene_expression() {
        let layout = SceneLayout::default();

        assert_eq!(layout.normalize(r#"sceneFilePath.."us/m01.scn""#), "us/m01.scn");
        assert_eq!(layout.normalize(r#" sceneFilePath .. "us/m01.scn" "#), "us/m01.scn");
        assert_eq!(layout.normalize(r#""plain.scn""#), "plain.scn");
    }

    #[test]
    fn test_scene_path_rerooted() {
        let layout = SceneLayout::default();
        assert_eq!(
            layout.scene_path("us/m01.scn"),
            Path::new("universe").join("Scenes").join("missions").join("us").join("m01.scn")
        );
    }

    #[test]
    fn test_synthetic_block() {
        let m = mission("m01", "Midway");
        assert_eq!(
            m.block("sceneFilePath"),
            r#"{["id"] = "m01", ["name"] = "Mission m01", ["sceneFile"] = sceneFilePath.."m01.scn"}"#
        );
    }

    #[test]
    fn test_source_block_is_trimmed() {
        let mut m = mission("m01", "Midway");
        m.source = "\n  { [\"id\"] = \"m01\" }  \n".to_string();
        assert_eq!(m.block("sceneFilePath"), r#"{ ["id"] = "m01" }"#);
    }

    #[test]
    fn test_groups_in_first_seen_order() {
        let mut tree = MissionTree::default();
        tree.push(mission("a", "US"));
        tree.push(mission("b", "Japan"));
        tree.push(mission("c", "US"));
        tree.push(mission("d", MULTIPLAYER_GROUP));

        assert_eq!(tree.groups(), vec!["US", "Japan", MULTIPLAYER_GROUP]);
        assert_eq!(tree.campaign_count(), 3);
        assert_eq!(tree.multiplayer_count(), 1);
    }

    #[test]
    fn test_find_with_group_filter() {
        let mut tree = MissionTree::default();
        tree.push(mission("m01", "US"));
        tree.push(mission("m01", "Japan"));

        assert_eq!(tree.find("m01", None).len(), 2);
        assert_eq!(tree.find("m01", Some("Japan"))[0].group, "Japan");
        assert!(tree.find("m02", None).is_empty());
    }

    #[test]
    fn test_set_template_keeps_position() {
        let mut tree = MissionTree::default();
        tree.set_template("A", GroupTemplate::new("a1", ""));
        tree.set_template("B", GroupTemplate::new("b", ""));
        tree.set_template("A", GroupTemplate::new("a2", ""));

        assert_eq!(tree.template("A").unwrap().prefix, "a2");
        assert_eq!(tree.templates[0].0, "A");
    }
}
