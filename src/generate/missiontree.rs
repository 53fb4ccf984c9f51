//! missiontree.lua rendering.
//!
//! Campaign groups are rebuilt from their captured templates around the
//! selected missions only. The multiplayer section is always written, empty
//! when no multiplayer mission was selected.

use crate::registry::GameData;
use crate::types::{GroupTemplate, Mission};

use super::with_trailing_comma;

const MISSION_GROUPS_OPEN: &str = r#"MissionTree["missionGroups"] = {"#;

pub(super) fn render_mission_tree(game: &GameData, missions: &[&Mission]) -> String {
    let tree = game.missions();
    let path_variable = &game.config().scenes.path_variable;

    let mut campaigns: Vec<(&str, Vec<&Mission>)> = Vec::new();
    let mut multiplayer = Vec::new();
    for &mission in missions {
        if mission.is_multiplayer() {
            multiplayer.push(mission);
            continue;
        }
        match campaigns.iter_mut().find(|(group, _)| *group == mission.group) {
            Some((_, selected)) => selected.push(mission),
            None => campaigns.push((mission.group.as_str(), vec![mission])),
        }
    }

    let mut lines = vec![
        tree.preamble.trim().to_string(),
        String::new(),
        MISSION_GROUPS_OPEN.to_string(),
    ];

    for (group, selected) in &campaigns {
        let bare;
        let template = match tree.template(group) {
            Some(template) => template,
            None => {
                bare = GroupTemplate::bare_group();
                &bare
            }
        };

        lines.push(template.prefix.trim_end().to_string());
        let blocks: Vec<String> = selected
            .iter()
            .map(|m| with_trailing_comma(&m.block(path_variable)))
            .collect();
        lines.push(blocks.join("\n\n"));
        // Groups are consecutive table items, so each needs its separator.
        lines.push(with_trailing_comma(&template.suffix));
    }
    lines.push("}".to_string());

    lines.push(String::new());
    lines.push(tree.multiplayer.prefix.trim_end().to_string());
    for mission in &multiplayer {
        lines.push(with_trailing_comma(&mission.block(path_variable)));
    }
    lines.push(tree.multiplayer.suffix.trim().to_string());

    lines.join("\n")
}
