//! Mission tree parser.
//!
//! Parses `master_missiontree.lua`. Campaign groups look like:
//!
//! ```text
//! {
//!     ["groupName"] = "US Campaign",
//!     ["missions"] = {
//!         { ["id"] = "us01", ["name"] = "Midway", ["sceneFile"] = sceneFilePath.."us/01.scn" },
//!     },
//! },
//! ```
//!
//! and the multiplayer section is a flat list under
//! `MissionTree["multiMissionInfos"] = { ... }`.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{BspError, Result};
use crate::types::{
    GroupTemplate, Mission, MissionTree, SceneLayout, DEFAULT_PREAMBLE, MULTIPLAYER_GROUP,
};

use super::block::{block_end, enclosing_block_start, top_level_blocks};
use super::fields::{GROUP_NAME, MISSION_ID, MISSION_NAME, SCENE_FILE};

const MISSIONS_KEY: &str = r#"["missions"]"#;

static MISSION_GROUPS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"MissionTree\s*\[\s*"missionGroups"\s*\]\s*="#).expect("mission groups pattern")
});

static MULTIPLAYER_SECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"MissionTree\s*\[\s*"multiMissionInfos"\s*\]\s*=\s*\{"#)
        .expect("multiplayer section pattern")
});

/// Parse a mission tree.
///
/// Mission blocks missing any of `id`, `name` or `sceneFile` are not
/// missions and are skipped. A tree without a single mission is an error.
pub fn parse_mission_tree(source: &str, layout: &SceneLayout) -> Result<MissionTree> {
    let preamble = match MISSION_GROUPS.find(source) {
        Some(marker) => source[..marker.start()].trim(),
        None => DEFAULT_PREAMBLE,
    };
    let mut tree = MissionTree::new(preamble);

    parse_campaign_groups(source, layout, &mut tree);
    parse_multiplayer(source, layout, &mut tree);

    if tree.is_empty() {
        return Err(BspError::Parse {
            message: "no missions found in mission tree".to_string(),
            help: Some(
                "Missions need [\"id\"], [\"name\"] and [\"sceneFile\"] fields inside a [\"missions\"] list"
                    .to_string(),
            ),
        });
    }

    Ok(tree)
}

fn parse_campaign_groups(source: &str, layout: &SceneLayout, tree: &mut MissionTree) {
    let mut search = 0;

    while let Some((marker, group)) = GROUP_NAME.locate(source, search) {
        search = marker + 1;

        let Some(open) = enclosing_block_start(source, marker) else {
            continue;
        };
        let Some(close) = block_end(source, open) else {
            continue;
        };
        search = close;

        let body = &source[open..close];
        let Some(key) = body.find(MISSIONS_KEY) else {
            continue;
        };
        let Some(list_open) = body[key..].find('{').map(|i| key + i) else {
            continue;
        };
        let Some(list_close) = block_end(body, list_open) else {
            continue;
        };

        tree.set_template(
            group,
            GroupTemplate::new(&body[..=list_open], &body[list_close - 1..]),
        );

        for block in top_level_blocks(&body[list_open + 1..list_close - 1]) {
            if let Some(mission) = parse_mission(block.text, group, layout) {
                tree.push(mission);
            }
        }
    }
}

fn parse_multiplayer(source: &str, layout: &SceneLayout, tree: &mut MissionTree) {
    let Some(section) = MULTIPLAYER_SECTION.find(source) else {
        return;
    };
    let open = section.end() - 1;
    let Some(close) = block_end(source, open) else {
        return;
    };

    tree.multiplayer = GroupTemplate::new(section.as_str(), "}");

    for block in top_level_blocks(&source[open + 1..close - 1]) {
        if let Some(mission) = parse_mission(block.text, MULTIPLAYER_GROUP, layout) {
            tree.push(mission);
        }
    }
}

fn parse_mission(block: &str, group: &str, layout: &SceneLayout) -> Option<Mission> {
    let id = MISSION_ID.find(block)?;
    let name = MISSION_NAME.find(block)?;
    let scene_ref = layout.normalize(SCENE_FILE.find(block)?);

    Some(Mission {
        id: id.to_string(),
        name: name.to_string(),
        group: group.to_string(),
        scene_path: layout.scene_path(&scene_ref),
        scene_ref,
        source: block.to_string(),
    })
}
