//! Missions command implementation.
//!
//! Lists the missions in the mission tree, grouped as in the source.

use std::io::{self, Write};
use std::path::Path;

use clap::Args;

use crate::error::{BspError, Result};
use crate::output::{plural, Printer};
use crate::types::Mission;

/// List the missions in the mission tree
#[derive(Args, Debug)]
pub struct MissionsArgs {
    /// Only list missions in this group
    #[arg(long)]
    pub group: Option<String>,

    /// Print missions as a JSON array
    #[arg(long)]
    pub json: bool,

    /// Print group names only
    #[arg(long, conflicts_with = "json")]
    pub groups: bool,
}

pub fn run(args: MissionsArgs, root: &Path, printer: &Printer) -> Result<()> {
    let game = super::load(root, printer)?;
    let tree = game.missions();

    let missions: Vec<&Mission> = tree
        .missions()
        .iter()
        .filter(|m| args.group.as_deref().map_or(true, |g| m.group == g))
        .collect();

    if let Some(group) = &args.group {
        if missions.is_empty() {
            return Err(BspError::Generate {
                message: format!("no group '{}'", group),
                help: Some(format!("Known groups: {}", tree.groups().join(", "))),
            });
        }
    }

    let mut stdout = io::stdout().lock();
    let written = if args.groups {
        write_groups(&mut stdout, &tree.groups())
    } else if args.json {
        serde_json::to_writer_pretty(&mut stdout, &missions)
            .map_err(io::Error::from)
            .and_then(|()| writeln!(stdout))
    } else {
        write_missions(&mut stdout, &missions)
    };
    written.map_err(|e| BspError::Io {
        path: "<stdout>".into(),
        message: e.to_string(),
    })?;

    let campaign = missions.iter().filter(|m| !m.is_multiplayer()).count();
    printer.info(
        "Found",
        &format!(
            "{} campaign, {} multiplayer",
            plural(campaign, "mission", "missions"),
            missions.len() - campaign
        ),
    );

    Ok(())
}

fn write_groups(out: &mut impl Write, groups: &[&str]) -> io::Result<()> {
    for group in groups {
        writeln!(out, "{}", group)?;
    }
    Ok(())
}

/// One tab-separated line per mission, with a header line per group.
fn write_missions(out: &mut impl Write, missions: &[&Mission]) -> io::Result<()> {
    let mut current: Option<&str> = None;
    for mission in missions {
        if current != Some(mission.group.as_str()) {
            if current.is_some() {
                writeln!(out)?;
            }
            writeln!(out, "[{}]", mission.group)?;
            current = Some(mission.group.as_str());
        }
        writeln!(out, "{}\t{}", mission.id, mission.name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::fixture;
    use crate::discovery::load_game_data;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_write_missions_grouped() {
        let dir = fixture::game_root();
        let game = load_game_data(dir.path()).unwrap().game;
        let missions: Vec<&Mission> = game.missions().missions().iter().collect();

        let mut out = Vec::new();
        write_missions(&mut out, &missions).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[Coral Sea]\nc1\tLanding\nshared\tShared A\n\n[Multiplayer & Skirmish]\nmp1\tDuel\nshared\tShared B\n"
        );
    }

    #[test]
    fn test_json_fields() {
        let dir = fixture::game_root();
        let game = load_game_data(dir.path()).unwrap().game;

        insta::assert_json_snapshot!(game.missions().missions()[0], @r###"
        {
          "id": "c1",
          "name": "Landing",
          "group": "Coral Sea",
          "scene_ref": "c/1.scn",
          "scene_path": "universe/Scenes/missions/c/1.scn"
        }
        "###);
    }

    #[test]
    fn test_run_unknown_group() {
        let dir = fixture::game_root();
        let args = MissionsArgs {
            group: Some("Nowhere".to_string()),
            json: false,
            groups: false,
        };

        let err = run(args, dir.path(), &Printer::with_color(false)).unwrap_err();

        assert!(err.to_string().contains("Nowhere"));
    }

    #[test]
    fn test_run_lists() {
        let dir = fixture::game_root();
        let args = MissionsArgs {
            group: Some("Coral Sea".to_string()),
            json: true,
            groups: false,
        };

        run(args, dir.path(), &Printer::with_color(false)).unwrap();
    }
}
