//! Deps command implementation.
//!
//! Prints the resolved vehicle classes for a mission selection on stdout,
//! one `id<TAB>code<TAB>origin` line each.

use std::io::{self, Write};
use std::path::Path;

use clap::Args;

use crate::error::{BspError, Result};
use crate::output::{plural, Printer};
use crate::registry::GameData;
use crate::resolve::{resolve_missions, Resolution};
use crate::types::UNKNOWN_CODE;

/// Print the vehicle classes one or more missions need
#[derive(Args, Debug)]
pub struct DepsArgs {
    /// Mission IDs to resolve
    #[arg(required = true)]
    pub ids: Vec<String>,

    /// Group to pick missions from when an ID appears in several
    #[arg(long)]
    pub group: Option<String>,
}

pub fn run(args: DepsArgs, root: &Path, printer: &Printer) -> Result<()> {
    let game = super::load(root, printer)?;
    let missions = super::select(&game, &args.ids, args.group.as_deref())?;

    let resolution = resolve_missions(&game, &missions)?;

    write_resolution(&mut io::stdout().lock(), &game, &resolution).map_err(|e| BspError::Io {
        path: "<stdout>".into(),
        message: e.to_string(),
    })?;

    printer.info(
        "Resolved",
        &format!(
            "{} for {}",
            plural(resolution.required.len(), "vehicle class", "vehicle classes"),
            plural(missions.len(), "mission", "missions")
        ),
    );

    Ok(())
}

fn write_resolution(
    out: &mut impl Write,
    game: &GameData,
    resolution: &Resolution,
) -> io::Result<()> {
    for &id in &resolution.required {
        let code = game
            .vehicles()
            .get(id)
            .map_or(UNKNOWN_CODE, |class| class.code.as_str());
        let origin = if resolution.seeds.contains(&id) {
            "scene"
        } else {
            "indirect"
        };
        writeln!(out, "{}\t{}\t{}", id, code, origin)?;
    }
    Ok(())
}
