//! Generate command implementation.
//!
//! Resolves the selected missions' vehicles and writes the three loader
//! tables into the game root.

use std::path::Path;

use clap::Args;

use crate::error::{BspError, Result};
use crate::generate::{generate, prepare, GenerationReport};
use crate::output::{display_path, plural, Printer};

/// Write mission-specific loader tables for one or more missions
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Mission IDs to load
    #[arg(required = true)]
    pub ids: Vec<String>,

    /// Group to pick missions from when an ID appears in several
    #[arg(long)]
    pub group: Option<String>,

    /// Confirm loading more than one mission at once
    #[arg(long, short)]
    pub yes: bool,

    /// Resolve and render without writing any file
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(args: GenerateArgs, root: &Path, printer: &Printer) -> Result<()> {
    let game = super::load(root, printer)?;
    let missions = super::select(&game, &args.ids, args.group.as_deref())?;

    if missions.len() > 1 && !args.yes && !args.dry_run {
        return Err(BspError::Generate {
            message: format!("{} selected", plural(missions.len(), "mission", "missions")),
            help: Some(
                "Loading several missions at once can make the game unstable; pass --yes to continue"
                    .to_string(),
            ),
        });
    }

    for mission in &missions {
        printer.status("Resolving", &format!("{} ({})", mission.name, mission.group));
    }

    if args.dry_run {
        let (_, report) = prepare(&game, &missions)?;
        print_resolution(&report, printer);
        for path in &report.outputs {
            printer.info("Would write", &display_path(path, root));
        }
        return Ok(());
    }

    let report = generate(&game, &missions)?;
    print_resolution(&report, printer);
    for path in &report.outputs {
        printer.status("Wrote", &display_path(path, root));
    }
    printer.status(
        "Finished",
        &format!(
            "{}, {} for {}",
            plural(report.vehicle_entries, "vehicle class", "vehicle classes"),
            plural(report.unit_lib_entries, "unit library entry", "unit library entries"),
            report.labels.join(", ")
        ),
    );

    Ok(())
}

fn print_resolution(report: &GenerationReport, printer: &Printer) {
    printer.info(
        "Resolved",
        &format!(
            "{} ({} from scenes, {} indirect)",
            plural(report.required_count(), "vehicle class", "vehicle classes"),
            report.resolution.seeds.len(),
            report.resolution.indirect().count()
        ),
    );
}
