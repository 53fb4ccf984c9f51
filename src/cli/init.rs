//! Init command implementation.
//!
//! Writes a `bsp.yaml` holding the stock install layout, ready to edit.

use std::fs;
use std::path::Path;

use clap::Args;

use crate::discovery::{Config, CONFIG_FILENAME};
use crate::error::{BspError, Result};
use crate::output::{display_path, Printer};
use crate::registry::Artifact;

/// Write a default bsp.yaml into the game root
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing bsp.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, root: &Path, printer: &Printer) -> Result<()> {
    let config_path = root.join(CONFIG_FILENAME);

    if config_path.exists() && !args.force {
        return Err(BspError::Exists { path: config_path });
    }

    let config = Config::default();
    let yaml = config.to_yaml()?;

    fs::write(&config_path, &yaml).map_err(|e| BspError::Write {
        path: config_path.clone(),
        message: e.to_string(),
    })?;

    // Point out stock inputs this root does not have.
    for artifact in Artifact::ALL {
        let relative = config.inputs.path(artifact);
        if !root.join(relative).is_file() {
            printer.warning("Missing", &format!("{} ({})", artifact, relative.display()));
        }
    }

    printer.status("Created", &display_path(&config_path, root));

    Ok(())
}
