//! Validate command implementation.

use std::path::Path;

use clap::Args;

use crate::error::{BspError, Result};
use crate::output::{plural, Printer};
use crate::validation::{print_diagnostics, validate_game_data};

/// Check the game data for inconsistencies
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: ValidateArgs, root: &Path, printer: &Printer) -> Result<()> {
    let game = super::load(root, printer)?;

    let result = validate_game_data(&game);
    print_diagnostics(&result, printer);

    let errors = if args.strict {
        result.len()
    } else {
        result.error_count()
    };

    if errors > 0 {
        printer.error(
            "Failed",
            &format!(
                "{}, {}",
                plural(result.error_count(), "error", "errors"),
                plural(result.warning_count(), "warning", "warnings")
            ),
        );
        return Err(BspError::Validation { errors });
    }

    if result.is_empty() {
        printer.status("Valid", &plural(game.missions().len(), "mission", "missions"));
    } else {
        printer.warning("Valid", &plural(result.warning_count(), "warning", "warnings"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::fixture;
    use crate::discovery::Config;
    use std::fs;

    #[test]
    fn test_validate_fixture() {
        let dir = fixture::game_root();

        run(ValidateArgs { strict: false }, dir.path(), &Printer::with_color(false)).unwrap();
    }

    #[test]
    fn test_missing_scene_fails() {
        let dir = fixture::game_root();
        let scene = Config::default().scenes.directory.join("mp/1.scn");
        fs::remove_file(dir.path().join(scene)).unwrap();

        let err = run(ValidateArgs { strict: false }, dir.path(), &Printer::with_color(false))
            .unwrap_err();

        assert!(matches!(err, BspError::Validation { errors: 1 }));
    }

    #[test]
    fn test_strict_counts_warnings() {
        let dir = fixture::game_root();
        let path = dir.path().join(Config::default().inputs.vehicle_classes);
        fs::write(&path, "VehicleClass = {}\nVehicleClass[10] = { [\"Code\"] = \"Ghost\" }").unwrap();

        run(ValidateArgs { strict: false }, dir.path(), &Printer::with_color(false)).unwrap();
        let err = run(ValidateArgs { strict: true }, dir.path(), &Printer::with_color(false))
            .unwrap_err();

        assert!(matches!(err, BspError::Validation { errors: 1 }));
    }
}
