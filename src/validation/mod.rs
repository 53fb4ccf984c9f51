//! Validation of loaded game data.
//!
//! Runs a suite of checks against a `GameData` and reports errors and
//! warnings. Used by `bsp-loader validate`; the loader reuses the diagnostic
//! types for its own warnings.

mod checks;
mod diagnostic;

pub use diagnostic::{Diagnostic, Diagnostics, Severity};

use crate::output::Printer;
use crate::registry::GameData;

/// Run all validation checks against the game data.
pub fn validate_game_data(game: &GameData) -> Diagnostics {
    let mut result = Diagnostics::new();

    result.extend(checks::check_empty_catalog(game));
    result.extend(checks::check_vehicle_codes(game));
    result.extend(checks::check_unit_lib_classes(game));
    result.extend(checks::check_duplicate_missions(game));
    result.extend(checks::check_scene_files(game));

    result
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(diagnostics: &Diagnostics, printer: &Printer) {
    for d in diagnostics.iter() {
        let label = printer.severity(&d.severity.to_string(), d.severity == Severity::Error);
        let location = d
            .path
            .as_ref()
            .map(|p| printer.dim(&format!(" ({})", p.display())))
            .unwrap_or_default();
        eprintln!("{}[{}]: {}{}", label, d.code, d.message, location);
        if let Some(help) = &d.help {
            eprintln!("  {} {}", printer.dim("help:"), help);
        }
    }
}
