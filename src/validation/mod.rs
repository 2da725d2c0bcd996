//! Validation for render parameters.
//!
//! Runs a suite of checks against the effective parameters and reports
//! errors and warnings. Used by `poster validate` and before every render.

mod checks;
mod warning;

pub use checks::{check_layers, check_names, check_seed_input, check_wobble, check_width};
pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::error::{PosterError, Result};
use crate::output::Printer;
use crate::types::RenderParams;

/// Run all parameter checks.
///
/// `seed_input` is the raw seed text, if the seed came from user input.
pub fn validate_params(
    params: &RenderParams,
    width: u32,
    seed_input: Option<&str>,
) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_layers(params));
    result.merge(checks::check_wobble(params));
    result.merge(checks::check_names(params));
    result.merge(checks::check_seed_input(seed_input));
    result.merge(checks::check_width(width));

    result
}

/// Turn the first error diagnostic into a `PosterError`.
pub fn ensure_valid(result: &ValidationResult) -> Result<()> {
    match result.first_error() {
        Some(d) => Err(PosterError::InvalidParameter {
            name: d.field.clone().unwrap_or_else(|| d.code.clone()),
            message: d.message.clone(),
            help: d.help.clone(),
        }),
        None => Ok(()),
    }
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let label = printer.severity(&d.severity.to_string(), d.severity == Severity::Error);
        eprintln!("{}[{}]: {}", label, d.code, d.message);
        if let Some(help) = &d.help {
            eprintln!("  {} {}", printer.dim("help:"), help);
        }
    }
}
