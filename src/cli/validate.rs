//! Validate command implementation.

use clap::Args;

use crate::error::{PosterError, Result};
use crate::output::{display_path, plural, Printer};
use crate::validation::{print_diagnostics, validate_params, ValidationResult};

use super::ParamArgs;

/// Check render parameters without rendering
#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub params: ParamArgs,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let source = args
        .params
        .manifest_path()
        .map(|p| display_path(&p))
        .unwrap_or_else(|| "defaults".to_string());
    printer.status("Checking", &source);

    let result = check(&args)?;
    print_diagnostics(&result, printer);

    let summary = format!(
        "{}, {}",
        plural(result.error_count(), "error", "errors"),
        plural(result.warning_count(), "warning", "warnings")
    );

    if result.has_errors() || (args.strict && result.has_warnings()) {
        printer.error("Failed", &summary);
        return Err(PosterError::InvalidParameter {
            name: source,
            message: format!("validation failed with {}", summary),
            help: args
                .strict
                .then(|| "Warnings count as errors with --strict".to_string()),
        });
    }

    printer.success("Finished", &summary);
    Ok(())
}

fn check(args: &ValidateArgs) -> Result<ValidationResult> {
    let manifest = args.params.resolve()?;
    let params = manifest.params(args.params.reroll);
    Ok(validate_params(
        &params,
        manifest.width,
        manifest.seed_input().as_deref(),
    ))
}
