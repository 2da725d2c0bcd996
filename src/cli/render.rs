//! Render command implementation.
//!
//! Resolves parameters from poster.yaml and flags, renders one poster and
//! writes it in the format named by the output extension.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::Result;
use crate::manifest::Manifest;
use crate::output::{display_path, plural, Printer};
use crate::render::{canvas_json, render, write_canvas};
use crate::types::Canvas;
use crate::validation::{ensure_valid, print_diagnostics, validate_params};

use super::ParamArgs;

/// Render a poster to PNG, SVG or JSON
#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub params: ParamArgs,

    /// Output file (.png, .svg or .json); `-` prints JSON to stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: RenderArgs, printer: &Printer) -> Result<()> {
    let manifest = args.params.resolve()?;
    let output = args.output.unwrap_or_else(|| manifest.output.clone());

    render_manifest(&manifest, args.params.reroll, &output, printer)
}

/// Render the poster a manifest describes and write it to `output`.
pub fn render_manifest(
    manifest: &Manifest,
    reroll: u64,
    output: &Path,
    printer: &Printer,
) -> Result<()> {
    let params = manifest.params(reroll);

    // Errors surface through the returned diagnostic; only warnings print here.
    let diagnostics = validate_params(&params, manifest.width, manifest.seed_input().as_deref());
    ensure_valid(&diagnostics)?;
    print_diagnostics(&diagnostics, printer);

    printer.status(
        "Rendering",
        &format!(
            "{}, {} ({} palette, {} background)",
            params.shape,
            plural(params.layers as usize, "layer", "layers"),
            params.palette,
            params.background
        ),
    );
    match params.seed {
        Some(seed) => printer.info("Seed", &seed.to_string()),
        None => printer.info("Seed", "random"),
    }

    let canvas = render(&params)?;

    if output == Path::new("-") {
        println!("{}", canvas_json(&canvas)?);
        return Ok(());
    }

    write_canvas(&canvas, output, manifest.width)?;
    printer.success(
        "Finished",
        &format!(
            "{} ({}x{})",
            display_path(output),
            manifest.width,
            Canvas::height_for(manifest.width)
        ),
    );

    Ok(())
}
