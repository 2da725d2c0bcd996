//! Init command implementation.
//!
//! Writes a commented `poster.yaml` with every key at its default value.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{PosterError, Result};
use crate::manifest::MANIFEST_FILENAME;
use crate::output::{display_path, Printer};

/// Initialize a poster project by generating a poster.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to initialize (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing poster.yaml
    #[arg(long)]
    pub force: bool,
}

const TEMPLATE: &str = r#"# Generative poster settings. Every key is optional.

# Output file; .png, .svg or .json
output: dist/poster.png

# Raster width in pixels; the height keeps a 7:10 ratio
width: 2100

# blob, polygon, waves or rings
shape: blob

# 1 to 20
layers: 8

# Outline wobble as a fraction of the radius, 0.01 to 0.5
wobble: 0.15

# pastel, vibrant, mono, random, pink, blue or green
palette: pastel

# off-white, light-gray, dark or gradient
background: off-white

# Integer seed for a reproducible poster; leave unset for a new one each run
# seed: 42
"#;

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(PosterError::Io {
            path: manifest_path,
            message: format!("{} already exists", MANIFEST_FILENAME),
        });
    }

    fs::create_dir_all(&args.path).map_err(|e| PosterError::Io {
        path: args.path.clone(),
        message: format!("Failed to create project directory: {}", e),
    })?;

    fs::write(&manifest_path, TEMPLATE).map_err(|e| PosterError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    printer.success("Created", &display_path(&manifest_path));

    Ok(())
}
