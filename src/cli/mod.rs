pub mod completions;
pub mod init;
pub mod palette;
pub mod render;
pub mod validate;
pub mod watch;

use std::path::{Path, PathBuf};

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::error::Result;
use crate::manifest::{Manifest, SeedValue};
use crate::types::{BgMode, PaletteKind, ShapeType};

/// poster - Seeded generative poster renderer
#[derive(Parser, Debug)]
#[command(name = "poster")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress status lines
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a poster to PNG, SVG or JSON
    Render(render::RenderArgs),

    /// Print a generated colour palette
    Palette(palette::PaletteArgs),

    /// Check render parameters without rendering
    Validate(validate::ValidateArgs),

    /// Initialize a poster project (generates poster.yaml)
    Init(init::InitArgs),

    /// Re-render whenever poster.yaml changes
    Watch(watch::WatchArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Render parameter flags shared by every command that renders.
///
/// Flags override the manifest.
#[derive(Args, Debug, Clone, Default)]
pub struct ParamArgs {
    /// Manifest to read (default: ./poster.yaml when present)
    #[arg(long, short = 'm')]
    pub manifest: Option<PathBuf>,

    /// Shape family: blob, polygon, waves, rings
    #[arg(long)]
    pub shape: Option<String>,

    /// Number of layers (1-20)
    #[arg(long)]
    pub layers: Option<u32>,

    /// Outline wobble as a fraction of the radius (0.01-0.5)
    #[arg(long)]
    pub wobble: Option<f64>,

    /// Palette: pastel, vibrant, mono, random, pink, blue, green
    #[arg(long)]
    pub palette: Option<String>,

    /// Background: off-white, light-gray, dark, gradient
    #[arg(long)]
    pub background: Option<String>,

    /// Integer seed; anything else renders unseeded
    #[arg(long, allow_hyphen_values = true)]
    pub seed: Option<String>,

    /// Regeneration counter folded into the seed
    #[arg(long, default_value_t = 0)]
    pub reroll: u64,

    /// Raster width in pixels
    #[arg(long)]
    pub width: Option<u32>,
}

impl ParamArgs {
    /// Path of the manifest these flags apply to, if any.
    pub fn manifest_path(&self) -> Option<PathBuf> {
        self.manifest
            .clone()
            .or_else(|| Manifest::find(Path::new(".")))
    }

    /// Load the manifest and apply flag overrides.
    pub fn resolve(&self) -> Result<Manifest> {
        let mut manifest = match self.manifest_path() {
            Some(path) => Manifest::load(&path)?,
            None => Manifest::default(),
        };
        self.apply(&mut manifest);
        Ok(manifest)
    }

    /// Override manifest values with any flags that were given.
    pub fn apply(&self, manifest: &mut Manifest) {
        if let Some(shape) = &self.shape {
            manifest.shape = ShapeType::parse(shape);
        }
        if let Some(layers) = self.layers {
            manifest.layers = layers;
        }
        if let Some(wobble) = self.wobble {
            manifest.wobble = wobble;
        }
        if let Some(palette) = &self.palette {
            manifest.palette = PaletteKind::parse(palette);
        }
        if let Some(background) = &self.background {
            manifest.background = BgMode::parse(background);
        }
        if let Some(seed) = &self.seed {
            manifest.seed = Some(SeedValue::Text(seed.clone()));
        }
        if let Some(width) = self.width {
            manifest.width = width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_render_flags() {
        let cli = Cli::try_parse_from([
            "poster", "-vv", "render", "--shape", "rings", "--layers", "4", "--seed", "7",
            "--reroll", "2", "-o", "out.svg",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Render(args) => {
                assert_eq!(args.params.shape.as_deref(), Some("rings"));
                assert_eq!(args.params.layers, Some(4));
                assert_eq!(args.params.reroll, 2);
                assert_eq!(args.output, Some(PathBuf::from("out.svg")));
            }
            other => panic!("expected render, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_accepts_negative_seed() {
        let cli = Cli::try_parse_from(["poster", "render", "--seed", "-3", "-m", "a.yaml"]);
        match cli.unwrap().command {
            Commands::Render(args) => {
                assert_eq!(args.params.seed.as_deref(), Some("-3"));
                assert_eq!(args.params.manifest, Some(PathBuf::from("a.yaml")));
            }
            other => panic!("expected render, got {:?}", other),
        }

        let cli = Cli::try_parse_from(["poster", "palette", "blue", "--seed", "-12"]).unwrap();
        match cli.command {
            Commands::Palette(args) => assert_eq!(args.seed.as_deref(), Some("-12")),
            other => panic!("expected palette, got {:?}", other),
        }
    }

    #[test]
    fn test_apply_overrides_manifest() {
        let mut manifest = Manifest::parse("layers: 3\npalette: blue\nseed: 5").unwrap();
        let args = ParamArgs {
            layers: Some(9),
            background: Some("dark".to_string()),
            seed: Some("11".to_string()),
            reroll: 1,
            ..Default::default()
        };

        args.apply(&mut manifest);

        assert_eq!(manifest.layers, 9);
        assert_eq!(manifest.palette, PaletteKind::Blue);
        assert_eq!(manifest.background, BgMode::Dark);
        assert_eq!(manifest.params(args.reroll).seed, Some(12));
    }

    #[test]
    fn test_apply_keeps_manifest_when_no_flags() {
        let mut manifest = Manifest::parse("shape: waves\nwidth: 700").unwrap();
        ParamArgs::default().apply(&mut manifest);
        assert_eq!(manifest.shape, ShapeType::Waves);
        assert_eq!(manifest.width, 700);
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
