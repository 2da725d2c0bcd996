//! Project manifest (poster.yaml) parsing.
//!
//! The manifest holds the output settings and default render parameters.
//! Every key is optional; command-line flags override what it says.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PosterError, Result};
use crate::rng::effective_seed;
use crate::types::{BgMode, PaletteKind, RenderParams, ShapeType};

/// Manifest file name looked up by the CLI.
pub const MANIFEST_FILENAME: &str = "poster.yaml";

/// Default raster width in pixels.
pub const DEFAULT_WIDTH: u32 = 2100;

/// Seed as written in the manifest.
///
/// Kept verbatim so a non-integer seed can be reported, not just dropped.
/// A YAML float is never an integer seed, even when it has no fraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeedValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for SeedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedValue::Int(n) => write!(f, "{}", n),
            SeedValue::Float(x) => write!(f, "{:?}", x),
            SeedValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Project manifest loaded from poster.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Output file; the extension picks the encoding.
    pub output: PathBuf,

    /// Raster width in pixels.
    pub width: u32,

    pub shape: ShapeType,
    pub layers: u32,
    pub wobble: f64,
    pub palette: PaletteKind,
    pub background: BgMode,

    /// Integer seed, or any other text for an unseeded render.
    pub seed: Option<SeedValue>,
}

fn default_output() -> PathBuf {
    PathBuf::from("dist").join("poster.png")
}

impl Default for Manifest {
    fn default() -> Self {
        let params = RenderParams::default();
        Self {
            output: default_output(),
            width: DEFAULT_WIDTH,
            shape: params.shape,
            layers: params.layers,
            wobble: params.wobble,
            palette: params.palette,
            background: params.background,
            seed: None,
        }
    }
}

impl Manifest {
    /// Load manifest from a poster.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PosterError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty document is null, not an empty mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| PosterError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some(format!("Check {} syntax", MANIFEST_FILENAME)),
        })
    }

    /// Path of the manifest in `dir`, if there is one.
    pub fn find(dir: &Path) -> Option<PathBuf> {
        let path = dir.join(MANIFEST_FILENAME);
        path.is_file().then_some(path)
    }

    /// Load the manifest in `dir`, or defaults when there is none.
    pub fn discover(dir: &Path) -> Result<Self> {
        match Self::find(dir) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading manifest");
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    /// The seed as the user wrote it.
    pub fn seed_input(&self) -> Option<String> {
        self.seed.as_ref().map(ToString::to_string)
    }

    /// Render parameters with the reroll counter folded into the seed.
    pub fn params(&self, reroll: u64) -> RenderParams {
        RenderParams {
            shape: self.shape.clone(),
            layers: self.layers,
            wobble: self.wobble,
            palette: self.palette.clone(),
            background: self.background.clone(),
            seed: effective_seed(self.seed_input().as_deref(), reroll),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::check_seed_input;
    use tempfile::tempdir;

    #[test]
    fn test_parse_minimal_manifest() {
        let manifest = Manifest::parse("output: build/art.svg").unwrap();

        assert_eq!(manifest.output, PathBuf::from("build/art.svg"));
        assert_eq!(manifest.width, DEFAULT_WIDTH);
        assert_eq!(manifest.layers, 8);
        assert!(manifest.seed.is_none());
    }

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r#"
output: out/poster.png
width: 1400
shape: Rings
layers: 5
wobble: 0.3
palette: mono
background: Light-Gray
seed: 42
"#;
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(manifest.output, PathBuf::from("out/poster.png"));
        assert_eq!(manifest.width, 1400);
        assert_eq!(manifest.shape, ShapeType::Rings);
        assert_eq!(manifest.layers, 5);
        assert_eq!(manifest.wobble, 0.3);
        assert_eq!(manifest.palette, PaletteKind::Mono);
        assert_eq!(manifest.background, BgMode::LightGray);
        assert_eq!(manifest.seed, Some(SeedValue::Int(42)));
    }

    #[test]
    fn test_parse_text_seed() {
        let manifest = Manifest::parse("seed: \"tuesday\"").unwrap();
        assert_eq!(manifest.seed_input().as_deref(), Some("tuesday"));
        assert_eq!(manifest.params(0).seed, None);

        let manifest = Manifest::parse("seed: 4.5").unwrap();
        assert_eq!(manifest.seed, Some(SeedValue::Float(4.5)));
        assert_eq!(manifest.params(0).seed, None);
    }

    #[test]
    fn test_whole_float_seed_is_not_integer() {
        for (yaml, value) in [("seed: 10.0", 10.0), ("seed: 1e3", 1000.0)] {
            let manifest = Manifest::parse(yaml).unwrap();
            assert_eq!(manifest.seed, Some(SeedValue::Float(value)), "{}", yaml);
            assert_eq!(manifest.params(0).seed, None, "{}", yaml);
            assert_eq!(manifest.params(2).seed, None, "{}", yaml);

            let result = check_seed_input(manifest.seed_input().as_deref());
            assert!(result.has_warnings(), "{}", yaml);
        }
    }

    #[test]
    fn test_parse_empty_manifest() {
        let manifest = Manifest::parse("").unwrap();
        assert_eq!(manifest.output, default_output());
    }

    #[test]
    fn test_parse_invalid_manifest() {
        let result = Manifest::parse("layers: [1, 2");
        assert!(matches!(result, Err(PosterError::Parse { .. })));
    }

    #[test]
    fn test_unknown_names_survive() {
        let manifest = Manifest::parse("shape: star\npalette: sepia").unwrap();
        assert!(manifest.shape.is_unknown());
        assert!(manifest.palette.is_unknown());
    }

    #[test]
    fn test_params_fold_reroll() {
        let manifest = Manifest::parse("seed: 10").unwrap();
        assert_eq!(manifest.params(0).seed, Some(10));
        assert_eq!(manifest.params(3).seed, Some(13));

        let unseeded = Manifest::default();
        assert_eq!(unseeded.params(0).seed, None);
        assert_eq!(unseeded.params(2).seed, Some(2));
    }

    #[test]
    fn test_find_and_discover() {
        let dir = tempdir().unwrap();
        assert!(Manifest::find(dir.path()).is_none());
        assert_eq!(Manifest::discover(dir.path()).unwrap().layers, 8);

        std::fs::write(dir.path().join(MANIFEST_FILENAME), "layers: 3").unwrap();
        assert!(Manifest::find(dir.path()).is_some());
        assert_eq!(Manifest::discover(dir.path()).unwrap().layers, 3);
    }
}
