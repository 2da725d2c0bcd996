//! Render parameters.
//!
//! `RenderParams` is everything a caller chooses about a poster. It is built
//! once per request (from a manifest, CLI flags or code) and never changes
//! during the render.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PosterError, Result};

use super::PaletteKind;

/// Allowed number of layers.
pub const LAYER_RANGE: (u32, u32) = (1, 20);

/// Allowed wobble intensity.
pub const WOBBLE_RANGE: (f64, f64) = (0.01, 0.5);

/// Lower-case a name and drop separators, so `Off-white`, `off_white` and
/// `OffWhite` all compare equal.
pub(crate) fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Which shape family each layer is drawn from.
///
/// Unrecognized names are kept as `Unknown`; layers of an unknown shape are
/// skipped at render time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ShapeType {
    #[default]
    Blob,
    Polygon,
    Waves,
    Rings,
    Unknown(String),
}

impl ShapeType {
    /// All named shape types, in menu order.
    pub const ALL: [ShapeType; 4] = [
        ShapeType::Blob,
        ShapeType::Polygon,
        ShapeType::Waves,
        ShapeType::Rings,
    ];

    /// Parse a shape name, falling back to `Unknown`.
    pub fn parse(name: &str) -> Self {
        match normalize_name(name).as_str() {
            "blob" => ShapeType::Blob,
            "polygon" => ShapeType::Polygon,
            "waves" | "wave" => ShapeType::Waves,
            "rings" | "ring" => ShapeType::Rings,
            _ => ShapeType::Unknown(name.to_string()),
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, ShapeType::Unknown(_))
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeType::Blob => write!(f, "blob"),
            ShapeType::Polygon => write!(f, "polygon"),
            ShapeType::Waves => write!(f, "waves"),
            ShapeType::Rings => write!(f, "rings"),
            ShapeType::Unknown(name) => write!(f, "{}", name),
        }
    }
}

impl From<String> for ShapeType {
    fn from(name: String) -> Self {
        Self::parse(&name)
    }
}

impl From<ShapeType> for String {
    fn from(shape: ShapeType) -> Self {
        shape.to_string()
    }
}

/// Background style.
///
/// Unrecognized names are kept as `Unknown` and render as plain white.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BgMode {
    #[default]
    OffWhite,
    LightGray,
    Dark,
    Gradient,
    Unknown(String),
}

impl BgMode {
    /// All named background modes, in menu order.
    pub const ALL: [BgMode; 4] = [
        BgMode::OffWhite,
        BgMode::LightGray,
        BgMode::Dark,
        BgMode::Gradient,
    ];

    /// Parse a background name, falling back to `Unknown`.
    pub fn parse(name: &str) -> Self {
        match normalize_name(name).as_str() {
            "offwhite" => BgMode::OffWhite,
            "lightgray" | "lightgrey" => BgMode::LightGray,
            "dark" => BgMode::Dark,
            "gradient" => BgMode::Gradient,
            _ => BgMode::Unknown(name.to_string()),
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, BgMode::Unknown(_))
    }
}

impl fmt::Display for BgMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BgMode::OffWhite => write!(f, "off-white"),
            BgMode::LightGray => write!(f, "light-gray"),
            BgMode::Dark => write!(f, "dark"),
            BgMode::Gradient => write!(f, "gradient"),
            BgMode::Unknown(name) => write!(f, "{}", name),
        }
    }
}

impl From<String> for BgMode {
    fn from(name: String) -> Self {
        Self::parse(&name)
    }
}

impl From<BgMode> for String {
    fn from(mode: BgMode) -> Self {
        mode.to_string()
    }
}

/// Everything that decides what a poster looks like.
///
/// Built from a `Manifest` plus flags; the seed is already resolved here, so
/// this type is only ever serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderParams {
    /// Shape family for every layer.
    pub shape: ShapeType,

    /// Number of layers, `1..=20`.
    pub layers: u32,

    /// Per-sample radius jitter, `0.01..=0.5`.
    pub wobble: f64,

    /// Palette algorithm.
    pub palette: PaletteKind,

    /// Background style.
    pub background: BgMode,

    /// Seed for reproducible output. `None` draws from entropy.
    pub seed: Option<i64>,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            shape: ShapeType::Blob,
            layers: 8,
            wobble: 0.15,
            palette: PaletteKind::Pastel,
            background: BgMode::OffWhite,
            seed: None,
        }
    }
}

impl RenderParams {
    /// Reject out-of-range numeric parameters.
    ///
    /// Enum fields never fail here; unknown names fall back at render time.
    pub fn validate(&self) -> Result<()> {
        let (min_layers, max_layers) = LAYER_RANGE;
        if !(min_layers..=max_layers).contains(&self.layers) {
            return Err(PosterError::InvalidParameter {
                name: "layers".to_string(),
                message: format!("{} is outside {}..={}", self.layers, min_layers, max_layers),
                help: Some(format!("Use between {} and {} layers", min_layers, max_layers)),
            });
        }

        let (min_wobble, max_wobble) = WOBBLE_RANGE;
        if !self.wobble.is_finite() || !(min_wobble..=max_wobble).contains(&self.wobble) {
            return Err(PosterError::InvalidParameter {
                name: "wobble".to_string(),
                message: format!("{} is outside {}..={}", self.wobble, min_wobble, max_wobble),
                help: Some("Wobble is a fraction of the shape radius".to_string()),
            });
        }

        Ok(())
    }
}
