//! Palette synthesis.
//!
//! A palette is an ordered list of colours produced by one of the named
//! palette kinds. Every kind draws from the render's `RngStream`, so the same
//! seed always yields the same palette.

use std::fmt;

use palette::{Hsv, IntoColor, Srgb};
use serde::{Deserialize, Serialize};

use crate::rng::RngStream;

use super::params::normalize_name;
use super::Colour;

/// Number of colours the compositor asks for.
pub const DEFAULT_PALETTE_SIZE: usize = 6;

/// Reference colours for the vibrant palette: red, orange, green, blue,
/// purple, magenta.
pub const VIBRANT_ANCHORS: [(f64, f64, f64); 6] = [
    (0.95, 0.30, 0.30),
    (1.00, 0.65, 0.00),
    (0.20, 0.70, 0.30),
    (0.20, 0.40, 0.95),
    (0.65, 0.25, 0.90),
    (0.95, 0.20, 0.60),
];

const VIBRANT_JITTER: f64 = 0.05;
const MONO_SATURATION: f64 = 0.4;
const MONO_VALUE_RANGE: (f64, f64) = (0.35, 0.95);

/// Named palette algorithm.
///
/// Unrecognized names are kept as `Unknown` and behave like `Pastel`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaletteKind {
    #[default]
    Pastel,
    Vibrant,
    Mono,
    Random,
    Pink,
    Blue,
    Green,
    Unknown(String),
}

impl PaletteKind {
    /// All named kinds, in menu order.
    pub const ALL: [PaletteKind; 7] = [
        PaletteKind::Pastel,
        PaletteKind::Vibrant,
        PaletteKind::Mono,
        PaletteKind::Random,
        PaletteKind::Pink,
        PaletteKind::Blue,
        PaletteKind::Green,
    ];

    /// Parse a palette name, falling back to `Unknown`.
    pub fn parse(name: &str) -> Self {
        match normalize_name(name).as_str() {
            "pastel" => PaletteKind::Pastel,
            "vibrant" => PaletteKind::Vibrant,
            "mono" | "monochrome" => PaletteKind::Mono,
            "random" => PaletteKind::Random,
            "pink" => PaletteKind::Pink,
            "blue" => PaletteKind::Blue,
            "green" => PaletteKind::Green,
            _ => PaletteKind::Unknown(name.to_string()),
        }
    }

    /// Whether this kind falls back to the default algorithm.
    pub fn is_unknown(&self) -> bool {
        matches!(self, PaletteKind::Unknown(_))
    }
}

impl fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteKind::Pastel => write!(f, "pastel"),
            PaletteKind::Vibrant => write!(f, "vibrant"),
            PaletteKind::Mono => write!(f, "mono"),
            PaletteKind::Random => write!(f, "random"),
            PaletteKind::Pink => write!(f, "pink"),
            PaletteKind::Blue => write!(f, "blue"),
            PaletteKind::Green => write!(f, "green"),
            PaletteKind::Unknown(name) => write!(f, "{}", name),
        }
    }
}

impl From<String> for PaletteKind {
    fn from(name: String) -> Self {
        Self::parse(&name)
    }
}

impl From<PaletteKind> for String {
    fn from(kind: PaletteKind) -> Self {
        kind.to_string()
    }
}

/// An ordered, indexable list of generated colours.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palette {
    /// The kind that produced this palette.
    pub kind: PaletteKind,

    colours: Vec<Colour>,
}

impl Palette {
    /// Generate `k` colours of the given kind.
    pub fn generate(kind: &PaletteKind, k: usize, rng: &mut RngStream) -> Self {
        let colours = match kind {
            PaletteKind::Vibrant => vibrant(k, rng),
            PaletteKind::Mono => mono(k, rng),
            PaletteKind::Random => ranged(k, rng, (0.0, 1.0), (0.0, 1.0), (0.0, 1.0)),
            PaletteKind::Pink => ranged(k, rng, (0.9, 1.0), (0.4, 0.75), (0.6, 0.9)),
            PaletteKind::Blue => ranged(k, rng, (0.2, 0.5), (0.4, 0.8), (0.7, 1.0)),
            PaletteKind::Green => ranged(k, rng, (0.2, 0.5), (0.6, 1.0), (0.3, 0.7)),
            PaletteKind::Pastel | PaletteKind::Unknown(_) => pastel(k, rng),
        };

        Self {
            kind: kind.clone(),
            colours,
        }
    }

    /// Get a colour by index.
    pub fn get(&self, index: usize) -> Option<Colour> {
        self.colours.get(index).copied()
    }

    /// Pick a colour uniformly at random (with replacement).
    pub fn choose(&self, rng: &mut RngStream) -> Option<Colour> {
        rng.index(self.colours.len()).map(|i| self.colours[i])
    }

    /// All colours in generation order.
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    /// Get the number of colours.
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    /// Check if the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }
}

fn pastel(k: usize, rng: &mut RngStream) -> Vec<Colour> {
    ranged(k, rng, (0.65, 0.95), (0.65, 0.95), (0.65, 0.95))
}

/// Independent uniform draws per channel, r then g then b.
fn ranged(
    k: usize,
    rng: &mut RngStream,
    r: (f64, f64),
    g: (f64, f64),
    b: (f64, f64),
) -> Vec<Colour> {
    (0..k)
        .map(|_| {
            let r = rng.uniform(r.0, r.1);
            let g = rng.uniform(g.0, g.1);
            let b = rng.uniform(b.0, b.1);
            Colour::rgb(r, g, b)
        })
        .collect()
}

fn vibrant(k: usize, rng: &mut RngStream) -> Vec<Colour> {
    (0..k)
        .map(|i| {
            let (r, g, b) = VIBRANT_ANCHORS[i % VIBRANT_ANCHORS.len()];
            let r = r + rng.uniform(-VIBRANT_JITTER, VIBRANT_JITTER);
            let g = g + rng.uniform(-VIBRANT_JITTER, VIBRANT_JITTER);
            let b = b + rng.uniform(-VIBRANT_JITTER, VIBRANT_JITTER);
            Colour::rgb(r, g, b)
        })
        .collect()
}

fn mono(k: usize, rng: &mut RngStream) -> Vec<Colour> {
    let hue = rng.next_f64();
    let (lo, hi) = MONO_VALUE_RANGE;

    (0..k)
        .map(|i| {
            // Inclusive of both ends; a single colour sits at the low end.
            let value = if k > 1 {
                lo + (hi - lo) * i as f64 / (k - 1) as f64
            } else {
                lo
            };
            hsv_to_colour(hue, MONO_SATURATION, value)
        })
        .collect()
}

/// Convert HSV (all components in `[0, 1]`) to a colour.
fn hsv_to_colour(hue: f64, saturation: f64, value: f64) -> Colour {
    let hsv: Hsv<palette::encoding::Srgb, f64> = Hsv::new(hue * 360.0, saturation, value);
    let rgb: Srgb<f64> = hsv.into_color();
    Colour::rgb(rgb.red, rgb.green, rgb.blue)
}
