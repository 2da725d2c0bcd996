//! poster - Seeded generative poster renderer
//!
//! A library for composing abstract posters from layered, wobbly shapes.
//! The same parameters and seed always give the same poster, which can be
//! written as PNG, SVG or a JSON description.

pub mod cli;
pub mod error;
pub mod manifest;
pub mod output;
pub mod render;
pub mod rng;
pub mod types;
pub mod validation;

pub use error::{PosterError, Result};
pub use manifest::{Manifest, SeedValue, MANIFEST_FILENAME};
pub use render::{render, to_svg, write_canvas, Compositor, OutputFormat};
pub use rng::{effective_seed, parse_seed, RngStream};
pub use types::{
    Background, BgMode, Canvas, Colour, DrawMode, InkMode, Label, Layer, Outline, Palette,
    PaletteKind, Point, RenderParams, ShapeSpec, ShapeType, ShapeVariant,
};
pub use validation::{validate_params, Diagnostic, Severity, ValidationResult};
