//! Core domain types for poster.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Colour` - RGB colour values in `[0, 1]`
//! - `Palette` - Generated colour lists and the kinds that produce them
//! - `RenderParams` - The caller's choices for one poster
//! - `ShapeSpec` - Parametric shape geometry
//! - `Canvas` - The composed poster handed to encoders

mod canvas;
mod colour;
mod palette;
mod params;
mod shape;

pub use canvas::{Background, Canvas, DrawMode, InkMode, Label, Layer, ASPECT};
pub use colour::Colour;
pub use palette::{Palette, PaletteKind, DEFAULT_PALETTE_SIZE, VIBRANT_ANCHORS};
pub use params::{BgMode, RenderParams, ShapeType, LAYER_RANGE, WOBBLE_RANGE};
pub use shape::{
    Outline, Point, ShapeSpec, ShapeVariant, BLOB_POINTS, POLYGON_SIDES, RING_COUNT,
    WAVE_FREQUENCY, WAVE_POINTS,
};
