//! Validation checks for render parameters.
//!
//! Numeric ranges are errors; unknown names and unusable seeds are
//! warnings, since rendering falls back instead of failing.

use crate::render::MAX_DIM;
use crate::types::{Canvas, RenderParams, LAYER_RANGE, WOBBLE_RANGE};

use super::warning::{Diagnostic, ValidationResult};

/// Check that the layer count is within range.
pub fn check_layers(params: &RenderParams) -> ValidationResult {
    let mut result = ValidationResult::new();
    let (min, max) = LAYER_RANGE;

    if !(min..=max).contains(&params.layers) {
        result.push(
            Diagnostic::error(
                "poster::validate::layers",
                format!("Layer count {} is outside {}..={}", params.layers, min, max),
            )
            .for_field("layers")
            .with_help(format!("Use between {} and {} layers", min, max)),
        );
    }

    result
}

/// Check that wobble is a finite value within range.
pub fn check_wobble(params: &RenderParams) -> ValidationResult {
    let mut result = ValidationResult::new();
    let (min, max) = WOBBLE_RANGE;

    if !params.wobble.is_finite() || !(min..=max).contains(&params.wobble) {
        result.push(
            Diagnostic::error(
                "poster::validate::wobble",
                format!("Wobble {} is outside {}..={}", params.wobble, min, max),
            )
            .for_field("wobble")
            .with_help("Wobble is a fraction of the shape radius; 0.15 is a good start"),
        );
    }

    result
}

/// Warn about names that will fall back to a default.
pub fn check_names(params: &RenderParams) -> ValidationResult {
    let mut result = ValidationResult::new();

    if params.shape.is_unknown() {
        result.push(
            Diagnostic::warning(
                "poster::validate::unknown-shape",
                format!("Unknown shape '{}'; every layer will be skipped", params.shape),
            )
            .for_field("shape")
            .with_help("Use one of: blob, polygon, waves, rings"),
        );
    }

    if params.palette.is_unknown() {
        result.push(
            Diagnostic::warning(
                "poster::validate::unknown-palette",
                format!("Unknown palette '{}'; using pastel", params.palette),
            )
            .for_field("palette")
            .with_help("Use one of: pastel, vibrant, mono, random, pink, blue, green"),
        );
    }

    if params.background.is_unknown() {
        result.push(
            Diagnostic::warning(
                "poster::validate::unknown-background",
                format!(
                    "Unknown background '{}'; using plain white",
                    params.background
                ),
            )
            .for_field("background")
            .with_help("Use one of: off-white, light-gray, dark, gradient"),
        );
    }

    result
}

/// Warn when seed input was given but is not an integer.
pub fn check_seed_input(input: Option<&str>) -> ValidationResult {
    let mut result = ValidationResult::new();

    if let Some(raw) = input.map(str::trim).filter(|s| !s.is_empty()) {
        if raw.parse::<i64>().is_err() {
            result.push(
                Diagnostic::warning(
                    "poster::validate::seed",
                    format!("Seed '{}' is not an integer; output will not be reproducible", raw),
                )
                .for_field("seed"),
            );
        }
    }

    result
}

/// Check that the raster width gives a supported image size.
pub fn check_width(width: u32) -> ValidationResult {
    let mut result = ValidationResult::new();
    let height = Canvas::height_for(width);

    if width == 0 || width > MAX_DIM || height > MAX_DIM {
        result.push(
            Diagnostic::error(
                "poster::validate::width",
                format!("Output size {}x{} is not supported", width, height),
            )
            .for_field("width")
            .with_help(format!("Keep both sides between 1 and {} pixels", MAX_DIM)),
        );
    }

    result
}
