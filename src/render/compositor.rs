//! Compositor - turns render parameters into a finished canvas.
//!
//! The compositor resolves the background, generates a palette and then
//! stacks `layers` random shapes back to front before adding the two title
//! labels. Every random decision is drawn from one `RngStream` in a fixed
//! order:
//!
//! 1. palette colours
//! 2. per layer: center x, center y, radius, colour, alpha, shape extras,
//!    shape jitter

use crate::rng::RngStream;
use crate::types::{
    Canvas, DrawMode, InkMode, Label, Layer, Palette, Point, RenderParams, ShapeSpec,
    ShapeVariant, DEFAULT_PALETTE_SIZE,
};

use super::background::resolve_background;

/// Poster title.
pub const TITLE: &str = "Generative Poster";

/// Poster subtitle.
pub const SUBTITLE: &str = "Interactive - Arts & Advanced Big Data";

/// Range for layer base radii.
pub const RADIUS_RANGE: (f64, f64) = (0.15, 0.45);

/// Range for layer opacity.
pub const ALPHA_RANGE: (f64, f64) = (0.25, 0.6);

/// Label sizes are expressed in points on a 720pt-tall page.
const PAGE_HEIGHT_PT: f64 = 720.0;

/// Composes posters from render parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Compositor;

impl Compositor {
    pub fn new() -> Self {
        Self
    }

    /// Render a poster with a fresh stream seeded from `params.seed`.
    ///
    /// Assumes `params` has been validated.
    pub fn render(&self, params: &RenderParams) -> Canvas {
        let mut rng = RngStream::new(params.seed);
        self.render_with(params, &mut rng)
    }

    /// Render a poster drawing from the given stream.
    #[tracing::instrument(skip_all, fields(shape = %params.shape, layers = params.layers, seed = ?rng.seed()))]
    pub fn render_with(&self, params: &RenderParams, rng: &mut RngStream) -> Canvas {
        let (background, ink) = resolve_background(&params.background);
        let mut canvas = Canvas::new(background, ink);

        let palette = Palette::generate(&params.palette, DEFAULT_PALETTE_SIZE, rng);
        tracing::debug!(palette = %params.palette, colours = palette.len(), "generated palette");

        for index in 0..params.layers {
            let center = Point::new(rng.next_f64(), rng.next_f64());
            let radius = rng.uniform(RADIUS_RANGE.0, RADIUS_RANGE.1);
            let colour = palette.choose(rng);
            let alpha = rng.uniform(ALPHA_RANGE.0, ALPHA_RANGE.1);

            let shape = ShapeSpec::draw(&params.shape, center, radius, params.wobble, rng);
            let (Some(shape), Some(colour)) = (shape, colour) else {
                tracing::warn!(layer = index, shape = %params.shape, "unknown shape, skipping layer");
                continue;
            };

            let mode = match shape.variant {
                ShapeVariant::Rings { .. } => DrawMode::Stroke,
                _ => DrawMode::Fill,
            };
            let outlines = shape.outlines(rng);

            tracing::trace!(layer = index, ?center, radius, %colour, alpha, "layer");
            canvas.push_layer(Layer {
                shape,
                outlines,
                colour,
                alpha,
                mode,
            });
        }

        for label in labels(ink) {
            canvas.push_label(label);
        }

        tracing::debug!(painted = canvas.layers().len(), "composed canvas");
        canvas
    }
}

/// The title and subtitle, painted in the ink colour.
fn labels(ink: InkMode) -> [Label; 2] {
    [
        Label {
            text: TITLE.to_string(),
            position: Point::new(0.05, 0.95),
            size: 18.0 / PAGE_HEIGHT_PT,
            bold: true,
            colour: ink.colour(),
        },
        Label {
            text: SUBTITLE.to_string(),
            position: Point::new(0.05, 0.91),
            size: 11.0 / PAGE_HEIGHT_PT,
            bold: false,
            colour: ink.colour(),
        },
    ]
}
