//! The finished poster: background, layers and labels.

use serde::Serialize;

use super::{Colour, Outline, Point, ShapeSpec};

/// Canvas aspect ratio as (width, height).
pub const ASPECT: (u32, u32) = (7, 10);

/// How a layer's outlines are painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawMode {
    /// Closed, filled polygon.
    Fill,
    /// Open polyline.
    Stroke,
}

/// Text colour family, chosen for contrast with the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InkMode {
    Dark,
    Light,
}

impl InkMode {
    /// The text colour for this ink mode.
    pub fn colour(self) -> Colour {
        match self {
            InkMode::Dark => Colour::grey(0.1),
            InkMode::Light => Colour::grey(0.95),
        }
    }
}

/// Background fill.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Background {
    Solid { colour: Colour },
    /// Top-to-bottom linear gradient.
    Gradient { top: Colour, bottom: Colour },
}

impl Background {
    /// Colour at normalized height `y` (0 = bottom, 1 = top).
    pub fn colour_at(&self, y: f64) -> Colour {
        match *self {
            Background::Solid { colour } => colour,
            Background::Gradient { top, bottom } => bottom.lerp(top, y),
        }
    }
}

/// One painted shape instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layer {
    pub shape: ShapeSpec,
    pub outlines: Vec<Outline>,
    pub colour: Colour,
    pub alpha: f64,
    pub mode: DrawMode,
}

/// A text label anchored at its baseline start.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub text: String,
    /// Baseline start, in normalized canvas space.
    pub position: Point,
    /// Font size as a fraction of canvas height.
    pub size: f64,
    pub bold: bool,
    pub colour: Colour,
}

/// A composed poster, ready for encoding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Canvas {
    pub background: Background,
    pub ink: InkMode,
    layers: Vec<Layer>,
    labels: Vec<Label>,
}

impl Canvas {
    /// Create an empty canvas.
    pub fn new(background: Background, ink: InkMode) -> Self {
        Self {
            background,
            ink,
            layers: Vec::new(),
            labels: Vec::new(),
        }
    }

    /// Append a layer on top of the existing ones.
    pub fn push_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    /// Add a text label.
    pub fn push_label(&mut self, label: Label) {
        self.labels.push(label);
    }

    /// Layers in paint order (back to front).
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Pixel height for a given pixel width, keeping the aspect ratio.
    pub fn height_for(width: u32) -> u32 {
        let (aw, ah) = ASPECT;
        ((width as f64 * ah as f64 / aw as f64).round() as u32).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_for() {
        assert_eq!(Canvas::height_for(700), 1000);
        assert_eq!(Canvas::height_for(2100), 3000);
        assert_eq!(Canvas::height_for(7), 10);
        assert_eq!(Canvas::height_for(0), 1);
    }

    #[test]
    fn test_ink_colours() {
        assert_eq!(InkMode::Dark.colour(), Colour::grey(0.1));
        assert_eq!(InkMode::Light.colour(), Colour::grey(0.95));
    }

    #[test]
    fn test_gradient_colour_at() {
        let bg = Background::Gradient {
            top: Colour::grey(0.95),
            bottom: Colour::grey(0.75),
        };
        assert_eq!(bg.colour_at(1.0).to_rgb8(), [242, 242, 242]);
        assert_eq!(bg.colour_at(0.0), Colour::grey(0.75));
        assert!((bg.colour_at(0.5).r - 0.85).abs() < 1e-9);
    }

    #[test]
    fn test_layers_keep_insertion_order() {
        let mut canvas = Canvas::new(
            Background::Solid {
                colour: Colour::WHITE,
            },
            InkMode::Dark,
        );
        for alpha in [0.3, 0.4, 0.5] {
            canvas.push_layer(Layer {
                shape: ShapeSpec {
                    center: Point::new(0.5, 0.5),
                    radius: 0.2,
                    wobble: 0.1,
                    variant: crate::types::ShapeVariant::Blob,
                },
                outlines: vec![],
                colour: Colour::BLACK,
                alpha,
                mode: DrawMode::Fill,
            });
        }
        let alphas: Vec<f64> = canvas.layers().iter().map(|l| l.alpha).collect();
        assert_eq!(alphas, vec![0.3, 0.4, 0.5]);
    }
}
