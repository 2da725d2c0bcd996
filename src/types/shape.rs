//! Parametric shape geometry.
//!
//! Shapes live in the unit square with the origin at the bottom-left. Each
//! variant turns a center, a base radius and a wobble amount into one or
//! more outlines (point sequences). All randomness comes from the render's
//! `RngStream`, drawn in a fixed order: variant extras first, then one
//! jitter value per sample.

use std::f64::consts::TAU;

use serde::Serialize;

use crate::rng::RngStream;

use super::ShapeType;

/// Samples around a blob (and each ring).
pub const BLOB_POINTS: usize = 200;

/// Samples around a wave outline.
pub const WAVE_POINTS: usize = 400;

/// Inclusive range for polygon side counts.
pub const POLYGON_SIDES: (u32, u32) = (3, 8);

/// Inclusive range for wave frequencies.
pub const WAVE_FREQUENCY: (u32, u32) = (4, 8);

/// Inclusive range for ring counts.
pub const RING_COUNT: (u32, u32) = (2, 4);

/// A point in normalized canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The point at `radius` from `self` in direction `angle`.
    fn polar(self, radius: f64, angle: f64) -> Self {
        Self::new(self.x + radius * angle.cos(), self.y + radius * angle.sin())
    }
}

/// An ordered point sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outline {
    points: Vec<Point>,
}

impl Outline {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the last point repeats the first.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => self.points.len() > 1 && first == last,
            _ => false,
        }
    }
}

/// Variant-specific shape parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ShapeVariant {
    Blob,
    Polygon { sides: u32 },
    Waves { frequency: u32 },
    Rings { count: u32 },
}

/// A fully-resolved shape: where it sits and what it looks like.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShapeSpec {
    pub center: Point,
    pub radius: f64,
    pub wobble: f64,
    pub variant: ShapeVariant,
}

impl ShapeSpec {
    /// Resolve a shape type into a concrete spec, drawing its extras
    /// (side count, frequency or ring count).
    ///
    /// Returns `None` for unknown shape types; no draws are made in that case.
    pub fn draw(
        shape: &ShapeType,
        center: Point,
        radius: f64,
        wobble: f64,
        rng: &mut RngStream,
    ) -> Option<Self> {
        let variant = match shape {
            ShapeType::Blob => ShapeVariant::Blob,
            ShapeType::Polygon => ShapeVariant::Polygon {
                sides: rng.int_inclusive(POLYGON_SIDES.0, POLYGON_SIDES.1),
            },
            ShapeType::Waves => ShapeVariant::Waves {
                frequency: rng.int_inclusive(WAVE_FREQUENCY.0, WAVE_FREQUENCY.1),
            },
            ShapeType::Rings => ShapeVariant::Rings {
                count: rng.int_inclusive(RING_COUNT.0, RING_COUNT.1),
            },
            ShapeType::Unknown(_) => return None,
        };

        Some(Self {
            center,
            radius,
            wobble,
            variant,
        })
    }

    /// Generate the outlines for this shape.
    ///
    /// Rings yield one outline per ring; every other variant yields one.
    pub fn outlines(&self, rng: &mut RngStream) -> Vec<Outline> {
        match self.variant {
            ShapeVariant::Blob => vec![blob(self.center, self.radius, self.wobble, rng)],
            ShapeVariant::Polygon { sides } => {
                vec![polygon(self.center, self.radius, sides, self.wobble, rng)]
            }
            ShapeVariant::Waves { frequency } => {
                vec![waves(self.center, self.radius, frequency, self.wobble)]
            }
            ShapeVariant::Rings { count } => (0..count)
                .map(|i| {
                    let radius = self.radius * (0.5 + 0.4 * i as f64);
                    blob(self.center, radius, self.wobble, rng)
                })
                .collect(),
        }
    }
}

/// `n` angles evenly covering a full turn, both ends included.
fn full_turn(n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 { TAU / (n - 1) as f64 } else { 0.0 };
    (0..n).map(move |i| i as f64 * step)
}

/// Radius with uniform jitter of `wobble` around the base.
fn jittered(radius: f64, wobble: f64, rng: &mut RngStream) -> f64 {
    radius * (1.0 + wobble * (rng.next_f64() - 0.5))
}

// The first and last samples share an angle but not a radius, so the
// outline is not closed.
fn blob(center: Point, radius: f64, wobble: f64, rng: &mut RngStream) -> Outline {
    let points = full_turn(BLOB_POINTS)
        .map(|angle| center.polar(jittered(radius, wobble, rng), angle))
        .collect();
    Outline::new(points)
}

fn polygon(center: Point, radius: f64, sides: u32, wobble: f64, rng: &mut RngStream) -> Outline {
    let step = TAU / sides as f64;
    let mut points: Vec<Point> = (0..sides)
        .map(|i| center.polar(jittered(radius, wobble, rng), i as f64 * step))
        .collect();

    if let Some(&first) = points.first() {
        points.push(first);
    }
    Outline::new(points)
}

fn waves(center: Point, radius: f64, frequency: u32, wobble: f64) -> Outline {
    let frequency = frequency as f64;
    let points = full_turn(WAVE_POINTS)
        .map(|angle| center.polar(radius * (1.0 + wobble * (frequency * angle).sin()), angle))
        .collect();
    Outline::new(points)
}
