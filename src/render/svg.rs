//! SVG encoding for composed canvases.
//!
//! The canvas lives in a unit square with y pointing up; the SVG is drawn in
//! pixel space with y pointing down, stretched to `width x height`.

use std::fmt::Write;

use crate::types::{Background, Canvas, DrawMode, Label, Layer, Outline, Point};

/// Ring stroke width as a fraction of canvas height (2pt on a 720pt page).
pub const STROKE_WIDTH: f64 = 2.0 / 720.0;

const FONT_FAMILY: &str = "DejaVu Sans, Helvetica, Arial, sans-serif";

/// Build an SVG document for the canvas at the given pixel size.
pub fn to_svg(canvas: &Canvas, width: u32, height: u32) -> String {
    let frame = Frame {
        width: width as f64,
        height: height as f64,
    };

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = width,
        h = height
    );

    write_background(&mut svg, &canvas.background, width, height);

    for layer in canvas.layers() {
        write_layer(&mut svg, layer, frame);
    }

    for label in canvas.labels() {
        write_label(&mut svg, label, frame);
    }

    svg.push_str("</svg>\n");
    svg
}

/// Maps normalized canvas coordinates to pixels.
#[derive(Clone, Copy)]
struct Frame {
    width: f64,
    height: f64,
}

impl Frame {
    fn map(self, p: Point) -> (f64, f64) {
        (p.x * self.width, (1.0 - p.y) * self.height)
    }
}

fn write_background(svg: &mut String, background: &Background, width: u32, height: u32) {
    match background {
        Background::Solid { colour } => {
            let _ = writeln!(
                svg,
                r#"  <rect width="{}" height="{}" fill="{}"/>"#,
                width, height, colour
            );
        }
        Background::Gradient { top, bottom } => {
            let _ = writeln!(
                svg,
                r#"  <defs><linearGradient id="bg" x1="0" y1="0" x2="0" y2="1"><stop offset="0" stop-color="{}"/><stop offset="1" stop-color="{}"/></linearGradient></defs>"#,
                top, bottom
            );
            let _ = writeln!(
                svg,
                r#"  <rect width="{}" height="{}" fill="url(#bg)"/>"#,
                width, height
            );
        }
    }
}

fn write_layer(svg: &mut String, layer: &Layer, frame: Frame) {
    for outline in &layer.outlines {
        if outline.is_empty() {
            continue;
        }
        let closed = layer.mode == DrawMode::Fill;
        let d = path_data(outline, frame, closed);

        let _ = match layer.mode {
            DrawMode::Fill => writeln!(
                svg,
                r#"  <path d="{}" fill="{}" fill-opacity="{:.4}"/>"#,
                d, layer.colour, layer.alpha
            ),
            DrawMode::Stroke => writeln!(
                svg,
                r#"  <path d="{}" fill="none" stroke="{}" stroke-opacity="{:.4}" stroke-width="{:.3}" stroke-linejoin="round" stroke-linecap="round"/>"#,
                d,
                layer.colour,
                layer.alpha,
                STROKE_WIDTH * frame.height
            ),
        };
    }
}

fn write_label(svg: &mut String, label: &Label, frame: Frame) {
    let (x, y) = frame.map(label.position);
    let weight = if label.bold { "bold" } else { "normal" };
    let _ = writeln!(
        svg,
        r#"  <text x="{:.2}" y="{:.2}" font-family="{}" font-size="{:.2}" font-weight="{}" fill="{}">{}</text>"#,
        x,
        y,
        FONT_FAMILY,
        label.size * frame.height,
        weight,
        label.colour,
        escape_xml(&label.text)
    );
}

/// SVG path data for an outline. Filled outlines are closed with `Z`.
fn path_data(outline: &Outline, frame: Frame, closed: bool) -> String {
    let mut d = String::with_capacity(outline.len() * 16);
    for (i, &p) in outline.points().iter().enumerate() {
        let (x, y) = frame.map(p);
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{}{:.2} {:.2} ", cmd, x, y);
    }
    if closed {
        d.push('Z');
    }
    d.trim_end().to_string()
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
