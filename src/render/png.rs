//! PNG output for composed canvases.
//!
//! The canvas is encoded as SVG, rasterized with resvg and written with the
//! `image` crate.

use std::path::Path;
use std::sync::Arc;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::error::{PosterError, Result};
use crate::types::Canvas;

use super::svg::to_svg;

/// Largest accepted raster dimension.
pub const MAX_DIM: u32 = 16_384;

/// Rasterize a canvas at the given pixel width.
///
/// The height follows the canvas aspect ratio.
pub fn rasterize(canvas: &Canvas, width: u32) -> Result<RgbaImage> {
    let height = Canvas::height_for(width);
    if width == 0 || width > MAX_DIM || height > MAX_DIM {
        return Err(PosterError::InvalidParameter {
            name: "width".to_string(),
            message: format!("raster size {}x{} is not supported", width, height),
            help: Some(format!("Use a width between 1 and {}", MAX_DIM * 7 / 10)),
        });
    }

    let svg = to_svg(canvas, width, height);
    let options = usvg::Options {
        fontdb: Arc::new(system_fonts()),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(&svg, &options).map_err(|e| PosterError::Render {
        message: format!("Failed to parse generated SVG: {}", e),
        help: None,
    })?;

    let mut pixmap =
        resvg::tiny_skia::Pixmap::new(width, height).ok_or_else(|| PosterError::Render {
            message: format!("Failed to allocate a {}x{} pixmap", width, height),
            help: None,
        })?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );

    // tiny-skia stores premultiplied alpha; image expects straight alpha.
    let mut img: RgbaImage = ImageBuffer::new(width, height);
    for (pixel, src) in img.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *pixel = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }

    Ok(img)
}

/// Write a canvas to a PNG file at the given pixel width.
pub fn write_png(canvas: &Canvas, path: &Path, width: u32) -> Result<()> {
    let img = rasterize(canvas, width)?;

    img.save(path).map_err(|e| PosterError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}

fn system_fonts() -> usvg::fontdb::Database {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    db
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        Background, Colour, DrawMode, InkMode, Layer, Outline, Point, ShapeSpec, ShapeVariant,
    };
    use tempfile::tempdir;

    fn blank(background: Background) -> Canvas {
        Canvas::new(background, InkMode::Dark)
    }

    fn square(colour: Colour, alpha: f64) -> Layer {
        Layer {
            shape: ShapeSpec {
                center: Point::new(0.5, 0.5),
                radius: 0.25,
                wobble: 0.0,
                variant: ShapeVariant::Polygon { sides: 4 },
            },
            outlines: vec![Outline::new(vec![
                Point::new(0.25, 0.25),
                Point::new(0.75, 0.25),
                Point::new(0.75, 0.75),
                Point::new(0.25, 0.75),
                Point::new(0.25, 0.25),
            ])],
            colour,
            alpha,
            mode: DrawMode::Fill,
        }
    }

    #[test]
    fn test_rasterize_size() {
        let canvas = blank(Background::Solid {
            colour: Colour::WHITE,
        });
        let img = rasterize(&canvas, 70).unwrap();
        assert_eq!(img.width(), 70);
        assert_eq!(img.height(), 100);
    }

    #[test]
    fn test_rasterize_solid_background() {
        let canvas = blank(Background::Solid {
            colour: Colour::rgb(0.98, 0.98, 0.97),
        });
        let img = rasterize(&canvas, 70).unwrap();
        assert_eq!(img.get_pixel(0, 0).0, [250, 250, 247, 255]);
        assert_eq!(img.get_pixel(69, 99).0, [250, 250, 247, 255]);
    }

    #[test]
    fn test_rasterize_gradient_is_lighter_at_top() {
        let canvas = blank(Background::Gradient {
            top: Colour::grey(0.95),
            bottom: Colour::grey(0.75),
        });
        let img = rasterize(&canvas, 70).unwrap();
        let top = img.get_pixel(35, 0).0[0];
        let bottom = img.get_pixel(35, 99).0[0];
        assert!(top > bottom, "top {} bottom {}", top, bottom);
    }

    #[test]
    fn test_rasterize_blends_layers() {
        let mut canvas = blank(Background::Solid {
            colour: Colour::WHITE,
        });
        canvas.push_layer(square(Colour::BLACK, 0.5));
        let img = rasterize(&canvas, 70).unwrap();

        let inside = img.get_pixel(35, 50).0;
        assert!((120..=136).contains(&inside[0]), "inside = {:?}", inside);
        assert_eq!(inside[3], 255);

        // Outside the square the background shows through.
        assert_eq!(img.get_pixel(2, 2).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_rasterize_rejects_zero_width() {
        let canvas = blank(Background::Solid {
            colour: Colour::WHITE,
        });
        assert!(rasterize(&canvas, 0).is_err());
        assert!(rasterize(&canvas, MAX_DIM + 1).is_err());
    }

    #[test]
    fn test_write_png() {
        let canvas = blank(Background::Solid {
            colour: Colour::grey(0.08),
        });

        let dir = tempdir().unwrap();
        let path = dir.path().join("poster.png");

        write_png(&canvas, &path, 35).unwrap();

        assert!(path.exists());
        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 35);
        assert_eq!(img.height(), 50);
        assert_eq!(img.get_pixel(10, 10).0, [20, 20, 20, 255]);
    }
}
