//! Rendering module for poster.
//!
//! This module composes canvases from render parameters and encodes them as
//! PNG, SVG or JSON.

mod background;
mod compositor;
mod png;
mod svg;

use std::fs;
use std::path::Path;

use crate::error::{PosterError, Result};
use crate::types::{Canvas, RenderParams};

pub use background::resolve_background;
pub use compositor::{Compositor, ALPHA_RANGE, RADIUS_RANGE, SUBTITLE, TITLE};
pub use png::{rasterize, write_png, MAX_DIM};
pub use svg::{to_svg, STROKE_WIDTH};

/// Validate parameters and compose a poster.
///
/// This is the main entry point: out-of-range numbers are rejected here,
/// everything past this point falls back instead of failing.
pub fn render(params: &RenderParams) -> Result<Canvas> {
    params.validate()?;
    Ok(Compositor::new().render(params))
}

/// Output encodings, chosen from the output file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Svg,
    Json,
}

impl OutputFormat {
    /// Pick a format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "png" => Ok(OutputFormat::Png),
            "svg" => Ok(OutputFormat::Svg),
            "json" => Ok(OutputFormat::Json),
            _ => Err(PosterError::Parse {
                message: format!("Unsupported output format: {}", path.display()),
                help: Some("Use a .png, .svg or .json output path".to_string()),
            }),
        }
    }
}

/// Write a canvas to `path` in the format implied by its extension.
///
/// `width` is the pixel width for PNG and SVG output.
pub fn write_canvas(canvas: &Canvas, path: &Path, width: u32) -> Result<OutputFormat> {
    let format = OutputFormat::from_path(path)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| PosterError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    match format {
        OutputFormat::Png => write_png(canvas, path, width)?,
        OutputFormat::Svg => write_svg(canvas, path, width)?,
        OutputFormat::Json => write_json(canvas, path)?,
    }

    Ok(format)
}

/// Write a canvas as an SVG document.
pub fn write_svg(canvas: &Canvas, path: &Path, width: u32) -> Result<()> {
    let svg = to_svg(canvas, width, Canvas::height_for(width));
    fs::write(path, svg).map_err(|e| PosterError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write SVG: {}", e),
    })
}

/// Serialize a canvas description to JSON.
pub fn canvas_json(canvas: &Canvas) -> Result<String> {
    serde_json::to_string_pretty(canvas).map_err(|e| PosterError::Render {
        message: format!("Failed to serialize canvas: {}", e),
        help: None,
    })
}

/// Write a canvas description as JSON.
pub fn write_json(canvas: &Canvas, path: &Path) -> Result<()> {
    let json = canvas_json(canvas)?;
    fs::write(path, json).map_err(|e| PosterError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write JSON: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_render_rejects_bad_params() {
        let params = RenderParams {
            layers: 0,
            ..Default::default()
        };
        assert!(matches!(
            render(&params),
            Err(PosterError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_render_valid_params() {
        let params = RenderParams {
            layers: 3,
            seed: Some(1),
            ..Default::default()
        };
        let canvas = render(&params).unwrap();
        assert_eq!(canvas.layers().len(), 3);
    }

    #[test]
    fn test_output_format_from_path() {
        assert_eq!(
            OutputFormat::from_path(Path::new("a/poster.PNG")).unwrap(),
            OutputFormat::Png
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("poster.svg")).unwrap(),
            OutputFormat::Svg
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("poster.json")).unwrap(),
            OutputFormat::Json
        );
        assert!(OutputFormat::from_path(Path::new("poster.gif")).is_err());
        assert!(OutputFormat::from_path(Path::new("poster")).is_err());
    }

    #[test]
    fn test_write_canvas_creates_directories() {
        let params = RenderParams {
            layers: 2,
            seed: Some(4),
            ..Default::default()
        };
        let canvas = render(&params).unwrap();

        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("poster.svg");
        let format = write_canvas(&canvas, &path, 70).unwrap();

        assert_eq!(format, OutputFormat::Svg);
        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Generative Poster"));
    }

    #[test]
    fn test_write_json_roundtrips_through_value() {
        let params = RenderParams {
            layers: 2,
            seed: Some(4),
            ..Default::default()
        };
        let canvas = render(&params).unwrap();

        let dir = tempdir().unwrap();
        let path = dir.path().join("poster.json");
        write_json(&canvas, &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["ink"], "dark");
        assert_eq!(value["layers"].as_array().unwrap().len(), 2);
        assert_eq!(value["labels"][0]["text"], "Generative Poster");
    }
}
