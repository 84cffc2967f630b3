//! SVG and PNG output of a hatched quadrilateral.
//!
//! Both outputs draw the same picture: the four edges as `contour` lines
//! and the hatch as `hatch` lines, fitted into a fixed canvas.

use std::fs;
use std::io;
use std::path::Path;

use log::debug;
use thiserror::Error;

use quadhatch::{LineFormat, Rectangle, Segment, SvgError, SvgWriter};

pub const CANVAS_WIDTH: f64 = 400.0;
pub const CANVAS_HEIGHT: f64 = 400.0;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Svg(#[from] SvgError),
    #[error("Rasterization failed: {0}")]
    Raster(String),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn draw<W: io::Write>(writer: &mut SvgWriter<W>, rect: &Rectangle, hatch: &[Segment]) {
    writer.draw_segments(hatch.iter().copied(), LineFormat::Hatch);
    writer.draw_segments(rect.to_segments(), LineFormat::Contour);
}

/// Write the contour and hatch to an SVG file at `path`.
pub fn write_svg(path: &Path, rect: &Rectangle, hatch: &[Segment]) -> Result<(), RenderError> {
    let mut writer = SvgWriter::create(path, CANVAS_WIDTH, CANVAS_HEIGHT)?;
    draw(&mut writer, rect, hatch);
    writer.finish()?;
    debug!("wrote {} hatch lines to {}", hatch.len(), path.display());
    Ok(())
}

/// The SVG document [`write_svg`] would write, as a string.
pub fn svg_document(rect: &Rectangle, hatch: &[Segment]) -> Result<String, SvgError> {
    let mut bytes = Vec::new();
    let mut writer = SvgWriter::new(&mut bytes, CANVAS_WIDTH, CANVAS_HEIGHT);
    draw(&mut writer, rect, hatch);
    writer.finish()?;
    String::from_utf8(bytes).map_err(|e| SvgError::Xml(e.to_string()))
}

/// Rasterize the SVG picture onto a white background and save it as PNG.
pub fn write_png(path: &Path, rect: &Rectangle, hatch: &[Segment]) -> Result<(), RenderError> {
    use tiny_skia::Pixmap;

    let svg = svg_document(rect, hatch)?;
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(&svg, &options).map_err(|e| RenderError::Raster(e.to_string()))?;

    let size = tree.size().to_int_size();
    let mut pixmap = Pixmap::new(size.width(), size.height())
        .ok_or_else(|| RenderError::Raster("could not create pixmap".to_string()))?;
    pixmap.fill(tiny_skia::Color::WHITE);
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    let png = pixmap
        .encode_png()
        .map_err(|e| RenderError::Raster(e.to_string()))?;
    fs::write(path, png)?;
    debug!("wrote {}x{} preview to {}", size.width(), size.height(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadhatch::{Point, generate_hatch};

    fn square() -> Rectangle {
        Rectangle::new([
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ])
    }

    #[test]
    fn document_has_contour_then_hatch() {
        let rect = square();
        let hatch = generate_hatch(&rect, 0.0, 5.0);
        let doc = svg_document(&rect, &hatch).unwrap();

        assert_eq!(doc.matches("<line").count(), 5);
        assert_eq!(doc.matches("class=\"contour\"").count(), 4);
        assert_eq!(doc.matches("class=\"hatch\"").count(), 1);
        let last_contour = doc.rfind("class=\"contour\"").unwrap();
        let first_hatch = doc.find("class=\"hatch\"").unwrap();
        assert!(last_contour < first_hatch);
        assert!(doc.contains("width=\"400\""));
    }

    #[test]
    fn svg_file_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("square.svg");
        let rect = square();
        write_svg(&path, &rect, &generate_hatch(&rect, 0.0, 2.0)).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.matches("<line").count(), 8);
    }

    #[test]
    fn svg_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.svg");
        let err = write_svg(&path, &square(), &[]).unwrap_err();
        assert!(matches!(err, RenderError::Svg(SvgError::Io(_))), "{:?}", err);
    }

    #[test]
    fn png_into_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.png");
        let err = write_png(&path, &square(), &[]).unwrap_err();
        assert!(matches!(err, RenderError::Io(_)), "{:?}", err);
    }

    #[test]
    fn png_has_magic_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("square.png");
        let rect = square();
        write_png(&path, &rect, &generate_hatch(&rect, 45.0, 1.0)).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}
