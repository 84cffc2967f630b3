//! SVG output for hatch segments.
//!
//! [`SvgWriter`] is an accumulator: feed it segments tagged with a
//! [`LineFormat`], then [`SvgWriter::finish`] computes one bounding box over
//! everything, scales it onto the canvas and writes the document once.
//!
//! ## Rust Lesson #3: Drop as a Finalizer
//!
//! In JS you'd write `try { ... } finally { writer.close() }` and hope
//! nobody forgets the `finally`. In Rust, implementing `Drop` means the
//! cleanup runs when the value goes out of scope, on every path, including
//! an early `return` or a `?`. We still prefer an explicit `finish()`
//! because `Drop` can't return an error, only log it.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::{debug, warn};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use thiserror::Error;

use crate::geometry::Segment;

/// Stroke width for a style tag that doesn't name a known [`LineFormat`].
pub const DEFAULT_STROKE_WIDTH: f64 = 1.5;

/// Error type for SVG output.
#[derive(Debug, Error)]
pub enum SvgError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("XML write error: {0}")]
    Xml(String),
}

/// Visual style of a group of segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum LineFormat {
    /// Shape outline (thicker).
    Contour,
    /// Fill lines (thinner).
    Hatch,
}

impl LineFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "contour" => Some(LineFormat::Contour),
            "hatch" => Some(LineFormat::Hatch),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LineFormat::Contour => "contour",
            LineFormat::Hatch => "hatch",
        }
    }

    pub fn stroke_width(self) -> f64 {
        match self {
            LineFormat::Contour => 2.0,
            LineFormat::Hatch => 1.0,
        }
    }

    /// Stroke width for a style tag, falling back to [`DEFAULT_STROKE_WIDTH`].
    pub fn stroke_width_for(name: &str) -> f64 {
        Self::from_name(name).map_or(DEFAULT_STROKE_WIDTH, Self::stroke_width)
    }
}

/// Collects styled segments and writes them as one SVG document.
pub struct SvgWriter<W: Write> {
    out: W,
    width: f64,
    height: f64,
    groups: BTreeMap<LineFormat, Vec<Segment>>,
    rendered: bool,
}

impl SvgWriter<BufWriter<File>> {
    /// Create (or truncate) `path` and write into it.
    pub fn create(path: impl AsRef<Path>, width: f64, height: f64) -> Result<Self, SvgError> {
        let file = File::create(path.as_ref())?;
        Ok(Self::new(BufWriter::new(file), width, height))
    }
}

impl<W: Write> SvgWriter<W> {
    /// Writer over any sink, with a `width` x `height` pixel canvas.
    pub fn new(out: W, width: f64, height: f64) -> Self {
        Self {
            out,
            width,
            height,
            groups: BTreeMap::new(),
            rendered: false,
        }
    }

    /// Queue segments under `format`. Nothing is written yet.
    pub fn draw_segments<I>(&mut self, segments: I, format: LineFormat)
    where
        I: IntoIterator<Item = Segment>,
    {
        self.groups.entry(format).or_default().extend(segments);
    }

    /// Write the document. Pass `&mut sink` to keep using the sink afterwards.
    pub fn finish(mut self) -> Result<(), SvgError> {
        self.render_once()
    }

    /// Render unless already rendered; the second call is a no-op.
    fn render_once(&mut self) -> Result<(), SvgError> {
        if self.rendered {
            return Ok(());
        }
        self.rendered = true;
        let groups = std::mem::take(&mut self.groups);
        render(&mut self.out, self.width, self.height, &groups)
    }
}

impl<W: Write> Drop for SvgWriter<W> {
    fn drop(&mut self) {
        if let Err(e) = self.render_once() {
            warn!("failed to write SVG on drop: {}", e);
        }
    }
}

// ============================================================================
// RENDERING
// ============================================================================

/// Bounding box over every queued segment as (min_x, min_y, max_x, max_y).
fn bounding_box(groups: &BTreeMap<LineFormat, Vec<Segment>>) -> Option<(f64, f64, f64, f64)> {
    let mut points = groups
        .values()
        .flatten()
        .flat_map(|s| [s.a(), s.b()])
        .peekable();
    points.peek()?;

    Some(points.fold(
        (f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        |(min_x, min_y, max_x, max_y), p| {
            (min_x.min(p.x), min_y.min(p.y), max_x.max(p.x), max_y.max(p.y))
        },
    ))
}

fn emit<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<(), SvgError> {
    writer
        .write_event(event)
        .map_err(|e| SvgError::Xml(e.to_string()))
}

fn render<W: Write>(
    out: &mut W,
    width: f64,
    height: f64,
    groups: &BTreeMap<LineFormat, Vec<Segment>>,
) -> Result<(), SvgError> {
    let mut writer = Writer::new_with_indent(out, b' ', 2);

    emit(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let canvas_width = width.to_string();
    let canvas_height = height.to_string();
    let svg = BytesStart::new("svg").with_attributes([
        ("version", "1.1"),
        ("width", canvas_width.as_str()),
        ("height", canvas_height.as_str()),
        ("xmlns", "http://www.w3.org/2000/svg"),
    ]);
    emit(&mut writer, Event::Start(svg))?;

    if let Some((min_x, min_y, max_x, max_y)) = bounding_box(groups) {
        // Uniform scale so the aspect ratio survives. A flat or single-point
        // picture has no finite scale.
        let scale = (width / (max_x - min_x)).min(height / (max_y - min_y));
        let scale = if scale.is_finite() { scale } else { 1.0 };

        debug!(
            "rendering {} segments, bbox ({}, {})..({}, {}), scale {}",
            groups.values().map(Vec::len).sum::<usize>(),
            min_x, min_y, max_x, max_y, scale
        );

        for (format, segments) in groups {
            let stroke_width = format.stroke_width().to_string();

            for segment in segments {
                // SVG's Y axis points down, so flip around max_y.
                let x1 = format!("{:.2}", scale * (segment.a().x - min_x));
                let y1 = format!("{:.2}", scale * (max_y - segment.a().y));
                let x2 = format!("{:.2}", scale * (segment.b().x - min_x));
                let y2 = format!("{:.2}", scale * (max_y - segment.b().y));

                let line = BytesStart::new("line").with_attributes([
                    ("class", format.name()),
                    ("x1", x1.as_str()),
                    ("y1", y1.as_str()),
                    ("x2", x2.as_str()),
                    ("y2", y2.as_str()),
                    ("stroke", "black"),
                    ("stroke-width", stroke_width.as_str()),
                ]);
                emit(&mut writer, Event::Empty(line))?;
            }
        }
    } else {
        debug!("rendering empty SVG document");
    }

    emit(&mut writer, Event::End(BytesEnd::new("svg")))?;

    writer.into_inner().flush()?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
