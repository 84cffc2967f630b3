//! Console output: plain segment lines or a JSON document.

use std::io::{self, Write};

use serde::Serialize;

use quadhatch::Segment;

/// A segment in JSON output format.
#[derive(Serialize)]
struct JsonSegment {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

/// JSON output with all segments in emission order.
#[derive(Serialize)]
struct JsonOutput {
    segments: Vec<JsonSegment>,
    count: usize,
}

/// One `(x1 y1) -> (x2 y2)` line per segment.
pub fn write_lines<W: Write>(out: &mut W, hatch: &[Segment]) -> io::Result<()> {
    for segment in hatch {
        writeln!(out, "{}", segment)?;
    }
    out.flush()
}

pub fn write_json<W: Write>(out: &mut W, hatch: &[Segment]) -> io::Result<()> {
    let output = JsonOutput {
        segments: hatch
            .iter()
            .map(|s| JsonSegment {
                x1: s.a().x,
                y1: s.a().y,
                x2: s.b().x,
                y2: s.b().y,
            })
            .collect(),
        count: hatch.len(),
    };
    serde_json::to_writer_pretty(&mut *out, &output)?;
    writeln!(out)?;
    out.flush()
}
