//! Hatch line generation for convex quadrilaterals.
//!
//! Instead of generating oversized lines and clipping them afterwards, the
//! generator sweeps one line at a time across the quadrilateral and
//! intersects it with the four edge lines directly. It walks forward from
//! the first corner until a sweep line misses, then restarts at the corner
//! and walks backward until a sweep line misses again.

use std::f64::consts::PI;

use log::{debug, trace};

use crate::geometry::{Line, Point, Rectangle, Segment, Vector, distance2};
use crate::intersect::{is_in_segment, lines_intersection, lines_same_or_parallel};

/// Generate hatch segments clipped to `rect`.
///
/// `angle_degrees` rotates the hatch-step vector `(sin, cos) * step`, which is
/// both the normal of every sweep line and the offset between neighbouring
/// sweep lines. Segments come out in discovery order: the forward pass first,
/// then the backward pass. Nothing is sorted or deduplicated.
///
/// # Preconditions
///
/// - `step > 0`. Zero or negative steps never leave the forward pass.
/// - `rect` is convex with corners in cyclic order.
pub fn generate_hatch(rect: &Rectangle, angle_degrees: f64, step: f64) -> Vec<Segment> {
    let rad = angle_degrees * PI / 180.0;
    let mut hatch_step = Vector::new(rad.sin(), rad.cos()) * step;
    let edges = rect.to_segments();
    let mut point = rect.first();

    debug!(
        "hatching {:?} at {}° step {} (normal {:?})",
        rect.points, angle_degrees, step, hatch_step
    );

    let mut hatch = Vec::new();

    let mut forward = true;
    let mut is_continue = false;
    let mut first_iteration = true;
    let mut iterations = 0usize;

    while forward || is_continue {
        iterations += 1;
        is_continue = false;

        let sweep = Line::from_normal(hatch_step, point);
        let candidates = crossing_candidates(&edges, sweep);

        // Only the first candidate is validated; the second one is trusted.
        if let &[start, end, ..] = candidates.as_slice() {
            if edges.iter().any(|edge| is_in_segment(start, edge)) {
                is_continue = true;
                hatch.push(Segment::new(start, end));
            }
        }

        trace!(
            "sweep through {} ({} candidates) -> {}",
            point,
            candidates.len(),
            if is_continue { "hit" } else { "miss" }
        );

        if !is_continue && forward && !first_iteration {
            trace!("forward pass exhausted after {} iterations, reversing", iterations);
            forward = false;
            hatch_step = -hatch_step;
            point = rect.first();
            is_continue = true;
        }

        first_iteration = false;
        point = point + hatch_step;
    }

    debug!("{} hatch segments in {} iterations", hatch.len(), iterations);
    hatch
}

/// Generate two perpendicular hatch families: `angle`, then `angle + 90`.
pub fn generate_crosshatch(rect: &Rectangle, angle_degrees: f64, step: f64) -> Vec<Segment> {
    let mut hatch = generate_hatch(rect, angle_degrees, step);
    hatch.extend(generate_hatch(rect, angle_degrees + 90.0, step));
    hatch
}

/// Intersect the sweep line with every non-parallel edge line.
///
/// When all four edge lines are hit, two of the points sit on edge
/// extensions outside the quadrilateral. The farthest-apart pair is dropped,
/// leaving the entry and exit points in collection order.
///
/// That heuristic holds whenever the sweep direction splits the outward edge
/// normals two against two (always the case for parallelograms). A kite-like
/// quadrilateral where three normals face the same way fools it.
fn crossing_candidates(edges: &[Segment; 4], sweep: Line) -> Vec<Point> {
    let mut points: Vec<Point> = edges
        .iter()
        .filter(|edge| !lines_same_or_parallel(edge.line(), sweep))
        .map(|edge| lines_intersection(edge.line(), sweep))
        .collect();

    if points.len() == 4 {
        if let Some((i, j)) = farthest_pair(&points) {
            points = points
                .into_iter()
                .enumerate()
                .filter(|&(k, _)| k != i && k != j)
                .map(|(_, p)| p)
                .collect();
        }
    }

    points
}

/// Indices `(i, j)`, `i < j`, of the pair with the largest strictly positive
/// squared distance. Ties keep the first pair found.
fn farthest_pair(points: &[Point]) -> Option<(usize, usize)> {
    let mut best = None;
    let mut max_distance2 = 0.0;

    for i in 0..points.len() {
        for j in i + 1..points.len() {
            let d = distance2(points[i], points[j]);
            if max_distance2 < d {
                max_distance2 = d;
                best = Some((i, j));
            }
        }
    }

    best
}

// ============================================================================
// TESTS
// ============================================================================
