//! Tolerance-based line and segment predicates.
//!
//! All "is it zero" checks use [`EPS`].

use crate::geometry::{EPS, Line, Point, Segment, Vector, cross_product, dot_product, norm_of};

// ============================================================================
// LINE-LINE
// ============================================================================

/// True if the two lines are parallel or the same line.
///
/// Two lines are parallel exactly when their normals are, so this is a
/// cross product of the normals compared against [`EPS`]. Always call this
/// before [`lines_intersection`].
#[inline]
pub fn lines_same_or_parallel(l1: Line, l2: Line) -> bool {
    cross_product(norm_of(l1), norm_of(l2)).abs() < EPS
}

/// Intersection point of two lines, solved with Cramer's rule.
///
/// # Precondition
///
/// The lines must not be parallel (check [`lines_same_or_parallel`] first).
/// Parallel input divides by a (near) zero determinant and yields a point
/// with huge, infinite or NaN coordinates. That's not an error path; it's a
/// contract violation by the caller.
#[inline]
pub fn lines_intersection(l1: Line, l2: Line) -> Point {
    let d = l1.a * l2.b - l2.a * l1.b;
    let dx = l1.b * l2.c - l2.b * l1.c;
    let dy = l1.c * l2.a - l2.c * l1.a;
    Point::new(dx / d, dy / d)
}

// ============================================================================
// POINT-SEGMENT
// ============================================================================

/// True if `p` lies strictly inside segment `s`.
///
/// `p` must be collinear with the endpoints (within [`EPS`]) and both
/// `AB·AP` and `AB·PB` must be strictly positive. The endpoints themselves
/// are NOT in the segment: hatching relies on a sweep line through a corner
/// being rejected.
#[inline]
pub fn is_in_segment(p: Point, s: &Segment) -> bool {
    let ab = Vector::between(s.a(), s.b());
    let ap = Vector::between(s.a(), p);
    let pb = Vector::between(p, s.b());

    cross_product(ab, ap).abs() < EPS && dot_product(ab, ap) > 0.0 && dot_product(ab, pb) > 0.0
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
        Segment::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[test]
    fn parallel_lines_detected() {
        let l1 = Line::through(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        let l2 = Line::through(Point::new(0.0, 3.0), Point::new(-4.0, 3.0));
        assert!(lines_same_or_parallel(l1, l2));
    }

    #[test]
    fn same_line_counts_as_parallel() {
        let l1 = Line::through(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        let l2 = Line::through(Point::new(2.0, 2.0), Point::new(5.0, 5.0));
        assert!(lines_same_or_parallel(l1, l2));
    }

    #[test]
    fn crossing_lines_not_parallel() {
        let l1 = Line::through(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        let l2 = Line::through(Point::new(3.0, -1.0), Point::new(3.0, 1.0));
        assert!(!lines_same_or_parallel(l1, l2));
    }

    #[test]
    fn intersection_of_axes_aligned_lines() {
        let l1 = Line::through(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        let l2 = Line::through(Point::new(3.0, -1.0), Point::new(3.0, 1.0));
        let p = lines_intersection(l1, l2);
        assert!((p.x - 3.0).abs() < EPS);
        assert!(p.y.abs() < EPS);
    }

    #[test]
    fn intersection_of_diagonals() {
        let l1 = Line::through(Point::new(0.0, 0.0), Point::new(4.0, 4.0));
        let l2 = Line::through(Point::new(0.0, 4.0), Point::new(4.0, 0.0));
        let p = lines_intersection(l1, l2);
        assert!((p.x - 2.0).abs() < EPS);
        assert!((p.y - 2.0).abs() < EPS);
    }

    #[test]
    fn intersection_with_normal_form_line() {
        let edge = Line::through(Point::new(0.0, 10.0), Point::new(0.0, 0.0));
        let sweep = Line::from_normal(Vector::new(0.0, 5.0), Point::new(0.0, 5.0));
        let p = lines_intersection(edge, sweep);
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 5.0);
    }

    #[test]
    fn parallel_intersection_is_not_finite() {
        // Skipping the parallel check is a precondition violation: no panic,
        // no sentinel, just a numerically meaningless point.
        let l1 = Line::through(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        let l2 = Line::through(Point::new(0.0, 1.0), Point::new(10.0, 1.0));
        let p = lines_intersection(l1, l2);
        assert!(!p.x.is_finite() || !p.y.is_finite());
    }

    #[test]
    fn near_parallel_intersection_is_extreme() {
        let l1 = Line::through(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        let l2 = Line::through(Point::new(0.0, 1.0), Point::new(1.0, 1.0 + 1e-12));
        assert!(lines_same_or_parallel(l1, l2));
        let p = lines_intersection(l1, l2);
        assert!(!p.x.is_finite() || p.x.abs() > 1e9);
    }

    #[test]
    fn interior_point_is_in_segment() {
        let s = seg(0.0, 0.0, 10.0, 0.0);
        assert!(is_in_segment(Point::new(5.0, 0.0), &s));
        assert!(is_in_segment(Point::new(0.001, 0.0), &s));
    }

    #[test]
    fn endpoints_are_not_in_segment() {
        let s = seg(0.0, 0.0, 10.0, 5.0);
        assert!(!is_in_segment(s.a(), &s));
        assert!(!is_in_segment(s.b(), &s));
    }

    #[test]
    fn collinear_point_outside_is_rejected() {
        let s = seg(0.0, 0.0, 10.0, 0.0);
        assert!(!is_in_segment(Point::new(-1.0, 0.0), &s));
        assert!(!is_in_segment(Point::new(11.0, 0.0), &s));
    }

    #[test]
    fn off_line_point_is_rejected() {
        let s = seg(0.0, 0.0, 10.0, 0.0);
        assert!(!is_in_segment(Point::new(5.0, 0.001), &s));
    }

    #[test]
    fn direction_does_not_matter() {
        let forward = seg(0.0, 0.0, 10.0, 10.0);
        let backward = seg(10.0, 10.0, 0.0, 0.0);
        let p = Point::new(4.0, 4.0);
        assert!(is_in_segment(p, &forward));
        assert!(is_in_segment(p, &backward));
    }
}
