//! Core geometry types for quadhatch.
//!
//! Everything here is a small `Copy` value. Nothing is shared, nothing is
//! mutated behind your back, and no operation can fail.
//!
//! ## Rust Lesson #1: Operator Overloading
//!
//! In JS, `p + v` on two objects gives you `"[object Object][object Object]"`.
//! In Rust, you opt in by implementing traits from `std::ops`:
//! - `Add<Vector> for Point` = `point + vector`
//! - `Mul<f64> for Vector` = `vector * 2.0`
//! - `Sub for Point` = `p2 - p1` gives the displacement (a Vector)
//!
//! The compiler picks the right impl from the operand types, so a
//! `Point + Point` simply doesn't compile. That's a bug caught for free.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Tolerance for every "is this zero?" floating-point comparison.
pub const EPS: f64 = 1e-7;

/// A location in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A displacement in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

/// A line in general form: `a*x + b*y + c = 0`.
///
/// `(a, b)` is never `(0, 0)` as long as the line is built through two
/// distinct points or from a non-zero normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// A segment between two endpoints, carrying the line through them.
///
/// Fields are private so the line can never drift from the endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    a: Point,
    b: Point,
    line: Line,
}

/// Four corners of a convex quadrilateral, in cyclic order (either winding).
///
/// Convexity is assumed, never checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub points: [Point; 4],
}

// ============================================================================
// IMPLEMENTATIONS
// ============================================================================

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Vector {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vector pointing from `from` to `to`.
    #[inline]
    pub fn between(from: Point, to: Point) -> Self {
        Self::new(to.x - from.x, to.y - from.y)
    }
}

impl Line {
    /// Line through two distinct points.
    #[inline]
    pub fn through(p1: Point, p2: Point) -> Self {
        Self {
            a: p1.y - p2.y,
            b: p2.x - p1.x,
            c: p1.x * p2.y - p2.x * p1.y,
        }
    }

    /// Line with normal `norm` passing through `p`.
    #[inline]
    pub fn from_normal(norm: Vector, p: Point) -> Self {
        Self {
            a: norm.x,
            b: norm.y,
            c: -norm.x * p.x - norm.y * p.y,
        }
    }
}

impl Segment {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b, line: Line::through(a, b) }
    }

    /// First endpoint.
    #[inline]
    pub fn a(&self) -> Point {
        self.a
    }

    /// Second endpoint.
    #[inline]
    pub fn b(&self) -> Point {
        self.b
    }

    /// Supporting line through both endpoints.
    #[inline]
    pub fn line(&self) -> Line {
        self.line
    }
}

impl Rectangle {
    pub fn new(points: [Point; 4]) -> Self {
        Self { points }
    }

    /// The first corner; hatching starts here.
    #[inline]
    pub fn first(&self) -> Point {
        self.points[0]
    }

    /// The four boundary segments.
    ///
    /// Order is fixed: the closing edge (last corner -> first corner) comes
    /// first, then the three consecutive-pair edges.
    ///
    /// ## Rust Lesson #2: Fixed-Size Arrays
    ///
    /// `[Segment; 4]` lives on the stack and its length is part of the type.
    /// Callers can't be handed three segments by mistake, and there's no
    /// heap allocation like there would be with `Vec<Segment>`.
    pub fn to_segments(&self) -> [Segment; 4] {
        let [p0, p1, p2, p3] = self.points;
        [
            Segment::new(p3, p0),
            Segment::new(p0, p1),
            Segment::new(p1, p2),
            Segment::new(p2, p3),
        ]
    }
}

// ============================================================================
// OPERATORS
// ============================================================================

impl Add<Vector> for Point {
    type Output = Point;

    #[inline]
    fn add(self, v: Vector) -> Point {
        Point::new(self.x + v.x, self.y + v.y)
    }
}

impl Sub for Point {
    type Output = Vector;

    /// `to - from` is the vector from `from` to `to`.
    #[inline]
    fn sub(self, from: Point) -> Vector {
        Vector::between(from, self)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    #[inline]
    fn mul(self, c: f64) -> Vector {
        Vector::new(self.x * c, self.y * c)
    }
}

impl Neg for Vector {
    type Output = Vector;

    #[inline]
    fn neg(self) -> Vector {
        self * -1.0
    }
}

// ============================================================================
// FREE FUNCTIONS
// ============================================================================

/// 2D cross product: `v1.x * v2.y - v1.y * v2.x`.
#[inline]
pub fn cross_product(v1: Vector, v2: Vector) -> f64 {
    v1.x * v2.y - v1.y * v2.x
}

#[inline]
pub fn dot_product(v1: Vector, v2: Vector) -> f64 {
    v1.x * v2.x + v1.y * v2.y
}

/// Squared distance. Use this when you only compare distances.
#[inline]
pub fn distance2(p1: Point, p2: Point) -> f64 {
    (p1.x - p2.x) * (p1.x - p2.x) + (p1.y - p2.y) * (p1.y - p2.y)
}

/// Normal vector `(a, b)` of `a*x + b*y + c = 0`.
#[inline]
pub fn norm_of(l: Line) -> Vector {
    Vector::new(l.a, l.b)
}

// ============================================================================
// DISPLAY
// ============================================================================

impl fmt::Display for Point {
    /// Formats as `(x y)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {})", self.x, self.y)
    }
}

impl fmt::Display for Segment {
    /// Formats as `(x1 y1) -> (x2 y2)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.a, self.b)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Rectangle {
        Rectangle::new([
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ])
    }

    #[test]
    fn point_plus_vector() {
        let p = Point::new(1.0, 2.0) + Vector::new(3.0, -4.0);
        assert_eq!(p, Point::new(4.0, -2.0));
    }

    #[test]
    fn vector_between_points() {
        let v = Point::new(4.0, 6.0) - Point::new(1.0, 2.0);
        assert_eq!(v, Vector::new(3.0, 4.0));
        assert_eq!(Vector::between(Point::new(1.0, 2.0), Point::new(4.0, 6.0)), v);
    }

    #[test]
    fn vector_scaling_and_negation() {
        assert_eq!(Vector::new(1.5, -2.0) * 2.0, Vector::new(3.0, -4.0));
        assert_eq!(-Vector::new(1.0, -2.0), Vector::new(-1.0, 2.0));
    }

    #[test]
    fn cross_and_dot() {
        let v1 = Vector::new(1.0, 0.0);
        let v2 = Vector::new(0.0, 1.0);
        assert_eq!(cross_product(v1, v2), 1.0);
        assert_eq!(cross_product(v2, v1), -1.0);
        assert_eq!(dot_product(v1, v2), 0.0);
        assert_eq!(dot_product(Vector::new(2.0, 3.0), Vector::new(4.0, 5.0)), 23.0);
    }

    #[test]
    fn squared_distance() {
        assert_eq!(distance2(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 25.0);
    }

    #[test]
    fn line_through_points_contains_them() {
        let p1 = Point::new(1.0, 2.0);
        let p2 = Point::new(5.0, -3.0);
        let l = Line::through(p1, p2);
        for p in [p1, p2] {
            assert!((l.a * p.x + l.b * p.y + l.c).abs() < EPS);
        }
        assert!(l.a != 0.0 || l.b != 0.0);
    }

    #[test]
    fn line_from_normal() {
        // y = 5 with normal pointing up
        let l = Line::from_normal(Vector::new(0.0, 5.0), Point::new(3.0, 5.0));
        assert_eq!(norm_of(l), Vector::new(0.0, 5.0));
        assert!((l.a * 100.0 + l.b * 5.0 + l.c).abs() < EPS);
    }

    #[test]
    fn segment_keeps_line_in_sync() {
        let s = Segment::new(Point::new(0.0, 0.0), Point::new(2.0, 2.0));
        assert_eq!(s.line(), Line::through(s.a(), s.b()));
    }

    #[test]
    fn rectangle_segments_order() {
        let segs = square().to_segments();
        let ends: Vec<_> = segs.iter().map(|s| (s.a(), s.b())).collect();
        assert_eq!(
            ends,
            vec![
                (Point::new(0.0, 10.0), Point::new(0.0, 0.0)),
                (Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
                (Point::new(10.0, 0.0), Point::new(10.0, 10.0)),
                (Point::new(10.0, 10.0), Point::new(0.0, 10.0)),
            ]
        );
    }

    #[test]
    fn display_format() {
        let s = Segment::new(Point::new(0.5, 5.0), Point::new(10.0, -2.25));
        assert_eq!(s.to_string(), "(0.5 5) -> (10 -2.25)");
    }
}
