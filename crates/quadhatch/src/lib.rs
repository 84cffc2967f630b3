//! # quadhatch
//!
//! Parallel hatch lines clipped to a convex quadrilateral, at a given angle
//! and spacing, plus an SVG writer to look at the result.
//!
//! ```
//! use quadhatch::{Point, Rectangle, generate_hatch};
//!
//! let square = Rectangle::new([
//!     Point::new(0.0, 0.0),
//!     Point::new(10.0, 0.0),
//!     Point::new(10.0, 10.0),
//!     Point::new(0.0, 10.0),
//! ]);
//! let hatch = generate_hatch(&square, 0.0, 5.0);
//! assert_eq!(hatch.len(), 1);
//! ```

pub mod geometry;
pub mod hatch;
pub mod intersect;
pub mod svg;

// Re-export common types at crate root for convenience.
pub use geometry::{EPS, Line, Point, Rectangle, Segment, Vector};
pub use hatch::{generate_crosshatch, generate_hatch};
pub use intersect::{is_in_segment, lines_intersection, lines_same_or_parallel};
pub use svg::{LineFormat, SvgError, SvgWriter};
