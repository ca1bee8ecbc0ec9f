//! Locator geometry: convex hull and bounding box of decoder scan points.
//!
//! Purpose
//! - Turn the raw scan-line intersection points a barcode decoder reports for
//!   one symbol into a minimal polygon (`convex_hull`) and an axis-aligned box
//!   (`bounding_box`).
//! - Both routines are pure leaves: no I/O, no shared state, safe to call from
//!   any thread on independent inputs.
//!
//! Conventions
//! - Image coordinates: origin top-left, y grows downward.
//! - `Point` order is lexicographic (x, then y). It is the hull's sort key and
//!   fixes the hull's first vertex.
//! - The typical pipeline bounds the hull, not the raw points; the two results
//!   coincide because the hull keeps every extreme coordinate.
//!
//! Code cross-refs: `Coord`, `Point`, `Rect`, `Polygon`, `crate::locate`

mod bbox;
mod hull;
mod types;

pub use bbox::bounding_box;
pub use hull::convex_hull;
pub use types::{Coord, Point, Polygon, Rect};

/// Errors surfaced by the geometry routines.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeomError {
    /// `bounding_box` needs at least one point.
    #[error("bounding box of an empty point set is undefined")]
    EmptyPointSet,
    /// Width or height exceeds the range of the coordinate type.
    #[error("bounding box extent overflows the coordinate type")]
    ExtentOverflow,
}
