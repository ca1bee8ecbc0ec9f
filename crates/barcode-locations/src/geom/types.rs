//! Value types shared by the hull and bounding-box routines.
//!
//! - `Coord`: numeric contract for coordinates (total order + widened turn test).
//! - `Point`: immutable `(x, y)`, ordered lexicographically (x first, then y).
//! - `Rect`: axis-aligned box `(left, top, width, height)` in image pixels.
//! - `Polygon`: ordered vertices, implicitly closed (no repeated first vertex).
//!
//! Coordinates follow the image convention: origin top-left, y grows downward.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Sub;

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Numeric coordinate usable by `convex_hull` and `bounding_box`.
///
/// Implemented for the signed integers a decoder reports (`i16`, `i32`, `i64`)
/// and for `f32`/`f64`. Unsigned types are not implemented: the turn test
/// needs signed differences.
pub trait Coord: Copy + PartialEq + PartialOrd + fmt::Debug + Sub<Output = Self> + 'static {
    /// Total order used for sorting. Integers use `Ord`; floats use IEEE
    /// `total_cmp` with `-0.0` and `0.0` ranked equal, matching `==`.
    fn cmp_total(&self, other: &Self) -> Ordering;

    /// Representative of this value's `==` class (floats: `-0.0` becomes `0.0`).
    fn canonical(self) -> Self;

    /// `hi - lo`, or `None` if the difference does not fit in `Self`.
    fn checked_span(lo: Self, hi: Self) -> Option<Self>;

    /// `base + extent`, or `None` if the sum does not fit in `Self`.
    fn checked_offset(base: Self, extent: Self) -> Option<Self>;

    /// Sign of the cross product `(p1 - p0) x (p2 - p0)`.
    ///
    /// `Greater` is a left turn in math orientation, `Less` a right turn,
    /// `Equal` collinear. Evaluated in a wider type: exact for every `i16`
    /// and `i32` input, and for `i64` coordinates within `±2^62`.
    fn turn(p0: Point<Self>, p1: Point<Self>, p2: Point<Self>) -> Ordering;
}

macro_rules! impl_coord_int {
    ($($t:ty => $wide:ty),* $(,)?) => {$(
        impl Coord for $t {
            #[inline]
            fn cmp_total(&self, other: &Self) -> Ordering {
                Ord::cmp(self, other)
            }
            #[inline]
            fn canonical(self) -> Self {
                self
            }
            #[inline]
            fn checked_span(lo: Self, hi: Self) -> Option<Self> {
                hi.checked_sub(lo)
            }
            #[inline]
            fn checked_offset(base: Self, extent: Self) -> Option<Self> {
                base.checked_add(extent)
            }
            #[inline]
            fn turn(p0: Point<Self>, p1: Point<Self>, p2: Point<Self>) -> Ordering {
                let (x0, y0) = (p0.x as $wide, p0.y as $wide);
                let cross = (p1.x as $wide - x0) * (p2.y as $wide - y0)
                    - (p1.y as $wide - y0) * (p2.x as $wide - x0);
                cross.cmp(&0)
            }
        }
    )*};
}

macro_rules! impl_coord_float {
    ($($t:ty => $wide:ty),* $(,)?) => {$(
        impl Coord for $t {
            #[inline]
            fn cmp_total(&self, other: &Self) -> Ordering {
                (*self + 0.0).total_cmp(&(*other + 0.0))
            }
            #[inline]
            fn canonical(self) -> Self {
                self + 0.0
            }
            #[inline]
            fn checked_span(lo: Self, hi: Self) -> Option<Self> {
                Some(hi - lo)
            }
            #[inline]
            fn checked_offset(base: Self, extent: Self) -> Option<Self> {
                Some(base + extent)
            }
            #[inline]
            fn turn(p0: Point<Self>, p1: Point<Self>, p2: Point<Self>) -> Ordering {
                let (x0, y0) = (p0.x as $wide, p0.y as $wide);
                let cross = (p1.x as $wide - x0) * (p2.y as $wide - y0)
                    - (p1.y as $wide - y0) * (p2.x as $wide - x0);
                // NaN compares as collinear; it never survives as a strict turn.
                cross.partial_cmp(&0.0).unwrap_or(Ordering::Equal)
            }
        }
    )*};
}

impl_coord_int!(i16 => i32, i32 => i64, i64 => i128);
impl_coord_float!(f32 => f64, f64 => f64);

/// Immutable 2D point in image coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T: Coord> Point<T> {
    /// Point at `(x, y)`; no normalisation is applied.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Lexicographic order: `x` first, ties broken by `y`.
    ///
    /// This is the sort key of `convex_hull` and decides its starting vertex.
    #[inline]
    pub fn lex_cmp(&self, other: &Self) -> Ordering {
        self.x
            .cmp_total(&other.x)
            .then_with(|| self.y.cmp_total(&other.y))
    }

    /// Same point with each coordinate replaced by its `Coord::canonical` form.
    #[inline]
    pub fn canonical(self) -> Self {
        Self {
            x: self.x.canonical(),
            y: self.y.canonical(),
        }
    }
}

impl<T: Coord + Eq> Eq for Point<T> {}

impl<T: Coord + Eq + Hash> Hash for Point<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}

impl<T: Coord + Ord> PartialOrd for Point<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Coord + Ord> Ord for Point<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.lex_cmp(other)
    }
}

impl<T: Coord> From<(T, T)> for Point<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T: Coord> From<Point<T>> for (T, T) {
    #[inline]
    fn from(p: Point<T>) -> Self {
        (p.x, p.y)
    }
}

impl<T: Coord> From<&Point<T>> for Point<T> {
    #[inline]
    fn from(p: &Point<T>) -> Self {
        *p
    }
}

impl<T: Coord> From<Point2<T>> for Point<T> {
    #[inline]
    fn from(p: Point2<T>) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl<T: Coord> From<Point<T>> for Point2<T> {
    #[inline]
    fn from(p: Point<T>) -> Self {
        Point2::new(p.x, p.y)
    }
}

impl<T: fmt::Display> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned bounding box in image pixels.
///
/// Invariant: `width >= 0` and `height >= 0`; a single point has zero extent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect<T> {
    pub left: T,
    pub top: T,
    pub width: T,
    pub height: T,
}

impl<T: Coord> Rect<T> {
    /// `left + width`, or `None` if it overflows `T`.
    #[inline]
    pub fn right(&self) -> Option<T> {
        T::checked_offset(self.left, self.width)
    }

    /// `top + height`, or `None` if it overflows `T`.
    #[inline]
    pub fn bottom(&self) -> Option<T> {
        T::checked_offset(self.top, self.height)
    }

    /// Closed containment: points on the border are inside.
    pub fn contains(&self, p: Point<T>) -> bool {
        let within = |lo: T, extent: T, v: T| {
            lo <= v && T::checked_span(lo, v).is_some_and(|d| d <= extent)
        };
        within(self.left, self.width, p.x) && within(self.top, self.height, p.y)
    }
}

/// Ordered vertex loop; the edge from the last vertex back to the first is implicit.
pub type Polygon<T> = Vec<Point<T>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lex_order_x_then_y() {
        let a = Point::new(1, 5);
        let b = Point::new(2, 0);
        let c = Point::new(1, 7);
        assert!(a < b);
        assert!(a < c);
        assert!(c < b);
        let mut v = vec![b, c, a];
        v.sort();
        assert_eq!(v, vec![a, c, b]);
    }

    #[test]
    fn float_total_order_is_lexicographic() {
        let a = Point::new(0.6, 5.1);
        let b = Point::new(0.6, -1.0);
        assert_eq!(a.lex_cmp(&b), Ordering::Greater);
        assert_eq!(b.lex_cmp(&Point::new(2.1, -9.0)), Ordering::Less);
    }

    #[test]
    fn turn_sign_and_wide_arithmetic() {
        let o = Point::new(0, 0);
        assert_eq!(i32::turn(o, Point::new(1, 0), Point::new(0, 1)), Ordering::Greater);
        assert_eq!(i32::turn(o, Point::new(0, 1), Point::new(1, 0)), Ordering::Less);
        assert_eq!(i32::turn(o, Point::new(1, 1), Point::new(3, 3)), Ordering::Equal);
        // Products exceed i32 range; widened evaluation keeps the sign right.
        let big = 1_000_000;
        assert_eq!(
            i32::turn(o, Point::new(big, 0), Point::new(0, big)),
            Ordering::Greater
        );
    }

    #[test]
    fn conversions_round_trip_through_nalgebra() {
        let p = Point::new(3.5, -2.0);
        let q: Point2<f64> = p.into();
        assert_eq!(q, Point2::new(3.5, -2.0));
        assert_eq!(Point::from(q), p);
        let t: (f64, f64) = p.into();
        assert_eq!(t, (3.5, -2.0));
    }

    #[test]
    fn rect_extents_and_containment() {
        let r: Rect<i32> = Rect {
            left: 37,
            top: 550,
            width: 324,
            height: 76,
        };
        assert_eq!(r.right(), Some(361));
        assert_eq!(r.bottom(), Some(626));
        assert!(r.contains(Point::new(37, 550)));
        assert!(r.contains(Point::new(361, 626)));
        assert!(!r.contains(Point::new(36, 600)));
    }

    #[test]
    fn signed_zero_ranks_equal_to_zero() {
        assert_eq!((-0.0f64).cmp_total(&0.0), Ordering::Equal);
        assert_eq!((-0.0f32).cmp_total(&0.0), Ordering::Equal);
        assert_eq!((-1.0f64).cmp_total(&-0.0), Ordering::Less);
        let p = Point::new(-0.0f64, 5.0).canonical();
        assert_eq!(p.x.to_bits(), 0.0f64.to_bits());
        assert_eq!(Point::new(-0.0, 5.0).lex_cmp(&Point::new(0.0, 3.0)), Ordering::Greater);
    }

    #[test]
    fn nan_turn_counts_as_collinear() {
        let o = Point::new(0.0, 0.0);
        assert_eq!(f64::turn(o, Point::new(f64::NAN, 1.0), Point::new(1.0, 0.0)), Ordering::Equal);
    }

    #[test]
    fn i64_turn_is_exact_near_documented_bound() {
        let big = 1i64 << 61;
        let o = Point::new(-big, -big);
        assert_eq!(i64::turn(o, Point::new(big, -big), Point::new(-big, big)), Ordering::Greater);
        assert_eq!(i64::turn(o, Point::new(big, big), Point::new(0, 0)), Ordering::Equal);
    }

    #[test]
    fn checked_extents_report_overflow() {
        assert_eq!(i32::checked_span(i32::MIN, i32::MAX), None);
        assert_eq!(i32::checked_span(-5, 7), Some(12));
        assert_eq!(f64::checked_span(-1.5, 2.0), Some(3.5));
        let r: Rect<i32> = Rect {
            left: i32::MAX - 1,
            top: 0,
            width: 10,
            height: 0,
        };
        assert_eq!(r.right(), None);
        assert_eq!(r.bottom(), Some(0));
        assert!(r.contains(Point::new(i32::MAX, 0)));
        assert!(!r.contains(Point::new(i32::MIN, 0)));
    }
}
