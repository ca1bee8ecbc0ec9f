use std::cmp::Ordering;

use super::types::{Coord, Point, Polygon};

/// Andrew's monotone chain convex hull. O(n log n), dominated by the sort.
///
/// Returns the hull vertices in counter-clockwise (math) order, starting at
/// the lexicographically smallest point. In image coordinates (y down) the
/// same sequence runs visually clockwise; callers treat it as a fixed winding.
///
/// Policy
/// - Exact duplicates collapse to one vertex; for floats `-0.0` and `0.0` are
///   the same coordinate and come back as `0.0`.
/// - Collinear points are dropped, including on the extreme edges: a chain
///   only keeps strict clockwise turns.
/// - Fewer than two distinct points are returned as-is; an empty input gives
///   an empty hull. All-collinear input reduces to its two extremes.
pub fn convex_hull<T, I, P>(points: I) -> Polygon<T>
where
    T: Coord,
    I: IntoIterator<Item = P>,
    P: Into<Point<T>>,
{
    let mut pts: Vec<Point<T>> = points
        .into_iter()
        .map(|p| Into::<Point<T>>::into(p).canonical())
        .collect();
    pts.sort_by(|a, b| a.lex_cmp(b));
    pts.dedup();
    if pts.len() < 2 {
        return pts;
    }
    let mut hull = half_chain(pts.iter().copied());
    hull.extend(half_chain(pts.iter().rev().copied()));
    hull
}

/// One monotone chain with its final point removed (it starts the other chain).
fn half_chain<T: Coord>(points: impl ExactSizeIterator<Item = Point<T>>) -> Vec<Point<T>> {
    let mut chain: Vec<Point<T>> = Vec::with_capacity(points.len());
    for p in points {
        while chain.len() >= 2
            && T::turn(chain[chain.len() - 2], chain[chain.len() - 1], p) != Ordering::Less
        {
            chain.pop();
        }
        chain.push(p);
    }
    chain.pop();
    chain
}
