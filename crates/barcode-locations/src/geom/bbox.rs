use std::cmp::Ordering;

use super::types::{Coord, Point, Rect};
use super::GeomError;

/// Smallest axis-aligned rectangle enclosing `locations`.
///
/// Pre: `locations` yields at least one point.
/// Post: `left = min x`, `top = min y`, `width = max x - left`, `height = max y - top`.
///
/// Single fused pass; an empty input returns `GeomError::EmptyPointSet` before
/// any partial result is formed. A width or height that does not fit in `T`
/// returns `GeomError::ExtentOverflow`.
pub fn bounding_box<T, I, P>(locations: I) -> Result<Rect<T>, GeomError>
where
    T: Coord,
    I: IntoIterator<Item = P>,
    P: Into<Point<T>>,
{
    let mut it = locations.into_iter().map(Into::into);
    let first = it.next().ok_or(GeomError::EmptyPointSet)?;
    let (mut x_min, mut x_max) = (first.x, first.x);
    let (mut y_min, mut y_max) = (first.y, first.y);
    for p in it {
        if p.x.cmp_total(&x_min) == Ordering::Less {
            x_min = p.x;
        }
        if p.x.cmp_total(&x_max) == Ordering::Greater {
            x_max = p.x;
        }
        if p.y.cmp_total(&y_min) == Ordering::Less {
            y_min = p.y;
        }
        if p.y.cmp_total(&y_max) == Ordering::Greater {
            y_max = p.y;
        }
    }
    let width = T::checked_span(x_min, x_max).ok_or(GeomError::ExtentOverflow)?;
    let height = T::checked_span(y_min, y_max).ok_or(GeomError::ExtentOverflow)?;
    Ok(Rect {
        left: x_min,
        top: y_min,
        width,
        height,
    })
}
