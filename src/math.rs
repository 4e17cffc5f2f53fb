//! Exact orientation, containment and intersection predicates.
//!
//! Every predicate is phrased on the sign of [area2], with no tolerance. With integer coordinates all results are
//! exact; with floating point coordinates they are only as good as the arithmetic.

use std::cmp::Ordering;


use crate::{Coordinate, Point};

/// Twice the signed area of triangle `abc`: positive for a left (counterclockwise) turn, zero when collinear,
/// negative for a right turn
#[inline(always)]
pub fn area2<C: Coordinate>(a: Point<C>, b: Point<C>, c: Point<C>) -> C {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// `c` lies strictly left of the directed line `a -> b`
#[inline(always)]
pub fn is_left<C: Coordinate>(a: Point<C>, b: Point<C>, c: Point<C>) -> bool {
    area2(a, b, c) > C::zero()
}

#[inline(always)]
pub fn is_left_or_on<C: Coordinate>(a: Point<C>, b: Point<C>, c: Point<C>) -> bool {
    area2(a, b, c) >= C::zero()
}

#[inline(always)]
pub fn collinear<C: Coordinate>(a: Point<C>, b: Point<C>, c: Point<C>) -> bool {
    area2(a, b, c).is_zero()
}

/// `c` lies on the closed segment `ab`
pub fn between<C: Coordinate>(a: Point<C>, b: Point<C>, c: Point<C>) -> bool {
    if !collinear(a, b, c) {
        return false;
    }

    // A vertical segment is ranged on y, anything else on x
    if a.x != b.x {
        (a.x <= c.x && c.x <= b.x) || (a.x >= c.x && c.x >= b.x)
    } else {
        (a.y <= c.y && c.y <= b.y) || (a.y >= c.y && c.y >= b.y)
    }
}

/// Segments `ab` and `cd` cross at a single point interior to both
pub fn intersects_properly<C: Coordinate>(a: Point<C>, b: Point<C>, c: Point<C>, d: Point<C>) -> bool {
    if collinear(a, b, c) || collinear(a, b, d) || collinear(c, d, a) || collinear(c, d, b) {
        return false;
    }

    is_left(a, b, c) != is_left(a, b, d) && is_left(c, d, a) != is_left(c, d, b)
}

/// Segments `ab` and `cd` share at least one point
pub fn intersects<C: Coordinate>(a: Point<C>, b: Point<C>, c: Point<C>, d: Point<C>) -> bool {
    intersects_properly(a, b, c, d)
        || between(a, b, c)
        || between(a, b, d)
        || between(c, d, a)
        || between(c, d, b)
}

#[inline(always)]
pub fn angle_is_convex<C: Coordinate>(a: Point<C>, b: Point<C>, c: Point<C>) -> bool {
    is_left_or_on(a, b, c)
}

/// `x` lies strictly inside the wedge with apex `b`, sweeping counterclockwise from ray `b -> c` to ray `b -> a`.
///
/// For a counterclockwise ring with `a = prev`, `b = vertex`, `c = next` this is the interior angle at `b`.
pub fn in_angle<C: Coordinate>(a: Point<C>, b: Point<C>, c: Point<C>, x: Point<C>) -> bool {
    if angle_is_convex(a, b, c) {
        is_left(b, x, a) && is_left(x, b, c)
    } else {
        !(is_left_or_on(b, x, c) && is_left_or_on(x, b, a))
    }
}

/// The order a horizontal line sweeping downward meets points: higher `y` first, and on equal `y` smaller `x`
/// first. [Ordering::Less] means `a` is met before `b`.
pub fn sweep_order<C: Coordinate>(a: Point<C>, b: Point<C>) -> Ordering {
    match b.y.partial_cmp(&a.y) {
        Some(Ordering::Equal) | None => a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal),
        Some(ord) => ord,
    }
}

/// `a` is strictly above `b` in [sweep_order]
#[inline(always)]
pub fn is_above<C: Coordinate>(a: Point<C>, b: Point<C>) -> bool {
    sweep_order(a, b) == Ordering::Less
}
