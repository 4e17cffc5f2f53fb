use std::{fmt, ops};

use num_traits::{Num, ToPrimitive};

/// A numeric type usable as a [Point] coordinate.
///
/// Integer coordinates make every predicate in the crate exact. Floating point coordinates are accepted as-is;
/// use [ordered_float::OrderedFloat] (reexported as [crate::OrderedFloat]) when points need to be hashed.
pub trait Coordinate: Num + Copy + PartialOrd + ToPrimitive + fmt::Debug { }

impl<T: Num + Copy + PartialOrd + ToPrimitive + fmt::Debug> Coordinate for T { }

/// A two-dimensional point
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point<C> {
    pub x: C,
    pub y: C,
}

impl<C: Coordinate> Point<C> {
    pub fn new(x: C, y: C) -> Self {
        Self { x, y }
    }

    #[inline(always)]
    pub fn x(&self) -> C { self.x }

    #[inline(always)]
    pub fn y(&self) -> C { self.y }

    /// The z component of the cross product of `self` and `other` taken as vectors from the origin
    #[inline(always)]
    pub fn cross(&self, other: &Self) -> C {
        self.x * other.y - self.y * other.x
    }

    #[inline(always)]
    pub fn dot(&self, other: &Self) -> C {
        self.x * other.x + self.y * other.y
    }

    pub fn distance_squared(&self, other: &Self) -> C {
        let d = *other - *self;
        d.dot(&d)
    }

    /// Both coordinates compare equal to themselves (i.e. neither is NaN)
    pub(crate) fn is_ordered(&self) -> bool {
        #[allow(clippy::eq_op)]
        let ordered = self.x == self.x && self.y == self.y;
        ordered
    }

    pub fn to_f64(&self) -> Option<(f64, f64)> {
        Some((self.x.to_f64()?, self.y.to_f64()?))
    }
}

impl<C: Coordinate> ops::Add for Point<C> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<C: Coordinate> ops::Sub for Point<C> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<C: Coordinate> ops::Mul<C> for Point<C> {
    type Output = Self;

    fn mul(self, rhs: C) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl<C: Coordinate + ops::Neg<Output = C>> ops::Neg for Point<C> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}

impl<C: Coordinate> fmt::Display for Point<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some((x, y)) = self.to_f64() {
            write!(f, "({}, {})", x, y)
        } else {
            write!(f, "Point<{}>", std::any::type_name::<C>())
        }
    }
}

impl<C> From<(C, C)> for Point<C> {
    #[inline(always)]
    fn from((x, y): (C, C)) -> Self {
        Self { x, y }
    }
}

impl<C> From<[C; 2]> for Point<C> {
    #[inline(always)]
    fn from([x, y]: [C; 2]) -> Self {
        Self { x, y }
    }
}

impl<C> From<Point<C>> for (C, C) {
    fn from(p: Point<C>) -> Self {
        (p.x, p.y)
    }
}
