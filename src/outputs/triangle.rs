use std::fmt;

use crate::{Coordinate, Edge, Point, Winding, math};

/// A triangle listed in the winding of the polygon it was cut from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle<C> {
    pub a: Point<C>,
    pub b: Point<C>,
    pub c: Point<C>,
}

impl<C: Coordinate> Triangle<C> {
    pub fn new(a: Point<C>, b: Point<C>, c: Point<C>) -> Self {
        Self { a, b, c }
    }

    /// Twice the signed area, positive when counterclockwise
    pub fn area2(&self) -> C {
        math::area2(self.a, self.b, self.c)
    }

    pub fn winding(&self) -> Option<Winding> {
        let area2 = self.area2();
        if area2 > C::zero() {
            Some(Winding::Counterclockwise)
        } else if area2.is_zero() {
            None
        } else {
            Some(Winding::Clockwise)
        }
    }

    pub fn points(&self) -> [Point<C>; 3] {
        [self.a, self.b, self.c]
    }

    pub fn edges(&self) -> [Edge<Point<C>>; 3] {
        [Edge::new(self.a, self.b), Edge::new(self.b, self.c), Edge::new(self.c, self.a)]
    }
}

impl<C: Coordinate> fmt::Display for Triangle<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.a, self.b, self.c)
    }
}
