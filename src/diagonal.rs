use crate::{Coordinate, Polygon, VertexId, Winding, math};

/// The vertices which bound the interior angle at `v`, ordered as they would be in a counterclockwise ring
#[inline(always)]
pub(crate) fn ccw_neighbours<C: Coordinate>(polygon: &Polygon<C>, winding: Winding, v: VertexId) -> (VertexId, VertexId) {
    let vertex = polygon.vertex(v);
    match winding {
        Winding::Counterclockwise => (vertex.prev, vertex.next),
        Winding::Clockwise => (vertex.next, vertex.prev),
    }
}

/// `b` lies strictly inside the interior angle at `a`
pub(crate) fn in_cone<C: Coordinate>(polygon: &Polygon<C>, winding: Winding, a: VertexId, b: VertexId) -> bool {
    let (before, after) = ccw_neighbours(polygon, winding, a);
    math::in_angle(polygon.point(before), polygon.point(a), polygon.point(after), polygon.point(b))
}

/// No boundary edge other than those touching `a` or `b` meets the segment `ab`
pub(crate) fn crosses_no_edge<C: Coordinate>(polygon: &Polygon<C>, a: VertexId, b: VertexId) -> bool {
    let (pa, pb) = (polygon.point(a), polygon.point(b));
    polygon.iter().all(|c| {
        c.id == a || c.id == b || c.next == a || c.next == b
            || !math::intersects(pa, pb, c.point, polygon.point(c.next))
    })
}

pub(crate) fn is_diagonal<C: Coordinate>(polygon: &Polygon<C>, winding: Winding, a: VertexId, b: VertexId) -> bool {
    a != b
        && in_cone(polygon, winding, a, b)
        && in_cone(polygon, winding, b, a)
        && crosses_no_edge(polygon, a, b)
}

impl<C: Coordinate> Polygon<C> {
    /// Whether the chord between `a` and `b` lies strictly inside the polygon, touching the boundary only at its
    /// endpoints. Symmetric in `a` and `b`, and false for the ring's own edges.
    ///
    /// # Panics
    /// If either id does not refer to a vertex of this ring
    pub fn is_diagonal(&self, a: VertexId, b: VertexId) -> bool {
        is_diagonal(self, self.winding(), a, b)
    }

    /// Whether `b` lies strictly inside the interior angle at `a`
    pub fn in_cone(&self, a: VertexId, b: VertexId) -> bool {
        in_cone(self, self.winding(), a, b)
    }
}
