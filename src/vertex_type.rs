use std::fmt;

use crate::{Coordinate, Polygon, VertexId, Winding, diagonal::ccw_neighbours, math};

/// The role a vertex plays as a horizontal line sweeps down across the polygon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexType {
    /// Both neighbours below, interior angle convex: an interior region begins here
    Start,
    /// Both neighbours above, interior angle convex: an interior region ends here
    End,
    /// Both neighbours below, interior angle reflex: a region splits in two
    Split,
    /// Both neighbours above, interior angle reflex: two regions join
    Merge,
    /// One neighbour above and one below
    Regular,
}

impl fmt::Display for VertexType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Classifies vertices of one polygon. "Above" and "below" follow [math::sweep_order], so neighbours at the same
/// height are still strictly ordered.
pub struct VertexClassifier<'p, C> {
    polygon: &'p Polygon<C>,
    winding: Winding,
}

impl<'p, C: Coordinate> VertexClassifier<'p, C> {
    pub fn new(polygon: &'p Polygon<C>) -> Self {
        Self {
            polygon,
            winding: polygon.winding(),
        }
    }

    pub fn winding(&self) -> Winding {
        self.winding
    }

    pub fn classify(&self, v: VertexId) -> VertexType {
        let (prev, next) = ccw_neighbours(self.polygon, self.winding, v);
        let (p, c, n) = (self.polygon.point(prev), self.polygon.point(v), self.polygon.point(next));

        let prev_below = math::is_above(c, p);
        let next_below = math::is_above(c, n);
        match (prev_below, next_below) {
            (true, true) if math::is_left(p, c, n) => VertexType::Start,
            (true, true) => VertexType::Split,
            (false, false) if math::is_left(p, c, n) => VertexType::End,
            (false, false) => VertexType::Merge,
            _ => VertexType::Regular,
        }
    }
}

/// Classifies a single vertex. Prefer [VertexClassifier] when classifying many vertices of the same polygon.
pub fn classify_vertex<C: Coordinate>(polygon: &Polygon<C>, v: VertexId) -> VertexType {
    VertexClassifier::new(polygon).classify(v)
}
