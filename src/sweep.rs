use std::{cmp::Ordering, fmt};

use zot::Ot;

use crate::{Coordinate, Polygon, TriangulationError, VertexId, VertexType, math};

/// The vertex which most recently updated an interior region, and how that vertex was classified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Support {
    pub vertex: VertexId,
    pub kind: VertexType,
}

impl Support {
    pub fn new(vertex: VertexId, kind: VertexType) -> Self {
        Self { vertex, kind }
    }
}

impl fmt::Display for Support {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.vertex, self.kind)
    }
}

/// A boundary edge currently crossed by the sweep line. `upper` precedes `lower` in [math::sweep_order].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveEdge {
    pub upper: VertexId,
    pub lower: VertexId,
    /// The support of the interior region this edge bounds
    pub support: Support,
}

impl ActiveEdge {
    fn is_incident(&self, v: VertexId) -> bool {
        self.upper == v || self.lower == v
    }
}

/// The boundary edges crossing a horizontal sweep line, ordered left to right.
///
/// Entries `2k` and `2k + 1` are the left and right bounds of the `k`-th interior region the line crosses. Both
/// entries of a region carry that region's [Support].
pub struct LineSweepStatus<'p, C> {
    polygon: &'p Polygon<C>,
    edges: Vec<ActiveEdge>,
    sweep_y: C,
}

impl<'p, C: Coordinate> LineSweepStatus<'p, C> {
    pub fn new(polygon: &'p Polygon<C>) -> Self {
        Self {
            polygon,
            edges: Vec::new(),
            sweep_y: C::zero(),
        }
    }

    pub fn set_sweep_height(&mut self, y: C) {
        self.sweep_y = y;
    }

    pub fn sweep_height(&self) -> C {
        self.sweep_y
    }

    pub fn edges(&self) -> &[ActiveEdge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Where `edge` crosses the sweep line, for diagnostics. `None` if the sweep line does not reach the edge.
    /// A horizontal edge is reported at its left endpoint.
    pub fn x_intercept(&self, edge: &ActiveEdge) -> Option<f64> {
        let (u, l) = (self.polygon.point(edge.upper), self.polygon.point(edge.lower));
        let y = self.sweep_y;
        if y > u.y || y < l.y {
            return None;
        }
        if u.y == l.y {
            return u.x.to_f64();
        }
        let (ux, uy, lx, ly, y) = (u.x.to_f64()?, u.y.to_f64()?, l.x.to_f64()?, l.y.to_f64()?, y.to_f64()?);
        Some(ux + (uy - y) * (lx - ux) / (uy - ly))
    }

    /// Compares where `edge` crosses the sweep line with `x`, without dividing
    fn intercept_cmp(&self, edge: &ActiveEdge, x: C) -> Ordering {
        let (u, l) = (self.polygon.point(edge.upper), self.polygon.point(edge.lower));
        let dy = u.y - l.y;
        if dy.is_zero() {
            return u.x.partial_cmp(&x).unwrap_or(Ordering::Equal);
        }
        // dy > 0, so multiplying through keeps the direction of the comparison
        let lhs = u.x * dy + (u.y - self.sweep_y) * (l.x - u.x);
        let rhs = x * dy;
        lhs.partial_cmp(&rhs).unwrap_or(Ordering::Equal)
    }

    /// The number of active edges strictly left of `v`. Edges incident to `v` never count as left of it.
    fn position_of(&self, v: VertexId) -> usize {
        let x = self.polygon.point(v).x;
        self.edges.partition_point(|e| !e.is_incident(v) && self.intercept_cmp(e, x) == Ordering::Less)
    }

    fn set_region_support(&mut self, entry: usize, support: Support) {
        let left = entry & !1;
        self.edges[left].support = support;
        self.edges[left + 1].support = support;
    }

    /// Inserts both edges leaving a [Start](VertexType::Start) or [Split](VertexType::Split) vertex.
    ///
    /// Returns the support of the region the vertex lies in, which is `None` for a start vertex. A split vertex
    /// divides its region in two, and both halves are then supported by the split vertex.
    pub fn add_edges(&mut self, v: VertexId, kind: VertexType) -> Result<Option<Support>, TriangulationError> {
        let vertex = self.polygon.vertex(v);
        let (pv, pp, pn) = (vertex.point, self.polygon.point(vertex.prev), self.polygon.point(vertex.next));

        // Both neighbours are below, so the edge turning clockwise from the other is the left one
        let (left, right) = if math::area2(pv, pn, pp) < C::zero() {
            (vertex.prev, vertex.next)
        } else {
            (vertex.next, vertex.prev)
        };

        let support = Support::new(v, kind);
        let pos = self.position_of(v);
        let enclosing = match kind {
            VertexType::Start if !inside_region(pos) => None,
            VertexType::Split if inside_region(pos) => Some(self.edges[pos].support),
            _ => return Err(TriangulationError::degenerate(format!("{} vertex {} is {} a region of the sweep", kind, v, if inside_region(pos) { "inside" } else { "outside" }))),
        };

        self.edges.insert(pos, ActiveEdge { upper: v, lower: left, support });
        self.edges.insert(pos + 1, ActiveEdge { upper: v, lower: right, support });

        if kind == VertexType::Split {
            self.set_region_support(pos - 1, support);
            self.set_region_support(pos + 1, support);
        }

        Ok(enclosing)
    }

    /// Removes both edges arriving at an [End](VertexType::End) or [Merge](VertexType::Merge) vertex.
    ///
    /// An end vertex closes its region and returns that region's support. A merge vertex joins the regions on
    /// either side of it, returning the left and right supports, and the joined region is supported by the merge
    /// vertex.
    pub fn remove_edges(&mut self, v: VertexId, kind: VertexType) -> Result<Ot<Support>, TriangulationError> {
        let pos = self.position_of(v);
        if pos + 1 >= self.edges.len() || self.edges[pos].lower != v || self.edges[pos + 1].lower != v {
            return Err(TriangulationError::degenerate(format!("{} vertex {} does not end two adjacent active edges", kind, v)));
        }

        let result = match kind {
            VertexType::End if !inside_region(pos) => Ot::One(self.edges[pos].support),
            VertexType::Merge if inside_region(pos) => Ot::Two(self.edges[pos].support, self.edges[pos + 1].support),
            _ => return Err(TriangulationError::degenerate(format!("{} vertex {} closes the wrong side of a region", kind, v))),
        };

        self.edges.drain(pos..pos + 2);

        if kind == VertexType::Merge {
            self.set_region_support(pos - 1, Support::new(v, kind));
        }

        Ok(result)
    }

    /// Swaps the edge arriving at a [Regular](VertexType::Regular) vertex for the edge leaving it.
    ///
    /// Returns the support of the region bounded by the edge, which is then supported by `v`.
    pub fn replace_edge(&mut self, v: VertexId) -> Result<Support, TriangulationError> {
        let vertex = self.polygon.vertex(v);
        let (arriving, leaving) = if math::is_above(self.polygon.point(vertex.prev), vertex.point) {
            (vertex.prev, vertex.next)
        } else {
            (vertex.next, vertex.prev)
        };

        let pos = self.position_of(v);
        match self.edges.get(pos) {
            Some(e) if e.upper == arriving && e.lower == v => { },
            _ => return Err(TriangulationError::degenerate(format!("Regular vertex {} has no active edge arriving from {}", v, arriving))),
        }

        let previous = self.edges[pos].support;
        self.edges[pos].upper = v;
        self.edges[pos].lower = leaving;
        self.set_region_support(pos, Support::new(v, VertexType::Regular));
        Ok(previous)
    }
}

/// Active edges pair up as the left and right sides of interior regions, so a gap with an odd number of edges to
/// its left lies inside the polygon.
fn inside_region(pos: usize) -> bool {
    pos % 2 == 1
}

impl<'p, C: Coordinate> fmt::Debug for LineSweepStatus<'p, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.edges.iter().map(|e| (e.upper, e.lower, e.support.vertex)))
            .finish()
    }
}
