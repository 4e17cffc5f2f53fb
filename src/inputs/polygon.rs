use std::{fmt, iter, ops};

use crate::{Coordinate, Edge, InputError, Point, TriangulationError, VertexId, Winding, math};

#[derive(Debug, Clone)]
struct Slot<C> {
    point: Point<C>,
    next: usize,
    prev: usize,
    generation: u32,
    live: bool,
}

/// A snapshot of one vertex of a [Polygon] and its ring neighbours
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex<C> {
    pub id: VertexId,
    pub point: Point<C>,
    pub next: VertexId,
    pub prev: VertexId,
}

/// A closed ring of vertices.
///
/// Vertices live in an arena and are linked in both directions, so following `next` from any vertex `len()`
/// times returns to it, and `prev` always undoes `next`. The ring is assumed, but not verified, to be simple and
/// to have a single consistent winding.
#[derive(Clone)]
pub struct Polygon<C> {
    slots: Vec<Slot<C>>,
    head: usize,
    len: usize,
}

impl<C: Coordinate> Polygon<C> {
    /// Builds a ring linking the points in order, closing the last back to the first.
    ///
    /// Fails if there are fewer than 3 points, if a point equals its successor (the last point's successor is
    /// the first), or if a coordinate does not compare equal to itself.
    pub fn from_points<I, P>(points: I) -> Result<Self, TriangulationError>
    where
        I: IntoIterator<Item = P>,
        P: Into<Point<C>>,
    {
        let points: Vec<Point<C>> = points.into_iter().map(Into::into).collect();
        if points.len() < 3 {
            return Err(InputError::NotEnoughVertices(points.len()).into());
        }

        for (i, p) in points.iter().enumerate() {
            if !p.is_ordered() {
                return Err(InputError::UnorderedCoordinate(i).into());
            }
        }

        for (i, p) in points.iter().enumerate() {
            if *p == points[(i + 1) % points.len()] {
                return Err(InputError::RepeatedVertex(i).into());
            }
        }

        Ok(Self::from_points_unchecked(points))
    }

    fn from_points_unchecked(points: Vec<Point<C>>) -> Self {
        let len = points.len();
        let slots = points.into_iter()
            .enumerate()
            .map(|(i, point)| Slot {
                point,
                next: (i + 1) % len,
                prev: (i + len - 1) % len,
                generation: 0,
                live: true,
            })
            .collect();
        Self {
            slots,
            head: 0,
            len,
        }
    }

    /// Appends a vertex between the last vertex and the head, keeping the ring closed.
    ///
    /// Fails, leaving the ring unchanged, for the same points [from_points](Self::from_points) rejects: one with an
    /// unordered coordinate, or one equal to the last vertex or the head.
    pub fn add(&mut self, point: impl Into<Point<C>>) -> Result<VertexId, TriangulationError> {
        let point = point.into();
        let position = self.len;
        if !point.is_ordered() {
            return Err(InputError::UnorderedCoordinate(position).into());
        }

        let tail = self.slots[self.head].prev;
        if point == self.slots[tail].point {
            return Err(InputError::RepeatedVertex(position - 1).into());
        }
        if point == self.slots[self.head].point {
            return Err(InputError::RepeatedVertex(position).into());
        }

        let index = self.slots.len();
        self.slots.push(Slot {
            point,
            next: self.head,
            prev: tail,
            generation: 0,
            live: true,
        });
        self.slots[tail].next = index;
        let head = self.head;
        self.slots[head].prev = index;
        self.len += 1;
        Ok(self.id_of(index))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn head(&self) -> VertexId {
        self.id_of(self.head)
    }

    /// Whether `id` refers to a vertex currently in this ring
    pub fn contains(&self, id: VertexId) -> bool {
        self.slots.get(id.usize()).is_some_and(|s| s.live && s.generation == id.generation())
    }

    pub fn get(&self, id: VertexId) -> Option<Vertex<C>> {
        if self.contains(id) {
            Some(self.vertex(id))
        } else {
            None
        }
    }

    /// # Panics
    /// If `id` does not refer to a vertex of this ring
    pub fn vertex(&self, id: VertexId) -> Vertex<C> {
        let slot = self.slot(id);
        Vertex {
            id,
            point: slot.point,
            next: self.id_of(slot.next),
            prev: self.id_of(slot.prev),
        }
    }

    /// # Panics
    /// If `id` does not refer to a vertex of this ring
    #[inline(always)]
    pub fn point(&self, id: VertexId) -> Point<C> {
        self.slot(id).point
    }

    /// # Panics
    /// If `id` does not refer to a vertex of this ring
    #[inline(always)]
    pub fn next(&self, id: VertexId) -> VertexId {
        self.id_of(self.slot(id).next)
    }

    /// # Panics
    /// If `id` does not refer to a vertex of this ring
    #[inline(always)]
    pub fn prev(&self, id: VertexId) -> VertexId {
        self.id_of(self.slot(id).prev)
    }

    /// Visits every vertex once, following `next` from the head
    pub fn iter(&self) -> Iter<'_, C> {
        Iter {
            polygon: self,
            current: self.head,
            remaining: self.len,
        }
    }

    pub fn each_vertex(&self, f: impl FnMut(Vertex<C>)) {
        self.iter().for_each(f)
    }

    pub fn vertices(&self) -> Vec<VertexId> {
        self.iter().map(|v| v.id).collect()
    }

    pub fn points(&self) -> Vec<Point<C>> {
        self.iter().map(|v| v.point).collect()
    }

    /// The boundary edges `(v, v.next)`, one per vertex
    pub fn edges(&self) -> Vec<Edge<VertexId>> {
        self.iter().map(|v| Edge::new(v.id, v.next)).collect()
    }

    /// Twice the signed area enclosed by the ring, fanning triangles out from the head.
    /// Positive for a counterclockwise ring.
    pub fn area2(&self) -> C {
        let head = self.slots[self.head].point;
        let mut sum = C::zero();
        let mut current = self.slots[self.head].next;
        while self.slots[current].next != self.head {
            let slot = &self.slots[current];
            sum = sum + math::area2(head, slot.point, self.slots[slot.next].point);
            current = slot.next;
        }
        sum
    }

    pub fn winding(&self) -> Winding {
        if self.area2() >= C::zero() {
            Winding::Counterclockwise
        } else {
            Winding::Clockwise
        }
    }

    /// A compact copy of the ring in the same order from the head, with fresh vertex ids
    pub fn clone_ring(&self) -> Self {
        self.compacted(false).0
    }

    /// A compact copy of the ring traversed in the opposite direction, with fresh vertex ids
    pub fn reversed(&self) -> Self {
        self.compacted(true).0
    }

    /// Copies the ring into a fresh arena. The second value maps each new slot to the id it was copied from.
    pub(crate) fn compacted(&self, reverse: bool) -> (Self, Vec<VertexId>) {
        let mut sources = Vec::with_capacity(self.len);
        let mut current = self.head;
        for _ in 0..self.len {
            sources.push(self.id_of(current));
            let slot = &self.slots[current];
            current = if reverse { slot.prev } else { slot.next };
        }
        let points = sources.iter().map(|&id| self.point(id)).collect();
        (Self::from_points_unchecked(points), sources)
    }

    /// Unlinks `id` from the ring. The head advances if it is removed.
    pub(crate) fn remove(&mut self, id: VertexId) -> Result<(), TriangulationError> {
        if !self.contains(id) {
            return Err(TriangulationError::degenerate(format!("Cannot remove {:?}, it is not in the ring", id)));
        }
        if self.len <= 3 {
            return Err(TriangulationError::degenerate(format!("Cannot remove {:?} from a ring of {} vertices", id, self.len)));
        }

        let index = id.usize();
        let Slot { next, prev, .. } = self.slots[index];
        self.slots[prev].next = next;
        self.slots[next].prev = prev;

        let slot = &mut self.slots[index];
        slot.live = false;
        slot.generation = slot.generation.wrapping_add(1);

        if self.head == index {
            self.head = next;
        }
        self.len -= 1;
        Ok(())
    }

    /// The vertex nearest to `point`, if it lies within `max_distance_squared` of it.
    /// Ties go to the vertex reached first from the head.
    pub fn closest_vertex(&self, point: Point<C>, max_distance_squared: C) -> Option<VertexId> {
        let mut closest: Option<(VertexId, C)> = None;
        for v in self.iter() {
            let d = v.point.distance_squared(&point);
            match closest {
                // Coordinates are checked to be ordered on construction
                Some((_, best)) if d >= best => { },
                _ => closest = Some((v.id, d)),
            }
        }
        closest.filter(|&(_, d)| d <= max_distance_squared).map(|(id, _)| id)
    }

    /// The first pair of boundary edges that touch or cross without being neighbours in the ring.
    ///
    /// Checks every pair of edges, so this is quadratic in the number of vertices.
    pub fn find_self_intersection(&self) -> Option<(Edge<VertexId>, Edge<VertexId>)> {
        let edges = self.edges();
        for (i, e0) in edges.iter().enumerate() {
            for e1 in &edges[i + 1..] {
                if e0.is_adjacent(e1) {
                    continue;
                }
                if math::intersects(self.point(e0.a), self.point(e0.b), self.point(e1.a), self.point(e1.b)) {
                    return Some((*e0, *e1));
                }
            }
        }
        None
    }

    fn slot(&self, id: VertexId) -> &Slot<C> {
        match self.slots.get(id.usize()) {
            Some(slot) if slot.live && slot.generation == id.generation() => slot,
            _ => panic!("{:?} is not a vertex of this polygon", id),
        }
    }

    #[inline(always)]
    fn id_of(&self, index: usize) -> VertexId {
        VertexId::new(index, self.slots[index].generation)
    }
}

impl<C: Coordinate> ops::Index<VertexId> for Polygon<C> {
    type Output = Point<C>;

    fn index(&self, id: VertexId) -> &Self::Output {
        &self.slot(id).point
    }
}

impl<C: Coordinate> fmt::Debug for Polygon<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|v| (v.id, v.point)))
            .finish()
    }
}

impl<'p, C: Coordinate> IntoIterator for &'p Polygon<C> {
    type Item = Vertex<C>;
    type IntoIter = Iter<'p, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Iter<'p, C> {
    polygon: &'p Polygon<C>,
    current: usize,
    remaining: usize,
}

impl<'p, C: Coordinate> Iterator for Iter<'p, C> {
    type Item = Vertex<C>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let id = self.polygon.id_of(self.current);
        self.current = self.polygon.slots[self.current].next;
        Some(self.polygon.vertex(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'p, C: Coordinate> ExactSizeIterator for Iter<'p, C> { }

impl<'p, C: Coordinate> iter::FusedIterator for Iter<'p, C> { }

/// Builds a [Polygon] from an ordered list of points. See [Polygon::from_points].
pub fn build_polygon<C, I, P>(points: I) -> Result<Polygon<C>, TriangulationError>
where
    C: Coordinate,
    I: IntoIterator<Item = P>,
    P: Into<Point<C>>,
{
    Polygon::from_points(points)
}
