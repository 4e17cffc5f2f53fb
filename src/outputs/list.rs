use crate::{Coordinate, Point, Triangle};

/// A list of triangles represented as triplets of vertices of type `V`
pub trait List<V> {
    /// Add a new triangle to the list
    fn push(&mut self, v0: V, v1: V, v2: V);

    /// The number of triangles in the list
    fn len(&self) -> usize;

    /// Remove newly added triangles until there are only `len` remaining
    fn truncate(&mut self, len: usize);

    /// Returns `true` if the collection contains no triangles
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V> List<V> for Vec<V> {
    fn push(&mut self, v0: V, v1: V, v2: V) {
        self.extend([v0, v1, v2]);
    }

    fn len(&self) -> usize {
        Vec::len(self) / 3
    }

    fn truncate(&mut self, len: usize) {
        Vec::truncate(self, len * 3)
    }
}

impl<V> List<V> for Vec<[V; 3]> {
    fn push(&mut self, v0: V, v1: V, v2: V) {
        Vec::push(self, [v0, v1, v2]);
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn truncate(&mut self, len: usize) {
        Vec::truncate(self, len)
    }
}

impl<C: Coordinate> List<Point<C>> for Vec<Triangle<C>> {
    fn push(&mut self, v0: Point<C>, v1: Point<C>, v2: Point<C>) {
        Vec::push(self, Triangle::new(v0, v1, v2));
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn truncate(&mut self, len: usize) {
        Vec::truncate(self, len)
    }
}
