use std::marker::PhantomData;

use crate::{Coordinate, List, ListBuilder, Point, Polygon, TriangulationError, VertexId};

/// Appends triangles to a [List] as copies of the vertex [Point]s
pub struct DeindexedListBuilder<'f, C, L> {
    list: &'f mut L,
    initial_triangle_count: usize,
    _coordinate: PhantomData<fn() -> C>,
}

impl<'f, C: Coordinate, L: List<Point<C>>> DeindexedListBuilder<'f, C, L> {
    pub fn new(list: &'f mut L) -> Self {
        let initial_triangle_count = list.len();
        Self {
            list,
            initial_triangle_count,
            _coordinate: PhantomData,
        }
    }
}

impl<'f, C: Coordinate, L: List<Point<C>>> ListBuilder<C> for DeindexedListBuilder<'f, C, L> {
    type Output = &'f mut L;

    fn add_triangle(&mut self, polygon: &Polygon<C>, vi0: VertexId, vi1: VertexId, vi2: VertexId) {
        self.list.push(polygon.point(vi0), polygon.point(vi1), polygon.point(vi2));
    }

    fn build(self) -> Self::Output {
        self.list
    }

    fn fail(self, _error: &TriangulationError) {
        self.list.truncate(self.initial_triangle_count);
    }
}
