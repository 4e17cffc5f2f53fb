use crate::{List, ListBuilder, Polygon, TriangulationError, VertexId};

/// Appends triangles to a [List] as [VertexId]s of the triangulated polygon
pub struct IndexedListBuilder<'f, L: List<VertexId>> {
    list: &'f mut L,
    initial_triangle_count: usize,
}

impl<'f, L: List<VertexId>> IndexedListBuilder<'f, L> {
    pub fn new(list: &'f mut L) -> Self {
        let initial_triangle_count = list.len();
        Self {
            list,
            initial_triangle_count,
        }
    }
}

impl<'f, C, L: List<VertexId>> ListBuilder<C> for IndexedListBuilder<'f, L> {
    type Output = &'f mut L;

    fn add_triangle(&mut self, _polygon: &Polygon<C>, vi0: VertexId, vi1: VertexId, vi2: VertexId) {
        self.list.push(vi0, vi1, vi2);
    }

    fn build(self) -> Self::Output {
        self.list
    }

    fn fail(self, _error: &TriangulationError) {
        self.list.truncate(self.initial_triangle_count);
    }
}
