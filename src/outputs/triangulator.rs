use crate::{Coordinate, ListBuilder, Polygon, Triangle, TriangulationError, VertexId, builders};

/// A polygon triangulation algorithm
pub trait Triangulator {
    /// Passes every triangle of `polygon` to `builder`, listed in the polygon's winding.
    /// Implementors do not need to call [ListBuilder::build] or [ListBuilder::fail].
    fn build_triangles<C: Coordinate, LB: ListBuilder<C>>(&self, polygon: &Polygon<C>, builder: &mut LB) -> Result<(), TriangulationError>;

    /// Triangulates `polygon` into a custom [ListBuilder]
    fn triangulate_into<C: Coordinate, LB: ListBuilder<C>>(&self, polygon: &Polygon<C>, mut builder: LB) -> Result<LB::Output, TriangulationError> {
        match self.build_triangles(polygon, &mut builder) {
            Ok(()) => Ok(builder.build()),
            Err(e) => {
                builder.fail(&e);
                Err(e)
            },
        }
    }

    /// Triangulates `polygon`, listing each triangle as the [VertexId]s of its corners
    fn triangulate_indexed<C: Coordinate>(&self, polygon: &Polygon<C>) -> Result<Vec<[VertexId; 3]>, TriangulationError> {
        let mut triangles: Vec<[VertexId; 3]> = Vec::with_capacity(polygon.len().saturating_sub(2));
        self.triangulate_into(polygon, builders::IndexedListBuilder::new(&mut triangles))?;
        Ok(triangles)
    }

    /// Triangulates `polygon`, listing each triangle by the points of its corners
    fn triangulate<C: Coordinate>(&self, polygon: &Polygon<C>) -> Result<Vec<Triangle<C>>, TriangulationError> {
        let mut triangles: Vec<Triangle<C>> = Vec::with_capacity(polygon.len().saturating_sub(2));
        self.triangulate_into(polygon, builders::DeindexedListBuilder::new(&mut triangles))?;
        Ok(triangles)
    }
}

/// Triangulates by repeated ear removal. Quadratic, but simple and tolerant of any simple polygon.
#[derive(Debug, Default, Clone, Copy)]
pub struct EarClipTriangulator;

impl Triangulator for EarClipTriangulator {
    fn build_triangles<C: Coordinate, LB: ListBuilder<C>>(&self, polygon: &Polygon<C>, builder: &mut LB) -> Result<(), TriangulationError> {
        crate::ear_clip::clip_ears(polygon, builder)
    }
}

/// Triangulates by cutting the polygon into y-monotone pieces with a sweep line, then triangulating each piece
/// with a linear stack scan
#[derive(Debug, Default, Clone, Copy)]
pub struct MonotoneTriangulator;

impl Triangulator for MonotoneTriangulator {
    fn build_triangles<C: Coordinate, LB: ListBuilder<C>>(&self, polygon: &Polygon<C>, builder: &mut LB) -> Result<(), TriangulationError> {
        crate::monotone::triangulate_pieces(polygon, builder)
    }
}

/// Triangulates `polygon` by ear clipping, returning `len() - 2` triangles
pub fn triangulate_by_ear_clipping<C: Coordinate>(polygon: &Polygon<C>) -> Result<Vec<Triangle<C>>, TriangulationError> {
    EarClipTriangulator.triangulate(polygon)
}

/// Triangulates `polygon` by monotone partitioning, returning `len() - 2` triangles
pub fn triangulate_by_monotone_partition<C: Coordinate>(polygon: &Polygon<C>) -> Result<Vec<Triangle<C>>, TriangulationError> {
    MonotoneTriangulator.triangulate(polygon)
}
