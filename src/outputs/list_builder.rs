use crate::{Coordinate, Polygon, TriangulationError, VertexId, Winding};

/// Performs the construction of a triangle list
pub trait ListBuilder<C> {
    /// The triangle list output type
    type Output;

    /// Adds a triangle with the given vertices of `polygon`, listed in the polygon's winding
    fn add_triangle(&mut self, polygon: &Polygon<C>, vi0: VertexId, vi1: VertexId, vi2: VertexId);

    /// Called when triangulation has completed to get the resulting output
    fn build(self) -> Self::Output;

    /// Called when triangulation encounters an error.
    ///
    /// Any required cleanup (e.g. removing the partial triangulation added to an existing [Vec]) should be done here
    fn fail(self, error: &TriangulationError);
}

/// Forwards counterclockwise triangles to a [ListBuilder], reversing them when the source polygon is clockwise
pub(crate) struct TriangleSink<'b, 'p, C, LB> {
    polygon: &'p Polygon<C>,
    builder: &'b mut LB,
    reverse: bool,
    count: usize,
}

impl<'b, 'p, C: Coordinate, LB: ListBuilder<C>> TriangleSink<'b, 'p, C, LB> {
    pub fn new(polygon: &'p Polygon<C>, builder: &'b mut LB, winding: Winding) -> Self {
        Self {
            polygon,
            builder,
            reverse: winding == Winding::Clockwise,
            count: 0,
        }
    }

    pub fn add(&mut self, vi0: VertexId, vi1: VertexId, vi2: VertexId) {
        self.count += 1;
        if self.reverse {
            self.builder.add_triangle(self.polygon, vi2, vi1, vi0);
        } else {
            self.builder.add_triangle(self.polygon, vi0, vi1, vi2);
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }
}
