use zot::Ot;

use crate::{Coordinate, Edge, LineSweepStatus, Polygon, Support, TriangulationError, VertexClassifier, VertexId, VertexType, math};

/// Every vertex of `polygon`, in the order a downward sweep meets them. Equal points keep their ring order.
pub fn sweep_sorted_vertices<C: Coordinate>(polygon: &Polygon<C>) -> Vec<VertexId> {
    let mut vertices = polygon.vertices();
    vertices.sort_by(|&a, &b| math::sweep_order(polygon.point(a), polygon.point(b)).then(a.cmp(&b)));
    vertices
}

/// Computes the diagonals which cut a polygon into pieces monotone with respect to the sweep direction.
///
/// A single downward pass: each vertex is classified, the [LineSweepStatus] is updated, and a diagonal is added
/// wherever a split vertex needs a connection upward or a merge vertex needs a connection downward.
pub struct MonotonePartitioner<'p, C> {
    polygon: &'p Polygon<C>,
    classifier: VertexClassifier<'p, C>,
    status: LineSweepStatus<'p, C>,
    diagonals: Vec<Edge<VertexId>>,
}

impl<'p, C: Coordinate> MonotonePartitioner<'p, C> {
    pub fn new(polygon: &'p Polygon<C>) -> Self {
        Self {
            polygon,
            classifier: VertexClassifier::new(polygon),
            status: LineSweepStatus::new(polygon),
            diagonals: Vec::new(),
        }
    }

    pub fn calculate_diagonals(mut self) -> Result<Vec<Edge<VertexId>>, TriangulationError> {
        let vertices = sweep_sorted_vertices(self.polygon);
        log::debug!("Partitioning {} vertices ({:?})", vertices.len(), self.classifier.winding());

        for v in vertices {
            self.status.set_sweep_height(self.polygon.point(v).y);
            let kind = self.classifier.classify(v);
            self.handle_vertex(v, kind)?;
            log::trace!("{} {} at {}, {} active edges", kind, v, self.polygon.point(v), self.status.len());

            #[cfg(feature = "debugging")]
            crate::debug::svg::snapshot_partition(self.polygon, &self.diagonals, Some(v), crate::debug::svg::SvgOutputLevel::AllSteps);
        }

        if !self.status.is_empty() {
            return Err(TriangulationError::degenerate(format!("{} edges remain active after the sweep", self.status.len())));
        }

        log::debug!("Found {} monotone diagonals", self.diagonals.len());
        #[cfg(feature = "debugging")]
        crate::debug::svg::snapshot_partition(self.polygon, &self.diagonals, None, crate::debug::svg::SvgOutputLevel::ResultOnly);
        Ok(self.diagonals)
    }

    fn handle_vertex(&mut self, v: VertexId, kind: VertexType) -> Result<(), TriangulationError> {
        match kind {
            VertexType::Start => {
                self.status.add_edges(v, kind)?;
            },
            VertexType::Split => {
                match self.status.add_edges(v, kind)? {
                    Some(support) => self.add_diagonal(support.vertex, v),
                    None => return Err(TriangulationError::degenerate(format!("Split vertex {} has no support", v))),
                }
            },
            VertexType::End | VertexType::Merge => {
                match self.status.remove_edges(v, kind)? {
                    Ot::One(support) => self.connect_merge(v, support),
                    Ot::Two(left, right) => {
                        self.connect_merge(v, left);
                        self.connect_merge(v, right);
                    },
                }
            },
            VertexType::Regular => {
                let support = self.status.replace_edge(v)?;
                self.connect_merge(v, support);
            },
        }
        Ok(())
    }

    /// A merge vertex left behind as support is waiting for a vertex below it to connect to
    fn connect_merge(&mut self, v: VertexId, support: Support) {
        if support.kind == VertexType::Merge {
            self.add_diagonal(v, support.vertex);
        }
    }

    fn add_diagonal(&mut self, a: VertexId, b: VertexId) {
        log::trace!("Diagonal {} - {}", a, b);
        self.diagonals.push(Edge::new(a, b));
    }
}

/// The diagonals splitting `polygon` into monotone pieces. See [MonotonePartitioner].
pub fn compute_monotone_diagonals<C: Coordinate>(polygon: &Polygon<C>) -> Result<Vec<Edge<VertexId>>, TriangulationError> {
    MonotonePartitioner::new(polygon).calculate_diagonals()
}
