//! Triangulation of simple polygons.
//!
//! A [Polygon] is a ring of vertices built with [build_polygon]. It can be triangulated by ear clipping
//! ([triangulate_by_ear_clipping]) or by sweeping it into y-monotone pieces and triangulating those
//! ([triangulate_by_monotone_partition]). The building blocks are public too: the exact predicates in [math],
//! [Polygon::is_diagonal], [VertexClassifier], [LineSweepStatus] and [MonotonePartitioner].

mod vertex_id;
mod diagonal;
mod ear_clip;
mod vertex_type;
mod sweep;
mod partition;
mod subdivision;
mod monotone;
mod inputs;
mod outputs;
mod errors;
pub mod math;

#[cfg(feature = "debugging")]
pub mod debug;

#[cfg(any(test, feature = "benchmarking"))]
pub mod tests;

pub use errors::{TriangulationError, InputError, DegenerateGeometry, Unsupported, ErrorKind};
pub use vertex_id::VertexId;
pub use vertex_type::{VertexType, VertexClassifier, classify_vertex};
pub use sweep::{LineSweepStatus, ActiveEdge, Support};
pub use partition::{MonotonePartitioner, compute_monotone_diagonals, sweep_sorted_vertices};

pub(crate) use outputs::TriangleSink;

pub use inputs::*;
pub use outputs::*;

pub use ordered_float::OrderedFloat;
