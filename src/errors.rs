use std::{error, fmt};

use backtrace::Backtrace;

use crate::{Edge, VertexId};

/// Describes why a list of points could not be turned into a [Polygon](crate::Polygon)
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputError {
    /// The ring has fewer than 3 vertices
    NotEnoughVertices(usize),
    /// The point at this position equals the point that follows it in the ring
    RepeatedVertex(usize),
    /// A coordinate of the point at this position does not compare equal to itself (e.g. NaN)
    UnorderedCoordinate(usize),
}

impl error::Error for InputError { }

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEnoughVertices(vertices) => write!(f, "Polygon only contains {} vertices", vertices),
            Self::RepeatedVertex(index) => write!(f, "Vertex {} is repeated by its successor", index),
            Self::UnorderedCoordinate(index) => write!(f, "Vertex {} has a coordinate which cannot be ordered", index),
        }
    }
}

/// A structural precondition failed while an algorithm was running: collinear or otherwise degenerate geometry,
/// or an internal bug.
#[derive(Debug)]
pub struct DegenerateGeometry {
    pub msg: String,
    pub backtrace: Backtrace,
}

impl DegenerateGeometry {
    #[cold]
    #[inline(always)]
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            backtrace: Backtrace::new_unresolved(),
        }
    }
}

impl fmt::Display for DegenerateGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{:?}", self.msg, self.backtrace)
    }
}

impl error::Error for DegenerateGeometry { }

/// The input lies outside of what the triangulators handle
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Unsupported {
    /// Two boundary edges which are not neighbours in the ring touch or cross
    SelfIntersection {
        first: Edge<VertexId>,
        second: Edge<VertexId>,
    },
}

impl error::Error for Unsupported { }

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfIntersection { first, second } => write!(f, "Polygon is not simple: {} intersects {}", first, second),
        }
    }
}

/// The broad category of a [TriangulationError]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    DegenerateGeometry,
    Unsupported,
}

/// Describes an error which occurred while building or triangulating a polygon
#[derive(Debug)]
#[non_exhaustive]
pub enum TriangulationError {
    /// The points provided do not form a valid ring
    InvalidInput(InputError),
    /// A structural precondition was violated during triangulation or partitioning
    DegenerateGeometry(DegenerateGeometry),
    /// The polygon is of a kind that is not handled, such as a self-intersecting ring
    Unsupported(Unsupported),
}

impl TriangulationError {
    #[cold]
    #[inline(always)]
    pub(crate) fn degenerate(msg: impl Into<String>) -> Self {
        Self::DegenerateGeometry(DegenerateGeometry::new(msg))
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::DegenerateGeometry(_) => ErrorKind::DegenerateGeometry,
            Self::Unsupported(_) => ErrorKind::Unsupported,
        }
    }
}

impl From<InputError> for TriangulationError {
    fn from(e: InputError) -> Self {
        Self::InvalidInput(e)
    }
}

impl From<DegenerateGeometry> for TriangulationError {
    fn from(e: DegenerateGeometry) -> Self {
        Self::DegenerateGeometry(e)
    }
}

impl From<Unsupported> for TriangulationError {
    fn from(e: Unsupported) -> Self {
        Self::Unsupported(e)
    }
}

impl fmt::Display for TriangulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(error) => fmt::Display::fmt(error, f),
            Self::DegenerateGeometry(error) => fmt::Display::fmt(error, f),
            Self::Unsupported(error) => fmt::Display::fmt(error, f),
        }
    }
}

impl error::Error for TriangulationError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::InvalidInput(error) => Some(error),
            Self::DegenerateGeometry(error) => Some(error),
            Self::Unsupported(error) => Some(error),
        }
    }
}
