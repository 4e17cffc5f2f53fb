use std::{fmt, num::NonZeroUsize};

/// A handle to one vertex of a [Polygon](crate::Polygon).
///
/// The handle is a slot index in the polygon's vertex arena plus the generation of that slot. When a vertex is
/// spliced out of its ring the slot's generation advances, so handles to removed vertices stop resolving
/// instead of silently aliasing another vertex.
///
/// Handles order by slot index, which is the order vertices were added in.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId {
    index: NonZeroUsize,
    generation: u32,
}

impl VertexId {
    pub(crate) fn new(index: usize, generation: u32) -> Self {
        Self {
            index: NonZeroUsize::MIN.saturating_add(index),
            generation,
        }
    }

    /// The arena slot of this vertex
    pub fn usize(&self) -> usize {
        self.index.get() - 1
    }

    pub(crate) fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.generation == 0 {
            write!(f, "v{}", self.usize())
        } else {
            write!(f, "v{}#{}", self.usize(), self.generation)
        }
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.usize())
    }
}
