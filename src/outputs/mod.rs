pub mod builders;

mod list;
pub use list::List;
mod list_builder;
pub use list_builder::ListBuilder;
pub(crate) use list_builder::TriangleSink;
mod triangle;
pub use triangle::Triangle;
mod triangulator;
pub use triangulator::{Triangulator, EarClipTriangulator, MonotoneTriangulator, triangulate_by_ear_clipping, triangulate_by_monotone_partition};
mod winding;
pub use winding::Winding;
