mod edge;
pub use edge::Edge;
mod point;
pub use point::{Coordinate, Point};
mod polygon;
pub use polygon::{Polygon, Vertex, Iter, build_polygon};
