mod point_set;
pub use point_set::{PointSet, IndexWith, IndexWithIter};
mod vertex;
pub use vertex::Vertex;
pub(crate) use vertex::Coords;
mod vertex_index;
pub use vertex_index::VertexIndex;
