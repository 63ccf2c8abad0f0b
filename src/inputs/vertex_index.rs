/// A type which can be used to index a specific [Vertex](crate::Vertex) of a [PointSet](crate::PointSet).
/// Automatically implemented for all [Eq] + [Clone] types
#[cfg(not(feature = "debugging"))]
pub trait VertexIndex: Eq + Clone { }
#[cfg(feature = "debugging")]
pub trait VertexIndex: Eq + Clone + std::fmt::Debug { }

#[cfg(not(feature = "debugging"))]
impl<T> VertexIndex for T
where T: Eq + Clone
{ }

#[cfg(feature = "debugging")]
impl<T> VertexIndex for T
where T: Eq + Clone + std::fmt::Debug
{ }
