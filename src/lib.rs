//! Delaunay triangulation of planar point sets.
//!
//! Points are sorted, split in half recursively, and the two triangulated halves are merged bottom-up
//! between their lower and upper common tangents (Guibas and Stolfi's divide-and-conquer algorithm).
//! Orientation and in-circle tests use adaptive-precision predicates, so degenerate inputs such as grids
//! and co-circular points are handled exactly.
//!
//! ```
//! use delaunay_tri::{PointSet, formats};
//!
//! let points = vec![[0.0, 0.0], [1.0, 0.0], [0.5, 1.0], [0.5, 0.25]];
//! let triangles = points.triangulate(formats::IndexedListFormat::new(Vec::<[usize; 3]>::new())).unwrap();
//! assert_eq!(triangles.len(), 3);
//! ```

mod idx;
mod math;
mod preparation;
mod predicates;
mod ring;
mod graph;
mod divide;
mod extraction;
mod list_builder_state;
mod triangulation;
mod inputs;
mod outputs;
mod errors;

#[cfg(feature = "debugging")]
pub mod debug;

#[cfg(any(test, feature = "benchmarking"))]
pub mod tests;

pub use errors::{InternalError, TriangulationError};
pub use preparation::{DEFAULT_EPSILON, TriangulationOptions};
pub use predicates::{AdaptivePredicates, Predicates, Sign, in_circle, orientation};
pub use triangulation::Triangulation;

pub(crate) use inputs::Coords;
pub(crate) use list_builder_state::ListBuilderState;

pub use inputs::*;
pub use outputs::*;

pub use num_traits::real::Real;

use divide::DivideAndConquer;
use graph::AdjacencyGraph;
use list_builder_state::{BuilderError, BuilderOutput};
use preparation::PreparedPoints;

fn do_triangulate<'p, K: Predicates, P: PointSet<'p> + ?Sized, F: ListFormat<'p, P>>(point_set: &'p P, options: TriangulationOptions, format: F) -> Result<BuilderOutput<'p, P, F>, TriangulationError<BuilderError<'p, P, F>>> {
    let prepared = PreparedPoints::prepare::<P, BuilderError<'p, P, F>>(point_set, options.duplicate_epsilon)?;
    let mut lbs = ListBuilderState::<'p, P, F>::new(format, point_set, math::max_triangle_count(prepared.len()));
    // Separate out the actual triangulation logic, so ListBuilder error handling can be consolidated to one location
    let result = triangulate_prepared::<K, P, F>(&prepared, &mut lbs);
    lbs.complete(result)
}

fn triangulate_prepared<'p, K: Predicates, P: PointSet<'p> + ?Sized, F: ListFormat<'p, P>>(prepared: &PreparedPoints<P::Index>, lbs: &mut ListBuilderState<'p, P, F>) -> Result<(), TriangulationError<BuilderError<'p, P, F>>> {
    let graph = AdjacencyGraph::<K>::new(prepared.coords()).map_err(TriangulationError::AllocationFailure)?;
    let graph = DivideAndConquer::new(graph).build().map_err(TriangulationError::InternalError)?;
    extraction::extract_triangles(graph, |v, a, b| {
        lbs.add_triangle(prepared.index(v.usize()), prepared.index(a.usize()), prepared.index(b.usize()))
    })?;
    Ok(())
}
