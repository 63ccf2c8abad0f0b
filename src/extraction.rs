use crate::{Predicates, Sign, graph::{AdjacencyGraph, Node}, idx::{Idx, SliceExt}};

/// Tears down `graph`, passing each of its triangles to `emit` exactly once, counterclockwise and led by
/// its lowest sorted position. Returns the number of triangles emitted.
///
/// A vertex whose ring has been taken is finished, so a triangle is emitted by its first vertex only.
/// Consecutive neighbors that do not turn counterclockwise around the pivot span the outer face.
pub(crate) fn extract_triangles<K: Predicates, E>(mut graph: AdjacencyGraph<K>, mut emit: impl FnMut(Idx<Node>, Idx<Node>, Idx<Node>) -> Result<(), E>) -> Result<usize, E> {
    let mut count = 0;
    for v in graph.nodes().iter_index() {
        let ring = graph.take_ring(v);
        for (a, b) in ring.consecutive_pairs() {
            let open = !graph.node(a).ring().is_empty() && !graph.node(b).ring().is_empty();
            if open && graph.orientation(v, a, b) == Sign::Positive {
                emit(v, a, b)?;
                count += 1;
            }
        }
    }
    Ok(count)
}
