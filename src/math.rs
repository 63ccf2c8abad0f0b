use std::cmp;

use ordered_float::OrderedFloat;

use crate::Coords;

/// Lexicographic order on x, then y. Total, so it is safe to hand to a sort.
pub(crate) fn lexicographic(a: &Coords, b: &Coords) -> cmp::Ordering {
    (OrderedFloat(a.x()), OrderedFloat(a.y())).cmp(&(OrderedFloat(b.x()), OrderedFloat(b.y())))
}

pub(crate) fn is_near_duplicate(a: &Coords, b: &Coords, epsilon: f64) -> bool {
    (a.x() - b.x()).abs() <= epsilon && (a.y() - b.y()).abs() <= epsilon
}

/// Upper bound on the triangle count of `vertex_count` distinct points: `2 * (m - 1) - h`
/// with the smallest possible hull, `h = 2`.
pub(crate) fn max_triangle_count(vertex_count: usize) -> usize {
    (2 * vertex_count.saturating_sub(1)).saturating_sub(2)
}
