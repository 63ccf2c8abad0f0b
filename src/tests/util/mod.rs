pub mod points;
mod check;
mod vtest;

pub use check::{assert_delaunay, assert_counterclockwise, assert_triangle_count, assert_area_coverage, assert_valid_triangulation, hull_size, normalized};
pub use vtest::VTest;
