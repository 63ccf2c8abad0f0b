use std::convert::Infallible;

use crate::{PointSet, Triangulation, TriangulationError, formats};

use super::util::VTest;

fn triangulate(points: &Vec<[f64; 2]>) -> Result<Vec<[usize; 3]>, TriangulationError<Infallible>> {
    points.triangulate(formats::IndexedListFormat::new(Vec::<[usize; 3]>::new()))
}

#[test]
fn no_points() {
    let points: Vec<[f64; 2]> = Vec::new();
    assert!(matches!(triangulate(&points), Err(TriangulationError::InsufficientPoints(0))));
}

#[test]
fn single_point() {
    let points = vec![[4., 2.]];
    assert!(matches!(triangulate(&points), Err(TriangulationError::InsufficientPoints(1))));
}

#[test]
fn all_duplicates() {
    let points = vec![[1., 1.], [1., 1.], [1., 1. + 1e-13], [1. - 1e-13, 1.]];
    assert!(matches!(triangulate(&points), Err(TriangulationError::InsufficientPoints(1))));
}

#[test]
fn not_a_number() {
    let points = vec![[0., 0.], [1., 0.], [f64::NAN, 1.], [0., 1.]];
    assert!(matches!(triangulate(&points), Err(TriangulationError::InvalidCoordinate(2))));
}

#[test]
fn infinite() {
    let points = vec![[0., 0.], [1., f64::INFINITY], [0., 1.]];
    assert!(matches!(triangulate(&points), Err(TriangulationError::InvalidCoordinate(1))));

    let points = vec![VTest::new(0., 0.), VTest::new(f32::NEG_INFINITY, 0.), VTest::new(0., 1.)];
    assert!(matches!(Triangulation::new(&points), Err(TriangulationError::InvalidCoordinate(1))));
}

#[test]
fn error_display() {
    let err = triangulate(&vec![[0., 0.]]).expect_err("Triangulation completed successfully");
    assert_eq!(err.to_string(), "Point set only contains 1 distinct points, at least 2 are required");

    let err = triangulate(&vec![[0., 0.], [f64::NAN, 0.]]).expect_err("Triangulation completed successfully");
    assert_eq!(err.to_string(), "Point 1 does not have finite coordinates");
}

#[test]
fn insufficient_points_leaves_list_untouched() {
    let mut output = vec![[7usize, 8, 9]];
    let points = vec![[0., 0.]];
    let result = points.triangulate(formats::IndexedListFormat::new(&mut output));
    assert!(result.is_err());
    assert_eq!(output, vec![[7, 8, 9]]);
}
