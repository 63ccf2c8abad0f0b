use std::{collections::TryReserveError, error, fmt};

use crate::{AdaptivePredicates, List, ListBuilder, ListFormat, PointSet, TriangleWinding, TriangulationError, TriangulationOptions, formats, Sign, orientation};

use super::util::{self, points};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum BuilderError {
    Initialize,
    Reserve,
    AddTriangle,
    Build,
}

impl fmt::Display for BuilderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BuilderError")
    }
}

impl error::Error for BuilderError { }

fn reserve_error() -> TryReserveError {
    Vec::<u8>::new().try_reserve(usize::MAX).expect_err("Reserving usize::MAX bytes succeeded")
}

struct ErrorFormat<'b> {
    raised_error: BuilderError,
    failed_flag: &'b mut bool,
    triangles: usize,
}

impl<'b> ErrorFormat<'b> {
    fn new(raised_error: BuilderError, failed_flag: &'b mut bool) -> Self {
        *failed_flag = false;
        Self {
            raised_error,
            failed_flag,
            triangles: 0,
        }
    }

    fn check_error(&self, error: BuilderError) -> Result<(), BuilderError> {
        if self.raised_error == error {
            Err(error)
        } else {
            Ok(())
        }
    }

    fn set_failed_flag(&mut self) {
        *self.failed_flag = true;
    }
}

impl<'p, 'b, P: PointSet<'p> + ?Sized> ListFormat<'p, P> for ErrorFormat<'b> {
    type Builder = Self;

    fn initialize(self, _point_set: &'p P) -> Result<Self::Builder, <Self::Builder as ListBuilder<'p, P>>::Error> {
        self.check_error(BuilderError::Initialize)?;
        Ok(self)
    }
}

impl<'p, 'b, P: PointSet<'p> + ?Sized> ListBuilder<'p, P> for ErrorFormat<'b> {
    type Output = usize;
    type Error = BuilderError;

    fn reserve_hint(&mut self, _max_triangle_count: usize) -> Result<(), TryReserveError> {
        match self.check_error(BuilderError::Reserve) {
            Ok(()) => Ok(()),
            Err(_) => Err(reserve_error()),
        }
    }

    fn add_triangle(&mut self, _vi0: P::Index, _vi1: P::Index, _vi2: P::Index) -> Result<(), Self::Error> {
        // Fail partway through, so there is partial output to discard
        if self.triangles == 2 {
            self.check_error(BuilderError::AddTriangle)?;
        }
        self.triangles += 1;
        Ok(())
    }

    fn build(self) -> Result<Self::Output, Self::Error> {
        self.check_error(BuilderError::Build)?;
        Ok(self.triangles)
    }

    fn fail(mut self, _error: &TriangulationError<Self::Error>) {
        self.set_failed_flag();
    }
}

#[test]
fn error_propagation() {
    // Ensure Builder-raised errors are propagated back to the original `triangulate` call, and that `ListBuilder::fail` is called if applicable
    for builder_error in [BuilderError::Initialize, BuilderError::AddTriangle, BuilderError::Build] {
        let mut failed = false;
        match points::star().triangulate(ErrorFormat::new(builder_error, &mut failed)).expect_err("Triangulation completed successfully") {
            TriangulationError::ListBuilder(err) => {
                assert_eq!(err, builder_error);
                // For `initialize` and `build`, `fail` will not be called, because the Builder does not yet exist, or has been moved into `build`, respectively
                assert_eq!(failed, builder_error == BuilderError::AddTriangle);
            },
            err => panic!("Unexpected non-builder error: {:?}", err),
        }
    }
}

#[test]
fn reserve_failure() {
    let mut failed = false;
    match points::star().triangulate(ErrorFormat::new(BuilderError::Reserve, &mut failed)).expect_err("Triangulation completed successfully") {
        TriangulationError::AllocationFailure(_) => assert!(failed),
        err => panic!("Unexpected error: {:?}", err),
    }
}

#[test]
fn builder_without_triangles() {
    // Collinear points produce no triangles, but the builder is still created and built
    let mut failed = false;
    let points = points::collinear(5, 1., 1.);
    let count = points.triangulate(ErrorFormat::new(BuilderError::AddTriangle, &mut failed)).expect("Triangulation failed");
    assert_eq!(count, 0);
    assert!(!failed);
}

#[test]
fn append_to_existing() {
    let points = points::random(20, 1);
    let mut output = vec![[7usize, 8, 9]];
    points.triangulate(formats::IndexedListFormat::new(&mut output)).expect("Triangulation failed");
    assert_eq!(output[0], [7, 8, 9]);
    util::assert_valid_triangulation(&points, &output[1..]);
}

#[test]
fn fail_truncates() {
    let mut output = vec![1usize, 2, 3];
    let mut list = formats::GenericList::new(&mut output);
    list.new_triangle(4, 5, 6);
    list.new_triangle(7, 8, 9);
    list.fail();
    assert_eq!(output, vec![1, 2, 3]);
}

#[test]
fn flat_and_tuple_lists() {
    let points = points::random(30, 2);
    let arrays = points.triangulate(formats::IndexedListFormat::new(Vec::<[usize; 3]>::new())).expect("Triangulation failed");

    let flat = points.triangulate(formats::IndexedListFormat::new(Vec::<usize>::new())).expect("Triangulation failed");
    assert_eq!(List::<usize>::len(&flat), arrays.len());
    assert_eq!(flat.chunks(3).map(|c| [c[0], c[1], c[2]]).collect::<Vec<_>>(), arrays);

    let tuples = points.triangulate(formats::IndexedListFormat::new(Vec::<(usize, usize, usize)>::new())).expect("Triangulation failed");
    assert_eq!(tuples.iter().map(|&(a, b, c)| [a, b, c]).collect::<Vec<_>>(), arrays);
}

#[test]
fn reverse_winding() {
    let points = points::random(30, 4);
    let ccw = points.triangulate(formats::IndexedListFormat::new(Vec::<[usize; 3]>::new())).expect("Triangulation failed");
    let format = formats::IndexedListFormat::new(Vec::<[usize; 3]>::new()).reverse_winding();
    let cw = points.triangulate(format).expect("Triangulation failed");

    assert_eq!(cw.len(), ccw.len());
    for (&[a, b, c], &[ra, rb, rc]) in ccw.iter().zip(cw.iter()) {
        assert_eq!([a, c, b], [ra, rb, rc]);
        assert_eq!(orientation(points[ra], points[rb], points[rc]), Sign::Negative);
    }

    // Reversing twice restores the original winding
    let format = formats::IndexedListFormat::new(Vec::<[usize; 3]>::new()).reverse_winding().reverse_winding();
    assert_eq!(points.triangulate(format).expect("Triangulation failed"), ccw);
}

#[test]
fn winding_constant() {
    type Builder<'p> = formats::IndexedListBuilder<'p, Vec<[f64; 2]>, Vec<usize>>;
    type Reversed<'p> = formats::ReverseListBuilder<'p, Vec<[f64; 2]>, Builder<'p>>;
    assert_eq!(<Builder as ListBuilder<Vec<[f64; 2]>>>::WINDING, TriangleWinding::Counterclockwise);
    assert_eq!(<Reversed as ListBuilder<Vec<[f64; 2]>>>::WINDING, TriangleWinding::Clockwise);
}

#[test]
fn deindexed() {
    let points = points::random(25, 6);
    let indexed = points.triangulate(formats::IndexedListFormat::new(Vec::<[usize; 3]>::new())).expect("Triangulation failed");
    let deindexed = points.triangulate(formats::DeindexedListFormat::new(Vec::<[[f64; 2]; 3]>::new())).expect("Triangulation failed");

    assert_eq!(deindexed.len(), indexed.len());
    for (vertices, indices) in deindexed.iter().zip(indexed.iter()) {
        assert_eq!(*vertices, indices.map(|i| points[i]));
    }
}

#[test]
fn index_wrapper() {
    fn require_u16(_i: u16) { }

    let points = points::random(40, 8);
    let expected = points.triangulate(formats::IndexedListFormat::new(Vec::<[usize; 3]>::new())).expect("Triangulation failed");

    let points_ref = &*points;
    let points_ref = points_ref.index_with::<u16>();
    let result = points_ref.triangulate(formats::IndexedListFormat::new(Vec::<[u16; 3]>::new())).expect("Triangulation failed");
    require_u16(result[0][0]);
    assert_eq!(result.iter().map(|t| t.map(usize::from)).collect::<Vec<_>>(), expected);

    let owned = points.clone().index_with::<u32>();
    assert_eq!(owned.inner().len(), points.len());
    let result = owned.triangulate(formats::IndexedListFormat::new(Vec::<[u32; 3]>::new())).expect("Triangulation failed");
    assert_eq!(result.iter().map(|t| t.map(|i| i as usize)).collect::<Vec<_>>(), expected);
}

#[test]
#[should_panic]
fn index_wrapper_overflow() {
    let points = points::random(300, 9);
    let points = points.index_with::<u8>();
    let _ = points.triangulate(formats::IndexedListFormat::new(Vec::<[u8; 3]>::new()));
}

#[test]
fn custom_epsilon() {
    let points = vec![[0., 0.], [0.1, 0.05], [10., 0.], [0., 10.]];
    let options = TriangulationOptions::default().with_duplicate_epsilon(0.2);
    let merged = points.triangulate_with::<AdaptivePredicates, _>(options, formats::IndexedListFormat::new(Vec::<[usize; 3]>::new())).expect("Triangulation failed");
    assert_eq!(util::normalized(&merged), vec![[0, 2, 3]]);

    let separate = points.triangulate(formats::IndexedListFormat::new(Vec::<[usize; 3]>::new())).expect("Triangulation failed");
    // The near point is interior, so it splits the triangle in three
    assert_eq!(separate.len(), 3);
}
