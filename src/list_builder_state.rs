use std::{fmt, mem};

use crate::{ListBuilder, ListFormat, PointSet, TriangleWinding, TriangulationError};

pub(crate) type BuilderError<'p, P, F> = <<F as ListFormat<'p, P>>::Builder as ListBuilder<'p, P>>::Error;
pub(crate) type BuilderOutput<'p, P, F> = <<F as ListFormat<'p, P>>::Builder as ListBuilder<'p, P>>::Output;

/// Drives a [ListBuilder], creating it from its [ListFormat] when the first triangle arrives
pub(crate) enum ListBuilderState<'p, P: PointSet<'p> + ?Sized, F: ListFormat<'p, P>> {
    Uninitialized {
        format: F,
        point_set: &'p P,
        max_triangle_count: usize,
    },
    Initialized(F::Builder),
    Error(Option<F::Builder>),
}

impl<'p, P: PointSet<'p> + ?Sized, F: ListFormat<'p, P>> ListBuilderState<'p, P, F> {
    pub(crate) fn new(format: F, point_set: &'p P, max_triangle_count: usize) -> Self {
        Self::Uninitialized {
            format,
            point_set,
            max_triangle_count,
        }
    }

    /// Adds the counterclockwise triangle `vi0, vi1, vi2`, reordered to the builder's [ListBuilder::WINDING]
    pub(crate) fn add_triangle(&mut self, vi0: P::Index, vi1: P::Index, vi2: P::Index) -> Result<(), TriangulationError<BuilderError<'p, P, F>>> {
        let mut lb = match mem::replace(self, Self::Error(None)) {
            Self::Initialized(lb) => lb,
            Self::Uninitialized { format, point_set, max_triangle_count } => {
                let mut lb = format.initialize(point_set).map_err(TriangulationError::ListBuilder)?;
                if let Err(err) = lb.reserve_hint(max_triangle_count) {
                    *self = Self::Error(Some(lb));
                    return Err(TriangulationError::AllocationFailure(err));
                }
                lb
            }
            Self::Error(lb) => {
                *self = Self::Error(lb);
                return Err(TriangulationError::internal("Triangle added after the list builder failed"));
            }
        };

        let result = match <F::Builder as ListBuilder<'p, P>>::WINDING {
            TriangleWinding::Counterclockwise => lb.add_triangle(vi0, vi1, vi2),
            TriangleWinding::Clockwise => lb.add_triangle(vi0, vi2, vi1),
        };
        match result {
            Ok(()) => {
                *self = Self::Initialized(lb);
                Ok(())
            }
            Err(err) => {
                *self = Self::Error(Some(lb));
                Err(err.into())
            }
        }
    }

    pub(crate) fn complete(self, result: Result<(), TriangulationError<BuilderError<'p, P, F>>>) -> Result<BuilderOutput<'p, P, F>, TriangulationError<BuilderError<'p, P, F>>> {
        match (self, result) {
            // Success
            (Self::Initialized(lb), Ok(())) => lb.build().map_err(Into::into),
            // Success without a single triangle, e.g. collinear points
            (Self::Uninitialized { format, point_set, .. }, Ok(())) => {
                format.initialize(point_set)?.build().map_err(Into::into)
            }
            // Failure, before ListBuilder initialized
            (Self::Uninitialized { .. }, Err(err)) |
            (Self::Error(None), Err(err)) => Err(err),
            // Failure, after ListBuilder initialized
            (Self::Initialized(lb), Err(err)) |
            (Self::Error(Some(lb)), Err(err)) => {
                lb.fail(&err);
                Err(err)
            }
            // Something went wrong (result should always be Err for LBS::Error)
            (Self::Error(lb), Ok(())) => {
                debug_assert!(false);

                let err = TriangulationError::internal("Unknown error");
                if let Some(lb) = lb {
                    lb.fail(&err);
                }
                Err(err)
            }
        }
    }
}

impl<'p, P: PointSet<'p> + ?Sized, F: ListFormat<'p, P>> fmt::Debug for ListBuilderState<'p, P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Uninitialized { .. } => "ListBuilderState::Uninitialized",
            Self::Initialized(_) => "ListBuilderState::Initialized",
            Self::Error(_) => "ListBuilderState::Error",
        })
    }
}
