use std::{collections::TryReserveError, marker::PhantomData};

use crate::{PointSet, ListFormat, ListBuilder, TriangleWinding, TriangulationError};

/// Wrapper which reverses the winding of a [ListFormat]. Created by [ListFormat::reverse_winding].
pub struct ReverseListFormat<'p, P: PointSet<'p> + ?Sized, LF: ListFormat<'p, P>>(LF, PhantomData<&'p P>);

impl<'p, P: PointSet<'p> + ?Sized, LF: ListFormat<'p, P>> ReverseListFormat<'p, P, LF> {
    pub(crate) fn new(list_format: LF) -> Self {
        Self(list_format, PhantomData)
    }
}

impl<'p, P: PointSet<'p> + ?Sized, LF: ListFormat<'p, P>> ListFormat<'p, P> for ReverseListFormat<'p, P, LF> {
    type Builder = ReverseListBuilder<'p, P, LF::Builder>;

    fn initialize(self, point_set: &'p P) -> Result<Self::Builder, <Self::Builder as ListBuilder<'p, P>>::Error> {
        let lb = self.0.initialize(point_set)?;
        Ok(ReverseListBuilder(lb, PhantomData))
    }
}

/// Wrapper which reverses the winding of a [ListBuilder]
pub struct ReverseListBuilder<'p, P: PointSet<'p> + ?Sized, LB: ListBuilder<'p, P>>(LB, PhantomData<&'p P>);

impl<'p, P: PointSet<'p> + ?Sized, LB: ListBuilder<'p, P>> ListBuilder<'p, P> for ReverseListBuilder<'p, P, LB> {
    type Output = LB::Output;
    type Error = LB::Error;

    const WINDING: TriangleWinding = LB::WINDING.reverse();

    fn reserve_hint(&mut self, max_triangle_count: usize) -> Result<(), TryReserveError> {
        self.0.reserve_hint(max_triangle_count)
    }

    fn add_triangle(&mut self, vi0: P::Index, vi1: P::Index, vi2: P::Index) -> Result<(), Self::Error> {
        self.0.add_triangle(vi0, vi1, vi2)
    }

    fn build(self) -> Result<Self::Output, Self::Error> {
        self.0.build()
    }

    fn fail(self, error: &TriangulationError<Self::Error>) {
        self.0.fail(error);
    }
}
