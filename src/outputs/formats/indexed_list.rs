use std::{collections::TryReserveError, marker::PhantomData};

use crate::{ListFormat, PointSet, TriangulationError, List, ListBuilder};

use super::GenericList;

/// A [ListFormat] which outputs the triangle list by its indices
#[derive(Debug)]
pub struct IndexedListFormat<'p, P: PointSet<'p> + ?Sized, L: List<P::Index>> {
    list: L,
    _phantom: PhantomData<&'p P>,
}

impl<'p, P: PointSet<'p> + ?Sized, L: List<P::Index>> IndexedListFormat<'p, P, L> {
    /// Create an indexed format which stores its output in the given [List]
    pub fn new(list: L) -> Self {
        Self { list, _phantom: PhantomData, }
    }
}

impl <'p, P: PointSet<'p> + ?Sized, L: List<P::Index>> ListFormat<'p, P> for IndexedListFormat<'p, P, L> {
    type Builder = IndexedListBuilder<'p, P, L>;

    fn initialize(self, _point_set: &'p P) -> Result<Self::Builder, <Self::Builder as ListBuilder<'p, P>>::Error> {
        Ok(IndexedListBuilder {
            list: GenericList::new(self.list),
            _phantom: PhantomData,
        })
    }
}

/// The [ListBuilder] of [IndexedListFormat]
pub struct IndexedListBuilder<'p, P: PointSet<'p> + ?Sized, L: List<P::Index>> {
    list: GenericList<L, P::Index>,
    _phantom: PhantomData<&'p P>,
}

impl<'p, P: PointSet<'p> + ?Sized, L: List<P::Index>> ListBuilder<'p, P> for IndexedListBuilder<'p, P, L> {
    type Output = L;
    type Error = std::convert::Infallible;

    fn reserve_hint(&mut self, max_triangle_count: usize) -> Result<(), TryReserveError> {
        self.list.reserve(max_triangle_count)
    }

    fn add_triangle(&mut self, vi0: P::Index, vi1: P::Index, vi2: P::Index) -> Result<(), Self::Error> {
        self.list.new_triangle(vi0, vi1, vi2);
        Ok(())
    }
    
    fn build(self) -> Result<Self::Output, Self::Error> {
        Ok(self.list.build())
    }

    fn fail(self, _error: &TriangulationError<Self::Error>) {
        self.list.fail();
    }
}
