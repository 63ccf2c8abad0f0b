use std::{collections::TryReserveError, marker::PhantomData};

use crate::{ListFormat, PointSet, TriangulationError, List, ListBuilder};

use super::GenericList;

/// A [ListFormat] which outputs the triangle list by their actual vertex values, not their indices
#[derive(Debug)]
pub struct DeindexedListFormat<'p, P: PointSet<'p> + ?Sized, L: List<P::Vertex>>
where P::Vertex: Clone {
    list: L,
    _phantom: PhantomData<&'p P>,
}

impl<'p, P: PointSet<'p> + ?Sized, L: List<P::Vertex>> DeindexedListFormat<'p, P, L> 
where P::Vertex: Clone {
    /// Create a deindexed format which stores its output in the given [List]
    pub fn new(list: L) -> Self {
        Self { list, _phantom: PhantomData, }
    }
}

impl <'p, P: PointSet<'p> + ?Sized, L: List<P::Vertex>> ListFormat<'p, P> for DeindexedListFormat<'p, P, L> 
where P::Vertex: Clone {
    type Builder = DeindexedListBuilder<'p, P, L>;

    fn initialize(self, point_set: &'p P) -> Result<Self::Builder, <Self::Builder as ListBuilder<'p, P>>::Error> {
        Ok(DeindexedListBuilder {
            list: GenericList::new(self.list),
            point_set,
        })
    }
}

/// The [ListBuilder] of [DeindexedListFormat]
pub struct DeindexedListBuilder<'p, P: PointSet<'p> + ?Sized, L: List<P::Vertex>> 
where P::Vertex: Clone {
    list: GenericList<L, P::Vertex>,
    point_set: &'p P,
}

impl<'p, P: PointSet<'p> + ?Sized, L: List<P::Vertex>> ListBuilder<'p, P> for DeindexedListBuilder<'p, P, L> 
where P::Vertex: Clone {
    type Output = L;
    type Error = std::convert::Infallible;

    fn reserve_hint(&mut self, max_triangle_count: usize) -> Result<(), TryReserveError> {
        self.list.reserve(max_triangle_count)
    }

    fn add_triangle(&mut self, vi0: P::Index, vi1: P::Index, vi2: P::Index) -> Result<(), Self::Error> {
        let (v0, v1, v2) = (self.point_set.get_vertex(vi0).clone(), self.point_set.get_vertex(vi1).clone(), self.point_set.get_vertex(vi2).clone());
        self.list.new_triangle(v0, v1, v2);
        Ok(())
    }
    
    fn build(self) -> Result<Self::Output, Self::Error> {
        Ok(self.list.build())
    }

    fn fail(self, _error: &TriangulationError<Self::Error>) {
        self.list.fail();
    }
}
