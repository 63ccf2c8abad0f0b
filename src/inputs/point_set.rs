use std::{convert::TryInto, marker::PhantomData, ops};

use crate::{AdaptivePredicates, ListBuilder, ListFormat, Predicates, TriangulationError, TriangulationOptions, VertexIndex, do_triangulate};

use super::vertex::Vertex;

/// An indexable set of points to be triangulated
pub trait PointSet<'p>: 'p {
    /// The type of the points
    type Vertex: Vertex + 'p;
    /// A type used to uniquely identify a [Vertex] (e.g. [usize] for a [Vec<\[f64; 2\]>](Vec))
    type Index: VertexIndex + 'p;
    /// The [Iterator] type that [PointSet::iter_indices] returns
    type Iter<'i>: Iterator<Item=Self::Index>
    where Self: 'i, Self::Vertex: 'i, 'p: 'i;

    /// Provides the number of points, duplicates included.
    fn vertex_count(&self) -> usize;

    /// Iterate through the [PointSet::Index] of every point, in any order, each exactly once.
    fn iter_indices<'i>(&'i self) -> Self::Iter<'i>
    where Self: 'i, Self::Vertex: 'i, 'p: 'i;

    /// Get the [PointSet::Vertex] uniquely identified by `index`
    fn get_vertex<'a>(&'a self, index: Self::Index) -> &'a Self::Vertex
    where 'p: 'a;

    /// Substitute the [usize] index type with a narrower one such as [u32] or [u16].
    ///
    /// # Panics
    ///
    /// Triangulation panics if an index of this [PointSet] does not fit into `New`.
    fn index_with<New>(self) -> IndexWith<'p, Self, New>
    where Self: Sized + PointSet<'p, Index=usize>,
          New: VertexIndex + TryFrom<usize> + TryInto<usize> {
        IndexWith::new(self)
    }

    /// Triangulate the points into the layout specified by `format`, using the default
    /// [TriangulationOptions] and [AdaptivePredicates].
    ///
    /// Emitted triangles reference the original indices of the points, not their sorted positions.
    fn triangulate<F: ListFormat<'p, Self>>(&'p self, format: F) -> Result<<F::Builder as ListBuilder<'p, Self>>::Output, TriangulationError<<F::Builder as ListBuilder<'p, Self>>::Error>> {
        do_triangulate::<AdaptivePredicates, Self, F>(self, TriangulationOptions::default(), format)
    }

    /// Triangulate the points with explicit `options` and predicate backend `K`
    fn triangulate_with<K: Predicates, F: ListFormat<'p, Self>>(&'p self, options: TriangulationOptions, format: F) -> Result<<F::Builder as ListBuilder<'p, Self>>::Output, TriangulationError<<F::Builder as ListBuilder<'p, Self>>::Error>> {
        do_triangulate::<K, Self, F>(self, options, format)
    }
}

impl<'p, V: 'p + Vertex, T: 'p + ops::Deref<Target=[V]>> PointSet<'p> for T {
    type Vertex = V;
    type Index = usize;
    type Iter<'i> = ops::Range<usize>
    where Self: 'i, Self::Vertex: 'i, 'p: 'i;

    fn vertex_count(&self) -> usize {
        (**self).len()
    }

    fn iter_indices<'i>(&'i self) -> Self::Iter<'i>
    where Self: 'i, Self::Vertex: 'i, 'p: 'i {
        0..self.vertex_count()
    }

    fn get_vertex<'a>(&'a self, index: Self::Index) -> &'a Self::Vertex
    where 'p: 'a {
        &(**self)[index]
    }
}

fn conversion_panic<T, U>(_: T) -> U {
    panic!("Conversion of index failed")
}

/// [Iterator] for the [IndexWith] wrapper
pub struct IndexWithIter<Iter: Iterator<Item=usize>, New> {
    iter: Iter,
    _phantom: PhantomData<New>,
}

impl<Iter: Iterator<Item=usize>, New: TryFrom<usize>> Iterator for IndexWithIter<Iter, New> {
    type Item = New;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|i| New::try_from(i).unwrap_or_else(conversion_panic))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Wrapper to change the [PointSet::Index] type. Created by [PointSet::index_with].
#[derive(Debug, Clone, Copy)]
pub struct IndexWith<'p, P: PointSet<'p, Index=usize>, New>(P, PhantomData<&'p New>);

impl<'p, P: PointSet<'p, Index=usize>, New> IndexWith<'p, P, New> {
    fn new(point_set: P) -> Self {
        Self(point_set, PhantomData)
    }

    /// The wrapped [PointSet]
    pub fn inner(&self) -> &P {
        &self.0
    }
}

impl<'p, P: PointSet<'p, Index=usize>, New: 'p + VertexIndex + TryFrom<usize> + TryInto<usize>> PointSet<'p> for IndexWith<'p, P, New> {
    type Vertex = P::Vertex;
    type Index = New;
    type Iter<'i> = IndexWithIter<P::Iter<'i>, New>
    where Self: 'i, Self::Vertex: 'i, 'p: 'i;

    fn vertex_count(&self) -> usize {
        self.0.vertex_count()
    }

    fn iter_indices<'i>(&'i self) -> Self::Iter<'i>
    where Self: 'i, Self::Vertex: 'i, 'p: 'i {
        IndexWithIter { iter: self.0.iter_indices(), _phantom: PhantomData }
    }

    fn get_vertex<'a>(&'a self, index: Self::Index) -> &'a Self::Vertex
    where 'p: 'a {
        self.0.get_vertex(index.try_into().unwrap_or_else(conversion_panic))
    }
}
