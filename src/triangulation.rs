use std::{convert::Infallible, fmt};

use crate::{AdaptivePredicates, PointSet, TriangulationError, TriangulationOptions, formats::IndexedListFormat};

/// A Delaunay triangulation of a borrowed [PointSet], stored as triangles of indices into that set.
///
/// ```
/// use delaunay_tri::Triangulation;
///
/// let points = vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
/// let triangulation = Triangulation::new(&points).unwrap();
/// assert_eq!(triangulation.len(), 2);
/// for [a, b, c] in triangulation.iter_vertices() {
///     println!("{:?} {:?} {:?}", a, b, c);
/// }
/// ```
pub struct Triangulation<'p, P: PointSet<'p> + ?Sized> {
    point_set: &'p P,
    triangles: Vec<[P::Index; 3]>,
}

impl<'p, P: PointSet<'p> + ?Sized> Triangulation<'p, P> {
    /// Triangulates `point_set` with the default [TriangulationOptions]
    pub fn new(point_set: &'p P) -> Result<Self, TriangulationError<Infallible>> {
        Self::with_options(point_set, TriangulationOptions::default())
    }

    /// Triangulates `point_set` with the given `options`
    pub fn with_options(point_set: &'p P, options: TriangulationOptions) -> Result<Self, TriangulationError<Infallible>> {
        let mut triangles = point_set.triangulate_with::<AdaptivePredicates, _>(options, IndexedListFormat::new(Vec::<[P::Index; 3]>::new()))?;
        triangles.shrink_to_fit();
        Ok(Self {
            point_set,
            triangles,
        })
    }

    /// The triangulated [PointSet]
    pub fn points(&self) -> &'p P {
        self.point_set
    }

    /// The number of input points, duplicates included
    pub fn vertex_count(&self) -> usize {
        self.point_set.vertex_count()
    }

    /// The triangles as counterclockwise index triplets
    pub fn triangles(&self) -> &[[P::Index; 3]] {
        &self.triangles
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// The triangles as counterclockwise vertex triplets
    pub fn iter_vertices(&self) -> impl Iterator<Item=[&'p P::Vertex; 3]> + '_ {
        let point_set = self.point_set;
        self.triangles.iter().map(move |[a, b, c]| [point_set.get_vertex(a.clone()), point_set.get_vertex(b.clone()), point_set.get_vertex(c.clone())])
    }

    pub fn into_triangles(self) -> Vec<[P::Index; 3]> {
        self.triangles
    }
}

impl<'p, P: PointSet<'p> + ?Sized> fmt::Debug for Triangulation<'p, P>
where P::Index: fmt::Debug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Triangulation")
            .field("vertex_count", &self.vertex_count())
            .field("triangles", &self.triangles)
            .finish()
    }
}
