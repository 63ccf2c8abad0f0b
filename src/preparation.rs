use std::error;

use crate::{Coords, PointSet, TriangulationError, math};

/// Two points closer than this in both coordinates are treated as the same point
pub const DEFAULT_EPSILON: f64 = 1e-12;

/// Fewer distinct points than this cannot form an edge
pub(crate) const MIN_POINTS: usize = 2;

/// Tunables for a triangulation run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangulationOptions {
    /// Points whose x and y both differ by no more than this are merged before triangulating.
    /// The one that sorts first is kept; of exact duplicates, that is the one listed first.
    pub duplicate_epsilon: f64,
}

impl TriangulationOptions {
    pub fn with_duplicate_epsilon(mut self, duplicate_epsilon: f64) -> Self {
        self.duplicate_epsilon = duplicate_epsilon;
        self
    }
}

impl Default for TriangulationOptions {
    fn default() -> Self {
        Self {
            duplicate_epsilon: DEFAULT_EPSILON,
        }
    }
}

/// Points sorted by x then y with near duplicates removed, along with their original indices
#[derive(Debug)]
pub(crate) struct PreparedPoints<Index> {
    coords: Vec<Coords>,
    indices: Vec<Index>,
}

impl<Index: Clone> PreparedPoints<Index> {
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn coords(&self) -> &[Coords] {
        &self.coords
    }

    /// The original index of the point at sorted position `position`
    pub fn index(&self, position: usize) -> Index {
        self.indices[position].clone()
    }

    /// Sorts the points of `point_set` and drops near duplicates
    pub fn prepare<'p, P: PointSet<'p, Index=Index> + ?Sized, LBError: error::Error>(point_set: &'p P, epsilon: f64) -> Result<Self, TriangulationError<LBError>> {
        let point_count = point_set.vertex_count();
        if point_count < MIN_POINTS {
            return Err(TriangulationError::InsufficientPoints(point_count));
        }

        let mut points = Vec::new();
        points.try_reserve_exact(point_count).map_err(TriangulationError::AllocationFailure)?;
        for (n, index) in point_set.iter_indices().enumerate() {
            let coords = Coords::from_vertex(point_set.get_vertex(index.clone())).ok_or(TriangulationError::InvalidCoordinate(n))?;
            points.push((coords, index));
        }

        // Stable, so exact duplicates stay in input order and the first one listed survives
        points.sort_by(|(a, _), (b, _)| math::lexicographic(a, b));

        let mut coords: Vec<Coords> = Vec::new();
        let mut indices = Vec::new();
        // Start of each run of kept points sharing one x value, within which y ascends
        let mut columns: Vec<usize> = Vec::new();
        coords.try_reserve_exact(points.len()).map_err(TriangulationError::AllocationFailure)?;
        indices.try_reserve_exact(points.len()).map_err(TriangulationError::AllocationFailure)?;
        for (c, index) in points {
            // Near duplicates need not be adjacent after sorting, e.g. (0, 0), (1e-13, -5), (1e-13, 1e-13),
            // so every column within epsilon on x is searched for the lowest point not below c by more than epsilon
            let duplicate = (0..columns.len())
                .rev()
                .take_while(|&j| c.x() - coords[columns[j]].x() <= epsilon)
                .any(|j| {
                    let end = columns.get(j + 1).copied().unwrap_or(coords.len());
                    let column = &coords[columns[j]..end];
                    let nearest = column.partition_point(|kept| c.y() - kept.y() > epsilon);
                    column.get(nearest).map_or(false, |kept| math::is_near_duplicate(kept, &c, epsilon))
                });
            if !duplicate {
                if coords.last().map_or(true, |last| last.x() != c.x()) {
                    columns.push(coords.len());
                }
                coords.push(c);
                indices.push(index);
            }
        }

        if coords.len() < MIN_POINTS {
            return Err(TriangulationError::InsufficientPoints(coords.len()));
        }

        Ok(Self {
            coords,
            indices,
        })
    }
}
