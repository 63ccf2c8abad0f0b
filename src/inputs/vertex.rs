use std::fmt::{self, Debug};

use num_traits::{ToPrimitive, real::Real};

/// A two-dimensional point.
///
/// The coordinate type must implement [num_traits::real::Real], reexported as [crate::Real].
pub trait Vertex {
    /// The type of the individual `x` and `y` coordinates
    type Coordinate: Real;

    /// The x [Vertex::Coordinate] value
    fn x(&self) -> Self::Coordinate;
    /// The y [Vertex::Coordinate] value
    fn y(&self) -> Self::Coordinate;
}

/// Coordinates of a [Vertex] widened to [f64], the precision the predicates work in.
#[derive(Clone, Copy, PartialEq)]
pub(crate) struct Coords([f64; 2]);

impl Coords {
    pub fn new(x: f64, y: f64) -> Self { Self([x, y]) }

    /// Converts a [Vertex], rejecting coordinates that are not representable or not finite
    pub fn from_vertex<V: Vertex>(v: &V) -> Option<Self> {
        let x = v.x().to_f64()?;
        let y = v.y().to_f64()?;
        if x.is_finite() && y.is_finite() {
            Some(Self([x, y]))
        } else {
            None
        }
    }

    pub fn x(&self) -> f64 { self.0[0] }
    pub fn y(&self) -> f64 { self.0[1] }

    pub fn to_array(self) -> [f64; 2] { self.0 }
}

impl fmt::Debug for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Coords")
            .field(&self.x())
            .field(&self.y())
            .finish()
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}

impl<C: Debug + Real> Vertex for [C; 2] {
    type Coordinate = C;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        self[0]
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        self[1]
    }
}

impl<C: Debug + Real> Vertex for (C, C) {
    type Coordinate = C;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        self.0
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        self.1
    }
}
