//! Orientation and in-circle sign tests.
//!
//! The triangulation only ever looks at the sign of these determinants, and a wrong sign near a
//! degeneracy corrupts the merge irrecoverably, so every backend must answer exactly.

use robust::Coord;

/// The sign of a geometric determinant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    /// Classifies a determinant value
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            Sign::Positive
        } else if value < 0.0 {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }

    pub const fn is_positive(self) -> bool {
        matches!(self, Sign::Positive)
    }
}

/// A backend answering the two sign tests the triangulation is built on.
pub trait Predicates {
    /// [Sign::Positive] if `a -> b -> c` turns counterclockwise, [Sign::Negative] if clockwise,
    /// [Sign::Zero] if the points are collinear.
    fn orientation(a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> Sign;

    /// [Sign::Positive] if `d` lies strictly inside the circle through the counterclockwise
    /// triangle `a, b, c`, [Sign::Negative] if outside, [Sign::Zero] if on the circle.
    fn in_circle(a: [f64; 2], b: [f64; 2], c: [f64; 2], d: [f64; 2]) -> Sign;

    /// `x` lies strictly to the right of the directed line `e1 -> e2`
    #[inline]
    fn right_of(x: [f64; 2], e1: [f64; 2], e2: [f64; 2]) -> bool {
        Self::orientation(x, e2, e1).is_positive()
    }

    /// `x` lies strictly to the left of the directed line `e1 -> e2`
    #[inline]
    fn left_of(x: [f64; 2], e1: [f64; 2], e2: [f64; 2]) -> bool {
        Self::orientation(x, e1, e2).is_positive()
    }
}

/// Shewchuk's adaptive-precision predicates.
///
/// A floating-point approximation is computed first; only when its error bound cannot rule out a
/// sign change is the determinant re-evaluated with exact expansion arithmetic.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdaptivePredicates;

#[inline(always)]
fn coord(p: [f64; 2]) -> Coord<f64> {
    Coord { x: p[0], y: p[1] }
}

impl Predicates for AdaptivePredicates {
    #[inline]
    fn orientation(a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> Sign {
        Sign::of(robust::orient2d(coord(a), coord(b), coord(c)))
    }

    #[inline]
    fn in_circle(a: [f64; 2], b: [f64; 2], c: [f64; 2], d: [f64; 2]) -> Sign {
        Sign::of(robust::incircle(coord(a), coord(b), coord(c), coord(d)))
    }
}

/// [Predicates::orientation] evaluated with [AdaptivePredicates]
pub fn orientation(a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> Sign {
    AdaptivePredicates::orientation(a, b, c)
}

/// [Predicates::in_circle] evaluated with [AdaptivePredicates]
pub fn in_circle(a: [f64; 2], b: [f64; 2], c: [f64; 2], d: [f64; 2]) -> Sign {
    AdaptivePredicates::in_circle(a, b, c, d)
}
