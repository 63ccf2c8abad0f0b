use std::{collections::TryReserveError, error, fmt};

use backtrace::Backtrace;

/// A broken engine invariant, with the backtrace of where it was detected
#[derive(Debug)]
pub struct InternalError {
    pub msg: String,
    pub backtrace: Backtrace,
}

impl InternalError {
    #[cold]
    #[inline(always)]
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            backtrace: Backtrace::new_unresolved(),
        }
    }
}

impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{:?}", self.msg, self.backtrace)
    }
}

impl error::Error for InternalError { }

/// Describes an error which occurred during triangulation
#[derive(Debug)]
#[non_exhaustive]
pub enum TriangulationError<LBError: error::Error> {
    /// Fewer than 2 distinct points remained, either in the input or after near-duplicate removal.
    /// Holds the number of points that were left.
    InsufficientPoints(usize),
    /// The coordinate of the `n`th point yielded by [PointSet::iter_indices](crate::PointSet::iter_indices)
    /// could not be represented as a finite [f64].
    InvalidCoordinate(usize),
    /// Memory for the vertex arena or the output could not be reserved.
    AllocationFailure(TryReserveError),
    /// A triangulation invariant was violated. This indicates a bug rather than bad input.
    InternalError(InternalError),
    /// The [ListBuilder](crate::ListBuilder) returned an error.
    ListBuilder(LBError),
}

impl<LBError: error::Error> TriangulationError<LBError> {
    #[inline(always)]
    pub(crate) fn internal(msg: impl Into<String>) -> Self {
        TriangulationError::InternalError(InternalError::new(msg))
    }
}

impl<LBError: error::Error> From<LBError> for TriangulationError<LBError> {
    fn from(e: LBError) -> Self {
        Self::ListBuilder(e)
    }
}

impl<LBError: error::Error> fmt::Display for TriangulationError<LBError> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientPoints(count) => write!(f, "Point set only contains {} distinct points, at least 2 are required", count),
            Self::InvalidCoordinate(n) => write!(f, "Point {} does not have finite coordinates", n),
            Self::AllocationFailure(error) => fmt::Display::fmt(error, f),
            Self::InternalError(error) => fmt::Display::fmt(error, f),
            Self::ListBuilder(error) => fmt::Display::fmt(error, f),
        }
    }
}

impl<LBError: error::Error> error::Error for TriangulationError<LBError> {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::AllocationFailure(error) => Some(error),
            Self::InternalError(error) => Some(error),
            Self::ListBuilder(error) => error.source(), // This should be Some(error), but that forces restricting LBError to 'static.
            _ => None,
        }
    }
}
