use pathsig_algebra::AlgebraError;
use thiserror::Error;

/// Errors that may occur when constructing an [`Interval`](crate::Interval).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum IntervalError {
    /// A bound is NaN or infinite.
    #[error("interval bound is not finite (got {value})")]
    NotFinite { value: f64 },

    /// The start does not precede the end.
    #[error("interval start must be strictly less than its end (got [{start}, {end}))")]
    InvalidBounds { start: f64, end: f64 },
}

/// Errors that may occur when constructing a
/// [`PiecewiseLiePath`](crate::PiecewiseLiePath) or computing its
/// log-signature.
///
/// Everything structural is detected eagerly at construction; no partial
/// computation happens before validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    /// The path has no segments.
    ///
    /// An empty path has no log-signature, so it is rejected up front.
    #[error("a piecewise Lie path needs at least one segment")]
    Empty,

    /// A segment's Lie element differs in shape from the rest of the path.
    #[error(
        "segment {index} has width {found_width} and depth {found_depth}, \
         but the path has width {expected_width} and depth {expected_depth}"
    )]
    InconsistentAlgebra {
        index: usize,
        expected_width: usize,
        expected_depth: usize,
        found_width: usize,
        found_depth: usize,
    },

    /// Segment intervals are not strictly increasing by start time.
    ///
    /// Out-of-order input is rejected rather than sorted: CBH composition
    /// is order-sensitive, so silently reordering would mask caller bugs.
    #[error("segment {index} starts at {start}, which is not after the previous segment's start")]
    UnsortedIntervals { index: usize, start: f64 },

    /// A segment begins before the previous segment ends.
    ///
    /// Overlapping intervals have no coherent piecewise-constant reading.
    /// Gaps, by contrast, are allowed and contribute nothing.
    #[error("segment {index} starts at {start}, before the previous segment ends at {previous_end}")]
    OverlappingIntervals {
        index: usize,
        start: f64,
        previous_end: f64,
    },

    /// The step tolerance is not a positive finite number.
    #[error("step tolerance must be a positive finite number (got {value})")]
    InvalidTolerance { value: f64 },

    /// An algebra-level failure surfaced through a path operation.
    #[error(transparent)]
    Algebra(#[from] AlgebraError),
}
