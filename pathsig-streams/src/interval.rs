use std::cmp::Ordering;

use crate::IntervalError;

/// A half-open real time interval `[start, end)`.
///
/// Immutable once created. Bounds are finite and satisfy `start < end`.
/// Because of these invariants, `Interval` implements [`Eq`] and [`Ord`]
/// even though raw `f64` does not: intervals order by start time, with
/// ties broken by end time.
///
/// # Examples
///
/// ```
/// use pathsig_streams::Interval;
///
/// let first = Interval::new(0.0, 1.0).unwrap();
/// let second = Interval::new(1.0, 2.0).unwrap();
/// assert!(first < second);
/// assert_eq!(first.width(), 1.0);
///
/// assert!(Interval::new(1.0, 1.0).is_err());
/// assert!(Interval::new(f64::NAN, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    start: f64,
    end: f64,
}

impl Interval {
    /// Creates an interval if `start < end` and both bounds are finite.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::NotFinite`] if either bound is NaN or
    /// infinite, and [`IntervalError::InvalidBounds`] if `start >= end`.
    pub fn new(start: f64, end: f64) -> Result<Self, IntervalError> {
        if !start.is_finite() {
            return Err(IntervalError::NotFinite { value: start });
        }
        if !end.is_finite() {
            return Err(IntervalError::NotFinite { value: end });
        }
        if start >= end {
            return Err(IntervalError::InvalidBounds { start, end });
        }
        Ok(Self { start, end })
    }

    /// The inclusive lower bound.
    #[must_use]
    pub fn start(self) -> f64 {
        self.start
    }

    /// The exclusive upper bound.
    #[must_use]
    pub fn end(self) -> f64 {
        self.end
    }

    /// The interval's length, always positive.
    #[must_use]
    pub fn width(self) -> f64 {
        self.end - self.start
    }
}

// Safe because `Interval::new` forbids NaN and infinity.
impl Eq for Interval {}

impl Ord for Interval {
    /// Orders by start time, breaking ties by end time.
    ///
    /// The unwraps are safe because construction guarantees finite bounds,
    /// so `partial_cmp` always returns `Some(_)`.
    fn cmp(&self, other: &Self) -> Ordering {
        self.start
            .partial_cmp(&other.start)
            .unwrap()
            .then_with(|| self.end.partial_cmp(&other.end).unwrap())
    }
}

impl PartialOrd for Interval {
    /// Delegates to [`Ord::cmp`] to ensure a total, consistent ordering.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
