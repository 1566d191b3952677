use pathsig_algebra::{LieElement, Scalar, cbh};

use crate::{Interval, PathError};

/// A path whose log-derivative is constant on each of an ordered sequence
/// of intervals.
///
/// Each segment pairs an [`Interval`] with the [`LieElement`] giving the
/// path's constant Lie-algebra increment over that interval. All elements
/// share one (width, depth); segments are strictly increasing by start
/// time and never overlap. Gaps between consecutive segments are allowed
/// and contribute nothing to the log-signature.
///
/// The path is read-only after construction.
///
/// # Examples
///
/// ```
/// use pathsig_algebra::LieElement;
/// use pathsig_streams::{Interval, PiecewiseLiePath};
///
/// let path = PiecewiseLiePath::new(vec![
///     (
///         Interval::new(0.0, 1.0).unwrap(),
///         LieElement::new(&[1.0, 0.0], 2, 2).unwrap(),
///     ),
///     (
///         Interval::new(1.0, 2.0).unwrap(),
///         LieElement::new(&[0.0, 1.0], 2, 2).unwrap(),
///     ),
/// ])
/// .unwrap();
///
/// let log_signature = path.log_signature(0.01).unwrap();
/// assert_eq!(log_signature.degree_one(), &[1.0, 1.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PiecewiseLiePath<T> {
    segments: Vec<(Interval, LieElement<T>)>,
}

impl<T: Scalar> PiecewiseLiePath<T> {
    /// Creates a path from `(Interval, LieElement)` segments in time order.
    ///
    /// # Errors
    ///
    /// Validates eagerly and returns the first failure found:
    ///
    /// - [`PathError::Empty`] if `segments` is empty.
    /// - [`PathError::InconsistentAlgebra`] if any element differs in
    ///   width or depth from the first.
    /// - [`PathError::UnsortedIntervals`] if interval starts are not
    ///   strictly increasing. Input is rejected rather than sorted.
    /// - [`PathError::OverlappingIntervals`] if a segment begins before
    ///   the previous one ends.
    pub fn new(segments: Vec<(Interval, LieElement<T>)>) -> Result<Self, PathError> {
        let Some(((_, first_element), rest)) = segments.split_first() else {
            return Err(PathError::Empty);
        };

        for (offset, (_, element)) in rest.iter().enumerate() {
            if !first_element.is_compatible_with(element) {
                return Err(PathError::InconsistentAlgebra {
                    index: offset + 1,
                    expected_width: first_element.width(),
                    expected_depth: first_element.depth(),
                    found_width: element.width(),
                    found_depth: element.depth(),
                });
            }
        }

        for (offset, window) in segments.windows(2).enumerate() {
            let previous = window[0].0;
            let current = window[1].0;
            let index = offset + 1;
            if current.start() <= previous.start() {
                return Err(PathError::UnsortedIntervals {
                    index,
                    start: current.start(),
                });
            }
            if current.start() < previous.end() {
                return Err(PathError::OverlappingIntervals {
                    index,
                    start: current.start(),
                    previous_end: previous.end(),
                });
            }
        }

        Ok(Self { segments })
    }

    /// The segments in time order.
    ///
    /// The iterator is lazy, finite, and restartable: each call starts a
    /// fresh traversal.
    pub fn segments(&self) -> impl Iterator<Item = &(Interval, LieElement<T>)> {
        self.segments.iter()
    }

    /// Number of generators shared by every segment element.
    #[must_use]
    pub fn width(&self) -> usize {
        self.segments[0].1.width()
    }

    /// Truncation depth shared by every segment element.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments[0].1.depth()
    }

    /// Number of segments, always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always `false`: construction rejects empty paths.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The interval hull of the path, from the first segment's start to
    /// the last segment's end.
    #[must_use]
    pub fn domain(&self) -> Interval {
        let (first, _) = &self.segments[0];
        let (last, _) = &self.segments[self.segments.len() - 1];
        // Safe because construction guarantees at least one segment with
        // strictly increasing, finite bounds.
        Interval::new(first.start(), last.end()).unwrap()
    }

    /// The log-signature of the whole path: the iterated CBH combination
    /// of the segment elements in time order.
    ///
    /// `step_tolerance` bounds the sub-interval width a general-path
    /// computation would refine to. A piecewise-constant path needs no
    /// subdivision, so the tolerance does not affect the value beyond
    /// floating-point rounding; it is validated and accepted for interface
    /// parity with general-path log-signature computation.
    ///
    /// A single-segment path returns its element unchanged, exactly.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidTolerance`] if `step_tolerance` is not
    /// a positive finite number.
    pub fn log_signature(&self, step_tolerance: f64) -> Result<LieElement<T>, PathError> {
        if !step_tolerance.is_finite() || step_tolerance <= 0.0 {
            return Err(PathError::InvalidTolerance {
                value: step_tolerance,
            });
        }

        let mut elements = self.segments.iter().map(|(_, element)| element);
        let Some(first) = elements.next() else {
            // Unreachable: construction rejects empty paths.
            return Err(PathError::Empty);
        };
        let mut combined = first.clone();
        for element in elements {
            combined = cbh(&combined, element)?;
        }
        Ok(combined)
    }
}
