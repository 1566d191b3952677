//! Shared fixtures for the pathsig integration tests.

use pathsig_algebra::LieElement;
use pathsig_streams::{Interval, PiecewiseLiePath};

/// Deterministic pseudo-random degree-1 coefficients in `[-1, 1)`.
///
/// A fixed-increment LCG keeps the test data varied but reproducible
/// without pulling in a random-number dependency.
#[must_use]
pub fn degree_one_coefficients(seed: u64, width: usize) -> Vec<f64> {
    let mut state = seed
        .wrapping_mul(6_364_136_223_846_793_005)
        .wrapping_add(1_442_695_040_888_963_407);
    (0..width)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            ((state >> 11) as f64 / (1u64 << 53) as f64) * 2.0 - 1.0
        })
        .collect()
}

/// Unit-width intervals `[0, 1), [1, 2), …` up to `count` segments.
#[must_use]
pub fn unit_intervals(count: usize) -> Vec<Interval> {
    (0..count)
        .map(|i| Interval::new(i as f64, (i + 1) as f64).unwrap())
        .collect()
}

/// One varied Lie increment per unit interval.
#[must_use]
pub fn lie_segments(count: usize, width: usize, depth: usize) -> Vec<(Interval, LieElement<f64>)> {
    unit_intervals(count)
        .into_iter()
        .enumerate()
        .map(|(i, interval)| {
            let coefficients = degree_one_coefficients(i as u64, width);
            let element = LieElement::new(&coefficients, width, depth).unwrap();
            (interval, element)
        })
        .collect()
}

/// A piecewise Lie path over `count` unit intervals.
#[must_use]
pub fn piecewise_lie_path(count: usize, width: usize, depth: usize) -> PiecewiseLiePath<f64> {
    PiecewiseLiePath::new(lie_segments(count, width, depth)).unwrap()
}
