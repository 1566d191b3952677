//! Cross-checks the two log-signature entry points: the path-level
//! computation and the direct CBH combination of the segment increments.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use integration_tests::{lie_segments, piecewise_lie_path, unit_intervals};
use pathsig_algebra::LieElement;
use pathsig_streams::{PathError, PiecewiseLiePath, SignatureContext};

const WIDTH: usize = 5;
const DEPTH: usize = 3;

fn assert_elements_close(found: &LieElement<f64>, expected: &LieElement<f64>, epsilon: f64) {
    assert!(found.is_compatible_with(expected));
    for (&f, &e) in found
        .dense_coefficients()
        .iter()
        .zip(expected.dense_coefficients())
    {
        assert_relative_eq!(f, e, epsilon = epsilon, max_relative = epsilon);
    }
}

#[test]
fn path_log_signature_matches_direct_cbh() {
    let ctx = SignatureContext::<f64>::new(WIDTH, DEPTH).unwrap();

    for count in [1, 2, 5] {
        let segments = lie_segments(count, WIDTH, DEPTH);
        let elements: Vec<LieElement<f64>> = segments
            .iter()
            .map(|(_, element)| element.clone())
            .collect();
        let path = PiecewiseLiePath::new(segments).unwrap();

        let expected = ctx.cbh(&elements).unwrap();
        for tolerance in [0.1, 0.01, 0.001] {
            let result = ctx.path_log_signature(&path, tolerance).unwrap();
            assert_elements_close(&result, &expected, 1e-12);
        }
    }
}

#[test]
fn tolerance_does_not_change_the_result() {
    let path = piecewise_lie_path(5, WIDTH, DEPTH);
    let reference = path.log_signature(1.0).unwrap();

    for tolerance in [1e-1, 1e-3, 1e-6, 1e-9] {
        let result = path.log_signature(tolerance).unwrap();
        for (&f, &e) in result
            .dense_coefficients()
            .iter()
            .zip(reference.dense_coefficients())
        {
            assert_abs_diff_eq!(f, e, epsilon = 1e-10);
        }
    }
}

#[test]
fn two_generator_segments_compose_as_expected() {
    // Width 5, depth 3, increments along the first two generators over
    // [0, 1) and [1, 2).
    let ctx = SignatureContext::<f64>::new(WIDTH, DEPTH).unwrap();
    let l1 = ctx.lie(&[1.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
    let l2 = ctx.lie(&[0.0, 1.0, 0.0, 0.0, 0.0]).unwrap();

    let intervals = unit_intervals(2);
    let path = PiecewiseLiePath::new(vec![
        (intervals[0], l1.clone()),
        (intervals[1], l2.clone()),
    ])
    .unwrap();

    let result = path.log_signature(0.01).unwrap();
    let direct = ctx.cbh(&[l1.clone(), l2.clone()]).unwrap();
    assert_eq!(result, direct);

    // At depth 3 the CBH series terminates:
    // L1 + L2 + ½[L1,L2] + 1/12([L1,[L1,L2]] + [L2,[L2,L1]]).
    let bracket = l1.bracket(&l2).unwrap();
    let expected = l1
        .add(&l2)
        .unwrap()
        .add(&bracket.scale(0.5))
        .unwrap()
        .add(&l1.bracket(&bracket).unwrap().scale(1.0 / 12.0))
        .unwrap()
        .add(&l2.bracket(&bracket).unwrap().scale(-1.0 / 12.0))
        .unwrap();
    assert_elements_close(&result, &expected, 1e-12);

    // Spot-check the ½[L1,L2] contribution: words (1,2) and (2,1) sit at
    // dense offsets 5 + 1 and 5 + 5 for width 5.
    let dense = result.dense_coefficients();
    assert_relative_eq!(dense[0], 1.0, epsilon = 1e-12);
    assert_relative_eq!(dense[1], 1.0, epsilon = 1e-12);
    assert_relative_eq!(dense[6], 0.5, epsilon = 1e-12);
    assert_relative_eq!(dense[10], -0.5, epsilon = 1e-12);
}

#[test]
fn direct_cbh_is_order_sensitive() {
    let ctx = SignatureContext::<f64>::new(WIDTH, DEPTH).unwrap();
    let l1 = ctx.lie(&[1.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
    let l2 = ctx.lie(&[0.0, 1.0, 0.0, 0.0, 0.0]).unwrap();

    let forward = ctx.cbh(&[l1.clone(), l2.clone()]).unwrap();
    let backward = ctx.cbh(&[l2, l1]).unwrap();
    assert_ne!(forward, backward);
}

#[test]
fn mixed_shape_segments_are_rejected() {
    let intervals = unit_intervals(2);
    let result = PiecewiseLiePath::new(vec![
        (
            intervals[0],
            LieElement::new(&[1.0; WIDTH], WIDTH, DEPTH).unwrap(),
        ),
        (
            intervals[1],
            LieElement::new(&[1.0; WIDTH], WIDTH, DEPTH + 1).unwrap(),
        ),
    ]);
    assert!(matches!(
        result,
        Err(PathError::InconsistentAlgebra { .. })
    ));
}

#[test]
fn empty_direct_cbh_is_rejected() {
    let ctx = SignatureContext::<f64>::new(WIDTH, DEPTH).unwrap();
    assert!(ctx.cbh(&[]).is_err());
}
