//! Property tests for the root finder, companion builder and singularity check.

use frobenius_core::prelude::*;
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn coefficients(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-100.0..100.0_f64, 1..=max_len)
}

fn with_nonzero_leading(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    (coefficients(max_len), prop_oneof![-100.0..-0.5_f64, 0.5..100.0_f64]).prop_map(
        |(mut coef, leading)| {
            let last = coef.len() - 1;
            coef[last] = leading;
            coef
        },
    )
}

/// `x^n - 1` for `sign = -1`, `x^n + 1` for `sign = 1`.
fn roots_of_unity(n: usize, sign: f64) -> Vec<f64> {
    let mut coef = vec![0.0; n + 1];
    coef[0] = sign;
    coef[n] = 1.0;
    coef
}

proptest! {
    #[test]
    fn perturbation_stays_within_bound(coef in with_nonzero_leading(8), seed in any::<u64>()) {
        let bound = PerturbationConfig::<f64>::default().bound().unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let output = find_roots_with_rng(&coef, &mut rng).unwrap();

        prop_assert_eq!(output.perturbed.len(), coef.len());
        for (p, c) in output.perturbed.iter().zip(&coef) {
            prop_assert!((p - c).abs() <= bound * (1.0 + c.abs()));
        }
        prop_assert_eq!(output.roots.len(), coef.len() - 1);
    }

    #[test]
    fn roots_of_unity_lie_on_the_unit_circle(
        n in 2usize..=12,
        sign in prop_oneof![Just(-1.0_f64), Just(1.0)],
        seed in any::<u64>(),
    ) {
        let coef = roots_of_unity(n, sign);

        let exact = polynomial_roots(&coef).unwrap();
        prop_assert_eq!(exact.len(), n);
        for root in exact.iter() {
            prop_assert!((root.norm() - 1.0).abs() < 1e-8, "|{}| != 1", root);
            prop_assert!(evaluate(&coef, *root).norm() < 1e-8);
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let output = find_roots_with_rng(&coef, &mut rng).unwrap();
        prop_assert_eq!(output.roots.len(), n);
        for root in output.roots.iter() {
            prop_assert!((root.norm() - 1.0).abs() < 1e-6, "|{}| != 1", root);
        }
    }

    #[test]
    fn companion_has_shifted_identity_and_normalized_last_row(coef in with_nonzero_leading(9)) {
        let n = coef.len() - 1;
        let m = build_companion(&coef).unwrap();
        prop_assert_eq!(m.shape(), (n, n));

        for i in 0..n.saturating_sub(1) {
            for j in 0..n {
                let expected = if j == i + 1 { 1.0 } else { 0.0 };
                prop_assert_eq!(m[(i, j)], expected);
            }
        }
        if n > 0 {
            for j in 0..n {
                let expected = -coef[j] / coef[n];
                prop_assert!((m[(n - 1, j)] - expected).abs() <= 1e-12 * expected.abs().max(1.0));
            }
        }
    }

    #[test]
    fn companion_with_zero_leading_is_rejected(mut coef in coefficients(6)) {
        let last = coef.len() - 1;
        coef[last] = 0.0;
        prop_assert_eq!(build_companion(&coef), Err(FrobeniusError::DegenerateCoefficient));
    }

    #[test]
    fn companion_singularity_follows_constant_term(coef in with_nonzero_leading(6)) {
        prop_assume!(coef.len() >= 2);
        let n = coef.len() - 1;

        // |det(C)| = |a_0 / a_n|
        let mut zero_constant = coef.clone();
        zero_constant[0] = 0.0;
        let m = build_companion(&zero_constant).unwrap();
        prop_assert_eq!(is_nonsingular(&m), Ok(false));

        let mut unit_constant = coef.clone();
        unit_constant[0] = unit_constant[n];
        let m = build_companion(&unit_constant).unwrap();
        prop_assert_eq!(is_nonsingular(&m), Ok(true));
    }

    #[test]
    fn rectangular_matrices_are_rejected(rows in 1usize..6, cols in 1usize..6) {
        prop_assume!(rows != cols);
        let m = DMatrix::<f64>::zeros(rows, cols);
        prop_assert_eq!(is_nonsingular(&m), Err(FrobeniusError::NotSquare { rows, cols }));
    }
}

#[test]
fn identity_and_zero_matrices() {
    for n in 1..=10 {
        assert_eq!(is_nonsingular(&DMatrix::<f64>::identity(n, n)), Ok(true));
        assert_eq!(is_nonsingular(&DMatrix::<f64>::zeros(n, n)), Ok(false));
    }
}

#[test]
fn repeated_roots_are_found_approximately() {
    // (x - 1)^2 (x + 2)
    let coef = [2.0_f64, -3.0, 0.0, 1.0];
    let mut rng = StdRng::seed_from_u64(21);
    let output = find_roots_with_rng(&coef, &mut rng).unwrap();

    assert_eq!(output.roots.len(), 3);
    assert!((output.roots[0].re + 2.0).abs() < 1e-6);
    // a double root splits by roughly the square root of the noise
    for root in output.roots.iter().skip(1) {
        assert!((root.re - 1.0).abs() < 1e-3);
        assert!(root.im.abs() < 1e-3);
    }
}

#[test]
fn roots_have_small_residuals() {
    let coef = [3.0_f64, -1.0, 4.0, -1.0, 5.0, 9.0];
    let mut rng = StdRng::seed_from_u64(1234);
    let output = find_roots_with_rng(&coef, &mut rng).unwrap();

    assert_eq!(output.roots.len(), 5);
    for &root in output.roots.iter() {
        let value = evaluate(output.perturbed.as_slice(), root);
        assert!(value.norm() < 1e-8, "residual {} at {}", value.norm(), root);
    }
}
