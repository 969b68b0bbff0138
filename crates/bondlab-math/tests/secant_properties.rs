//! Property tests for the secant solver.

use bondlab_math::prelude::*;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn recovers_linear_roots(root in -50.0f64..50.0, slope in 0.1f64..20.0) {
        let f = |x: f64| slope * (x - root);
        let result = secant(f, root - 7.0, root + 3.0, &SolverConfig::default()).unwrap();

        prop_assert!((result.root - root).abs() < 1e-9);
        prop_assert!(result.residual.abs() <= 1e-12);
    }

    #[test]
    fn recovers_annuity_yield(rate in 0.001f64..0.45, periods in 1i32..=360) {
        let pv = |y: f64| (1..=periods).map(|t| 5.0 / (1.0 + y).powi(t)).sum::<f64>();
        let target = pv(rate);

        let result = SecantSolver
            .find_root(|y| pv(y) - target, 0.0, 0.5, &SolverConfig::default().with_tolerance(1e-10))
            .unwrap();

        prop_assert!((result.root - rate).abs() < 1e-8);
    }
}

#[test]
fn failures_report_seeds() {
    let err = secant(|x: f64| x * x + 1.0, 0.0, 0.5, &SolverConfig::new(1e-12, 3)).unwrap_err();
    match err {
        MathError::MaxIterationsExceeded { lower, upper, .. }
        | MathError::RootNotFound { lower, upper } => {
            assert_eq!(lower, 0.0);
            assert_eq!(upper, 0.5);
        }
        other => panic!("unexpected error {other:?}"),
    }
}
