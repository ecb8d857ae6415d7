use rootbracket::root_finding::algorithms::Algorithm;
use rootbracket::root_finding::bisection::{Bisection, BisectionCfg, BisectionError};
use rootbracket::root_finding::report::RootFindingReport;
use rootbracket::RootFinder;
use std::f64::consts::PI;

type TestResult = Result<(), BisectionError>;

/// Caller code written against the trait only.
fn solve_all<R: RootFinder>(
    finder: &R,
    f: impl FnMut(f64) -> f64,
    brackets: &[(f64, f64)],
) -> Result<Vec<RootFindingReport>, R::Error> {
    finder.find_roots(f, brackets)
}

#[test]
fn reports_its_algorithm() {
    let finder = Bisection::default();
    assert_eq!(finder.algorithm(), Algorithm::BISECTION);
    assert!(finder.algorithm().requires_bracket());
    assert_eq!(*finder.cfg(), BisectionCfg::new());
}

#[test]
fn single_root_through_the_trait() -> TestResult {
    let finder = Bisection::new(BisectionCfg::fixed_budget(25)?);
    let res    = finder.find_root(|x: f64| x * x - 3.0, 1.0, 2.0)?;

    assert_eq!(res.root, 1.7320508062839508);
    assert_eq!(res.iterations, 25);
    assert_eq!(res.algorithm_name, finder.algorithm().algorithm_name());
    Ok(())
}

#[test]
fn several_brackets_share_one_objective() -> TestResult {
    let finder = Bisection::default();
    let mut calls = 0;

    let reports = solve_all(
        &finder,
        |x: f64| { calls += 1; x.sin() },
        &[(3.0, 4.0), (6.0, 7.0), (-4.0, -3.0)],
    )?;

    let expected = [PI, 2.0 * PI, -PI];
    assert_eq!(reports.len(), expected.len());
    for (res, r) in reports.iter().zip(expected) {
        assert!(res.converged());
        assert!((res.root - r).abs() <= 1e-11, "{} vs {r}", res.root);
    }

    let total: usize = reports.iter().map(|r| r.evaluations).sum();
    assert_eq!(calls, total);
    Ok(())
}

#[test]
fn first_failing_bracket_is_reported() {
    let finder = Bisection::default();
    let err = solve_all(&finder, f64::sin, &[(3.0, 4.0), (0.5, 1.0), (6.0, 7.0)]).unwrap_err();
    assert!(matches!(err, BisectionError::NoSignChange { a: 0.5, b: 1.0 }));
}

#[test]
fn no_brackets_no_reports() -> TestResult {
    let reports = Bisection::default().find_roots(f64::cos, &[])?;
    assert!(reports.is_empty());
    Ok(())
}
