//! tests for the fixed-budget entry points
use rootbracket::root_finding::bisection::{
    bisection, find_root, find_root_unchecked, BisectionCfg, BisectionError,
};
use rootbracket::root_finding::errors::RootFindingError;
use test_case::test_case;

type TestResult = Result<(), BisectionError>;

fn sqrt_3(x: f64) -> f64 {
    x * x - 3.0
}

fn quartic(x: f64) -> f64 {
    x * x * x * x - 3.0 * x * x * x + 2.0 * x * x - 3.0 * x
}

fn cube_root_2(x: f64) -> f64 {
    x * x * x - 2.0
}

fn ln_10(x: f64) -> f64 {
    x.exp() - 10.0
}


#[test_case(sqrt_3,  1.0, 2.0, 25, 1.7320508062839508     ; "sqrt 3 in 25 halvings")]
#[test_case(quartic, 1.0, 4.0, 40, 2.671699881656423      ; "quartic positive root")]
#[test_case(quartic, -1.0, 0.9, 40, 1.0004587801479136e-12 ; "quartic root at zero")]
fn known_estimates(f: fn(f64) -> f64, a: f64, b: f64, n: usize, expected: f64) {
    let checked   = find_root(f, a, b, n).unwrap();
    let unchecked = find_root_unchecked(f, a, b, n);

    assert!((checked - expected).abs() <= 1e-15, "{checked} vs {expected}");
    assert_eq!(checked, unchecked);
}

#[test]
fn sqrt_3_is_exact_after_25_halvings() -> TestResult {
    assert_eq!(find_root(sqrt_3, 1.0, 2.0, 25)?, 1.7320508062839508);
    Ok(())
}

#[test]
fn no_sign_change_is_rejected() {
    let f   = |x: f64| x * x + 1.0;
    let err = find_root(f, -1.0, 1.0, 40).unwrap_err();
    assert!(matches!(err, BisectionError::NoSignChange { a: -1.0, b: 1.0 }));
}

#[test]
fn unchecked_without_sign_change_stays_in_interval() {
    let f = |x: f64| x * x + 1.0;
    let x = find_root_unchecked(f, -1.0, 1.0, 40);
    assert!(x.is_finite());
    assert!((-1.0..=1.0).contains(&x));
}

#[test]
fn zero_halvings_are_rejected() {
    let err = find_root(sqrt_3, 1.0, 2.0, 0).unwrap_err();
    assert!(matches!(
        err,
        BisectionError::RootFinding(RootFindingError::InvalidMaxIter { got: 0 })
    ));
}

#[test]
fn unchecked_zero_halvings_is_the_midpoint() {
    let mut calls = 0;
    let x = find_root_unchecked(|x: f64| { calls += 1; sqrt_3(x) }, 1.0, 2.0, 0);
    assert_eq!(x, 1.5);
    assert_eq!(calls, 0);
}

#[test_case(sqrt_3,      3f64.sqrt(),   1.0, 2.0 ; "sqrt 3")]
#[test_case(cube_root_2, 2f64.cbrt(),   0.0, 2.0 ; "cube root 2")]
#[test_case(ln_10,       10f64.ln(),    0.0, 5.0 ; "ln 10")]
fn error_bound_holds_for_every_n(f: fn(f64) -> f64, r: f64, a: f64, b: f64) {
    for n in 1..=45 {
        let bound = (b - a) / 2f64.powi(n);
        let est   = find_root(f, a, b, n as usize).unwrap();
        assert!((est - r).abs() <= bound, "n = {n}: |{est} - {r}| > {bound}");

        let est = find_root_unchecked(f, a, b, n as usize);
        assert!((est - r).abs() <= bound, "unchecked n = {n}");
    }
}

#[test_case(2.0, 3.0 ; "unit width")]
#[test_case(1.0, 4.0 ; "width 3")]
fn width_halves_every_iteration(a: f64, b: f64) -> TestResult {
    for k in 1..=30 {
        let res = bisection(quartic, a, b, BisectionCfg::fixed_budget(k)?)?;
        assert_eq!(res.iterations, k);
        assert_eq!(res.bracket_width(), (b - a) / 2f64.powi(k as i32));

        // the kept bracket still straddles the root
        let (lo, hi) = (res.bracket.lo(), res.bracket.hi());
        assert!(quartic(lo) * quartic(hi) < 0.0);
        assert!(res.root == lo || res.root == hi);
    }
    Ok(())
}

#[test]
fn repeated_calls_agree() -> TestResult {
    let first  = bisection(quartic, 1.0, 4.0, BisectionCfg::fixed_budget(40)?)?;
    let second = bisection(quartic, 1.0, 4.0, BisectionCfg::fixed_budget(40)?)?;
    assert_eq!(first, second);

    assert_eq!(find_root(quartic, 1.0, 4.0, 40)?, find_root(quartic, 1.0, 4.0, 40)?);
    Ok(())
}

#[test]
fn resolving_the_final_bracket_refines_it() -> TestResult {
    let res   = bisection(sqrt_3, 1.0, 2.0, BisectionCfg::fixed_budget(20)?)?;
    let again = find_root(sqrt_3, res.bracket.lo(), res.bracket.hi(), 20)?;
    assert!(res.bracket.contains(again));
    assert!((again - 3f64.sqrt()).abs() <= res.bracket_width() / 2f64.powi(20));
    Ok(())
}

#[test]
fn unchecked_evaluates_twice_per_halving() {
    let mut calls = 0;
    let _ = find_root_unchecked(|x: f64| { calls += 1; quartic(x) }, 1.0, 4.0, 40);
    assert_eq!(calls, 80);
}

#[test]
fn checked_evaluates_once_per_halving() -> TestResult {
    let mut calls = 0;
    let _ = find_root(|x: f64| { calls += 1; quartic(x) }, 1.0, 4.0, 40)?;
    assert_eq!(calls, 42);
    Ok(())
}

#[test]
fn exact_midpoint_root() -> TestResult {
    // the bare loop steps past an exact zero and drifts toward `b`
    let f = |x: f64| x - 0.75;
    assert_eq!(find_root(f, 0.0, 1.0, 10)?, 0.75);
    assert_eq!(find_root_unchecked(f, 0.0, 1.0, 10), 0.9990234375);
    Ok(())
}

#[test]
fn reversed_bounds_give_the_same_estimate() -> TestResult {
    assert_eq!(find_root(sqrt_3, 2.0, 1.0, 25)?, find_root(sqrt_3, 1.0, 2.0, 25)?);
    Ok(())
}

#[test]
fn many_halvings_stop_at_machine_precision() -> TestResult {
    let est = find_root(sqrt_3, 1.0, 2.0, 1_000)?;
    assert!((est - 3f64.sqrt()).abs() <= 2.0 * f64::EPSILON);
    Ok(())
}
