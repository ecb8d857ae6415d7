//! Bisection method.
//!
//! ┌ [`find_root`]           : `n` halvings, validated bracket, returns the estimate
//! ├ [`find_root_unchecked`] : the bare textbook loop, no validation
//! ├ [`bisection`]           : configurable finder returning a [`RootFindingReport`]
//! └ [`Bisection`]           : [`RootFinder`] implementation over a [`BisectionCfg`]

use super::algorithms::{Algorithm, BracketFamily, GLOBAL_MAX_ITER_FALLBACK};
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::{RootFindingError, ToleranceError};
use super::interval::{Interval, midpoint};
use super::report::{RootFindingReport, TerminationReason, ToleranceSatisfied};
use super::signs::{is_exact_zero, opposite_sign, same_sign};
use super::tolerances::{WidthTolerance, theoretical_iter};
use super::traits::RootFinder;
use thiserror::Error;

const ALGORITHM: Algorithm = Algorithm::Bracket(BracketFamily::Bisection);


#[derive(Debug, Error)]
pub enum BisectionError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid bounds: a and b must be finite. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },

    #[error("degenerate bracket: a = b = {x} and f(x) != 0")]
    DegenerateBracket { x: f64 },

    #[error("no sign change on [{a}, {b}]: sign(f(a)) = sign(f(b))")]
    NoSignChange { a: f64, b: f64 },

    #[error("sign change lost at x={x}: f(x) agrees in sign with both f({lo}) and f({hi})")]
    BracketLost { lo: f64, hi: f64, x: f64 },
}


/// Bisection configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`] with tolerances and optional `max_iter`.
///
/// # Construction
/// - [`BisectionCfg::new`] : default tolerances, budget derived from them
/// - [`BisectionCfg::fixed_budget`] : no tolerances, exactly `n` halvings
///   unless an exact root turns up first
/// - setters from [`CommonCfg`] combine both policies; whichever rule
///   fires first stops the search.
///
/// # Defaults
/// - If `common.max_iter` is `None`, [`bisection`] resolves it to the
///   theoretical number of halvings for the width tolerance, capped by
///   [`GLOBAL_MAX_ITER_FALLBACK`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BisectionCfg {
    common: CommonCfg,
}
impl BisectionCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new()
        }
    }

    /// Pure iteration budget: tolerances cleared, `max_iter = n`.
    ///
    /// # Errors
    /// - [`RootFindingError::InvalidMaxIter`] if `n == 0`
    pub fn fixed_budget(n: usize) -> Result<Self, RootFindingError> {
        Self::new().clear_tolerances().set_max_iter(n)
    }
}
impl Default for BisectionCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(BisectionCfg);


/// Bisection as a [`RootFinder`].
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Bisection {
    cfg: BisectionCfg,
}
impl Bisection {
    pub fn new(cfg: BisectionCfg) -> Self {
        Self { cfg }
    }

    pub fn cfg(&self) -> &BisectionCfg {
        &self.cfg
    }
}
impl RootFinder for Bisection {
    type Error = BisectionError;

    fn algorithm(&self) -> Algorithm {
        ALGORITHM
    }

    fn find_root<F>(&self, func: F, a: f64, b: f64) -> Result<RootFindingReport, BisectionError>
    where
        F: FnMut(f64) -> f64,
    {
        bisection(func, a, b, self.cfg)
    }
}


/// Evaluates `f(x)`, counting the call and rejecting NaN/inf.
#[inline]
fn eval_fx_checked<F>(
    f: &mut F,
    x: f64,
    evals: &mut usize
) -> Result<f64, BisectionError> where F: FnMut(f64) -> f64 {
    let fx = { *evals += 1; f(x) };
    if !fx.is_finite() {
        return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into());
    }

    Ok(fx)
}


/// Iteration budget for one call.
///
/// An explicit `max_iter` wins. Otherwise the theoretical halving count is
/// taken against the smallest tolerance the bracket can reach
/// (`abs_x + rel_x`), so the width rule is never cut short by the budget.
fn resolve_budget(
    max_iter: Option<usize>,
    width_tol: Option<WidthTolerance>,
    bracket: Interval,
) -> Result<usize, BisectionError> {
    if let Some(n) = max_iter {
        if n == 0 {
            return Err(RootFindingError::InvalidMaxIter { got: 0 }.into());
        }
        return Ok(n);
    }

    let budget = match (ALGORITHM.default_max_iter(), width_tol) {
        (Some(n), _)      => n,
        (None, Some(tol)) => {
            let floor = tol.at(0.0, 0.0)?;
            theoretical_iter(bracket.width(), floor)?.clamp(1, GLOBAL_MAX_ITER_FALLBACK)
        },
        (None, None)      => GLOBAL_MAX_ITER_FALLBACK,
    };

    Ok(budget)
}


/// Assembles a bisection report.
#[inline]
fn report(
    (root, f_root): (f64, f64),
    iterations: usize,
    evaluations: usize,
    termination_reason: TerminationReason,
    tolerance_satisfied: ToleranceSatisfied,
    bracket: Interval,
) -> RootFindingReport {
    RootFindingReport {
        root,
        f_root,
        iterations,
        evaluations,
        termination_reason,
        tolerance_satisfied,
        bracket,
        algorithm_name: ALGORITHM.algorithm_name(),
    }
}


/// Finds a root of `func` in the bracket spanned by `a` and `b` with
/// exactly `n` halvings, returning the last midpoint.
///
/// The bracket is checked before any halving: both endpoints must be
/// finite, `func` must be finite at both, and the two values must differ in
/// sign. An endpoint where `func` is exactly zero is returned as is.
///
/// After `n` halvings the estimate lies within `|b - a| / 2^n` of a root
/// of a continuous `func`. The loop stops early only on an exact zero at a
/// midpoint or once `f64` cannot split the bracket any further.
///
/// # Errors
/// - [`BisectionError::InvalidBounds`]     : `a` or `b` NaN/inf
/// - [`BisectionError::DegenerateBracket`] : `a == b` and `func(a) != 0`
/// - [`BisectionError::NoSignChange`]      : `func(a)`, `func(b)` share a sign
/// - [`RootFindingError::InvalidMaxIter`]  : `n == 0`
/// - [`RootFindingError::NonFiniteEvaluation`] : `func` returned NaN/inf
///
/// # Example
/// ```
/// use rootbracket::root_finding::bisection::find_root;
///
/// let root = find_root(|x: f64| x * x - 3.0, 1.0, 2.0, 25).unwrap();
/// assert!((root - 3f64.sqrt()).abs() <= 1.0 / 2f64.powi(25));
/// ```
pub fn find_root<F>(func: F, a: f64, b: f64, n: usize) -> Result<f64, BisectionError>
where
    F: FnMut(f64) -> f64,
{
    let cfg = BisectionCfg::fixed_budget(n)?;
    Ok(bisection(func, a, b, cfg)?.root)
}


/// The bare bisection loop: `n` times, `h = (a + b) / 2`, keep `[a, h]` if
/// `func(a) * func(h) < 0`, otherwise `[h, b]`; returns the last `h`.
///
/// Nothing is validated and `func(a)` is re-evaluated every iteration, so
/// `func` is called exactly `2n` times. An exact zero at `h` falls into the
/// `[h, b]` branch and the search carries on past it.
///
/// Without a sign change on `[a, b]` the result is an arbitrary point of
/// the interval. Use [`find_root`] or [`bisection`] unless the exact
/// historical behaviour is needed.
pub fn find_root_unchecked<F>(mut func: F, mut a: f64, mut b: f64, n: usize) -> f64
where
    F: FnMut(f64) -> f64,
{
    let mut h = midpoint(a, b);
    for _ in 0..n {
        h = midpoint(a, b);
        if func(a) * func(h) < 0.0 {
            b = h;
        } else {
            a = h;
        }
    }
    h
}


/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// This method assumes that `func` is continuous on the interval spanned by
/// `a` and `b` and that `func(a)` and `func(b)` have opposite signs,
/// guaranteeing a root exists within the interval. Both assumptions that
/// can be checked are checked.
///
/// # Arguments
/// - `func` : function whose root is sought
/// - `a`    : one end of the bracket (finite)
/// - `b`    : other end of the bracket (finite, any order)
/// - `cfg`  : [`BisectionCfg`] (optional tolerances, optional `max_iter`)
///
/// # Returns
/// [`RootFindingReport`] with
/// - `root`                : last midpoint, or the endpoint that is a root
/// - `f_root`              : function value at `root`
/// - `iterations`          : halvings performed
/// - `evaluations`         : `2 + iterations`, one more on the initial-width exit
/// - `termination_reason`  : why it stopped
/// - `tolerance_satisfied` : which tolerance triggered, if any
/// - `bracket`             : final bracket
/// - `algorithm_name`      : "bisection"
///
/// # Errors
/// - [`BisectionError::InvalidBounds`]     : `a`/`b` non-finite
/// - [`BisectionError::DegenerateBracket`] : `a == b` and `func(a) != 0`
/// - [`BisectionError::NoSignChange`]      : `func(a)` and `func(b)` share sign
/// - [`BisectionError::BracketLost`]       : midpoint sign agrees with both ends
///
/// * Propagated via [`BisectionError::RootFinding`]
/// - [`RootFindingError::NonFiniteEvaluation`] : `func(x)` produced NaN/inf
/// - [`RootFindingError::InvalidMaxIter`]      : `max_iter = Some(0)`
///
/// * Propagated via [`BisectionError::Tolerance`]
/// - [`ToleranceError::InvalidTolerance`]      : computed width tolerance invalid
///
/// # Behavior
/// - `func(a)` and `func(b)` are evaluated once and cached.
/// - Each halving evaluates the midpoint `h` once and tests its sign against
///   *both* cached endpoint values; the kept half is never inferred.
/// - `func(h) == 0` stops with [`TerminationReason::ExactRoot`].
/// - `|func(h)| <= abs_fx` stops with [`ToleranceSatisfied::AbsFxReached`].
/// - `hi - lo <= abs_x + rel_x * max(|lo|, |hi|, 1)` stops with
///   [`ToleranceSatisfied::WidthTolReached`].
/// - A midpoint equal to an endpoint stops with
///   [`TerminationReason::MachinePrecisionReached`].
/// - Running out of budget returns [`TerminationReason::IterationLimit`].
///
/// # Warning
/// - Several sign changes inside the bracket are not detected; the result
///   is close to one of the roots, not necessarily a particular one.
pub fn bisection<F>(
    mut func: F,
    a: f64,
    b: f64,
    cfg: BisectionCfg
) -> Result<RootFindingReport, BisectionError>
where F: FnMut(f64) -> f64 {

    let mut bracket = Interval::new(a, b).ok_or(BisectionError::InvalidBounds { a, b })?;

    let abs_fx    = cfg.common.abs_fx();
    let width_tol = cfg.common.width_check()
        .then(|| WidthTolerance::new(cfg.common.abs_x(), cfg.common.rel_x()));
    let num_iter  = resolve_budget(cfg.common.max_iter(), width_tol, bracket)?;

    let within_abs_fx = |fx: f64| abs_fx.is_some_and(|tol| fx.abs() <= tol);

    let mut evals: usize = 0;

    // early exit: lo is root
    let mut f_lo = eval_fx_checked(&mut func, bracket.lo(), &mut evals)?;
    if is_exact_zero(f_lo) {
        return Ok(report(
            (bracket.lo(), f_lo), 0, evals,
            TerminationReason::ExactRoot, ToleranceSatisfied::AbsFxReached, bracket
        ));
    }

    if bracket.width() == 0.0 {
        return Err(BisectionError::DegenerateBracket { x: bracket.lo() });
    }

    // early exit: hi is root
    let mut f_hi = eval_fx_checked(&mut func, bracket.hi(), &mut evals)?;
    if is_exact_zero(f_hi) {
        return Ok(report(
            (bracket.hi(), f_hi), 0, evals,
            TerminationReason::ExactRoot, ToleranceSatisfied::AbsFxReached, bracket
        ));
    }

    if within_abs_fx(f_lo) || within_abs_fx(f_hi) {
        let best = if f_lo.abs() <= f_hi.abs() { (bracket.lo(), f_lo) } else { (bracket.hi(), f_hi) };
        return Ok(report(
            best, 0, evals,
            TerminationReason::ToleranceReached, ToleranceSatisfied::AbsFxReached, bracket
        ));
    }

    // error: no sign change across the bracket
    if same_sign(f_lo, f_hi) {
        return Err(BisectionError::NoSignChange { a, b });
    }

    // early exit: width tolerance satisfied
    if let Some(tol) = width_tol {
        if bracket.width() <= tol.at(bracket.lo(), bracket.hi())? {
            let mid = bracket.midpoint();
            let fm  = eval_fx_checked(&mut func, mid, &mut evals)?;
            return Ok(report(
                (mid, fm), 0, evals,
                TerminationReason::ToleranceReached, ToleranceSatisfied::WidthTolReached, bracket
            ));
        }
    }

    // main loop
    let mut last = (bracket.lo(), f_lo);    // gets overwritten
    for iter in 1..=num_iter {
        let (lo, hi) = (bracket.lo(), bracket.hi());
        let h = bracket.midpoint();

        // bracket cannot be split further
        if h <= lo || h >= hi {
            let at_end = if h <= lo { (lo, f_lo) } else { (hi, f_hi) };
            return Ok(report(
                at_end, iter - 1, evals,
                TerminationReason::MachinePrecisionReached, ToleranceSatisfied::ToleranceNotReached, bracket
            ));
        }

        let fh = eval_fx_checked(&mut func, h, &mut evals)?;
        last = (h, fh);

        if is_exact_zero(fh) {
            return Ok(report(
                last, iter, evals,
                TerminationReason::ExactRoot, ToleranceSatisfied::AbsFxReached, bracket
            ));
        }
        if within_abs_fx(fh) {
            return Ok(report(
                last, iter, evals,
                TerminationReason::ToleranceReached, ToleranceSatisfied::AbsFxReached, bracket
            ));
        }

        // keep the half whose endpoints still disagree in sign
        let (left, right) = bracket.halves(h);
        if opposite_sign(f_lo, fh) {
            bracket = left;
            f_hi    = fh;
        } else if opposite_sign(fh, f_hi) {
            bracket = right;
            f_lo    = fh;
        } else {
            return Err(BisectionError::BracketLost { lo, hi, x: h });
        }

        if let Some(tol) = width_tol {
            if bracket.width() <= tol.at(bracket.lo(), bracket.hi())? {
                return Ok(report(
                    last, iter, evals,
                    TerminationReason::ToleranceReached, ToleranceSatisfied::WidthTolReached, bracket
                ));
            }
        }
    }

    Ok(report(
        last, num_iter, evals,
        TerminationReason::IterationLimit, ToleranceSatisfied::ToleranceNotReached, bracket
    ))
}
