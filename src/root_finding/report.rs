//! Defines the [`RootFindingReport`] struct returned by the
//! report-producing root finders.

use super::interval::Interval;

/// Reasons a root-finding algorithm may terminate.
///
/// Running out of budget is an outcome, not an error: the report still
/// carries the best estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// A configured tolerance was met, see [`ToleranceSatisfied`].
    ToleranceReached,
    /// `f(x) == 0` exactly at an endpoint or midpoint.
    ExactRoot,
    /// The budget ran out first.
    IterationLimit,
    /// The midpoint collapsed onto an endpoint; the bracket is as narrow
    /// as `f64` allows.
    MachinePrecisionReached,
}


/// Which tolerance condition was satisfied (or not).
/// - [`ToleranceSatisfied::AbsFxReached`]
///     - |f(x)| <= abs_fx; also reported for exact roots
/// - [`ToleranceSatisfied::WidthTolReached`]
///     - (b - a) <= abs_x + rel_x * max(|a|, |b|, 1)
/// - [`ToleranceSatisfied::ToleranceNotReached`]
///     - usually with [`TerminationReason::IterationLimit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceSatisfied {
    AbsFxReached,
    WidthTolReached,
    ToleranceNotReached
}


/// Final report returned by [`crate::root_finding::bisection::bisection`]
/// and every [`crate::root_finding::traits::RootFinder`].
///
/// [`RootFindingReport`]
/// - `root`                : best root estimate (last midpoint, or the endpoint hit)
/// - `f_root`              : function value at `root`
/// - `iterations`          : halvings performed
/// - `evaluations`         : total function evaluations
/// - `termination_reason`  : why the solver stopped ([`TerminationReason`])
/// - `tolerance_satisfied` : which tolerance was met ([`ToleranceSatisfied`])
/// - `bracket`             : final bracket, still holding the sign change
/// - `algorithm_name`      : algorithm name (e.g. `"bisection"`)
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RootFindingReport {
    pub root                : f64,
    pub f_root              : f64,
    pub iterations          : usize,
    pub evaluations         : usize,
    pub termination_reason  : TerminationReason,
    pub tolerance_satisfied : ToleranceSatisfied,
    pub bracket             : Interval,
    pub algorithm_name      : &'static str,
}

impl RootFindingReport {
    /// `true` unless the budget ran out before any stopping rule fired.
    pub fn converged(&self) -> bool {
        self.termination_reason != TerminationReason::IterationLimit
    }

    /// Width of the final bracket.
    pub fn bracket_width(&self) -> f64 {
        self.bracket.width()
    }
}
