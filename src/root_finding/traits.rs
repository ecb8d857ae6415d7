use crate::root_finding::algorithms::Algorithm;
use crate::root_finding::report::RootFindingReport;

/// Common contract for root-finding strategies.
///
/// Every strategy takes the objective and the two reals `a`, `b`; bracketing
/// methods read them as a sign-change bracket, open methods as a starting
/// region. Extra inputs (a derivative, an initial guess policy) belong in
/// the implementor's own configuration so caller code stays the same.
pub trait RootFinder {
    type Error: std::error::Error;

    /// Strategy implemented by this finder.
    fn algorithm(&self) -> Algorithm;

    /// Searches for a root of `func` using `a` and `b`.
    fn find_root<F>(&self, func: F, a: f64, b: f64) -> Result<RootFindingReport, Self::Error>
    where
        F: FnMut(f64) -> f64;

    /// Solves each `(a, b)` pair with the same objective.
    #[inline]
    fn find_roots<F>(&self, mut func: F, brackets: &[(f64, f64)]) -> Result<Vec<RootFindingReport>, Self::Error>
    where
        F: FnMut(f64) -> f64,
    {
        brackets.iter().map(|&(a, b)| self.find_root(&mut func, a, b)).collect()
    }
}
