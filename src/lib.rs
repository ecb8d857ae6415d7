//! Bracketing root finding by interval bisection.
//!
//! Given a continuous `f` and a bracket `[a, b]` with `f(a)` and `f(b)` of
//! opposite sign, the bracket is halved until a budget or a tolerance stops
//! the search.
//!
//! # Examples
//! A fixed number of halvings:
//!
//! ```
//! use rootbracket::find_root;
//!
//! let root = find_root(|x: f64| x * x - 3.0, 1.0, 2.0, 25).unwrap();
//! assert_eq!(root, 1.7320508062839508);
//! ```
//!
//! Tolerances and a report of why the search stopped:
//!
//! ```
//! use rootbracket::{bisection, BisectionCfg, TerminationReason, ToleranceSatisfied};
//!
//! let cfg = BisectionCfg::new()
//!     .clear_tolerances()
//!     .set_abs_x(1e-10).unwrap();
//! let res = bisection(|x: f64| x.cos() - x, 0.0, 1.0, cfg).unwrap();
//!
//! assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
//! assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::WidthTolReached);
//! assert!((res.root - 0.7390851332151607).abs() <= 1e-10);
//! ```
//!
//! Without a sign change the bracket is rejected:
//!
//! ```
//! use rootbracket::{find_root, BisectionError};
//!
//! let err = find_root(|x: f64| x * x + 1.0, -1.0, 1.0, 40).unwrap_err();
//! assert!(matches!(err, BisectionError::NoSignChange { .. }));
//! ```

pub mod root_finding;

pub use root_finding::algorithms::Algorithm;
pub use root_finding::bisection::{
    bisection, find_root, find_root_unchecked, Bisection, BisectionCfg, BisectionError,
};
pub use root_finding::interval::Interval;
pub use root_finding::report::{RootFindingReport, TerminationReason, ToleranceSatisfied};
pub use root_finding::RootFinder;
