//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which names the strategies a
//! [`RootFinder`](super::traits::RootFinder) can implement, along with the
//! shared [`GLOBAL_MAX_ITER_FALLBACK`] hard cap.
//!
//! Only [`BracketFamily::Bisection`] is implemented in this crate. The other
//! variants describe what their finders would need so callers can be written
//! against the [`RootFinder`](super::traits::RootFinder) trait today.


/// Applied when no budget is configured and the theoretical bisection bound
/// is unavailable or larger than this.
///
/// Serves as a practical safeguard against iteration counts that are
/// mathematically valid but computationally excessive.
pub const GLOBAL_MAX_ITER_FALLBACK: usize = 500;


/// Root-finding algorithm variants.
/// - [`Algorithm::Bracket`]  : keep a sign-change bracket
/// - [`Algorithm::Open`]     : iterate from a starting point
/// - [`Algorithm::Compound`] : bracket safeguarded interpolation
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Bracket(BracketFamily),
    Open(OpenFamily),
    Compound(CompoundFamily)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BracketFamily {
    Bisection,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OpenFamily {
    Newton
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CompoundFamily {
    Brent
}

impl Algorithm {
    pub const BISECTION: Algorithm = Algorithm::Bracket(BracketFamily::Bisection);
    pub const NEWTON:    Algorithm = Algorithm::Open(OpenFamily::Newton);
    pub const BRENT:     Algorithm = Algorithm::Compound(CompoundFamily::Brent);

    /// Default iteration count if `max_iter` is unset in config.
    ///
    /// # Notes
    /// - Methods with theoretical bounds (bisection, brent) return `None`,
    ///   meaning "compute theoretical bound instead".
    ///   - If that bound exceeds practical limits,
    ///     [`GLOBAL_MAX_ITER_FALLBACK`] is used.
    pub const fn default_max_iter(self) -> Option<usize> {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection) => None,
            Algorithm::Open(OpenFamily::Newton)          => Some(50),
            Algorithm::Compound(CompoundFamily::Brent)   => None,
        }
    }

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection) => "bisection",
            Algorithm::Open(OpenFamily::Newton)          => "newton",
            Algorithm::Compound(CompoundFamily::Brent)   => "brent",
        }
    }

    /// `true` if the method needs a sign-change bracket `[a, b]`.
    pub const fn requires_bracket(self) -> bool {
        matches!(self, Algorithm::Bracket(..) | Algorithm::Compound(..))
    }

    /// `true` if the method needs `f'(x)` (analytic or approximated).
    pub const fn requires_derivative(self) -> bool {
        matches!(self, Algorithm::Open(OpenFamily::Newton))
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
