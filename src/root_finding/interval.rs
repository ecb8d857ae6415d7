//! Closed search interval `[lo, hi]`.

/// A closed interval with finite endpoints and `lo <= hi`.
///
/// Endpoints may be supplied in either order; [`Interval::new`] sorts them.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Interval {
    lo: f64,
    hi: f64,
}

impl Interval {
    /// Builds `[min(a, b), max(a, b)]`, or `None` if an endpoint is NaN/inf.
    pub fn new(a: f64, b: f64) -> Option<Interval> {
        if !(a.is_finite() && b.is_finite()) {
            return None;
        }
        if a <= b {
            Some(Interval { lo: a, hi: b })
        } else {
            Some(Interval { lo: b, hi: a })
        }
    }

    #[inline] pub fn lo(&self) -> f64 { self.lo }
    #[inline] pub fn hi(&self) -> f64 { self.hi }

    #[inline]
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    /// `(lo + hi) / 2`, falling back to `lo/2 + hi/2` when the sum overflows.
    #[inline]
    pub fn midpoint(&self) -> f64 {
        midpoint(self.lo, self.hi)
    }

    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        self.lo <= x && x <= self.hi
    }

    /// Splits at `at` into `([lo, at], [at, hi])`.
    pub(crate) fn halves(&self, at: f64) -> (Interval, Interval) {
        (Interval { lo: self.lo, hi: at }, Interval { lo: at, hi: self.hi })
    }

    pub fn to_array(&self) -> [f64; 2] {
        [self.lo, self.hi]
    }
}


/// Midpoint of `a` and `b`.
#[inline]
pub(crate) fn midpoint(a: f64, b: f64) -> f64 {
    let m = 0.5 * (a + b);
    if m.is_finite() { m } else { 0.5 * a + 0.5 * b }
}
