//! Tolerance utilities for bracketing methods.
//!
//! `WidthTolerance` : per-iteration bracket-width tolerance
//! - `at(a, b)`     : `abs_x + rel_x * max(|a|, |b|, 1.0)`
//!
//! `theoretical_iter` gives the number of halvings needed for a bracket
//! to shrink below a width tolerance.


use crate::root_finding::errors::ToleranceError;


/// Absolute + relative bracket-width tolerance.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct WidthTolerance {
    abs_x: f64,
    rel_x: f64,
}

impl WidthTolerance {
    pub(crate) fn new(abs_x: f64, rel_x: f64) -> Self {
        Self { abs_x, rel_x }
    }

    /// Tolerance for the current bracket `[a, b]`.
    ///
    /// The relative scale is never below `1.0` so the tolerance does not
    /// vanish for brackets around zero.
    ///
    /// # Errors
    /// - [`ToleranceError::InvalidTolerance`] if the result is non-finite or <= 0
    pub(crate) fn at(&self, a: f64, b: f64) -> Result<f64, ToleranceError> {
        let tol = self.abs_x + self.rel_x * a.abs().max(b.abs()).max(1.0);
        if !tol.is_finite() || tol <= 0.0 {
            return Err(ToleranceError::InvalidTolerance { got: tol });
        }

        Ok(tol)
    }
}


/// Halvings needed for a bracket of `width` to reach `width_tol`.
///
/// # Errors
/// - [`ToleranceError::InvalidTolerance`] if `width_tol` <= 0 or non-finite
pub(crate) fn theoretical_iter(width: f64, width_tol: f64) -> Result<usize, ToleranceError> {
    if !(width_tol.is_finite() && width_tol > 0.0) {
        return Err(ToleranceError::InvalidTolerance { got: width_tol });
    }
    if width <= width_tol {
        return Ok(0);
    }

    Ok((width / width_tol).log2().ceil() as usize)
}
