//! Shared configuration for root-finding algorithms.
//!
//! Provides [`CommonCfg`] with default tolerances and iteration limits,
//! embedded by every algorithm config.
//!
//! [`CommonCfg`] : universal fields
//! ├ `abs_fx`   : residual tolerance `|f(x)| <= abs_fx` (optional)
//! ├ `abs_x`    : absolute bracket-width tolerance
//! ├ `rel_x`    : relative bracket-width tolerance
//! └ `max_iter` : iteration budget (optional)
//!
//! The width check is active while `abs_x > 0` or `rel_x > 0`. Tolerances
//! can be switched off entirely with `clear_tolerances`, leaving the
//! iteration budget as the only stopping rule.


use super::errors::{RootFindingError, ToleranceError};


pub const DEFAULT_ABS_FX : f64 = 1e-12;
pub const DEFAULT_ABS_X  : f64 = 0.0;
pub const DEFAULT_REL_X  : f64 = 4.0 * f64::EPSILON;


#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CommonCfg {
    abs_fx: Option<f64>,
    abs_x:  f64,
    rel_x:  f64,
    max_iter: Option<usize>,
}

impl CommonCfg {
    pub fn new() -> Self {
        Self {
            abs_fx   : Some(DEFAULT_ABS_FX),
            abs_x    : DEFAULT_ABS_X,
            rel_x    : DEFAULT_REL_X,
            max_iter : None
        }
    }

    // getters
    pub fn abs_fx(&self)   -> Option<f64> { self.abs_fx }
    pub fn abs_x(&self)    -> f64 { self.abs_x }
    pub fn rel_x(&self)    -> f64 { self.rel_x }
    pub fn max_iter(&self) -> Option<usize> { self.max_iter }

    /// `true` if a bracket-width stopping rule is configured.
    pub fn width_check(&self) -> bool { self.abs_x > 0.0 || self.rel_x > 0.0 }

    // validated setters, shared by every `impl_common_cfg!` expansion
    pub(crate) fn try_abs_fx(&mut self, v: f64) -> Result<(), ToleranceError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(ToleranceError::InvalidAbsFx { got: v });
        }
        self.abs_fx = Some(v);
        Ok(())
    }

    pub(crate) fn try_abs_x(&mut self, v: f64) -> Result<(), ToleranceError> {
        if !v.is_finite() || v < 0.0 {
            return Err(ToleranceError::InvalidAbsX { got: v });
        }
        // zeroing abs_x must leave some width rule in place
        if v == 0.0 && self.rel_x <= 0.0 {
            return Err(ToleranceError::InvalidAbsRelX { abs_x: v, rel_x: self.rel_x });
        }
        self.abs_x = v;
        Ok(())
    }

    pub(crate) fn try_rel_x(&mut self, v: f64) -> Result<(), ToleranceError> {
        if !v.is_finite() || v < 0.0 {
            return Err(ToleranceError::InvalidRelX { got: v });
        }
        if v == 0.0 && self.abs_x <= 0.0 {
            return Err(ToleranceError::InvalidAbsRelX { abs_x: self.abs_x, rel_x: v });
        }
        self.rel_x = v;
        Ok(())
    }

    pub(crate) fn try_max_iter(&mut self, v: usize) -> Result<(), RootFindingError> {
        if v == 0 {
            return Err(RootFindingError::InvalidMaxIter { got: v });
        }
        self.max_iter = Some(v);
        Ok(())
    }

    pub(crate) fn without_tolerances(&mut self) {
        self.abs_fx = None;
        self.abs_x  = 0.0;
        self.rel_x  = 0.0;
    }
}

impl Default for CommonCfg {
    fn default() -> Self { Self::new() }
}


/// Builder setters for an algorithm config holding a `common: CommonCfg`.
macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            /// Shared tolerances and budget.
            pub fn common(&self) -> &$crate::root_finding::config::CommonCfg {
                &self.common
            }

            /// Residual tolerance, `> 0`.
            pub fn set_abs_fx(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::ToleranceError> {
                self.common.try_abs_fx(v)?;
                Ok(self)
            }

            /// Absolute width tolerance, `>= 0`; may be zero only while `rel_x > 0`.
            pub fn set_abs_x(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::ToleranceError> {
                self.common.try_abs_x(v)?;
                Ok(self)
            }

            /// Relative width tolerance, `>= 0`; may be zero only while `abs_x > 0`.
            pub fn set_rel_x(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::ToleranceError> {
                self.common.try_rel_x(v)?;
                Ok(self)
            }

            /// Iteration budget, `>= 1`.
            pub fn set_max_iter(
                mut self, v: usize
            ) -> Result<Self, $crate::root_finding::errors::RootFindingError> {
                self.common.try_max_iter(v)?;
                Ok(self)
            }

            /// Drops the residual and width tolerances; only `max_iter`
            /// (or the global fallback) stops the search afterwards.
            #[must_use]
            pub fn clear_tolerances(mut self) -> Self {
                self.common.without_tolerances();
                self
            }
        }
    };
}
pub(crate) use impl_common_cfg;
