//! Strongly-typed pixel primitives (zero-cost newtypes).
//!
//! Design goals:
//! - No raw `f64` in measurement logic
//! - Non-negative floors expressed through typed operations, not ad-hoc math

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use thiserror::Error;

/// Error type for invalid numeric values crossing the crate boundary
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum NumericError {
    /// Value is NaN
    #[error("value is NaN")]
    NaN,
    /// Value is infinite
    #[error("value is infinite")]
    Infinite,
    /// Value is negative when non-negative required
    #[error("value is negative")]
    Negative,
}

/// Length in device-independent pixels (the crate's canonical unit)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Px(pub f64);

/// Shorthand constructor for pixel values.
#[inline]
pub fn px(val: f64) -> Px {
    Px(val)
}

impl Px {
    pub const ZERO: Px = Px(0.0);

    /// Create a Px with validation (rejects NaN/infinite)
    #[inline]
    pub fn try_new(val: f64) -> Result<Px, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else {
            Ok(Px(val))
        }
    }

    /// Create a non-negative Px with validation
    #[inline]
    pub fn try_non_negative(val: f64) -> Result<Px, NumericError> {
        match Px::try_new(val) {
            Ok(p) if p.0 < 0.0 => Err(NumericError::Negative),
            other => other,
        }
    }

    /// Get the absolute value
    #[inline]
    pub fn abs(self) -> Px {
        Px(self.0.abs())
    }

    /// Get the minimum of two pixel lengths
    #[inline]
    pub fn min(self, other: Px) -> Px {
        Px(self.0.min(other.0))
    }

    /// Get the maximum of two pixel lengths
    #[inline]
    pub fn max(self, other: Px) -> Px {
        Px(self.0.max(other.0))
    }

    /// Get the raw value (use sparingly, prefer typed operations)
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    /// Check if this length is finite (not NaN or infinite)
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Px {
    type Output = Px;
    fn add(self, rhs: Px) -> Px { Px(self.0 + rhs.0) }
}
impl Sub for Px {
    type Output = Px;
    fn sub(self, rhs: Px) -> Px { Px(self.0 - rhs.0) }
}
impl Mul<f64> for Px {
    type Output = Px;
    fn mul(self, rhs: f64) -> Px { Px(self.0 * rhs) }
}
impl Div<f64> for Px {
    type Output = Px;
    fn div(self, rhs: f64) -> Px { Px(self.0 / rhs) }
}
impl Neg for Px {
    type Output = Px;
    fn neg(self) -> Px { Px(-self.0) }
}

impl AddAssign for Px {
    fn add_assign(&mut self, rhs: Px) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Px {
    fn sub_assign(&mut self, rhs: Px) {
        self.0 -= rhs.0;
    }
}

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// 2D size in pixels
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub w: Px,
    pub h: Px,
}

impl Size {
    pub fn new(w: Px, h: Px) -> Self {
        Size { w, h }
    }
}
