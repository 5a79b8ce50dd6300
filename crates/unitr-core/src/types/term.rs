//! A single unit symbol raised to a power

use serde::{Deserialize, Serialize};
use std::fmt;

/// Exponents closer than this to an integer (or zero) are treated as that integer
pub(crate) const EXPONENT_EPSILON: f64 = 1e-9;

/// Snap an exponent onto the nearest integer when within `EXPONENT_EPSILON`
pub(crate) fn snap_exponent(exponent: f64) -> f64 {
    let rounded = exponent.round();
    if (exponent - rounded).abs() < EXPONENT_EPSILON {
        rounded
    } else {
        exponent
    }
}

/// `symbol^exponent`, e.g. `m^2`, `k_g`, `s^-1`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    /// Unit symbol, possibly prefix-tagged (`k_g`)
    pub symbol: String,
    pub exponent: f64,
}

impl Term {
    pub fn new(symbol: impl Into<String>, exponent: f64) -> Self {
        Self {
            symbol: symbol.into(),
            exponent,
        }
    }

    /// Term with exponent 1
    pub fn unit(symbol: impl Into<String>) -> Self {
        Self::new(symbol, 1.0)
    }

    pub fn is_empty(&self) -> bool {
        self.symbol.is_empty()
    }

    /// Same symbol, exponent multiplied by `power`
    pub fn scaled(&self, power: f64) -> Self {
        Self::new(self.symbol.clone(), self.exponent * power)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exponent == 1.0 {
            write!(f, "{}", self.symbol)
        } else {
            write!(f, "{}^{}", self.symbol, self.exponent)
        }
    }
}
