//! Conversion ratios between primitive (optionally prefixed) units
//!
//! `ratio = factor(after) / factor(before) * prefix(before) / prefix(after)`
//!
//! Multiplying a scalar expressed in `before` by the ratio expresses it in
//! `after`.

use crate::error::{Error, Result};
use crate::registry::Registry;
use crate::types::prefix::split_prefix;
use crate::types::Term;

/// Conversion destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'a> {
    /// Canonical SI unit of the source's dimension
    Si,
    /// An explicit, optionally prefixed, unit symbol
    Unit(&'a str),
}

/// What the caller wants back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Want {
    Ratio,
    Unit,
    /// SI base decomposition; only available with [`Target::Si`]
    Decomposition,
}

/// Result of a conversion request
#[derive(Debug, Clone, PartialEq)]
pub enum Conversion {
    Ratio(f64),
    Unit {
        ratio: f64,
        unit: String,
    },
    Decomposition {
        ratio: f64,
        top: Vec<Term>,
        bottom: Vec<Term>,
    },
}

impl Conversion {
    pub fn ratio(&self) -> f64 {
        match self {
            Conversion::Ratio(ratio)
            | Conversion::Unit { ratio, .. }
            | Conversion::Decomposition { ratio, .. } => *ratio,
        }
    }
}

/// SI ratio of a unit plus its base decomposition
#[derive(Debug, Clone, PartialEq)]
pub struct SiConversion {
    pub ratio: f64,
    pub top: Vec<Term>,
    pub bottom: Vec<Term>,
}

/// Unit converter over a registry
#[derive(Clone, Copy)]
pub struct Converter<'r> {
    registry: &'r Registry,
}

impl<'r> Converter<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    /// Convert `before` to `target`, returning the pieces selected by `want`
    pub fn convert(&self, before: &str, target: Target<'_>, want: Want) -> Result<Conversion> {
        let (pre_before, base_before) = split_prefix(before);
        let dim_before = self.registry.dimension_of(base_before)?;

        let (after, from_si) = match target {
            Target::Si => (self.registry.canonical_si(dim_before), true),
            Target::Unit(symbol) => (symbol, false),
        };

        let (pre_after, base_after) = split_prefix(after);
        let dim_after = self.registry.dimension_of(base_after)?;

        if dim_before != dim_after {
            return Err(Error::mismatch(
                format!("{before} ({dim_before})"),
                format!("{after} ({dim_after})"),
            ));
        }

        let ratio = self.registry.scale_factor(base_after)?
            / self.registry.scale_factor(base_before)?
            * self.registry.prefix_factor(pre_before)?
            / self.registry.prefix_factor(pre_after)?;

        Ok(match want {
            Want::Decomposition if from_si => {
                let decomposition = self.registry.si_decomposition(after)?;
                Conversion::Decomposition {
                    ratio,
                    top: decomposition.top.clone(),
                    bottom: decomposition.bottom.clone(),
                }
            }
            Want::Ratio => Conversion::Ratio(ratio),
            Want::Unit | Want::Decomposition => Conversion::Unit {
                ratio,
                unit: after.to_string(),
            },
        })
    }

    /// Plain ratio from `before` to `after`
    pub fn ratio(&self, before: &str, after: &str) -> Result<f64> {
        self.convert(before, Target::Unit(after), Want::Ratio)
            .map(|c| c.ratio())
    }

    /// Ratio to SI plus the SI base decomposition
    pub fn to_si(&self, before: &str) -> Result<SiConversion> {
        match self.convert(before, Target::Si, Want::Decomposition)? {
            Conversion::Decomposition { ratio, top, bottom } => Ok(SiConversion { ratio, top, bottom }),
            other => Err(Error::UnsupportedOperation(format!(
                "no SI decomposition for {before} ({other:?})"
            ))),
        }
    }
}
