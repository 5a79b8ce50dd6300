//! Compound unit signatures: numerator and denominator term lists

use serde::{Deserialize, Serialize};
use std::fmt;

use super::prefix::PREFIX_SEPARATOR;
use super::Term;
use crate::error::Result;
use crate::normalize;
use crate::parser;

/// Numerator/denominator terms in canonical form.
///
/// Canonical means: no duplicate symbol within a side, no symbol on both
/// sides, no empty symbols or zero exponents, and both sides sorted by symbol.
/// Two signatures are equal iff their sides are element-wise equal.
///
/// A signature is not necessarily SI-reduced: quantities built from a unit
/// expression hold SI base terms, re-expressed quantities hold the requested
/// display units.
///
/// Deserialization goes through [`Signature::from_terms`], so stored term
/// lists are recombined into canonical form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawSignature")]
pub struct Signature {
    top: Vec<Term>,
    bottom: Vec<Term>,
}

#[derive(Deserialize)]
struct RawSignature {
    #[serde(default)]
    top: Vec<Term>,
    #[serde(default)]
    bottom: Vec<Term>,
}

impl From<RawSignature> for Signature {
    fn from(raw: RawSignature) -> Self {
        Self::from_terms(raw.top, raw.bottom)
    }
}

impl Signature {
    /// The empty signature
    pub fn dimensionless() -> Self {
        Self::default()
    }

    /// Combine arbitrary term lists into canonical form (no SI reduction)
    pub fn from_terms(top: Vec<Term>, bottom: Vec<Term>) -> Self {
        let (top, bottom) = normalize::combine(top, bottom);
        Self { top, bottom }
    }

    /// Parse numerator/denominator expressions without SI reduction
    pub fn parse(top: &str, bottom: &str) -> Result<Self> {
        Ok(Self::from_terms(
            parser::parse_terms(top)?,
            parser::parse_terms(bottom)?,
        ))
    }

    pub fn top(&self) -> &[Term] {
        &self.top
    }

    pub fn bottom(&self) -> &[Term] {
        &self.bottom
    }

    pub fn is_dimensionless(&self) -> bool {
        self.top.is_empty() && self.bottom.is_empty()
    }

    /// Swap numerator and denominator
    pub fn reciprocal(&self) -> Self {
        Self {
            top: self.bottom.clone(),
            bottom: self.top.clone(),
        }
    }

    /// Concatenate both sides with `other`'s and recombine
    pub fn multiply(&self, other: &Signature) -> Self {
        let top = self.top.iter().chain(&other.top).cloned().collect();
        let bottom = self.bottom.iter().chain(&other.bottom).cloned().collect();
        Self::from_terms(top, bottom)
    }

    /// Multiply every exponent by `power`
    pub fn powf(&self, power: f64) -> Self {
        let scale = |terms: &[Term]| terms.iter().map(|t| t.scaled(power)).collect();
        Self::from_terms(scale(&self.top), scale(&self.bottom))
    }

    /// Display form for diagnostics; "dimensionless" for the empty signature
    pub(crate) fn label(&self) -> String {
        if self.is_dimensionless() {
            "dimensionless".to_string()
        } else {
            self.to_string()
        }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |terms: &[Term]| {
            terms
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        };

        let mut out = join(&self.top);
        if !self.bottom.is_empty() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str("/ ");
            out.push_str(&join(&self.bottom));
        }

        // Prefixes display glued to their base unit
        write!(f, "{}", out.replace(PREFIX_SEPARATOR, ""))
    }
}
