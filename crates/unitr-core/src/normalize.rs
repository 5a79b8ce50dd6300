//! Unit expression normalization
//!
//! Normalization rewrites a numerator/denominator pair of term lists into
//! canonical SI base form while accumulating the scalar multiplier the
//! rewrite requires. It is built from three steps that compose in any order
//! (power expansion happens in the parser):
//!
//! - [`clear_empty`] drops terms without a symbol
//! - [`reduce_to_si`] replaces every term with its SI base decomposition
//! - [`combine`] merges duplicates and cancels across the fraction bar

use std::collections::BTreeMap;

use crate::convert::Converter;
use crate::error::Result;
use crate::registry::Registry;
use crate::types::term::{snap_exponent, EXPONENT_EPSILON};
use crate::types::{Signature, Term};

/// SI-reduced terms plus the factor that carries a scalar along
#[derive(Debug, Clone, PartialEq)]
pub struct Reduced {
    pub top: Vec<Term>,
    pub bottom: Vec<Term>,
    /// Multiply a scalar in the original units by this to express it in SI
    pub factor: f64,
}

/// Canonical SI signature plus the accumulated factor
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub signature: Signature,
    pub factor: f64,
}

/// Drop terms with an empty symbol
pub fn clear_empty(terms: Vec<Term>) -> Vec<Term> {
    terms.into_iter().filter(|t| !t.is_empty()).collect()
}

/// Rewrite every term into SI base terms.
///
/// A numerator term `u^e` multiplies the factor by `ratio(u)^e` and emits the
/// decomposition of `u`'s SI symbol with exponents scaled by `e`. Denominator
/// terms do the mirror image: the decomposition lands flipped and the factor
/// is divided by `ratio(u)^e`.
pub fn reduce_to_si(registry: &Registry, top: &[Term], bottom: &[Term]) -> Result<Reduced> {
    let converter = Converter::new(registry);
    let mut factor = 1.0;
    let mut si_top = Vec::new();
    let mut si_bottom = Vec::new();

    for term in top.iter().filter(|t| !t.is_empty()) {
        let si = converter.to_si(&term.symbol)?;
        factor *= si.ratio.powf(term.exponent);
        si_top.extend(si.top.iter().map(|t| t.scaled(term.exponent)));
        si_bottom.extend(si.bottom.iter().map(|t| t.scaled(term.exponent)));
    }

    for term in bottom.iter().filter(|t| !t.is_empty()) {
        let si = converter.to_si(&term.symbol)?;
        factor /= si.ratio.powf(term.exponent);
        si_top.extend(si.bottom.iter().map(|t| t.scaled(term.exponent)));
        si_bottom.extend(si.top.iter().map(|t| t.scaled(term.exponent)));
    }

    log::trace!(
        "reduced {:?} / {:?} to SI with factor {factor}",
        top.iter().map(ToString::to_string).collect::<Vec<_>>(),
        bottom.iter().map(ToString::to_string).collect::<Vec<_>>(),
    );

    Ok(Reduced {
        top: si_top,
        bottom: si_bottom,
        factor,
    })
}

/// Sum exponents of identical symbols
fn merge(terms: Vec<Term>) -> BTreeMap<String, f64> {
    let mut merged = BTreeMap::new();
    for term in clear_empty(terms) {
        *merged.entry(term.symbol).or_insert(0.0) += term.exponent;
    }
    merged
}

/// Merge duplicate symbols per side, then cancel across sides.
///
/// A symbol present on both sides keeps only the difference of its exponents,
/// on the side that had the larger one; equal exponents remove both. Negative
/// net exponents move to the opposite side. Output sides are sorted by symbol.
pub fn combine(top: Vec<Term>, bottom: Vec<Term>) -> (Vec<Term>, Vec<Term>) {
    let mut net = merge(top);
    for (symbol, exponent) in merge(bottom) {
        *net.entry(symbol).or_insert(0.0) -= exponent;
    }

    let mut top = Vec::new();
    let mut bottom = Vec::new();
    for (symbol, exponent) in net {
        let exponent = snap_exponent(exponent);
        if exponent.abs() < EXPONENT_EPSILON {
            continue;
        }
        if exponent > 0.0 {
            top.push(Term::new(symbol, exponent));
        } else {
            bottom.push(Term::new(symbol, -exponent));
        }
    }
    (top, bottom)
}

/// Full normalization: empty removal, SI reduction, combination
pub fn normalize(registry: &Registry, top: Vec<Term>, bottom: Vec<Term>) -> Result<Normalized> {
    let top = clear_empty(top);
    let bottom = clear_empty(bottom);
    let reduced = reduce_to_si(registry, &top, &bottom)?;
    Ok(Normalized {
        signature: Signature::from_terms(reduced.top, reduced.bottom),
        factor: reduced.factor,
    })
}

/// Normalize an existing signature (e.g. display units after re-expression)
pub fn normalize_signature(registry: &Registry, signature: &Signature) -> Result<Normalized> {
    normalize(
        registry,
        signature.top().to_vec(),
        signature.bottom().to_vec(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_terms;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    fn norm(top: &str, bottom: &str) -> Normalized {
        let registry = Registry::builtin();
        normalize(
            &registry,
            parse_terms(top).unwrap(),
            parse_terms(bottom).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_clear_empty() {
        let terms = vec![Term::unit(""), Term::unit("m"), Term::new("", 2.0)];
        assert_eq!(clear_empty(terms), vec![Term::unit("m")]);
    }

    #[test]
    fn test_combine_merges_duplicates() {
        let (top, bottom) = combine(
            vec![Term::unit("m"), Term::new("m", 2.0)],
            vec![Term::unit("s"), Term::unit("s")],
        );
        assert_eq!(top, vec![Term::new("m", 3.0)]);
        assert_eq!(bottom, vec![Term::new("s", 2.0)]);
    }

    #[test]
    fn test_combine_cancels_across() {
        // larger numerator exponent survives on top
        let (top, bottom) = combine(vec![Term::new("m", 3.0)], vec![Term::unit("m")]);
        assert_eq!(top, vec![Term::new("m", 2.0)]);
        assert!(bottom.is_empty());

        // larger denominator exponent survives below
        let (top, bottom) = combine(vec![Term::unit("s")], vec![Term::new("s", 3.0)]);
        assert!(top.is_empty());
        assert_eq!(bottom, vec![Term::new("s", 2.0)]);

        // ties remove both sides entirely
        let (top, bottom) = combine(vec![Term::new("K", 2.0)], vec![Term::new("K", 2.0)]);
        assert!(top.is_empty());
        assert!(bottom.is_empty());
    }

    #[test]
    fn test_combine_moves_negative_exponents() {
        let (top, bottom) = combine(vec![Term::new("m", -1.0), Term::unit("s")], vec![]);
        assert_eq!(top, vec![Term::unit("s")]);
        assert_eq!(bottom, vec![Term::unit("m")]);
    }

    #[test]
    fn test_reduce_pressure() {
        let n = norm("Pa", "");
        assert_eq!(n.signature.top(), &[Term::unit("k_g")]);
        assert_eq!(n.signature.bottom(), &[Term::unit("m"), Term::new("s", 2.0)]);
        assert_relative_eq!(n.factor, 1.0);
    }

    #[test]
    fn test_reduce_volume_expands_decomposition_powers() {
        let n = norm("L", "");
        assert_eq!(n.signature.top(), &[Term::new("m", 3.0)]);
        assert_relative_eq!(n.factor, 1e-3);
    }

    #[test]
    fn test_reduce_denominator_powers() {
        // 1 / h^2 = 1 / (3600 s)^2
        let n = norm("", "h^2");
        assert_eq!(n.signature.bottom(), &[Term::new("s", 2.0)]);
        assert_relative_eq!(n.factor, 1.0 / (3600.0 * 3600.0));
    }

    #[test]
    fn test_reduce_prefixed_units() {
        let n = norm("k_m", "m_s");
        assert_eq!(n.signature.top(), &[Term::unit("m")]);
        assert_eq!(n.signature.bottom(), &[Term::unit("s")]);
        assert_relative_eq!(n.factor, 1e6);
    }

    #[test]
    fn test_mass_reduces_to_kilograms() {
        let n = norm("lb", "");
        assert_eq!(n.signature.top(), &[Term::unit("k_g")]);
        assert_relative_eq!(n.factor, 0.453592, max_relative = 1e-12);
    }

    #[test]
    fn test_normalize_idempotent() {
        let registry = Registry::builtin();
        let first = norm("BTU", "h*ft^2*R");
        let second = normalize_signature(&registry, &first.signature).unwrap();
        assert_eq!(second.signature, first.signature);
        assert_relative_eq!(second.factor, 1.0);
    }

    #[test]
    fn test_unknown_symbol() {
        let registry = Registry::builtin();
        let err = normalize(&registry, parse_terms("furlong").unwrap(), vec![]).unwrap_err();
        assert!(matches!(err, crate::Error::UnknownUnit(s) if s == "furlong"));
    }
}
