//! Unit expression parser using pest
//!
//! An expression is a `*`-joined list of symbols, each optionally raised with
//! `^`, e.g. `k_g*m^2`. Parsing performs power expansion: every piece becomes
//! a [`Term`], with exponent 1 when no `^` is given. Empty pieces (an absent
//! numerator, `m**s`) come out as terms with an empty symbol.

use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

use crate::error::{Error, Result};
use crate::types::Term;

#[derive(Parser)]
#[grammar = "parser/grammar.pest"]
pub struct UnitParser;

/// Parse one side (numerator or denominator) of a unit expression
pub fn parse_terms(input: &str) -> Result<Vec<Term>> {
    let mut pairs = UnitParser::parse(Rule::expression, input)
        .map_err(|e| Error::InvalidExpression(format!("`{input}`: {e}")))?;

    let expression = pairs
        .next()
        .ok_or_else(|| Error::InvalidExpression(format!("`{input}`")))?;

    expression
        .into_inner()
        .filter(|pair| pair.as_rule() == Rule::piece)
        .map(build_term)
        .collect()
}

fn build_term(piece: Pair<'_, Rule>) -> Result<Term> {
    let mut symbol = "";
    let mut exponent = 1.0;

    for inner in piece.into_inner() {
        match inner.as_rule() {
            Rule::symbol => symbol = inner.as_str(),
            Rule::exponent => {
                let text = inner.as_str();
                exponent = text
                    .parse::<f64>()
                    .map_err(|e| Error::InvalidExpression(format!("exponent `{text}`: {e}")))?;
            }
            _ => {}
        }
    }

    Ok(Term::new(symbol, exponent))
}
