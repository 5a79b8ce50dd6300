//! Unit registry
//!
//! Owns the classification table (symbol -> dimension), the per-dimension
//! scale factors, the prefix table and the SI decompositions. A registry is a
//! plain value: build one per unit system and pass it by reference.

pub mod store;

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;

use crate::error::{Error, Result};
use crate::normalize::clear_empty;
use crate::parser::parse_terms;
use crate::types::prefix::PREFIX_SEPARATOR;
use crate::types::unit::SI_DECOMPOSITIONS;
use crate::types::{Dimension, Term, UnitEntry, PREFIXES, UNITS};

/// Base numerator/denominator terms of an SI symbol
#[derive(Debug, Clone, PartialEq)]
pub struct SiDecomposition {
    pub top: Vec<Term>,
    pub bottom: Vec<Term>,
}

/// Lookup tables consumed by the converter and normalizer
#[derive(Debug, Clone)]
pub struct Registry {
    units: BTreeMap<String, UnitEntry>,
    prefixes: HashMap<String, f64>,
    si: HashMap<String, SiDecomposition>,
    /// Symbols added through `register` (persisted by `save_user_units`)
    registered: BTreeSet<String>,
}

impl Registry {
    /// Prefixes and SI decompositions only, no units
    pub fn empty() -> Self {
        let prefixes = PREFIXES
            .iter()
            .map(|p| (p.symbol.to_string(), p.factor))
            .collect();

        let si = SI_DECOMPOSITIONS
            .iter()
            .map(|def| {
                let parse = |expr: &str| {
                    parse_terms(expr)
                        .map(clear_empty)
                        .expect("SI decompositions must parse")
                };
                let decomposition = SiDecomposition {
                    top: parse(def.top),
                    bottom: parse(def.bottom),
                };
                (def.symbol.to_string(), decomposition)
            })
            .collect();

        Self {
            units: BTreeMap::new(),
            prefixes,
            si,
            registered: BTreeSet::new(),
        }
    }

    /// Registry seeded with every builtin unit
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for def in UNITS {
            registry
                .units
                .insert(def.symbol.to_string(), UnitEntry::from(def));
        }
        registry
    }

    /// Builtin units plus the user unit file, if one exists.
    ///
    /// A missing or unreadable file leaves the builtin table in place.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn with_user_units() -> Self {
        let mut registry = Self::builtin();
        if let Some(path) = store::default_path() {
            if path.exists() {
                if let Err(e) = registry.load_units(&path) {
                    log::warn!("Failed to load user units from {}: {e}", path.display());
                }
            }
        }
        registry
    }

    /// Add or replace a unit
    pub fn register(
        &mut self,
        symbol: impl Into<String>,
        dimension: Dimension,
        factor: f64,
    ) -> Result<()> {
        let symbol = symbol.into();
        validate(&symbol, factor)?;

        let replaced = self.units.insert(
            symbol.clone(),
            UnitEntry {
                symbol: symbol.clone(),
                dimension,
                factor,
            },
        );
        log::debug!(
            "{} unit {symbol} ({dimension}, {factor} per {})",
            if replaced.is_some() { "replaced" } else { "registered" },
            dimension.reference_unit()
        );

        self.registered.insert(symbol);
        Ok(())
    }

    /// Dimension of a bare (unprefixed) symbol
    pub fn dimension_of(&self, symbol: &str) -> Result<Dimension> {
        self.entry(symbol).map(|e| e.dimension)
    }

    /// Units of `symbol` per reference unit of its dimension
    pub fn scale_factor(&self, symbol: &str) -> Result<f64> {
        self.entry(symbol).map(|e| e.factor)
    }

    /// Canonical SI symbol of a dimension
    pub fn canonical_si(&self, dimension: Dimension) -> &'static str {
        dimension.si_symbol()
    }

    /// Base decomposition of a canonical SI symbol (prefix included, e.g. `k_g`)
    pub fn si_decomposition(&self, symbol: &str) -> Result<&SiDecomposition> {
        self.si
            .get(symbol)
            .ok_or_else(|| Error::UnknownUnit(symbol.to_string()))
    }

    /// Multiplier of a prefix; the empty prefix is 1
    pub fn prefix_factor(&self, prefix: &str) -> Result<f64> {
        self.prefixes
            .get(prefix)
            .copied()
            .ok_or_else(|| Error::UnknownPrefix(prefix.to_string()))
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.units.contains_key(symbol)
    }

    /// All units, sorted by symbol
    pub fn units(&self) -> impl Iterator<Item = &UnitEntry> {
        self.units.values()
    }

    /// Units added through `register`
    pub fn registered_units(&self) -> impl Iterator<Item = &UnitEntry> {
        self.registered.iter().filter_map(|s| self.units.get(s))
    }

    /// Register every unit from a unit file; returns how many were loaded.
    ///
    /// All or nothing: one invalid entry leaves the registry unchanged.
    pub fn load_units(&mut self, path: &Path) -> Result<usize> {
        let file = store::load(path)?;
        let count = file.units.len();

        let mut staged = self.clone();
        for entry in file.units {
            staged.register(entry.symbol, entry.dimension, entry.factor)?;
        }
        *self = staged;

        log::debug!("loaded {count} units from {}", path.display());
        Ok(count)
    }

    /// Persist the units added through `register`
    pub fn save_user_units(&self, path: &Path) -> Result<()> {
        let file = store::UnitFile {
            units: self.registered_units().cloned().collect(),
        };
        store::save(path, &file)
    }

    fn entry(&self, symbol: &str) -> Result<&UnitEntry> {
        self.units
            .get(symbol)
            .ok_or_else(|| Error::UnknownUnit(symbol.to_string()))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate(symbol: &str, factor: f64) -> Result<()> {
    if symbol.is_empty() {
        return Err(Error::InvalidUnitDefinition("empty symbol".to_string()));
    }
    if symbol
        .chars()
        .any(|c| c == '*' || c == '^' || c == PREFIX_SEPARATOR || c.is_whitespace())
    {
        return Err(Error::InvalidUnitDefinition(format!(
            "symbol `{symbol}` contains a reserved character"
        )));
    }
    if !factor.is_finite() || factor <= 0.0 {
        return Err(Error::InvalidUnitDefinition(format!(
            "factor {factor} for `{symbol}` must be positive and finite"
        )));
    }
    Ok(())
}
