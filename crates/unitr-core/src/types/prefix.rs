//! Metric prefixes
//!
//! To add a new prefix, add an entry to the PREFIXES array.
//! Prefixes attach to a unit symbol with `_`, e.g. `k_g`, `μ_m`.

/// Separator between a prefix and its base unit symbol
pub const PREFIX_SEPARATOR: char = '_';

/// Prefix metadata - single source of truth for each prefix
pub struct PrefixDef {
    /// Prefix symbol as written before the separator
    pub symbol: &'static str,
    /// Multiplicative factor
    pub factor: f64,
}

/// Complete table of supported prefixes. The empty prefix is unity.
pub static PREFIXES: &[PrefixDef] = &[
    PrefixDef { symbol: "Y", factor: 1e24 },
    PrefixDef { symbol: "Z", factor: 1e21 },
    PrefixDef { symbol: "E", factor: 1e18 },
    PrefixDef { symbol: "P", factor: 1e15 },
    PrefixDef { symbol: "T", factor: 1e12 },
    PrefixDef { symbol: "G", factor: 1e9 },
    PrefixDef { symbol: "M", factor: 1e6 },
    PrefixDef { symbol: "k", factor: 1e3 },
    PrefixDef { symbol: "h", factor: 1e2 },
    PrefixDef { symbol: "da", factor: 1e1 },
    PrefixDef { symbol: "", factor: 1.0 },
    PrefixDef { symbol: "d", factor: 1e-1 },
    PrefixDef { symbol: "c", factor: 1e-2 },
    PrefixDef { symbol: "m", factor: 1e-3 },
    PrefixDef { symbol: "μ", factor: 1e-6 },
    PrefixDef { symbol: "n", factor: 1e-9 },
    PrefixDef { symbol: "p", factor: 1e-12 },
    PrefixDef { symbol: "f", factor: 1e-15 },
    PrefixDef { symbol: "a", factor: 1e-18 },
    PrefixDef { symbol: "z", factor: 1e-21 },
    PrefixDef { symbol: "y", factor: 1e-24 },
];

/// Split `prefix_base` into `(prefix, base)`. Without a separator the prefix is empty.
pub fn split_prefix(symbol: &str) -> (&str, &str) {
    symbol.split_once(PREFIX_SEPARATOR).unwrap_or(("", symbol))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_prefix() {
        assert_eq!(split_prefix("k_g"), ("k", "g"));
        assert_eq!(split_prefix("da_m"), ("da", "m"));
        assert_eq!(split_prefix("Pa"), ("", "Pa"));
        assert_eq!(split_prefix("m^3"), ("", "m^3"));
    }

    #[test]
    fn test_prefix_symbols_unique() {
        let mut symbols: Vec<_> = PREFIXES.iter().map(|p| p.symbol).collect();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), PREFIXES.len());
    }

    #[test]
    fn test_unity_prefix_present() {
        let unity = PREFIXES.iter().find(|p| p.symbol.is_empty()).unwrap();
        assert_eq!(unity.factor, 1.0);
    }
}
