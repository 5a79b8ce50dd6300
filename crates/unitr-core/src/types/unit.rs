//! Primitive units and their scale factors
//!
//! To add a new builtin unit, add an entry to the UNITS array.
//! Units added at runtime go through `Registry::register` instead.
//!
//! Scale factors follow one convention throughout: a unit's factor is how many
//! of that unit make up one reference unit of its dimension. Divide by the
//! factor to convert into the unit, multiply to convert away from it.

use super::Dimension;
use serde::{Deserialize, Serialize};

/// Static unit metadata - single source of truth for each builtin unit
pub struct UnitDef {
    /// Symbol as written in unit expressions (e.g., "lb", "kPa")
    pub symbol: &'static str,
    /// Unit category
    pub dimension: Dimension,
    /// Units per reference unit of the dimension
    pub factor: f64,
}

/// A unit entry owned by a registry (builtin or registered at runtime)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitEntry {
    pub symbol: String,
    pub dimension: Dimension,
    pub factor: f64,
}

impl From<&UnitDef> for UnitEntry {
    fn from(def: &UnitDef) -> Self {
        UnitEntry {
            symbol: def.symbol.to_string(),
            dimension: def.dimension,
            factor: def.factor,
        }
    }
}

const GRAMS_PER_POUND: f64 = 453.592;
const METERS_PER_INCH: f64 = 0.0254;
const SECONDS_PER_HOUR: f64 = 3600.0;

macro_rules! unit {
    ($symbol:expr, $dimension:ident, $factor:expr) => {
        UnitDef {
            symbol: $symbol,
            dimension: Dimension::$dimension,
            factor: $factor,
        }
    };
}

/// Complete table of builtin units.
pub static UNITS: &[UnitDef] = &[
    // Mass (reference: gram)
    unit!("g", Mass, 1.0),
    unit!("mg", Mass, 1000.0),
    unit!("kg", Mass, 1.0 / 1000.0),
    unit!("lb", Mass, 1.0 / GRAMS_PER_POUND),
    unit!("oz", Mass, 16.0 / GRAMS_PER_POUND),
    unit!("ton", Mass, 1.0 / GRAMS_PER_POUND / 2000.0),
    unit!("amu", Mass, 6.022e23),
    // Time (reference: second)
    unit!("s", Time, 1.0),
    unit!("min", Time, 1.0 / 60.0),
    unit!("h", Time, 1.0 / SECONDS_PER_HOUR),
    unit!("d", Time, 1.0 / SECONDS_PER_HOUR / 24.0),
    unit!("y", Time, 1.0 / SECONDS_PER_HOUR / 24.0 / 365.0),
    // Temperature (reference: kelvin)
    unit!("K", Temperature, 1.0),
    unit!("R", Temperature, 1.8),
    // Length (reference: meter)
    unit!("m", Length, 1.0),
    unit!("mm", Length, 1000.0),
    unit!("cm", Length, 100.0),
    unit!("km", Length, 1.0 / 1000.0),
    unit!("in", Length, 1.0 / METERS_PER_INCH),
    unit!("mil", Length, 1000.0 / METERS_PER_INCH),
    unit!("ft", Length, 1.0 / METERS_PER_INCH / 12.0),
    unit!("yd", Length, 1.0 / METERS_PER_INCH / 36.0),
    unit!("mile", Length, 1.0 / METERS_PER_INCH / 12.0 / 5280.0),
    // Pressure (reference: pascal)
    unit!("Pa", Pressure, 1.0),
    unit!("kPa", Pressure, 1e-3),
    unit!("MPa", Pressure, 1e-6),
    unit!("GPa", Pressure, 1e-9),
    unit!("torr", Pressure, 0.00750062),
    unit!("mmHg", Pressure, 0.00750062),
    unit!("bar", Pressure, 1e-5),
    unit!("mbar", Pressure, 1e-2),
    unit!("atm", Pressure, 1.0 / 101_325.0),
    unit!("psi", Pressure, 0.000145038),
    // Force (reference: newton)
    unit!("N", Force, 1.0),
    unit!("lbf", Force, 0.224809),
    // Energy (reference: joule)
    unit!("J", Energy, 1.0),
    unit!("kJ", Energy, 1e-3),
    unit!("BTU", Energy, 0.000947817),
    unit!("cal", Energy, 0.239006),
    unit!("Cal", Energy, 0.239006 / 1000.0),
    unit!("Wh", Energy, 0.000277778),
    unit!("kWh", Energy, 0.000277778 / 1000.0),
    unit!("eV", Energy, 1.0 / 1.60218e-19),
    // Power (reference: watt)
    unit!("W", Power, 1.0),
    unit!("kW", Power, 1e-3),
    unit!("MW", Power, 1e-6),
    unit!("Horsepower", Power, 0.00134102),
    // Volume (reference: liter)
    unit!("L", Volume, 1.0),
    unit!("mL", Volume, 1000.0),
    unit!("gal", Volume, 0.264172),
    unit!("quart", Volume, 1.05669),
    unit!("cup", Volume, 4.22675),
    unit!("pint", Volume, 4.22675 / 2.0),
    unit!("Tbsp", Volume, 67.628),
    unit!("tsp", Volume, 202.884),
    unit!("m^3", Volume, 1e-3),
    // Amount of substance (reference: mole)
    unit!("mol", Mole, 1.0),
    unit!("lbmol", Mole, 1.0 / GRAMS_PER_POUND),
];

/// SI symbol decomposition into base numerator/denominator expressions
pub struct SiDef {
    pub symbol: &'static str,
    pub top: &'static str,
    pub bottom: &'static str,
}

/// Base-unit decomposition of every canonical SI symbol.
pub static SI_DECOMPOSITIONS: &[SiDef] = &[
    SiDef { symbol: "k_g", top: "k_g", bottom: "" },
    SiDef { symbol: "s", top: "s", bottom: "" },
    SiDef { symbol: "m", top: "m", bottom: "" },
    SiDef { symbol: "Pa", top: "k_g", bottom: "m*s^2" },
    SiDef { symbol: "N", top: "k_g*m", bottom: "s^2" },
    SiDef { symbol: "J", top: "k_g*m^2", bottom: "s^2" },
    SiDef { symbol: "W", top: "k_g*m^2", bottom: "s^3" },
    SiDef { symbol: "m^3", top: "m^3", bottom: "" },
    SiDef { symbol: "K", top: "K", bottom: "" },
    SiDef { symbol: "mol", top: "mol", bottom: "" },
];
