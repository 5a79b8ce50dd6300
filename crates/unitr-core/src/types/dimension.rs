//! Physical dimensions and their SI representatives

use serde::{Deserialize, Serialize};
use std::fmt;

/// Categories of units. Units are only convertible within one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
    Mass,
    Time,
    Length,
    Pressure,
    Force,
    Energy,
    Power,
    Volume,
    Temperature,
    Mole,
}

impl Dimension {
    /// Unit the dimension's scale factors are expressed against
    pub fn reference_unit(&self) -> &'static str {
        match self {
            Dimension::Mass => "g",
            Dimension::Time => "s",
            Dimension::Length => "m",
            Dimension::Pressure => "Pa",
            Dimension::Force => "N",
            Dimension::Energy => "J",
            Dimension::Power => "W",
            Dimension::Volume => "L",
            Dimension::Temperature => "K",
            Dimension::Mole => "mol",
        }
    }

    /// Canonical SI symbol (prefix-tagged where SI uses a prefixed unit)
    pub fn si_symbol(&self) -> &'static str {
        match self {
            Dimension::Mass => "k_g",
            Dimension::Time => "s",
            Dimension::Length => "m",
            Dimension::Pressure => "Pa",
            Dimension::Force => "N",
            Dimension::Energy => "J",
            Dimension::Power => "W",
            Dimension::Volume => "m^3",
            Dimension::Temperature => "K",
            Dimension::Mole => "mol",
        }
    }

    /// Iterator over all dimensions
    pub fn all() -> impl Iterator<Item = Dimension> {
        [
            Dimension::Mass,
            Dimension::Time,
            Dimension::Length,
            Dimension::Pressure,
            Dimension::Force,
            Dimension::Energy,
            Dimension::Power,
            Dimension::Volume,
            Dimension::Temperature,
            Dimension::Mole,
        ]
        .into_iter()
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
