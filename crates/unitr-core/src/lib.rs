//! unitr-core: Dimensional analysis engine
//!
//! This crate represents physical quantities as a scalar paired with a
//! symbolic unit signature, converts between unit systems and checks
//! dimensional consistency on arithmetic. It has no I/O beyond the optional
//! user unit file and can be embedded in any calculator front end.
//!
//! Unit expressions are written as two `*`-joined lists (numerator and
//! denominator), with `^` for powers and `_` between a metric prefix and its
//! unit: `("k_g*m^2", "s^2")`.
//!
//! # Example
//!
//! ```
//! use unitr_core::{Quantity, Registry};
//!
//! # fn main() -> unitr_core::Result<()> {
//! let registry = Registry::builtin();
//!
//! // Force times distance is energy
//! let force = Quantity::new(&registry, 1.0, "N", "")?;
//! let distance = Quantity::new(&registry, 1.0, "m", "")?;
//! let work = force.multiply(&distance);
//! assert_eq!(work.unit(), Quantity::new(&registry, 1.0, "J", "")?.unit());
//!
//! // Pressures in different units add after SI reduction
//! let total = Quantity::new(&registry, 1.0, "atm", "")?
//!     .add(&Quantity::new(&registry, 1.0, "bar", "")?)?;
//! assert!((total.scalar() - 201_325.0).abs() < 1e-6);
//!
//! // Re-express in chosen units
//! let mut mass = Quantity::new(&registry, 1000.0, "g", "")?;
//! mass.convert_to(&registry, "k_g", "")?;
//! assert_eq!(mass.to_string(), "1.0 kg");
//! # Ok(())
//! # }
//! ```

pub mod convert;
pub mod error;
pub mod format;
pub mod normalize;
pub mod parser;
pub mod registry;
pub mod types;

pub use convert::{Conversion, Converter, Target, Want};
pub use error::{Error, Result};
pub use parser::parse_terms;
pub use registry::Registry;
pub use types::{Dimension, Operand, Quantity, Signature, Term, UnitDef, UnitEntry, UNITS};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_default_is_builtin() {
        let registry = Registry::default();
        assert_eq!(registry.units().count(), UNITS.len());
    }

    #[test]
    fn test_quantity_roundtrip_through_json() {
        let registry = Registry::builtin();
        let speed = Quantity::new(&registry, 3.0, "m", "s").unwrap();
        let json = serde_json::to_string(&speed).unwrap();
        let back: Quantity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, speed);
    }
}
