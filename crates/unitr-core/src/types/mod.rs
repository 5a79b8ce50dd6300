//! Value types for unit algebra

pub mod dimension;
pub mod prefix;
pub mod quantity;
pub mod signature;
pub mod term;
pub mod unit;

pub use dimension::Dimension;
pub use prefix::{PrefixDef, PREFIXES};
pub use quantity::{Operand, Quantity};
pub use signature::Signature;
pub use term::Term;
pub use unit::{UnitDef, UnitEntry, UNITS};
