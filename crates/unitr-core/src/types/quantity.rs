//! Physical quantities: a scalar paired with a unit signature

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Mul, Neg};

use super::term::EXPONENT_EPSILON;
use super::Signature;
use crate::error::{Error, Result};
use crate::format::format_scalar;
use crate::normalize::{self, normalize_signature};
use crate::parser::parse_terms;
use crate::registry::Registry;

/// Right-hand side of an arithmetic operation
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    Quantity(&'a Quantity),
    /// Bare number without units
    Scalar(f64),
}

impl<'a> From<&'a Quantity> for Operand<'a> {
    fn from(q: &'a Quantity) -> Self {
        Operand::Quantity(q)
    }
}

impl From<f64> for Operand<'_> {
    fn from(x: f64) -> Self {
        Operand::Scalar(x)
    }
}

/// A scalar with a unit signature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    scalar: f64,
    unit: Signature,
}

impl Quantity {
    /// Build from unit expressions, reducing them to SI base units.
    ///
    /// `Quantity::new(&registry, 3.0, "k_m", "h")` is 3 km/h, stored as
    /// 0.8333 m / s.
    pub fn new(registry: &Registry, scalar: f64, top: &str, bottom: &str) -> Result<Self> {
        let normalized = normalize::normalize(registry, parse_terms(top)?, parse_terms(bottom)?)?;
        Ok(Self {
            scalar: scalar * normalized.factor,
            unit: normalized.signature,
        })
    }

    /// Wrap an existing signature without SI reduction
    pub fn from_signature(scalar: f64, unit: Signature) -> Self {
        Self { scalar, unit }
    }

    pub fn dimensionless(scalar: f64) -> Self {
        Self::from_signature(scalar, Signature::dimensionless())
    }

    pub fn scalar(&self) -> f64 {
        self.scalar
    }

    pub fn unit(&self) -> &Signature {
        &self.unit
    }

    pub fn is_dimensionless(&self) -> bool {
        self.unit.is_dimensionless()
    }

    /// Identical signatures
    pub fn is_consistent_with(&self, other: &Quantity) -> bool {
        self.unit == other.unit
    }

    /// Sum of two quantities with identical signatures, or of a dimensionless
    /// quantity and a bare number.
    ///
    /// Signatures are compared as held: a re-expressed quantity only adds to
    /// one in the same display units.
    pub fn add<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Quantity> {
        match rhs.into() {
            Operand::Scalar(x) if self.is_dimensionless() => {
                Ok(Self::from_signature(self.scalar + x, self.unit.clone()))
            }
            Operand::Scalar(_) => Err(Error::mismatch(self.unit.label(), "dimensionless")),
            Operand::Quantity(other) if self.is_consistent_with(other) => Ok(
                Self::from_signature(self.scalar + other.scalar, self.unit.clone()),
            ),
            Operand::Quantity(other) => {
                Err(Error::mismatch(self.unit.label(), other.unit.label()))
            }
        }
    }

    /// `self + (-rhs)`
    pub fn subtract<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Quantity> {
        match rhs.into() {
            Operand::Scalar(x) => self.add(-x),
            Operand::Quantity(other) => self.add(&other.negate()),
        }
    }

    /// Same units, scalar sign flipped
    pub fn negate(&self) -> Quantity {
        Self::from_signature(-self.scalar, self.unit.clone())
    }

    /// Product; signatures are concatenated and recombined
    pub fn multiply<'a>(&self, rhs: impl Into<Operand<'a>>) -> Quantity {
        match rhs.into() {
            Operand::Scalar(x) => Self::from_signature(self.scalar * x, self.unit.clone()),
            Operand::Quantity(other) => Self::from_signature(
                self.scalar * other.scalar,
                self.unit.multiply(&other.unit),
            ),
        }
    }

    /// Numerator and denominator swapped, scalar inverted
    pub fn reciprocal(&self) -> Result<Quantity> {
        if self.scalar == 0.0 {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::from_signature(1.0 / self.scalar, self.unit.reciprocal()))
    }

    /// `self * reciprocal(rhs)`
    pub fn divide<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Quantity> {
        match rhs.into() {
            Operand::Scalar(x) if x == 0.0 => Err(Error::DivisionByZero),
            Operand::Scalar(x) => Ok(Self::from_signature(self.scalar / x, self.unit.clone())),
            Operand::Quantity(other) => Ok(self.multiply(&other.reciprocal()?)),
        }
    }

    /// Raise to a power.
    ///
    /// Dimensionless quantities accept any power. Dimensioned quantities need an
    /// integer power; zero yields dimensionless 1.
    pub fn pow(&self, power: f64) -> Result<Quantity> {
        if !power.is_finite() {
            return Err(Error::UnsupportedOperation(format!(
                "non-finite power {power}"
            )));
        }
        if self.is_dimensionless() {
            return Ok(Self::dimensionless(self.scalar.powf(power)));
        }

        let rounded = power.round();
        if (power - rounded).abs() >= EXPONENT_EPSILON {
            return Err(Error::UnsupportedOperation(format!(
                "fractional power {power} of {}",
                self.unit
            )));
        }

        if rounded > 0.0 {
            Ok(Self::from_signature(
                self.scalar.powf(rounded),
                self.unit.powf(rounded),
            ))
        } else if rounded < 0.0 {
            self.reciprocal()?.pow(-rounded)
        } else {
            // q / q: the signature cancels against its own reciprocal
            Ok(Self::from_signature(
                1.0,
                self.unit.multiply(&self.unit.reciprocal()),
            ))
        }
    }

    /// Re-express in the given units, in place.
    ///
    /// Fails with `DimensionMismatch` when the target does not reduce to the
    /// same SI signature; the quantity is left unchanged in that case.
    pub fn convert_to(&mut self, registry: &Registry, top: &str, bottom: &str) -> Result<()> {
        let target = Signature::parse(top, bottom)?;
        let scalar = self
            .scalar_in(registry, &target)?
            .ok_or_else(|| Error::mismatch(self.unit.label(), target.label()))?;
        log::trace!("re-expressed {self} as {} {target}", format_scalar(scalar));
        self.scalar = scalar;
        self.unit = target;
        Ok(())
    }

    /// Converted copy, see [`Quantity::convert_to`]
    pub fn to(&self, registry: &Registry, top: &str, bottom: &str) -> Result<Quantity> {
        let mut converted = self.clone();
        converted.convert_to(registry, top, bottom)?;
        Ok(converted)
    }

    /// Copy expressed in SI base units
    pub fn to_si(&self, registry: &Registry) -> Result<Quantity> {
        let normalized = normalize_signature(registry, &self.unit)?;
        Ok(Self::from_signature(
            self.scalar * normalized.factor,
            normalized.signature,
        ))
    }

    /// Scalar value of this quantity expressed in `unit`; `None` when the
    /// two reduce to different SI signatures
    fn scalar_in(&self, registry: &Registry, unit: &Signature) -> Result<Option<f64>> {
        let source = normalize_signature(registry, &self.unit)?;
        let target = normalize_signature(registry, unit)?;
        if source.signature != target.signature {
            return Ok(None);
        }
        Ok(Some(self.scalar * (source.factor / target.factor)))
    }

    /// Plain number; only for dimensionless quantities
    pub fn as_scalar(&self) -> Result<f64> {
        if self.is_dimensionless() {
            Ok(self.scalar)
        } else {
            Err(Error::NotDimensionless(self.unit.to_string()))
        }
    }

    /// Integer value; only for dimensionless, integral quantities
    pub fn as_integer(&self) -> Result<i64> {
        let x = self.as_scalar()?;
        // i64::MAX as f64 rounds up to 2^63, which is itself out of range
        if x.fract() != 0.0 || !x.is_finite() || x < i64::MIN as f64 || x >= i64::MAX as f64 {
            return Err(Error::NotIntegral(x));
        }
        Ok(x as i64)
    }

    pub fn log10(&self) -> Result<f64> {
        self.as_scalar().map(f64::log10)
    }

    pub fn ln(&self) -> Result<f64> {
        self.as_scalar().map(f64::ln)
    }

    pub fn exp(&self) -> Result<f64> {
        self.as_scalar().map(f64::exp)
    }
}

impl TryFrom<&Quantity> for f64 {
    type Error = Error;

    fn try_from(q: &Quantity) -> Result<f64> {
        q.as_scalar()
    }
}

impl Neg for &Quantity {
    type Output = Quantity;

    fn neg(self) -> Quantity {
        self.negate()
    }
}

impl Neg for Quantity {
    type Output = Quantity;

    fn neg(self) -> Quantity {
        self.negate()
    }
}

impl Mul<&Quantity> for &Quantity {
    type Output = Quantity;

    fn mul(self, rhs: &Quantity) -> Quantity {
        self.multiply(rhs)
    }
}

impl Mul<f64> for &Quantity {
    type Output = Quantity;

    fn mul(self, rhs: f64) -> Quantity {
        self.multiply(rhs)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.is_dimensionless() {
            write!(f, "{}", format_scalar(self.scalar))
        } else {
            write!(f, "{} {}", format_scalar(self.scalar), self.unit)
        }
    }
}
