//! Unit-checked arithmetic on quantities built from unit expressions

use approx::assert_relative_eq;
use pretty_assertions::assert_eq;
use unitr_core::{Error, Quantity, Registry, Signature, Term};

fn q(registry: &Registry, scalar: f64, top: &str, bottom: &str) -> Quantity {
    Quantity::new(registry, scalar, top, bottom).unwrap()
}

#[test]
fn test_newton_times_meter_is_joule() {
    let registry = Registry::builtin();

    let work = q(&registry, 1.0, "N", "").multiply(&q(&registry, 1.0, "m", ""));

    assert_eq!(
        work.unit().top(),
        &[Term::unit("k_g"), Term::new("m", 2.0)]
    );
    assert_eq!(work.unit().bottom(), &[Term::new("s", 2.0)]);
    assert_eq!(work.unit(), q(&registry, 1.0, "J", "").unit());
}

#[test]
fn test_pascal_plus_bar() {
    let registry = Registry::builtin();

    // 101325 Pa + 1 bar = 201325 Pa, both kg / (m s^2)
    let pa = q(&registry, 101_325.0, "Pa", "");
    let bar = q(&registry, 1.0, "bar", "");
    let sum = pa.add(&bar).unwrap();

    assert_relative_eq!(sum.scalar(), 201_325.0, max_relative = 1e-12);
    assert_eq!(sum.unit(), &Signature::parse("k_g", "m*s^2").unwrap());
}

#[test]
fn test_meters_plus_seconds_fails() {
    let registry = Registry::builtin();

    let err = q(&registry, 1.0, "m", "")
        .add(&q(&registry, 1.0, "s", ""))
        .unwrap_err();

    match err {
        Error::DimensionMismatch { left, right } => {
            assert_eq!(left, "m");
            assert_eq!(right, "s");
        }
        other => panic!("expected dimension mismatch, got {other:?}"),
    }
}

#[test]
fn test_subtract_mismatch_fails() {
    let registry = Registry::builtin();
    let result = q(&registry, 1.0, "J", "").subtract(&q(&registry, 1.0, "W", ""));
    assert!(matches!(result, Err(Error::DimensionMismatch { .. })));
}

#[test]
fn test_inverse_meter() {
    let registry = Registry::builtin();
    let inverse = q(&registry, 2.0, "m", "").pow(-1.0).unwrap();
    assert_eq!(inverse, q(&registry, 0.5, "", "m"));
}

#[test]
fn test_power_zero_is_dimensionless_one() {
    let registry = Registry::builtin();
    for (top, bottom) in [("m", ""), ("BTU", "lb*R"), ("", "s"), ("k_g*m^2", "s^3")] {
        let one = q(&registry, 42.0, top, bottom).pow(0.0).unwrap();
        assert_eq!(one.scalar(), 1.0);
        assert!(one.is_dimensionless(), "{top} / {bottom}");
    }
}

#[test]
fn test_power_of_compound_unit() {
    let registry = Registry::builtin();

    // (2 m/s)^3 = 8 m^3/s^3
    let cube = q(&registry, 2.0, "m", "s").pow(3.0).unwrap();
    assert_relative_eq!(cube.scalar(), 8.0);
    assert_eq!(cube.unit(), &Signature::parse("m^3", "s^3").unwrap());

    // (2 m/s)^-2 = 0.25 s^2/m^2
    let inverse_square = q(&registry, 2.0, "m", "s").pow(-2.0).unwrap();
    assert_relative_eq!(inverse_square.scalar(), 0.25);
    assert_eq!(inverse_square.unit(), &Signature::parse("s^2", "m^2").unwrap());
}

#[test]
fn test_division_cancels_to_dimensionless() {
    let registry = Registry::builtin();

    // 1 mile / 1 ft = 5280
    let ratio = q(&registry, 1.0, "mile", "")
        .divide(&q(&registry, 1.0, "ft", ""))
        .unwrap();
    assert!(ratio.is_dimensionless());
    assert_relative_eq!(ratio.as_scalar().unwrap(), 5280.0, max_relative = 1e-9);
}

#[test]
fn test_ideal_gas_constant() {
    let registry = Registry::builtin();

    // P V / (n T) for 1 atm, 22.414 L, 1 mol, 273.15 K is R = 8.314 J / (mol K)
    let p = q(&registry, 1.0, "atm", "");
    let v = q(&registry, 22.414, "L", "");
    let n = q(&registry, 1.0, "mol", "");
    let t = q(&registry, 273.15, "K", "");

    let r = p
        .multiply(&v)
        .divide(&n.multiply(&t))
        .unwrap();

    assert_eq!(r.unit(), q(&registry, 1.0, "J", "mol*K").unit());
    assert_relative_eq!(r.scalar(), 8.314, max_relative = 1e-3);

    let mut in_calories = r.clone();
    in_calories.convert_to(&registry, "cal", "mol*K").unwrap();
    assert_relative_eq!(in_calories.scalar(), 1.987, max_relative = 1e-3);
}

#[test]
fn test_power_from_energy_over_time() {
    let registry = Registry::builtin();

    // 1 kWh spread over 1 h is 1 kW
    let energy = q(&registry, 1.0, "kWh", "");
    let time = q(&registry, 1.0, "h", "");
    let power = energy.divide(&time).unwrap();

    assert_eq!(power.unit(), q(&registry, 1.0, "W", "").unit());
    assert_relative_eq!(power.scalar(), 1000.0, max_relative = 1e-5);
}

#[test]
fn test_scalar_operands() {
    let registry = Registry::builtin();
    let length = q(&registry, 4.0, "m", "");

    assert_eq!(length.multiply(2.5).scalar(), 10.0);
    assert_eq!(length.divide(2.0).unwrap().scalar(), 2.0);
    assert_eq!(length.divide(2.0).unwrap().unit(), length.unit());
    assert!(matches!(
        length.add(1.0),
        Err(Error::DimensionMismatch { .. })
    ));
}

#[test]
fn test_operands_untouched_by_failures() {
    let registry = Registry::builtin();
    let a = q(&registry, 1.0, "m", "");
    let b = q(&registry, 1.0, "s", "");
    let (a_before, b_before) = (a.clone(), b.clone());

    assert!(a.add(&b).is_err());
    assert!(a.subtract(&b).is_err());
    assert_eq!(a, a_before);
    assert_eq!(b, b_before);
}

#[test]
fn test_custom_unit_participates_in_arithmetic() {
    let mut registry = Registry::builtin();
    registry
        .register("furlong", unitr_core::Dimension::Length, 1.0 / 201.168)
        .unwrap();
    registry
        .register("fortnight", unitr_core::Dimension::Time, 1.0 / 1_209_600.0)
        .unwrap();

    let speed = q(&registry, 1.0, "furlong", "fortnight");
    assert_eq!(speed.unit(), &Signature::parse("m", "s").unwrap());
    assert_relative_eq!(speed.scalar(), 201.168 / 1_209_600.0, max_relative = 1e-12);
}
