//! # Conversion Engine
//!
//! Converts a scalar from one unit to another within a category. Every
//! conversion routes through the category's base unit, so N units need N
//! rules rather than N² pairs:
//!
//! ```text
//! value ──to_base(from)──▶ base ──from_base(to)──▶ result
//! ```
//!
//! ## Numeric Behaviour
//!
//! - `from == to` returns the input untouched (bit-for-bit)
//! - Linear rules round-trip within 1e-9 relative error
//! - Density rules use empirical fits (see [`crate::equations::density`]);
//!   round trips drift by up to ~2e-4 SG and out-of-range inputs extrapolate
//! - Starting from Brix or Plato, a round trip through SG comes back within
//!   0.01° over 0–25° and within 0.06° up to 40°; near zero that is a large
//!   relative error, so compare in absolute degrees
//! - NaN and infinities propagate; they are never an error
//!
//! ## Example
//!
//! ```rust
//! use brew_core::conversion::{convert, convert_ids};
//! use brew_core::registry::{Category, Unit};
//!
//! let f = convert(100.0, Unit::Celsius, Unit::Fahrenheit, Category::Temperature).unwrap();
//! assert_eq!(f, 212.0);
//!
//! let gal = convert_ids(1.0, "l", "gal", "volume").unwrap();
//! assert!((gal - 0.264172).abs() < 0.0001);
//!
//! // Units must belong to the requested category
//! assert!(convert(1.0, Unit::Liter, Unit::Pound, Category::Volume).is_err());
//! ```

use crate::errors::BrewResult;
use crate::registry::{Category, Unit};

/// Convert `value` from one unit to another within `category`.
///
/// # Errors
///
/// `UnknownUnit` when either unit is not a member of `category`.
pub fn convert(value: f64, from: Unit, to: Unit, category: Category) -> BrewResult<f64> {
    let from = from.in_category(category)?;
    let to = to.in_category(category)?;
    Ok(convert_within(value, from, to))
}

/// Convert using string identifiers, as they arrive from a form.
///
/// # Errors
///
/// `UnknownCategory` / `UnknownUnit` for identifiers that don't resolve, and
/// `UnknownUnit` for a unit outside the category.
pub fn convert_ids(value: f64, from: &str, to: &str, category: &str) -> BrewResult<f64> {
    let category = Category::from_id(category)?;
    let from = Unit::from_id(from)?;
    let to = Unit::from_id(to)?;
    tracing::trace!(value, %from, %to, %category, "convert");
    convert(value, from, to, category)
}

/// Value in `unit` → the base unit of its category
#[inline]
pub fn to_base(value: f64, unit: Unit) -> f64 {
    unit.rule().to_base(value)
}

/// Base-unit value → `unit`
#[inline]
pub fn from_base(base: f64, unit: Unit) -> f64 {
    unit.rule().from_base(base)
}

/// Conversion between two units already known to share a category
#[inline]
pub(crate) fn convert_within(value: f64, from: Unit, to: Unit) -> f64 {
    debug_assert_eq!(from.category(), to.category());
    if from == to {
        return value;
    }
    from_base(to_base(value, from), to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::BrewError;

    const LINEAR_SAMPLES: [f64; 7] = [-40.0, -1.5, 0.0, 0.25, 1.0, 19.0, 1234.5];

    fn units_of(category: Category) -> Vec<Unit> {
        category.units().map(|def| def.unit).collect()
    }

    fn rel_err(a: f64, b: f64) -> f64 {
        if b == 0.0 {
            a.abs()
        } else {
            ((a - b) / b).abs()
        }
    }

    #[test]
    fn test_identity_is_exact() {
        for unit in Unit::ALL {
            for x in [0.1, 1.050, -3.7, 1e12] {
                assert_eq!(convert(x, unit, unit, unit.category()).unwrap(), x);
            }
        }
    }

    #[test]
    fn test_identity_keeps_nan() {
        assert!(convert(f64::NAN, Unit::Brix, Unit::Brix, Category::Density).unwrap().is_nan());
    }

    #[test]
    fn test_linear_roundtrip() {
        for category in [Category::Volume, Category::Mass, Category::Temperature] {
            let units = units_of(category);
            for &a in &units {
                for &b in &units {
                    for x in LINEAR_SAMPLES {
                        let there = convert(x, a, b, category).unwrap();
                        let back = convert(there, b, a, category).unwrap();
                        assert!(
                            rel_err(back, x) < 1e-9,
                            "{} -> {} -> {} gave {} for {}",
                            a, b, a, back, x
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_density_roundtrip_in_sg() {
        let units = units_of(Category::Density);
        let mut sg = 0.980;
        while sg <= 1.170 {
            for &unit in &units {
                let there = convert(sg, Unit::SpecificGravity, unit, Category::Density).unwrap();
                let back = convert(there, unit, Unit::SpecificGravity, Category::Density).unwrap();
                assert!(rel_err(back, sg) < 1e-3, "sg {} via {} gave {}", sg, unit, back);
            }
            sg += 0.01;
        }
    }

    #[test]
    fn test_density_roundtrip_from_native_units() {
        for unit in [Unit::Brix, Unit::Plato] {
            for step in 0..=50 {
                let x = step as f64 * 0.5;
                let sg = convert(x, unit, Unit::SpecificGravity, Category::Density).unwrap();
                let back = convert(sg, Unit::SpecificGravity, unit, Category::Density).unwrap();
                assert!((back - x).abs() < 0.01, "{} {} came back as {}", x, unit, back);
            }
            for x in [30.0, 35.0, 40.0] {
                let sg = convert(x, unit, Unit::SpecificGravity, Category::Density).unwrap();
                let back = convert(sg, Unit::SpecificGravity, unit, Category::Density).unwrap();
                assert!((back - x).abs() < 0.06, "{} {} came back as {}", x, unit, back);
            }
        }
        for step in 0..=40 {
            let x = step as f64 * 0.5;
            for unit in [Unit::Baume, Unit::Oechsle] {
                let sg = convert(x, unit, Unit::SpecificGravity, Category::Density).unwrap();
                let back = convert(sg, Unit::SpecificGravity, unit, Category::Density).unwrap();
                assert!((back - x).abs() < 1e-9, "{} {} came back as {}", x, unit, back);
            }
        }
    }

    #[test]
    fn test_density_roundtrip_between_scales() {
        // Brix → Plato → Brix passes through two fits each way
        for brix in [2.0, 8.0, 12.0, 20.0, 30.0] {
            let plato = convert(brix, Unit::Brix, Unit::Plato, Category::Density).unwrap();
            let back = convert(plato, Unit::Plato, Unit::Brix, Category::Density).unwrap();
            assert!((back - brix).abs() < 0.1, "{} °Bx came back as {}", brix, back);
        }
    }

    #[test]
    fn test_volume_literals() {
        let gal = convert(1.0, Unit::Liter, Unit::Gallon, Category::Volume).unwrap();
        assert!((gal - 0.264172).abs() < 0.0001);
        let l = convert(5.0, Unit::Gallon, Unit::Liter, Category::Volume).unwrap();
        assert!((l - 18.92706).abs() < 1e-5);
        let ml = convert(12.0, Unit::FluidOunce, Unit::Milliliter, Category::Volume).unwrap();
        assert!((ml - 354.882).abs() < 0.001);
        let gal = convert(1.0, Unit::Barrel, Unit::Gallon, Category::Volume).unwrap();
        assert!((gal - 31.0).abs() < 1e-9);
    }

    #[test]
    fn test_mass_literals() {
        let g = convert(1.0, Unit::Pound, Unit::Gram, Category::Mass).unwrap();
        assert_eq!(g, 453.59237);
        let oz = convert(1.0, Unit::Pound, Unit::Ounce, Category::Mass).unwrap();
        assert!((oz - 16.0).abs() < 1e-9);
    }

    #[test]
    fn test_temperature_literals() {
        assert_eq!(convert(100.0, Unit::Celsius, Unit::Fahrenheit, Category::Temperature).unwrap(), 212.0);
        assert_eq!(convert(0.0, Unit::Celsius, Unit::Fahrenheit, Category::Temperature).unwrap(), 32.0);
        assert_eq!(convert(212.0, Unit::Fahrenheit, Unit::Celsius, Category::Temperature).unwrap(), 100.0);
        assert_eq!(convert(-40.0, Unit::Fahrenheit, Unit::Celsius, Category::Temperature).unwrap(), -40.0);
        let k = convert(20.0, Unit::Celsius, Unit::Kelvin, Category::Temperature).unwrap();
        assert!((k - 293.15).abs() < 1e-9);
    }

    #[test]
    fn test_density_literals() {
        let oe = convert(1.085, Unit::SpecificGravity, Unit::Oechsle, Category::Density).unwrap();
        assert!((oe - 85.0).abs() < 1e-9);
        let brix = convert(1.050, Unit::SpecificGravity, Unit::Brix, Category::Density).unwrap();
        assert!((brix - 12.387).abs() < 0.01);
        let sg = convert(12.0, Unit::Plato, Unit::SpecificGravity, Category::Density).unwrap();
        assert!((sg - 1.0484).abs() < 0.0005);
    }

    #[test]
    fn test_extrapolation_is_not_an_error() {
        let sg = convert(60.0, Unit::Brix, Unit::SpecificGravity, Category::Density).unwrap();
        assert!(sg.is_finite());
        assert!(sg > 1.170);
    }

    #[test]
    fn test_string_boundary() {
        assert_eq!(convert_ids(0.0, "c", "f", "temperature").unwrap(), 32.0);
        assert_eq!(
            convert_ids(1.0, "l", "furlong", "volume").unwrap_err(),
            BrewError::unknown_unit("furlong")
        );
        assert_eq!(
            convert_ids(1.0, "l", "gal", "speed").unwrap_err(),
            BrewError::unknown_category("speed")
        );
        assert_eq!(
            convert_ids(1.0, "kg", "gal", "volume").unwrap_err(),
            BrewError::unit_not_in_category("kg", "volume")
        );
    }

    #[test]
    fn test_non_finite_propagates() {
        assert!(convert(f64::NAN, Unit::Liter, Unit::Gallon, Category::Volume).unwrap().is_nan());
        assert!(convert(f64::NAN, Unit::SpecificGravity, Unit::Brix, Category::Density).unwrap().is_nan());
        let inf = convert(f64::INFINITY, Unit::Celsius, Unit::Fahrenheit, Category::Temperature).unwrap();
        assert!(inf.is_infinite());
    }
}
