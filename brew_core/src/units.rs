//! # Unit Types
//!
//! Type-safe wrappers for the quantities the calculators pass between
//! themselves. Callers talk to the engine in plain `f64` plus a [`Unit`]
//! identifier; once a value has been normalised to its base unit it travels
//! inside one of these newtypes so a litre can't be handed to something
//! expecting a gallon.
//!
//! ## Base Units
//!
//! - Volume: litres
//! - Mass: grams
//! - Temperature: degrees Celsius
//! - Density: specific gravity
//!
//! Fahrenheit, US gallons and pounds exist as newtypes only because the
//! published brewing fits are expressed in them.
//!
//! ## Example
//!
//! ```rust
//! use brew_core::units::{Celsius, Fahrenheit, Liters, UsGallons};
//!
//! let pitch = Celsius(20.0);
//! let f: Fahrenheit = pitch.into();
//! assert_eq!(f.0, 68.0);
//!
//! let batch: UsGallons = Liters(18.927058920).into();
//! assert!((batch.0 - 5.0).abs() < 1e-9);
//! ```
//!
//! [`Unit`]: crate::registry::Unit

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Litres in one US gallon (exact by definition)
pub const LITERS_PER_US_GALLON: f64 = 3.785411784;

/// Grams in one avoirdupois pound (exact by definition)
pub const GRAMS_PER_POUND: f64 = 453.59237;

/// Millilitres in one litre
pub const ML_PER_LITER: f64 = 1000.0;

// ============================================================================
// Volume
// ============================================================================

/// Volume in litres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Liters(pub f64);

/// Volume in US gallons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UsGallons(pub f64);

impl From<Liters> for UsGallons {
    fn from(l: Liters) -> Self {
        UsGallons(l.0 / LITERS_PER_US_GALLON)
    }
}

impl From<UsGallons> for Liters {
    fn from(gal: UsGallons) -> Self {
        Liters(gal.0 * LITERS_PER_US_GALLON)
    }
}

impl Liters {
    /// Volume in millilitres
    pub fn milliliters(self) -> f64 {
        self.0 * ML_PER_LITER
    }

    /// Create from millilitres
    pub fn from_milliliters(ml: f64) -> Self {
        Liters(ml / ML_PER_LITER)
    }
}

// ============================================================================
// Mass
// ============================================================================

/// Mass in grams
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grams(pub f64);

/// Mass in pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(pub f64);

impl From<Grams> for Pounds {
    fn from(g: Grams) -> Self {
        Pounds(g.0 / GRAMS_PER_POUND)
    }
}

impl From<Pounds> for Grams {
    fn from(lb: Pounds) -> Self {
        Grams(lb.0 * GRAMS_PER_POUND)
    }
}

// ============================================================================
// Temperature
// ============================================================================

/// Temperature in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Celsius(pub f64);

/// Temperature in degrees Fahrenheit
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fahrenheit(pub f64);

impl From<Celsius> for Fahrenheit {
    fn from(c: Celsius) -> Self {
        Fahrenheit(c.0 * 9.0 / 5.0 + 32.0)
    }
}

impl From<Fahrenheit> for Celsius {
    fn from(f: Fahrenheit) -> Self {
        Celsius((f.0 - 32.0) * 5.0 / 9.0)
    }
}

// ============================================================================
// Density
// ============================================================================

/// Specific gravity (water = 1.000)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpecificGravity(pub f64);

impl SpecificGravity {
    /// Gravity points, e.g. 1.050 → 50
    pub fn points(self) -> f64 {
        (self.0 - 1.0) * 1000.0
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Liters);
impl_arithmetic!(UsGallons);
impl_arithmetic!(Grams);
impl_arithmetic!(Pounds);
impl_arithmetic!(Celsius);
impl_arithmetic!(Fahrenheit);
impl_arithmetic!(SpecificGravity);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celsius_to_fahrenheit() {
        let f: Fahrenheit = Celsius(100.0).into();
        assert_eq!(f.0, 212.0);
        let f: Fahrenheit = Celsius(0.0).into();
        assert_eq!(f.0, 32.0);
    }

    #[test]
    fn test_fahrenheit_to_celsius() {
        let c: Celsius = Fahrenheit(212.0).into();
        assert_eq!(c.0, 100.0);
        let c: Celsius = Fahrenheit(-40.0).into();
        assert_eq!(c.0, -40.0);
    }

    #[test]
    fn test_liters_to_gallons() {
        let gal: UsGallons = Liters(1.0).into();
        assert!((gal.0 - 0.264172).abs() < 1e-6);
    }

    #[test]
    fn test_pounds_to_grams() {
        let g: Grams = Pounds(1.0).into();
        assert_eq!(g.0, 453.59237);
    }

    #[test]
    fn test_milliliters() {
        assert_eq!(Liters(1.5).milliliters(), 1500.0);
        assert_eq!(Liters::from_milliliters(250.0), Liters(0.25));
    }

    #[test]
    fn test_gravity_points() {
        assert!((SpecificGravity(1.050).points() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_arithmetic() {
        let a = Liters(19.0);
        let b = Liters(0.5);
        assert_eq!((a + b).0, 19.5);
        assert_eq!((a - b).0, 18.5);
        assert_eq!((b * 2.0).0, 1.0);
        assert_eq!((a / 2.0).0, 9.5);
    }

    #[test]
    fn test_serialization() {
        let sg = SpecificGravity(1.048);
        let json = serde_json::to_string(&sg).unwrap();
        assert_eq!(json, "1.048");

        let roundtrip: SpecificGravity = serde_json::from_str(&json).unwrap();
        assert_eq!(sg, roundtrip);
    }
}
