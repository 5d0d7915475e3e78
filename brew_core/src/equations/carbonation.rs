//! # Carbonation Formulas
//!
//! Dissolved CO2 left in a fermented beverage and the dextrose needed to make
//! up the difference during bottle conditioning.
//!
//! ## Notation
//!
//! - `V` = Volumes of CO2 (litres of gas at STP per litre of beverage)
//! - `T` = Highest temperature the beverage reached after fermentation, °F
//!
//! ## Range
//!
//! The residual fit is a parabola with its minimum near 94 °F, so taken
//! literally it would have warm beer holding more CO2 than cool beer. Above
//! [`RESIDUAL_FIT_MAX_F`] the curve continues along its tangent at that
//! temperature instead, and never drops below zero.
//!
//! ## References
//!
//! - Papazian / Noonan residual CO2 fit, as used by the Brewer's Friend and
//!   Northern Brewer priming calculators (valid about 32–80 °F)
//! - 15.195 g dextrose per US gallon per volume of CO2 (same sources)

use crate::units::LITERS_PER_US_GALLON;

/// Grams of dextrose that produce one volume of CO2 in one US gallon
pub const DEXTROSE_G_PER_GALLON_PER_VOLUME: f64 = 15.195;

/// Grams of dextrose that produce one volume of CO2 in one litre
pub const DEXTROSE_G_PER_LITER_PER_VOLUME: f64 =
    DEXTROSE_G_PER_GALLON_PER_VOLUME / LITERS_PER_US_GALLON;

/// Upper end of the temperature range the residual fit was made over (°F)
pub const RESIDUAL_FIT_MAX_F: f64 = 80.0;

/// Volumes of CO2 still dissolved after fermentation
///
/// # Formula
/// V = 3.0378 − 0.050062·T + 0.00026555·T²
///
/// Above 80 °F: V = V(80) + V'(80)·(T − 80), floored at 0
///
/// # Arguments
/// * `temp_f` - Beverage temperature in °F
///
/// # Example
/// ```rust
/// use brew_core::equations::carbonation::residual_co2_volumes;
///
/// // 68 °F (20 °C)
/// let v = residual_co2_volumes(68.0);
/// assert!((v - 0.8615).abs() < 0.001);
/// ```
#[inline]
pub fn residual_co2_volumes(temp_f: f64) -> f64 {
    if temp_f > RESIDUAL_FIT_MAX_F {
        let edge = residual_fit(RESIDUAL_FIT_MAX_F);
        let slope = -0.050062 + 2.0 * 0.00026555 * RESIDUAL_FIT_MAX_F;
        let v = edge + slope * (temp_f - RESIDUAL_FIT_MAX_F);
        return if v < 0.0 { 0.0 } else { v };
    }
    residual_fit(temp_f)
}

#[inline]
fn residual_fit(temp_f: f64) -> f64 {
    3.0378 - 0.050062 * temp_f + 0.00026555 * temp_f.powi(2)
}

/// Grams of dextrose for a CO2 deficit in a given volume
///
/// # Formula
/// m = ΔV · L · 15.195 / 3.785411784
#[inline]
pub fn dextrose_for_deficit(deficit_volumes: f64, liters: f64) -> f64 {
    deficit_volumes * liters * DEXTROSE_G_PER_LITER_PER_VOLUME
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_residual_decreases_with_temperature() {
        let cold = residual_co2_volumes(40.0);
        let cellar = residual_co2_volumes(55.0);
        let warm = residual_co2_volumes(75.0);
        assert!(cold > cellar);
        assert!(cellar > warm);
    }

    #[test]
    fn test_residual_keeps_falling_past_fit_range() {
        let mut previous = residual_co2_volumes(32.0);
        for step in 1..=108 {
            let temp_f = 32.0 + step as f64;
            let v = residual_co2_volumes(temp_f);
            assert!(v < previous, "{} °F gave {} after {}", temp_f, v, previous);
            previous = v;
        }
    }

    #[test]
    fn test_residual_continuous_at_fit_edge() {
        let below = residual_co2_volumes(RESIDUAL_FIT_MAX_F);
        let above = residual_co2_volumes(RESIDUAL_FIT_MAX_F + 1e-9);
        assert!((below - above).abs() < 1e-9);
        assert!((below - 0.73236).abs() < 1e-6);
    }

    #[test]
    fn test_residual_never_negative() {
        assert_eq!(residual_co2_volumes(212.0), 0.0);
        assert!(residual_co2_volumes(f64::NAN).is_nan());
    }

    #[test]
    fn test_residual_reference_values() {
        // 32 °F
        assert!((residual_co2_volumes(32.0) - 1.7077).abs() < 0.001);
        // 68 °F
        assert!((residual_co2_volumes(68.0) - 0.8615).abs() < 0.001);
    }

    #[test]
    fn test_dextrose_per_liter_constant() {
        assert!((DEXTROSE_G_PER_LITER_PER_VOLUME - 4.0141).abs() < 0.0001);
    }

    #[test]
    fn test_five_gallon_batch() {
        // Classic rule of thumb: ~4 oz (113 g) corn sugar for 5 gal at ~2.4 vol from 68 °F
        let deficit = 2.4 - residual_co2_volumes(68.0);
        let grams = dextrose_for_deficit(deficit, 5.0 * LITERS_PER_US_GALLON);
        assert!((grams - 116.9).abs() < 0.5, "grams = {}", grams);
    }
}
