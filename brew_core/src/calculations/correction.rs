//! # Hydrometer Temperature Correction
//!
//! A hydrometer reads true only at its calibration temperature (commonly
//! 20 °C / 68 °F, older instruments 15.56 °C / 60 °F). A warmer sample is less
//! dense and reads low; a colder one reads high. This module removes that bias.
//!
//! ## Algorithm
//!
//! 1. Sample and calibration temperatures → Celsius
//! 2. Reading → specific gravity
//! 3. `SG_corr = SG · f(T_sample) / f(T_cal)` (see [`corrected_gravity`])
//! 4. Corrected SG → the caller's density unit
//!
//! When the two temperatures are equal the reading is returned unchanged, so
//! the empirical Brix/Plato fits never introduce drift on a no-op correction.
//!
//! ## Example
//!
//! ```rust
//! use brew_core::calculations::correction::correct_density;
//! use brew_core::registry::Unit;
//!
//! // 1.050 read at 30 °C on a 20 °C hydrometer
//! let sg = correct_density(1.050, 30.0, 20.0, Unit::Celsius, Unit::SpecificGravity).unwrap();
//! assert!((sg - 1.0526).abs() < 0.0001);
//!
//! // Same temperature: nothing to correct
//! let brix = correct_density(12.5, 20.0, 20.0, Unit::Celsius, Unit::Brix).unwrap();
//! assert_eq!(brix, 12.5);
//! ```
//!
//! [`corrected_gravity`]: crate::equations::density::corrected_gravity

use serde::{Deserialize, Serialize};

use crate::conversion::{from_base, to_base};
use crate::equations::density::corrected_gravity;
use crate::errors::BrewResult;
use crate::registry::{Category, Unit};
use crate::units::{Celsius, Fahrenheit, SpecificGravity};

/// Input parameters for a density correction.
///
/// ## JSON Example
///
/// ```json
/// {
///   "reading": 12.5,
///   "sample_temp": 86.0,
///   "calibration_temp": 68.0,
///   "temp_unit": "f",
///   "density_unit": "brix"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionInput {
    /// Instrument reading in `density_unit`
    pub reading: f64,

    /// Temperature of the sample when read
    pub sample_temp: f64,

    /// Temperature the instrument is calibrated for
    pub calibration_temp: f64,

    /// Unit of both temperatures
    pub temp_unit: Unit,

    /// Unit of the reading and of the corrected value
    pub density_unit: Unit,
}

/// Result of a density correction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionResult {
    /// Corrected value in the input's density unit
    pub corrected: f64,

    /// Reading expressed as specific gravity
    pub measured_sg: f64,

    /// Corrected specific gravity
    pub corrected_sg: f64,
}

impl CorrectionResult {
    /// Correction applied, in gravity points
    pub fn correction_points(&self) -> f64 {
        (self.corrected_sg - self.measured_sg) * 1000.0
    }
}

/// Correct a specific gravity for sample temperature.
///
/// Returns `sg` unchanged when both temperatures are equal.
pub fn correct_sg(sg: SpecificGravity, sample: Celsius, calibration: Celsius) -> SpecificGravity {
    if sample == calibration {
        return sg;
    }
    let sample_f: Fahrenheit = sample.into();
    let calibration_f: Fahrenheit = calibration.into();
    SpecificGravity(corrected_gravity(sg.0, sample_f.0, calibration_f.0))
}

/// Run a correction and report the intermediate gravities.
///
/// # Errors
///
/// `UnknownUnit` when `temp_unit` is not a temperature unit or
/// `density_unit` is not a density unit.
pub fn calculate(input: &CorrectionInput) -> BrewResult<CorrectionResult> {
    let temp_unit = input.temp_unit.in_category(Category::Temperature)?;
    let density_unit = input.density_unit.in_category(Category::Density)?;

    let measured = SpecificGravity(to_base(input.reading, density_unit));

    if input.sample_temp == input.calibration_temp {
        return Ok(CorrectionResult {
            corrected: input.reading,
            measured_sg: measured.0,
            corrected_sg: measured.0,
        });
    }

    let sample = Celsius(to_base(input.sample_temp, temp_unit));
    let calibration = Celsius(to_base(input.calibration_temp, temp_unit));
    let corrected = correct_sg(measured, sample, calibration);

    tracing::debug!(
        measured = measured.0,
        corrected = corrected.0,
        sample_c = sample.0,
        calibration_c = calibration.0,
        "density corrected"
    );

    Ok(CorrectionResult {
        corrected: from_base(corrected.0, density_unit),
        measured_sg: measured.0,
        corrected_sg: corrected.0,
    })
}

/// Correct a density reading for the temperature it was taken at.
///
/// # Arguments
///
/// * `reading` - Instrument reading in `density_unit`
/// * `sample_temp` - Sample temperature in `temp_unit`
/// * `calibration_temp` - Calibration temperature in `temp_unit`
/// * `temp_unit` - Any temperature unit
/// * `density_unit` - Any density unit; the result uses the same unit
///
/// # Errors
///
/// `UnknownUnit` for units in the wrong category. Non-finite inputs are not
/// errors; they produce a non-finite result.
pub fn correct_density(
    reading: f64,
    sample_temp: f64,
    calibration_temp: f64,
    temp_unit: Unit,
    density_unit: Unit,
) -> BrewResult<f64> {
    let input = CorrectionInput {
        reading,
        sample_temp,
        calibration_temp,
        temp_unit,
        density_unit,
    };
    calculate(&input).map(|result| result.corrected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::convert;
    use crate::errors::BrewError;

    #[test]
    fn test_fixed_point_all_units() {
        for temp_unit in Category::Temperature.units().map(|d| d.unit) {
            for density_unit in Category::Density.units().map(|d| d.unit) {
                for reading in [0.995, 1.050, 12.5, 85.0] {
                    for t in [-2.0, 15.56, 20.0, 68.0, 293.15] {
                        let corrected = correct_density(reading, t, t, temp_unit, density_unit).unwrap();
                        assert_eq!(corrected, reading, "{} {} at {}", reading, density_unit, t);
                    }
                }
            }
        }
    }

    #[test]
    fn test_warm_sample_corrects_upward() {
        let sg = correct_density(1.050, 30.0, 20.0, Unit::Celsius, Unit::SpecificGravity).unwrap();
        assert!((sg - 1.05260).abs() < 0.0001, "sg = {}", sg);
    }

    #[test]
    fn test_cold_sample_corrects_downward() {
        let sg = correct_density(1.050, 10.0, 20.0, Unit::Celsius, Unit::SpecificGravity).unwrap();
        assert!((sg - 1.04846).abs() < 0.0001, "sg = {}", sg);
    }

    #[test]
    fn test_fahrenheit_matches_celsius() {
        let from_c = correct_density(1.060, 30.0, 20.0, Unit::Celsius, Unit::SpecificGravity).unwrap();
        let from_f = correct_density(1.060, 86.0, 68.0, Unit::Fahrenheit, Unit::SpecificGravity).unwrap();
        assert!((from_c - from_f).abs() < 1e-9);
    }

    #[test]
    fn test_result_stays_in_density_unit() {
        let brix = correct_density(12.5, 30.0, 20.0, Unit::Celsius, Unit::Brix).unwrap();
        let expected_sg = correct_density(
            convert(12.5, Unit::Brix, Unit::SpecificGravity, Category::Density).unwrap(),
            30.0,
            20.0,
            Unit::Celsius,
            Unit::SpecificGravity,
        )
        .unwrap();
        let expected = convert(expected_sg, Unit::SpecificGravity, Unit::Brix, Category::Density).unwrap();
        assert!((brix - expected).abs() < 1e-9);
        assert!(brix > 12.5);
    }

    #[test]
    fn test_calculate_reports_points() {
        let input = CorrectionInput {
            reading: 1.050,
            sample_temp: 100.0,
            calibration_temp: 60.0,
            temp_unit: Unit::Fahrenheit,
            density_unit: Unit::SpecificGravity,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.measured_sg, 1.050);
        assert!((result.correction_points() - 6.14).abs() < 0.01);
    }

    #[test]
    fn test_wrong_categories() {
        let err = correct_density(1.050, 30.0, 20.0, Unit::Liter, Unit::SpecificGravity).unwrap_err();
        assert_eq!(err, BrewError::unit_not_in_category("l", "temperature"));
        let err = correct_density(1.050, 30.0, 20.0, Unit::Celsius, Unit::Gram).unwrap_err();
        assert_eq!(err, BrewError::unit_not_in_category("g", "density"));
    }

    #[test]
    fn test_non_finite_propagates() {
        let nan = correct_density(f64::NAN, 30.0, 20.0, Unit::Celsius, Unit::SpecificGravity).unwrap();
        assert!(nan.is_nan());
        let nan = correct_density(1.050, f64::NAN, 20.0, Unit::Celsius, Unit::SpecificGravity).unwrap();
        assert!(nan.is_nan());
    }

    #[test]
    fn test_input_serialization() {
        let json = r#"{
            "reading": 12.5,
            "sample_temp": 86.0,
            "calibration_temp": 68.0,
            "temp_unit": "f",
            "density_unit": "brix"
        }"#;
        let input: CorrectionInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.temp_unit, Unit::Fahrenheit);
        assert_eq!(input.density_unit, Unit::Brix);
    }
}
