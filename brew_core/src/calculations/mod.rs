//! # Brewing Calculations
//!
//! This module contains the calculators. Each one follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, BrewError>` - Pure calculation function
//!
//! Calculators share the read-only unit registry and nothing else; any of
//! them can be called from any thread.
//!
//! ## Available Calculations
//!
//! - [`correction`] - Hydrometer temperature correction
//! - [`abv`] - Alcohol content from original/final readings
//! - [`priming`] - Bottle-conditioning sugar

pub mod abv;
pub mod correction;
pub mod priming;

use serde::{Deserialize, Serialize};

use crate::errors::BrewResult;

// Re-export commonly used types
pub use abv::{AbvFormula, AbvInput, AbvResult, FORMULAE};
pub use correction::{correct_density, CorrectionInput, CorrectionResult};
pub use priming::{PrimingInput, PrimingResult, SugarType};

/// Any calculation request, tagged by kind.
///
/// Lets a caller hand over a single JSON document without knowing which
/// calculator handles it.
///
/// ```rust
/// use brew_core::calculations::{CalculationItem, CalculationOutput};
///
/// let json = r#"{"type": "Abv", "original_reading": 1.050, "final_reading": 1.010,
///     "calibration_temp": 20.0, "density_scale": "sg", "temp_scale": "c",
///     "formula": "abv-basic"}"#;
/// let item: CalculationItem = serde_json::from_str(json).unwrap();
///
/// match item.run().unwrap() {
///     CalculationOutput::Abv(result) => assert!((result.abv - 5.25).abs() < 0.01),
///     other => panic!("unexpected {:?}", other),
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Temperature correction of a density reading
    Correction(CorrectionInput),
    /// Alcohol content
    Abv(AbvInput),
    /// Priming sugar
    Priming(PrimingInput),
}

/// Result of a [`CalculationItem`], tagged the same way
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    Correction(CorrectionResult),
    Abv(AbvResult),
    Priming(PrimingResult),
}

impl CalculationItem {
    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Correction(_) => "Correction",
            CalculationItem::Abv(_) => "Abv",
            CalculationItem::Priming(_) => "Priming",
        }
    }

    /// Dispatch to the matching calculator
    pub fn run(&self) -> BrewResult<CalculationOutput> {
        match self {
            CalculationItem::Correction(input) => correction::calculate(input).map(CalculationOutput::Correction),
            CalculationItem::Abv(input) => abv::calculate(input).map(CalculationOutput::Abv),
            CalculationItem::Priming(input) => priming::calculate(input).map(CalculationOutput::Priming),
        }
    }
}
