//! # Alcohol Content Calculation
//!
//! Estimates ABV from original and final density readings. Readings may be
//! in any density unit and are normalised to specific gravity first; each
//! reading with a finite temperature is corrected to the calibration
//! temperature before the formula is applied.
//!
//! ## Formulas
//!
//! | Id          | Source | Notes |
//! |-------------|--------|-------|
//! | `abv-basic` | Homebrew rule of thumb | `(OG − FG)·131.25` |
//! | `abv-berry` | C.J.J. Berry | `(OG° − FG°)/7.36`, wine-oriented |
//! | `abv-hall`  | M. Hall, Zymurgy 1995 | better at high gravity |
//! | `abv-hmrc`  | HMRC Excise Notice 226 | banded factor, UK duty |
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use brew_core::calculations::abv::{calculate, AbvFormula, AbvInput};
//!
//! let input = AbvInput::new(1.050, 1.010, AbvFormula::Basic);
//! let result = calculate(&input).unwrap();
//!
//! assert!((result.abv - 5.25).abs() < 0.01);
//! assert!((result.abw - 5.25 * 0.79336).abs() < 1e-9);
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::calculations::correction::correct_sg;
use crate::conversion::to_base;
use crate::equations::alcohol::{
    abv_basic, abv_berry, abv_hall, abv_hmrc, abw_from_abv, apparent_attenuation,
};
use crate::errors::{BrewError, BrewResult};
use crate::registry::{Category, Unit};
use crate::units::{Celsius, SpecificGravity};

/// Default hydrometer calibration temperature (°C)
pub const DEFAULT_CALIBRATION_C: f64 = 20.0;

/// Selectable ABV formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AbvFormula {
    #[serde(rename = "abv-basic")]
    Basic,
    #[serde(rename = "abv-berry")]
    Berry,
    #[serde(rename = "abv-hall")]
    Hall,
    #[serde(rename = "abv-hmrc")]
    Hmrc,
}

impl AbvFormula {
    /// All formulas for UI selection
    pub const ALL: [AbvFormula; 4] = [
        AbvFormula::Basic,
        AbvFormula::Berry,
        AbvFormula::Hall,
        AbvFormula::Hmrc,
    ];

    /// Identifier used at the string boundary
    pub fn id(&self) -> &'static str {
        match self {
            AbvFormula::Basic => "abv-basic",
            AbvFormula::Berry => "abv-berry",
            AbvFormula::Hall => "abv-hall",
            AbvFormula::Hmrc => "abv-hmrc",
        }
    }

    /// Get display name
    pub fn label(&self) -> &'static str {
        match self {
            AbvFormula::Basic => "Basic",
            AbvFormula::Berry => "Berry",
            AbvFormula::Hall => "Hall (alternate)",
            AbvFormula::Hmrc => "HMRC",
        }
    }

    /// Published source of the formula
    pub fn reference(&self) -> &'static str {
        match self {
            AbvFormula::Basic => "ABV = (OG - FG) x 131.25",
            AbvFormula::Berry => "C.J.J. Berry, First Steps in Winemaking",
            AbvFormula::Hall => "M. Hall, Brew by the Numbers, Zymurgy 1995",
            AbvFormula::Hmrc => "HM Revenue & Customs, Excise Notice 226",
        }
    }

    /// Apply the formula to gravities already expressed as SG
    pub fn compute(&self, og: SpecificGravity, fg: SpecificGravity) -> f64 {
        match self {
            AbvFormula::Basic => abv_basic(og.0, fg.0),
            AbvFormula::Berry => abv_berry(og.0, fg.0),
            AbvFormula::Hall => abv_hall(og.0, fg.0),
            AbvFormula::Hmrc => abv_hmrc(og.0, fg.0),
        }
    }

    /// Parse a formula identifier ("abv-hall", or just "hall")
    pub fn from_id(s: &str) -> BrewResult<Self> {
        let key = s.trim().to_lowercase();
        match key.strip_prefix("abv-").unwrap_or(key.as_str()) {
            "basic" => Ok(AbvFormula::Basic),
            "berry" => Ok(AbvFormula::Berry),
            "hall" | "alternate" => Ok(AbvFormula::Hall),
            "hmrc" => Ok(AbvFormula::Hmrc),
            _ => Err(BrewError::unknown_formula(s)),
        }
    }
}

impl Default for AbvFormula {
    fn default() -> Self {
        AbvFormula::Basic
    }
}

impl fmt::Display for AbvFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for AbvFormula {
    type Err = BrewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AbvFormula::from_id(s)
    }
}

/// One row of the formula selector
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormulaEntry {
    pub label: &'static str,
    pub reference: &'static str,
}

/// Formula id → label, in display order
pub static FORMULAE: Lazy<BTreeMap<AbvFormula, FormulaEntry>> = Lazy::new(|| {
    AbvFormula::ALL
        .iter()
        .map(|&formula| {
            (
                formula,
                FormulaEntry {
                    label: formula.label(),
                    reference: formula.reference(),
                },
            )
        })
        .collect()
});

/// Input parameters for an ABV calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "original_reading": 1.062,
///   "final_reading": 1.012,
///   "original_temp": 28.0,
///   "final_temp": null,
///   "calibration_temp": 20.0,
///   "density_scale": "sg",
///   "temp_scale": "c",
///   "formula": "abv-hall"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbvInput {
    /// Reading before fermentation, in `density_scale`
    pub original_reading: f64,

    /// Reading after fermentation, in `density_scale`
    pub final_reading: f64,

    /// Sample temperature of the original reading (None = no correction)
    #[serde(default)]
    pub original_temp: Option<f64>,

    /// Sample temperature of the final reading (None = no correction)
    #[serde(default)]
    pub final_temp: Option<f64>,

    /// Instrument calibration temperature, in `temp_scale`
    pub calibration_temp: f64,

    /// Unit of both readings
    pub density_scale: Unit,

    /// Unit of all temperatures
    pub temp_scale: Unit,

    /// Formula to apply
    pub formula: AbvFormula,
}

impl AbvInput {
    /// Uncorrected SG readings, 20 °C calibration
    pub fn new(original_reading: f64, final_reading: f64, formula: AbvFormula) -> Self {
        AbvInput {
            original_reading,
            final_reading,
            original_temp: None,
            final_temp: None,
            calibration_temp: DEFAULT_CALIBRATION_C,
            density_scale: Unit::SpecificGravity,
            temp_scale: Unit::Celsius,
            formula,
        }
    }

    /// Readings are in `unit` rather than SG
    pub fn with_density_scale(mut self, unit: Unit) -> Self {
        self.density_scale = unit;
        self
    }

    /// Temperatures the readings were taken at, and the calibration temperature
    pub fn with_temperatures(
        mut self,
        original_temp: Option<f64>,
        final_temp: Option<f64>,
        calibration_temp: f64,
        temp_scale: Unit,
    ) -> Self {
        self.original_temp = original_temp;
        self.final_temp = final_temp;
        self.calibration_temp = calibration_temp;
        self.temp_scale = temp_scale;
        self
    }

    /// Normalise one reading to SG, correcting it when its temperature is known
    fn gravity(&self, reading: f64, temp: Option<f64>) -> SpecificGravity {
        let sg = SpecificGravity(to_base(reading, self.density_scale));
        match temp.filter(|t| t.is_finite()) {
            Some(t) => correct_sg(
                sg,
                Celsius(to_base(t, self.temp_scale)),
                Celsius(to_base(self.calibration_temp, self.temp_scale)),
            ),
            None => sg,
        }
    }
}

/// Result of an ABV calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbvResult {
    /// Alcohol by volume (%)
    pub abv: f64,

    /// Alcohol by weight (%), `abv × 0.79336`
    pub abw: f64,

    /// Original gravity used by the formula (SG, after correction)
    pub original_sg: f64,

    /// Final gravity used by the formula (SG, after correction)
    pub final_sg: f64,

    /// Apparent attenuation (%)
    pub apparent_attenuation: f64,

    /// Formula that produced `abv`
    pub formula: AbvFormula,
}

/// Calculate alcohol content.
///
/// This is a pure function suitable for LLM invocation.
///
/// # Errors
///
/// `UnknownUnit` when `density_scale` is not a density unit or `temp_scale`
/// is not a temperature unit. Non-finite readings give a NaN result, not an
/// error.
///
/// # Example
///
/// ```rust
/// use brew_core::calculations::abv::{calculate, AbvFormula, AbvInput};
/// use brew_core::registry::Unit;
///
/// // Refractometer-style Brix readings, original taken warm
/// let input = AbvInput::new(15.0, 6.0, AbvFormula::Hall)
///     .with_density_scale(Unit::Brix)
///     .with_temperatures(Some(28.0), None, 20.0, Unit::Celsius);
///
/// let result = calculate(&input).expect("Calculation should succeed");
/// assert!(result.abv > 0.0);
/// ```
pub fn calculate(input: &AbvInput) -> BrewResult<AbvResult> {
    input.density_scale.in_category(Category::Density)?;
    input.temp_scale.in_category(Category::Temperature)?;

    let og = input.gravity(input.original_reading, input.original_temp);
    let fg = input.gravity(input.final_reading, input.final_temp);
    let abv = input.formula.compute(og, fg);

    tracing::debug!(formula = %input.formula, og = og.0, fg = fg.0, abv, "abv calculated");

    Ok(AbvResult {
        abv,
        abw: abw_from_abv(abv),
        original_sg: og.0,
        final_sg: fg.0,
        apparent_attenuation: apparent_attenuation(og.0, fg.0),
        formula: input.formula,
    })
}

/// Percent ABV only; see [`calculate`].
pub fn abv(input: &AbvInput) -> BrewResult<f64> {
    calculate(input).map(|result| result.abv)
}
