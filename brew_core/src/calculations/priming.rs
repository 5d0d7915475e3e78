//! # Priming Sugar Calculation
//!
//! Sugar needed to bottle-condition a batch to a target carbonation level,
//! plus the volume the dissolved sugar adds and the gravity bump it causes.
//!
//! ## Algorithm
//!
//! 1. Batch volume → litres, temperature → Celsius
//! 2. Residual CO2 from the temperature (the published fit is in °F)
//! 3. Deficit = desired − residual, clamped at zero
//! 4. Dextrose for the deficit, scaled by the sugar's CO2 yield
//! 5. Dissolved volume from the sugar's bulk density
//! 6. Gravity increase from the sugar's extract potential over the new volume
//!
//! ## Sugar Factors
//!
//! | Sugar    | CO2 yield | Bulk density (g/mL) | Extract (ppg) |
//! |----------|-----------|---------------------|---------------|
//! | dextrose | 1.00      | 1.54                | 42            |
//! | sucrose  | 1.10      | 1.59                | 46            |
//! | honey    | 0.80      | 1.42                | 35            |
//! | maltose  | 0.75      | 1.54                | 44            |
//!
//! Yield is relative to dextrose monohydrate. Maltose stands in for dry malt
//! extract, which is mostly maltose and carries unfermentables.
//!
//! ## Example
//!
//! ```rust
//! use brew_core::calculations::priming::{calculate, PrimingInput, SugarType};
//! use brew_core::registry::Unit;
//!
//! let input = PrimingInput {
//!     beverage_volume: 19.0,
//!     volume_unit: Unit::Liter,
//!     beverage_temp: 20.0,
//!     temp_scale: Unit::Celsius,
//!     desired_vol_co2: 2.5,
//!     sugar_type: SugarType::Dextrose,
//! };
//! let result = calculate(&input).unwrap();
//! assert!((result.mass_g - 124.97).abs() < 0.01);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::conversion::to_base;
use crate::equations::carbonation::{dextrose_for_deficit, residual_co2_volumes};
use crate::errors::{BrewError, BrewResult};
use crate::registry::{Category, Unit};
use crate::units::{Celsius, Fahrenheit, Grams, Liters, Pounds, UsGallons};

/// Fermentable used for priming
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SugarType {
    Dextrose,
    Sucrose,
    Honey,
    Maltose,
}

impl SugarType {
    /// All sugars for UI selection
    pub const ALL: [SugarType; 4] = [
        SugarType::Dextrose,
        SugarType::Sucrose,
        SugarType::Honey,
        SugarType::Maltose,
    ];

    /// Identifier used at the string boundary
    pub fn id(&self) -> &'static str {
        match self {
            SugarType::Dextrose => "dextrose",
            SugarType::Sucrose => "sucrose",
            SugarType::Honey => "honey",
            SugarType::Maltose => "maltose",
        }
    }

    /// Get display name
    pub fn label(&self) -> &'static str {
        match self {
            SugarType::Dextrose => "Dextrose (corn sugar)",
            SugarType::Sucrose => "Sucrose (table sugar)",
            SugarType::Honey => "Honey",
            SugarType::Maltose => "Maltose (dry malt extract)",
        }
    }

    /// CO2 produced per gram, relative to dextrose
    pub fn co2_yield(&self) -> f64 {
        match self {
            SugarType::Dextrose => 1.0,
            SugarType::Sucrose => 1.10,
            SugarType::Honey => 0.80,
            SugarType::Maltose => 0.75,
        }
    }

    /// Grams per millilitre once dissolved
    pub fn bulk_density_g_per_ml(&self) -> f64 {
        match self {
            SugarType::Dextrose => 1.54,
            SugarType::Sucrose => 1.59,
            SugarType::Honey => 1.42,
            SugarType::Maltose => 1.54,
        }
    }

    /// Gravity points per pound per US gallon
    pub fn extract_ppg(&self) -> f64 {
        match self {
            SugarType::Dextrose => 42.0,
            SugarType::Sucrose => 46.0,
            SugarType::Honey => 35.0,
            SugarType::Maltose => 44.0,
        }
    }

    /// Parse a sugar identifier (case-insensitive, common names accepted)
    pub fn from_id(s: &str) -> BrewResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "dextrose" | "corn sugar" | "glucose" => Ok(SugarType::Dextrose),
            "sucrose" | "table sugar" | "cane sugar" => Ok(SugarType::Sucrose),
            "honey" => Ok(SugarType::Honey),
            "maltose" | "dme" => Ok(SugarType::Maltose),
            _ => Err(BrewError::unknown_sugar_type(s)),
        }
    }
}

impl Default for SugarType {
    fn default() -> Self {
        SugarType::Dextrose
    }
}

impl fmt::Display for SugarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for SugarType {
    type Err = BrewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SugarType::from_id(s)
    }
}

/// Input parameters for a priming calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "beverage_volume": 5.0,
///   "volume_unit": "gal",
///   "beverage_temp": 68.0,
///   "temp_scale": "f",
///   "desired_vol_co2": 2.4,
///   "sugar_type": "sucrose"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimingInput {
    /// Batch volume in `volume_unit`
    pub beverage_volume: f64,

    pub volume_unit: Unit,

    /// Highest temperature the batch reached after fermentation
    pub beverage_temp: f64,

    pub temp_scale: Unit,

    /// Target carbonation (volumes of CO2)
    pub desired_vol_co2: f64,

    pub sugar_type: SugarType,
}

/// Result of a priming calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimingResult {
    /// Sugar to add (g)
    pub mass_g: f64,

    /// Volume the dissolved sugar occupies (mL)
    pub volume_ml: f64,

    /// Specific gravity increase from the sugar
    pub delta_sg: f64,

    /// Batch volume after adding the sugar (L)
    pub new_volume_l: f64,

    /// CO2 already dissolved at the given temperature (volumes)
    pub residual_vol_co2: f64,
}

/// Calculate priming sugar.
///
/// A target at or below the residual CO2 yields zero sugar rather than a
/// negative mass.
///
/// # Errors
///
/// `UnknownUnit` when `volume_unit` is not a volume unit or `temp_scale` is
/// not a temperature unit.
pub fn calculate(input: &PrimingInput) -> BrewResult<PrimingResult> {
    input.volume_unit.in_category(Category::Volume)?;
    input.temp_scale.in_category(Category::Temperature)?;

    let volume = Liters(to_base(input.beverage_volume, input.volume_unit));
    let temp: Fahrenheit = Celsius(to_base(input.beverage_temp, input.temp_scale)).into();
    let sugar = input.sugar_type;

    let residual = residual_co2_volumes(temp.0);
    let deficit = input.desired_vol_co2 - residual;
    // NaN must survive the clamp
    let deficit = if deficit < 0.0 { 0.0 } else { deficit };

    let mass = Grams(dextrose_for_deficit(deficit, volume.0) / sugar.co2_yield());
    let volume_ml = mass.0 / sugar.bulk_density_g_per_ml();
    let new_volume = volume + Liters::from_milliliters(volume_ml);

    let pounds: Pounds = mass.into();
    let gallons: UsGallons = new_volume.into();
    let delta_sg = sugar.extract_ppg() * pounds.0 / gallons.0 / 1000.0;

    tracing::debug!(
        sugar = %sugar,
        liters = volume.0,
        residual,
        deficit,
        mass_g = mass.0,
        "priming calculated"
    );

    Ok(PrimingResult {
        mass_g: mass.0,
        volume_ml,
        delta_sg,
        new_volume_l: new_volume.0,
        residual_vol_co2: residual,
    })
}
