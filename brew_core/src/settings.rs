//! # Brewer Settings
//!
//! Defaults a caller falls back to when an argument is left out: preferred
//! units, the hydrometer's calibration temperature, the ABV formula, the
//! priming sugar and the carbonation target. Settings serialize to `.brewcfg`
//! files as human-readable JSON (see [`crate::file_io`] for atomic saves).
//!
//! The calculators never read settings themselves; they stay pure.
//!
//! ## Example
//!
//! ```rust
//! use brew_core::settings::BrewSettings;
//! use brew_core::registry::Unit;
//!
//! let settings = BrewSettings::default();
//! assert_eq!(settings.units.density, Unit::SpecificGravity);
//!
//! let json = serde_json::to_string_pretty(&settings).unwrap();
//! assert!(json.contains("\"abv-basic\""));
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::abv::{AbvFormula, DEFAULT_CALIBRATION_C};
use crate::calculations::priming::SugarType;
use crate::errors::BrewResult;
use crate::registry::{Category, Unit};

/// Current schema version for .brewcfg files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root settings container, the top-level struct of a `.brewcfg` file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrewSettings {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Preferred unit per category
    pub units: DefaultUnits,

    /// Hydrometer calibration temperature, in `units.temperature`
    pub calibration_temp: f64,

    /// Formula used when none is given
    pub formula: AbvFormula,

    /// Priming sugar used when none is given
    pub sugar: SugarType,

    /// Carbonation target (volumes of CO2)
    pub target_vol_co2: f64,
}

impl BrewSettings {
    /// Metric defaults: litres, grams, Celsius, SG
    pub fn metric() -> Self {
        BrewSettings {
            version: SCHEMA_VERSION.to_string(),
            units: DefaultUnits::default(),
            calibration_temp: DEFAULT_CALIBRATION_C,
            formula: AbvFormula::default(),
            sugar: SugarType::default(),
            target_vol_co2: 2.4,
        }
    }

    /// US customary defaults: gallons, ounces, Fahrenheit, SG, 60 °F hydrometer
    pub fn us_customary() -> Self {
        BrewSettings {
            units: DefaultUnits {
                volume: Unit::Gallon,
                mass: Unit::Ounce,
                temperature: Unit::Fahrenheit,
                density: Unit::SpecificGravity,
            },
            calibration_temp: 60.0,
            ..BrewSettings::metric()
        }
    }

    /// Check each default unit belongs to its category.
    ///
    /// A hand-edited file can put e.g. `"kg"` in the volume slot; serde
    /// accepts it since both are valid units.
    pub fn validate(&self) -> BrewResult<()> {
        self.units.volume.in_category(Category::Volume)?;
        self.units.mass.in_category(Category::Mass)?;
        self.units.temperature.in_category(Category::Temperature)?;
        self.units.density.in_category(Category::Density)?;
        Ok(())
    }

    /// Preferred unit for a category
    pub fn unit_for(&self, category: Category) -> Unit {
        match category {
            Category::Volume => self.units.volume,
            Category::Mass => self.units.mass,
            Category::Temperature => self.units.temperature,
            Category::Density => self.units.density,
        }
    }
}

impl Default for BrewSettings {
    fn default() -> Self {
        BrewSettings::metric()
    }
}

/// Preferred unit per category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DefaultUnits {
    pub volume: Unit,
    pub mass: Unit,
    pub temperature: Unit,
    pub density: Unit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        DefaultUnits {
            volume: Unit::Liter,
            mass: Unit::Gram,
            temperature: Unit::Celsius,
            density: Unit::SpecificGravity,
        }
    }
}
