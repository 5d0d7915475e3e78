//! # Unit Registry
//!
//! Static catalog of the measurable categories (volume, mass, temperature,
//! density) and their units. Every unit carries the rule that maps it onto its
//! category's base unit, plus formatting hints for the forms that display it.
//!
//! ## Base Units
//!
//! | Category      | Base | Units |
//! |---------------|------|-------|
//! | `volume`      | `l`  | ml, l, hl, floz, pt, qt, gal, igal, bbl |
//! | `mass`        | `g`  | mg, g, kg, oz, lb |
//! | `temperature` | `c`  | c, f, k |
//! | `density`     | `sg` | sg, brix, plato, oechsle, baume |
//!
//! Identifiers are unique across the whole registry, so `oz` (mass) and
//! `floz` (volume) never collide.
//!
//! ## Example
//!
//! ```rust
//! use brew_core::registry::{Category, Unit, CONVERSIONS};
//!
//! let unit = Unit::from_id("gal").unwrap();
//! assert_eq!(unit.category(), Category::Volume);
//! assert_eq!(unit.precision(), 2);
//!
//! // Populate a selector
//! let density = &CONVERSIONS[&Category::Density];
//! let ids: Vec<_> = density.units.iter().map(|u| u.id).collect();
//! assert_eq!(ids, ["sg", "brix", "plato", "oechsle", "baume"]);
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::equations::density::{baume_to_sg, brix_to_sg, plato_to_sg, sg_to_baume, sg_to_brix, sg_to_plato};
use crate::errors::{BrewError, BrewResult};
use crate::units::{GRAMS_PER_POUND, LITERS_PER_US_GALLON};

// ============================================================================
// Categories
// ============================================================================

/// A measurable dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Volume,
    Mass,
    Temperature,
    Density,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 4] = [
        Category::Volume,
        Category::Mass,
        Category::Temperature,
        Category::Density,
    ];

    /// Identifier used at the string boundary
    pub fn id(&self) -> &'static str {
        match self {
            Category::Volume => "volume",
            Category::Mass => "mass",
            Category::Temperature => "temperature",
            Category::Density => "density",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Category::Volume => "Volume",
            Category::Mass => "Mass",
            Category::Temperature => "Temperature",
            Category::Density => "Density",
        }
    }

    /// Pivot unit every conversion in this category routes through
    pub fn base_unit(&self) -> Unit {
        match self {
            Category::Volume => Unit::Liter,
            Category::Mass => Unit::Gram,
            Category::Temperature => Unit::Celsius,
            Category::Density => Unit::SpecificGravity,
        }
    }

    /// Units of this category in display order
    pub fn units(self) -> impl Iterator<Item = &'static UnitDefinition> {
        UNITS.iter().filter(move |def| def.category == self)
    }

    /// Parse a category identifier
    pub fn from_id(s: &str) -> BrewResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "volume" => Ok(Category::Volume),
            "mass" | "weight" => Ok(Category::Mass),
            "temperature" | "temp" => Ok(Category::Temperature),
            "density" | "gravity" => Ok(Category::Density),
            _ => Err(BrewError::unknown_category(s)),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Category {
    type Err = BrewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_id(s)
    }
}

// ============================================================================
// Units
// ============================================================================

/// Every unit known to the engine
///
/// Declaration order is the display order and must match [`UNITS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Unit {
    // Volume
    #[serde(rename = "ml")]
    Milliliter,
    #[serde(rename = "l")]
    Liter,
    #[serde(rename = "hl")]
    Hectoliter,
    #[serde(rename = "floz")]
    FluidOunce,
    #[serde(rename = "pt")]
    Pint,
    #[serde(rename = "qt")]
    Quart,
    #[serde(rename = "gal")]
    Gallon,
    #[serde(rename = "igal")]
    ImperialGallon,
    #[serde(rename = "bbl")]
    Barrel,
    // Mass
    #[serde(rename = "mg")]
    Milligram,
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "oz")]
    Ounce,
    #[serde(rename = "lb")]
    Pound,
    // Temperature
    #[serde(rename = "c")]
    Celsius,
    #[serde(rename = "f")]
    Fahrenheit,
    #[serde(rename = "k")]
    Kelvin,
    // Density
    #[serde(rename = "sg")]
    SpecificGravity,
    #[serde(rename = "brix")]
    Brix,
    #[serde(rename = "plato")]
    Plato,
    #[serde(rename = "oechsle")]
    Oechsle,
    #[serde(rename = "baume")]
    Baume,
}

impl Unit {
    /// All units, in the same order as [`UNITS`]
    pub const ALL: [Unit; 22] = [
        Unit::Milliliter,
        Unit::Liter,
        Unit::Hectoliter,
        Unit::FluidOunce,
        Unit::Pint,
        Unit::Quart,
        Unit::Gallon,
        Unit::ImperialGallon,
        Unit::Barrel,
        Unit::Milligram,
        Unit::Gram,
        Unit::Kilogram,
        Unit::Ounce,
        Unit::Pound,
        Unit::Celsius,
        Unit::Fahrenheit,
        Unit::Kelvin,
        Unit::SpecificGravity,
        Unit::Brix,
        Unit::Plato,
        Unit::Oechsle,
        Unit::Baume,
    ];

    /// Registry entry for this unit
    pub fn definition(self) -> &'static UnitDefinition {
        &UNITS[self as usize]
    }

    /// Identifier used at the string boundary (e.g. "gal")
    pub fn id(self) -> &'static str {
        self.definition().id
    }

    /// Display label
    pub fn label(self) -> &'static str {
        self.definition().label
    }

    /// Category this unit measures
    pub fn category(self) -> Category {
        self.definition().category
    }

    /// Rule mapping this unit onto its category's base unit
    pub fn rule(self) -> ConversionRule {
        self.definition().rule
    }

    /// Decimal places to display
    pub fn precision(self) -> u8 {
        self.definition().precision
    }

    /// Input step size for spinners
    pub fn step(self) -> f64 {
        self.definition().step
    }

    /// Check that this unit belongs to `category`
    pub fn in_category(self, category: Category) -> BrewResult<Self> {
        if self.category() == category {
            Ok(self)
        } else {
            Err(BrewError::unit_not_in_category(self.id(), category.id()))
        }
    }

    /// Parse a unit identifier
    ///
    /// Accepts the canonical identifiers plus a few common spellings
    /// ("liters", "°F", "SG"). Anything else is `UnknownUnit`.
    pub fn from_id(s: &str) -> BrewResult<Self> {
        let key = s.trim().to_lowercase().replace(['°', ' ', '.'], "");
        let unit = match key.as_str() {
            "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => Unit::Milliliter,
            "l" | "liter" | "liters" | "litre" | "litres" => Unit::Liter,
            "hl" | "hectoliter" | "hectoliters" | "hectolitre" | "hectolitres" => Unit::Hectoliter,
            "floz" | "fluidounce" | "fluidounces" => Unit::FluidOunce,
            "pt" | "pint" | "pints" => Unit::Pint,
            "qt" | "quart" | "quarts" => Unit::Quart,
            "gal" | "gallon" | "gallons" => Unit::Gallon,
            "igal" | "imperialgallon" | "imperialgallons" => Unit::ImperialGallon,
            "bbl" | "barrel" | "barrels" => Unit::Barrel,
            "mg" | "milligram" | "milligrams" => Unit::Milligram,
            "g" | "gram" | "grams" => Unit::Gram,
            "kg" | "kilogram" | "kilograms" => Unit::Kilogram,
            "oz" | "ounce" | "ounces" => Unit::Ounce,
            "lb" | "lbs" | "pound" | "pounds" => Unit::Pound,
            "c" | "celsius" => Unit::Celsius,
            "f" | "fahrenheit" => Unit::Fahrenheit,
            "k" | "kelvin" => Unit::Kelvin,
            "sg" | "specificgravity" => Unit::SpecificGravity,
            "brix" | "bx" => Unit::Brix,
            "plato" | "p" => Unit::Plato,
            "oechsle" | "oe" => Unit::Oechsle,
            "baume" | "baumé" | "be" | "bé" => Unit::Baume,
            _ => return Err(BrewError::unknown_unit(s)),
        };
        Ok(unit)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Unit {
    type Err = BrewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::from_id(s)
    }
}

// ============================================================================
// Conversion Rules
// ============================================================================

/// How a unit maps onto its category's base unit
#[derive(Debug, Clone, Copy)]
pub enum ConversionRule {
    /// Affine rule: `base = (value − offset) · numer / denom`
    ///
    /// The factor is kept as a ratio so both directions multiply before they
    /// divide; that keeps e.g. 100 °C → 212 °F exact.
    Linear { numer: f64, denom: f64, offset: f64 },

    /// Empirical rule given as a forward/inverse function pair
    ///
    /// The pair is not an exact inverse; see [`crate::equations::density`].
    Nonlinear {
        name: &'static str,
        to_base: fn(f64) -> f64,
        from_base: fn(f64) -> f64,
    },
}

impl ConversionRule {
    /// Rule of the base unit itself
    pub const IDENTITY: ConversionRule = ConversionRule::scale(1.0, 1.0);

    /// Pure scale: one unit equals `numer / denom` base units
    pub const fn scale(numer: f64, denom: f64) -> Self {
        ConversionRule::Linear { numer, denom, offset: 0.0 }
    }

    /// Scale with a zero offset expressed in this unit
    pub const fn affine(numer: f64, denom: f64, offset: f64) -> Self {
        ConversionRule::Linear { numer, denom, offset }
    }

    /// Value in this unit → base unit
    #[inline]
    pub fn to_base(&self, value: f64) -> f64 {
        match self {
            ConversionRule::Linear { numer, denom, offset } => (value - offset) * numer / denom,
            ConversionRule::Nonlinear { to_base, .. } => to_base(value),
        }
    }

    /// Base unit → value in this unit
    #[inline]
    pub fn from_base(&self, base: f64) -> f64 {
        match self {
            ConversionRule::Linear { numer, denom, offset } => base * denom / numer + offset,
            ConversionRule::Nonlinear { from_base, .. } => from_base(base),
        }
    }

    /// True for affine rules (exact round trips)
    pub fn is_linear(&self) -> bool {
        matches!(self, ConversionRule::Linear { .. })
    }

    /// Name of the empirical formula, if any
    pub fn formula_name(&self) -> Option<&'static str> {
        match self {
            ConversionRule::Linear { .. } => None,
            ConversionRule::Nonlinear { name, .. } => Some(*name),
        }
    }
}

/// Registry entry for one unit
#[derive(Debug, Clone, Copy)]
pub struct UnitDefinition {
    pub unit: Unit,
    pub id: &'static str,
    pub label: &'static str,
    pub category: Category,
    pub rule: ConversionRule,
    /// Decimal places to display
    pub precision: u8,
    /// Input step size
    pub step: f64,
}

const fn def(
    unit: Unit,
    id: &'static str,
    label: &'static str,
    category: Category,
    rule: ConversionRule,
    precision: u8,
    step: f64,
) -> UnitDefinition {
    UnitDefinition { unit, id, label, category, rule, precision, step }
}

/// The unit table, indexed by `Unit as usize`
pub static UNITS: [UnitDefinition; 22] = [
    // Volume (base: litre)
    def(Unit::Milliliter, "ml", "Milliliters", Category::Volume, ConversionRule::scale(1.0, 1000.0), 0, 1.0),
    def(Unit::Liter, "l", "Liters", Category::Volume, ConversionRule::IDENTITY, 2, 0.01),
    def(Unit::Hectoliter, "hl", "Hectoliters", Category::Volume, ConversionRule::scale(100.0, 1.0), 3, 0.001),
    def(Unit::FluidOunce, "floz", "US Fluid Ounces", Category::Volume, ConversionRule::scale(0.0295735295625, 1.0), 1, 0.1),
    def(Unit::Pint, "pt", "US Pints", Category::Volume, ConversionRule::scale(0.473176473, 1.0), 2, 0.01),
    def(Unit::Quart, "qt", "US Quarts", Category::Volume, ConversionRule::scale(0.946352946, 1.0), 2, 0.01),
    def(Unit::Gallon, "gal", "US Gallons", Category::Volume, ConversionRule::scale(LITERS_PER_US_GALLON, 1.0), 2, 0.01),
    def(Unit::ImperialGallon, "igal", "Imperial Gallons", Category::Volume, ConversionRule::scale(4.54609, 1.0), 2, 0.01),
    def(Unit::Barrel, "bbl", "US Beer Barrels", Category::Volume, ConversionRule::scale(117.347765304, 1.0), 3, 0.001),
    // Mass (base: gram)
    def(Unit::Milligram, "mg", "Milligrams", Category::Mass, ConversionRule::scale(1.0, 1000.0), 0, 1.0),
    def(Unit::Gram, "g", "Grams", Category::Mass, ConversionRule::IDENTITY, 1, 0.1),
    def(Unit::Kilogram, "kg", "Kilograms", Category::Mass, ConversionRule::scale(1000.0, 1.0), 3, 0.001),
    def(Unit::Ounce, "oz", "Ounces", Category::Mass, ConversionRule::scale(28.349523125, 1.0), 2, 0.01),
    def(Unit::Pound, "lb", "Pounds", Category::Mass, ConversionRule::scale(GRAMS_PER_POUND, 1.0), 3, 0.001),
    // Temperature (base: Celsius)
    def(Unit::Celsius, "c", "Celsius", Category::Temperature, ConversionRule::IDENTITY, 1, 0.1),
    def(Unit::Fahrenheit, "f", "Fahrenheit", Category::Temperature, ConversionRule::affine(5.0, 9.0, 32.0), 1, 0.1),
    def(Unit::Kelvin, "k", "Kelvin", Category::Temperature, ConversionRule::affine(1.0, 1.0, 273.15), 2, 0.1),
    // Density (base: specific gravity)
    def(Unit::SpecificGravity, "sg", "Specific Gravity", Category::Density, ConversionRule::IDENTITY, 3, 0.001),
    def(
        Unit::Brix,
        "brix",
        "Brix",
        Category::Density,
        ConversionRule::Nonlinear { name: "brix-cubic", to_base: brix_to_sg, from_base: sg_to_brix },
        1,
        0.1,
    ),
    def(
        Unit::Plato,
        "plato",
        "Plato",
        Category::Density,
        ConversionRule::Nonlinear { name: "asbc-plato", to_base: plato_to_sg, from_base: sg_to_plato },
        1,
        0.1,
    ),
    def(Unit::Oechsle, "oechsle", "Oechsle", Category::Density, ConversionRule::affine(1.0, 1000.0, -1000.0), 0, 1.0),
    def(
        Unit::Baume,
        "baume",
        "Baumé",
        Category::Density,
        ConversionRule::Nonlinear { name: "baume-145", to_base: baume_to_sg, from_base: sg_to_baume },
        1,
        0.1,
    ),
];

// ============================================================================
// Selector Tables
// ============================================================================

/// One row of a unit selector
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub precision: u8,
    pub step: f64,
}

/// Units of one category, ready for a selector
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTable {
    pub label: &'static str,
    pub base: &'static str,
    pub units: Vec<UnitEntry>,
}

/// Category → units, in display order
pub static CONVERSIONS: Lazy<BTreeMap<Category, CategoryTable>> = Lazy::new(|| {
    Category::ALL
        .iter()
        .map(|&category| {
            let table = CategoryTable {
                label: category.label(),
                base: category.base_unit().id(),
                units: category
                    .units()
                    .map(|def| UnitEntry {
                        id: def.id,
                        label: def.label,
                        precision: def.precision,
                        step: def.step,
                    })
                    .collect(),
            };
            (category, table)
        })
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_order_matches_enum() {
        for (index, unit) in Unit::ALL.iter().enumerate() {
            assert_eq!(UNITS[index].unit, *unit, "UNITS[{}] out of order", index);
            assert_eq!(*unit as usize, index);
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = UNITS.iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), UNITS.len());
    }

    #[test]
    fn test_id_roundtrip() {
        for unit in Unit::ALL {
            assert_eq!(Unit::from_id(unit.id()).unwrap(), unit);
        }
    }

    #[test]
    fn test_serde_matches_id() {
        for unit in Unit::ALL {
            let json = serde_json::to_string(&unit).unwrap();
            assert_eq!(json, format!("\"{}\"", unit.id()));
        }
    }

    #[test]
    fn test_every_category_has_units() {
        for category in Category::ALL {
            assert!(category.units().count() > 0);
            assert_eq!(category.base_unit().category(), category);
            assert!(category.base_unit().rule().is_linear());
        }
    }

    #[test]
    fn test_from_id_aliases() {
        assert_eq!(Unit::from_id("Liters").unwrap(), Unit::Liter);
        assert_eq!(Unit::from_id("°F").unwrap(), Unit::Fahrenheit);
        assert_eq!(Unit::from_id(" SG ").unwrap(), Unit::SpecificGravity);
        assert_eq!("lbs".parse::<Unit>().unwrap(), Unit::Pound);
    }

    #[test]
    fn test_unknown_unit() {
        let err = Unit::from_id("furlong").unwrap_err();
        assert_eq!(err, BrewError::unknown_unit("furlong"));
    }

    #[test]
    fn test_unknown_category() {
        assert_eq!(Category::from_id("mass").unwrap(), Category::Mass);
        assert_eq!(Category::from_id("speed").unwrap_err().error_code(), "UNKNOWN_CATEGORY");
    }

    #[test]
    fn test_in_category() {
        assert!(Unit::Gallon.in_category(Category::Volume).is_ok());
        let err = Unit::Kilogram.in_category(Category::Volume).unwrap_err();
        assert_eq!(err, BrewError::unit_not_in_category("kg", "volume"));
    }

    #[test]
    fn test_conversions_table() {
        assert_eq!(CONVERSIONS.len(), 4);
        let volume = &CONVERSIONS[&Category::Volume];
        assert_eq!(volume.label, "Volume");
        assert_eq!(volume.base, "l");
        assert_eq!(volume.units.len(), 9);
        assert_eq!(volume.units[0].id, "ml");

        let json = serde_json::to_string(&*CONVERSIONS).unwrap();
        assert!(json.starts_with("{\"volume\""));
        assert!(json.contains("\"temperature\""));
    }

    #[test]
    fn test_rule_kinds() {
        assert!(Unit::Fahrenheit.rule().is_linear());
        assert!(Unit::Oechsle.rule().is_linear());
        assert_eq!(Unit::Brix.rule().formula_name(), Some("brix-cubic"));
        assert_eq!(Unit::Plato.rule().formula_name(), Some("asbc-plato"));
        assert!(!Unit::Baume.rule().is_linear());
    }
}
