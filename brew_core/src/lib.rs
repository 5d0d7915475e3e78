//! # brew_core - Brewing Calculation Engine
//!
//! `brew_core` converts between the units brewers and winemakers measure in
//! and runs the day-to-day calculations built on them: hydrometer temperature
//! correction, alcohol content and priming sugar. All inputs and outputs are
//! JSON-serializable, so a form, a script or an LLM tool call can drive the
//! engine the same way.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Static tables**: The unit registry is built once and shared read-only
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types for configuration mistakes;
//!   bad numbers propagate as NaN instead
//!
//! ## Quick Start
//!
//! ```rust
//! use brew_core::{convert_ids, correct_density};
//! use brew_core::calculations::abv::{calculate, AbvFormula, AbvInput};
//! use brew_core::registry::Unit;
//!
//! let liters = convert_ids(5.0, "gal", "l", "volume").unwrap();
//! assert!((liters - 18.927).abs() < 0.001);
//!
//! let og = correct_density(1.062, 28.0, 20.0, Unit::Celsius, Unit::SpecificGravity).unwrap();
//! let result = calculate(&AbvInput::new(og, 1.012, AbvFormula::Hall)).unwrap();
//! assert!(result.abv > 6.0);
//! ```
//!
//! ## Modules
//!
//! - [`registry`] - Unit categories, units and their conversion rules
//! - [`conversion`] - Converting a value between two units of a category
//! - [`equations`] - The published brewing formulas
//! - [`calculations`] - Correction, ABV and priming calculators
//! - [`units`] - Type-safe quantity wrappers
//! - [`settings`] - Caller defaults
//! - [`errors`] - Structured error types
//! - [`file_io`] - Settings file operations with atomic saves

pub mod calculations;
pub mod conversion;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod registry;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{correct_density, AbvFormula, SugarType, FORMULAE};
pub use conversion::{convert, convert_ids};
pub use errors::{BrewError, BrewResult};
pub use file_io::{load_settings, load_settings_or_default, save_settings};
pub use registry::{Category, ConversionRule, Unit, CONVERSIONS};
pub use settings::BrewSettings;
