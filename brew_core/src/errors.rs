//! # Error Types
//!
//! Structured error types for brew_core. Only configuration mistakes are
//! errors: an identifier that names no unit, category, formula or sugar type.
//! Bad numbers are not errors; they flow through the arithmetic as NaN and the
//! caller decides how to show "no result".
//!
//! ## Example
//!
//! ```rust
//! use brew_core::errors::{BrewError, BrewResult};
//! use brew_core::registry::Unit;
//!
//! fn parse_unit(id: &str) -> BrewResult<Unit> {
//!     Unit::from_id(id)
//! }
//!
//! assert!(parse_unit("gal").is_ok());
//! assert_eq!(parse_unit("furlong").unwrap_err().error_code(), "UNKNOWN_UNIT");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for brew_core operations
pub type BrewResult<T> = Result<T, BrewError>;

/// Structured error type for brewing calculations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum BrewError {
    /// Unit identifier is unknown, or not a member of the requested category
    #[error("Unknown unit '{unit}'{}", category_suffix(.category))]
    UnknownUnit {
        unit: String,
        category: Option<String>,
    },

    /// Category identifier is unknown
    #[error("Unknown unit category: {category}")]
    UnknownCategory { category: String },

    /// ABV formula identifier is unknown
    #[error("Unknown ABV formula: {formula}")]
    UnknownFormula { formula: String },

    /// Priming sugar identifier is unknown
    #[error("Unknown sugar type: {sugar}")]
    UnknownSugarType { sugar: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

fn category_suffix(category: &Option<String>) -> String {
    match category {
        Some(c) => format!(" in category '{}'", c),
        None => String::new(),
    }
}

impl BrewError {
    /// Create an UnknownUnit error with no category context
    pub fn unknown_unit(unit: impl Into<String>) -> Self {
        BrewError::UnknownUnit {
            unit: unit.into(),
            category: None,
        }
    }

    /// Create an UnknownUnit error for a unit outside the requested category
    pub fn unit_not_in_category(unit: impl Into<String>, category: impl Into<String>) -> Self {
        BrewError::UnknownUnit {
            unit: unit.into(),
            category: Some(category.into()),
        }
    }

    /// Create an UnknownCategory error
    pub fn unknown_category(category: impl Into<String>) -> Self {
        BrewError::UnknownCategory {
            category: category.into(),
        }
    }

    /// Create an UnknownFormula error
    pub fn unknown_formula(formula: impl Into<String>) -> Self {
        BrewError::UnknownFormula {
            formula: formula.into(),
        }
    }

    /// Create an UnknownSugarType error
    pub fn unknown_sugar_type(sugar: impl Into<String>) -> Self {
        BrewError::UnknownSugarType { sugar: sugar.into() }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        BrewError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for errors caused by a malformed identifier (a caller bug)
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            BrewError::UnknownUnit { .. }
                | BrewError::UnknownCategory { .. }
                | BrewError::UnknownFormula { .. }
                | BrewError::UnknownSugarType { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            BrewError::UnknownUnit { .. } => "UNKNOWN_UNIT",
            BrewError::UnknownCategory { .. } => "UNKNOWN_CATEGORY",
            BrewError::UnknownFormula { .. } => "UNKNOWN_FORMULA",
            BrewError::UnknownSugarType { .. } => "UNKNOWN_SUGAR_TYPE",
            BrewError::FileError { .. } => "FILE_ERROR",
            BrewError::SerializationError { .. } => "SERIALIZATION_ERROR",
            BrewError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = BrewError::unit_not_in_category("kg", "volume");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"UnknownUnit\""));
        let roundtrip: BrewError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(BrewError::unknown_unit("furlong").error_code(), "UNKNOWN_UNIT");
        assert_eq!(BrewError::unknown_category("speed").error_code(), "UNKNOWN_CATEGORY");
        assert_eq!(BrewError::unknown_formula("abv-magic").error_code(), "UNKNOWN_FORMULA");
        assert_eq!(BrewError::unknown_sugar_type("stevia").error_code(), "UNKNOWN_SUGAR_TYPE");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(BrewError::unknown_unit("furlong").to_string(), "Unknown unit 'furlong'");
        assert_eq!(
            BrewError::unit_not_in_category("kg", "volume").to_string(),
            "Unknown unit 'kg' in category 'volume'"
        );
    }

    #[test]
    fn test_configuration_errors() {
        assert!(BrewError::unknown_formula("x").is_configuration_error());
        assert!(!BrewError::file_error("open", "a.json", "missing").is_configuration_error());
    }
}
