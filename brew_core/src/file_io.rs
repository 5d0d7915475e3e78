//! # File I/O Module
//!
//! Handles settings file operations with safety features:
//! - **Atomic saves**: Write to .tmp, sync, rename to prevent corruption
//! - **Version validation**: Ensure schema compatibility
//!
//! ## File Format
//!
//! Settings are saved as `.brewcfg` files containing JSON.
//!
//! ## Example
//!
//! ```rust,no_run
//! use brew_core::file_io::{load_settings, save_settings};
//! use brew_core::settings::BrewSettings;
//! use std::path::Path;
//!
//! let path = Path::new("brewery.brewcfg");
//! save_settings(&BrewSettings::us_customary(), path).unwrap();
//!
//! let settings = load_settings(path).unwrap();
//! assert_eq!(settings.calibration_temp, 60.0);
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use crate::errors::{BrewError, BrewResult};
use crate::settings::{BrewSettings, SCHEMA_VERSION};

/// Extension for settings files
pub const SETTINGS_EXTENSION: &str = "brewcfg";

/// Default settings file name, looked up in the working directory
pub const DEFAULT_SETTINGS_FILE: &str = ".brewcfg";

/// Save settings to a file with atomic write semantics.
///
/// The save process:
/// 1. Serialize settings to JSON
/// 2. Write to a temporary file (.tmp)
/// 3. Sync to disk (fsync)
/// 4. Rename .tmp over the target (atomic on most filesystems)
///
/// # Errors
///
/// `FileError` for any I/O failure; the temp file is removed if the rename
/// fails.
pub fn save_settings(settings: &BrewSettings, path: &Path) -> BrewResult<()> {
    let json = serde_json::to_string_pretty(settings).map_err(|e| BrewError::SerializationError {
        reason: e.to_string(),
    })?;

    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        BrewError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        BrewError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        BrewError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        BrewError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    tracing::debug!(path = %path.display(), "settings saved");
    Ok(())
}

/// Load settings from a file.
///
/// # Returns
///
/// * `Ok(BrewSettings)` - Successfully loaded and validated
/// * `Err(BrewError::VersionMismatch)` - File version is incompatible
/// * `Err(BrewError::SerializationError)` - Invalid JSON
/// * `Err(BrewError::UnknownUnit)` - A default unit is in the wrong slot
/// * `Err(BrewError::FileError)` - I/O error
pub fn load_settings(path: &Path) -> BrewResult<BrewSettings> {
    let mut file = File::open(path).map_err(|e| {
        BrewError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        BrewError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let settings: BrewSettings =
        serde_json::from_str(&contents).map_err(|e| BrewError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    validate_version(&settings.version)?;
    settings.validate()?;

    tracing::debug!(path = %path.display(), version = %settings.version, "settings loaded");
    Ok(settings)
}

/// Load settings, or the defaults when the file does not exist.
///
/// A file that exists but can't be read or parsed is still an error.
pub fn load_settings_or_default(path: &Path) -> BrewResult<BrewSettings> {
    if path.exists() {
        load_settings(path)
    } else {
        tracing::debug!(path = %path.display(), "no settings file, using defaults");
        Ok(BrewSettings::default())
    }
}

fn tmp_path_for(path: &Path) -> std::path::PathBuf {
    let extension = path
        .extension()
        .map(|e| format!("{}.tmp", e.to_string_lossy()))
        .unwrap_or_else(|| "tmp".to_string());
    path.with_extension(extension)
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> BrewResult<()> {
    let mismatch = || BrewError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // For 0.x versions a newer minor may carry breaking changes
    if current_parts[0] == 0
        && file_parts.len() > 1
        && current_parts.len() > 1
        && file_parts[1] > current_parts[1]
    {
        return Err(mismatch());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Unit;
    use std::env::temp_dir;
    use std::path::PathBuf;

    fn temp_settings_path(name: &str) -> PathBuf {
        temp_dir().join(format!("brewcode_test_{}.{}", name, SETTINGS_EXTENSION))
    }

    #[test]
    fn test_tmp_path_generation() {
        assert_eq!(
            tmp_path_for(Path::new("/home/brewer/house.brewcfg")),
            Path::new("/home/brewer/house.brewcfg.tmp")
        );
        assert_eq!(tmp_path_for(Path::new("settings")), Path::new("settings.tmp"));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_settings_path("roundtrip");

        let mut settings = BrewSettings::us_customary();
        settings.target_vol_co2 = 2.7;
        save_settings(&settings, &path).unwrap();

        let loaded = load_settings(&path).unwrap();
        assert_eq!(loaded, settings);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let path = temp_settings_path("atomic");

        save_settings(&BrewSettings::default(), &path).unwrap();

        assert!(!tmp_path_for(&path).exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = temp_settings_path("does_not_exist");
        let _ = fs::remove_file(&path);

        assert_eq!(load_settings_or_default(&path).unwrap(), BrewSettings::default());
        assert_eq!(load_settings(&path).unwrap_err().error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_invalid_json_is_serialization_error() {
        let path = temp_settings_path("garbage");
        fs::write(&path, "{ not json").unwrap();

        let err = load_settings(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_misplaced_unit_rejected_on_load() {
        let path = temp_settings_path("misplaced");
        let mut settings = BrewSettings::default();
        settings.units.density = Unit::Liter;
        save_settings(&settings, &path).unwrap();

        assert_eq!(load_settings(&path).unwrap_err().error_code(), "UNKNOWN_UNIT");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_newer_file_rejected_on_load() {
        let path = temp_settings_path("newer");
        let mut settings = BrewSettings::default();
        settings.version = "0.9.0".to_string();
        save_settings(&settings, &path).unwrap();

        assert_eq!(load_settings(&path).unwrap_err().error_code(), "VERSION_MISMATCH");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.5").is_ok());
        assert!(validate_version("0.0.3").is_ok());

        // Different major should fail
        assert!(validate_version("1.0.0").is_err());

        // Newer minor (in 0.x) should fail
        assert!(validate_version("0.2.0").is_err());

        assert!(validate_version("banana").is_err());
    }
}
