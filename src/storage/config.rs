//! Settings management
//!
//! Optional TOML settings for the helpers that take tunable collaborators.
//! Nothing in the crate reads settings implicitly; callers load them and pass
//! them along.

use super::Result;
use crate::error::StorageError;
use crate::ml::device::Backend;
use crate::ml::tokenizer::Encoding;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Library settings
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Separator used when flattening nested mappings
    pub flatten_separator: String,
    /// Backends probed by device selection, in priority order
    pub device_order: Vec<Backend>,
    /// Subword vocabulary used by the tokenizer
    pub encoding: Encoding,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            flatten_separator: "_".to_string(),
            device_order: Backend::DEFAULT_ORDER.to_vec(),
            encoding: Encoding::default(),
        }
    }
}

impl Settings {
    /// Load settings from file, falling back to defaults when it does not exist
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let settings_path = match path {
            Some(p) => p,
            None => Self::settings_file_path()?,
        };

        if !settings_path.exists() {
            log::debug!(
                "No settings file at {}, using defaults",
                settings_path.display()
            );
            return Ok(Settings::default());
        }

        let content =
            fs::read_to_string(&settings_path).map_err(|source| StorageError::FileIo {
                path: settings_path.to_string_lossy().to_string(),
                source,
            })?;

        toml::from_str(&content).map_err(|e| StorageError::ConfigParseError {
            message: format!("Failed to parse settings file: {}", e),
        })
    }

    /// Save settings to file
    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let settings_path = match path {
            Some(p) => p,
            None => Self::settings_file_path()?,
        };

        if let Some(parent) = settings_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content = toml::to_string(self).map_err(|e| StorageError::ConfigParseError {
            message: format!("Failed to serialize settings: {}", e),
        })?;

        fs::write(&settings_path, toml_content).map_err(|source| StorageError::FileIo {
            path: settings_path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(())
    }

    fn settings_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(StorageError::ConfigDirNotFound)?;
        Ok(config_dir.join("common-utils").join("settings.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.flatten_separator, "_");
        assert_eq!(
            settings.device_order,
            vec![Backend::Cuda, Backend::Metal, Backend::Cpu]
        );
        assert_eq!(settings.encoding, Encoding::Cl100kBase);
    }

    #[test]
    fn test_settings_load_save() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let settings_path = temp_dir.path().join("nested").join("settings.toml");

        let settings = Settings {
            flatten_separator: ".".to_string(),
            device_order: vec![Backend::Metal, Backend::Cpu],
            encoding: Encoding::O200kBase,
        };

        settings
            .save(Some(settings_path.clone()))
            .expect("Failed to save settings");

        let loaded = Settings::load(Some(settings_path)).expect("Failed to load settings");
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_settings_partial_file_uses_defaults() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let settings_path = temp_dir.path().join("settings.toml");
        fs::write(&settings_path, "flatten_separator = \"/\"\n").expect("Failed to write");

        let loaded = Settings::load(Some(settings_path)).expect("Failed to load settings");
        assert_eq!(loaded.flatten_separator, "/");
        assert_eq!(loaded.device_order, Backend::DEFAULT_ORDER.to_vec());
        assert_eq!(loaded.encoding, Encoding::Cl100kBase);
    }

    #[test]
    fn test_settings_parse_error() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let settings_path = temp_dir.path().join("settings.toml");
        fs::write(&settings_path, "device_order = [\"tpu\"]\n").expect("Failed to write");

        let result = Settings::load(Some(settings_path));
        assert!(matches!(result, Err(StorageError::ConfigParseError { .. })));
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let nonexistent_path = temp_dir.path().join("nonexistent.toml");

        let settings = Settings::load(Some(nonexistent_path)).expect("Failed to load defaults");
        assert_eq!(settings, Settings::default());
    }
}
