//! User settings for krypt
//!
//! Only the knobs that do not change the cryptographic contract live here.
//! KDF iterations, key size, and the cipher are fixed constants.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::paths::KryptPaths;
use crate::crypto::DEFAULT_SALT_LENGTH;
use crate::error::KryptError;

/// Smallest salt a new vault may be created with
pub const MIN_SALT_LENGTH: usize = 8;

/// User settings for the crypto core
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Salt length in bytes for newly created vaults
    #[serde(default = "default_salt_length")]
    pub salt_length: usize,

    /// Default tracing filter, overridden by `KRYPT_LOG`
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_salt_length() -> usize {
    DEFAULT_SALT_LENGTH
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            salt_length: default_salt_length(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &KryptPaths) -> Result<Self, KryptError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            Self::load(&settings_path)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Load and validate settings from a specific file
    pub fn load(path: &Path) -> Result<Self, KryptError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| KryptError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| KryptError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &KryptPaths) -> Result<(), KryptError> {
        self.validate()?;
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| KryptError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| KryptError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject values that would weaken newly created vaults
    pub fn validate(&self) -> Result<(), KryptError> {
        if self.salt_length < MIN_SALT_LENGTH {
            return Err(KryptError::Config(format!(
                "salt_length must be at least {} bytes (got {})",
                MIN_SALT_LENGTH, self.salt_length
            )));
        }
        Ok(())
    }
}
