//! Path management for krypt
//!
//! ## Path Resolution Order
//!
//! 1. `KRYPT_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/krypt` or `~/.config/krypt`
//! 3. Windows: `%APPDATA%\krypt`

use std::path::PathBuf;

use crate::error::KryptError;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "KRYPT_CONFIG_DIR";

/// Manages the paths used by the crypto core
#[derive(Debug, Clone)]
pub struct KryptPaths {
    /// Base directory for krypt configuration
    base_dir: PathBuf,
}

impl KryptPaths {
    /// Create a new KryptPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, KryptError> {
        let base_dir = if let Ok(custom) = std::env::var(CONFIG_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create KryptPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/krypt/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), KryptError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| KryptError::Io(format!("Failed to create config directory: {}", e)))
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, KryptError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                KryptError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("krypt"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, KryptError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| KryptError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("krypt"))
}
