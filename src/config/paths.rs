//! Path management for finplan
//!
//! ## Path Resolution Order
//!
//! 1. `FINPLAN_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/finplan` on Linux,
//!    `~/Library/Application Support/finplan` on macOS, `%APPDATA%\finplan`
//!    on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::FinplanError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "FINPLAN_DATA_DIR";

/// Manages all paths used by finplan
#[derive(Debug, Clone)]
pub struct FinplanPaths {
    base_dir: PathBuf,
}

impl FinplanPaths {
    /// Resolve the base directory from the environment or the platform
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, FinplanError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => ProjectDirs::from("", "", "finplan")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    FinplanError::Config("Could not determine a home directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create FinplanPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding the budget and history resources
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), FinplanError> {
        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| FinplanError::Io(format!("Failed to create data directory: {}", e)))
    }
}
