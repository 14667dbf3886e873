//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `FITGEAR_DATA_DIR` - Directory for persisted state (default: `fitgear-data`)
//! - `FITGEAR_CATALOG` - Path to a product catalog JSON file (default: built-in catalog)

use std::path::PathBuf;

use thiserror::Error;

/// Default data directory, relative to the working directory.
const DEFAULT_DATA_DIR: &str = "fitgear-data";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory holding the persisted cart and session state
    pub data_dir: PathBuf,
    /// Optional catalog file overriding the built-in product data
    pub catalog_path: Option<PathBuf>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but unusable (e.g. an
    /// empty path).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = get_env_or_default("FITGEAR_DATA_DIR", DEFAULT_DATA_DIR);
        validate_non_empty("FITGEAR_DATA_DIR", &data_dir)?;

        let catalog_path = match get_optional_env("FITGEAR_CATALOG") {
            Some(path) => {
                validate_non_empty("FITGEAR_CATALOG", &path)?;
                Some(PathBuf::from(path))
            }
            None => None,
        };

        Ok(Self {
            data_dir: PathBuf::from(data_dir),
            catalog_path,
        })
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            catalog_path: None,
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Reject empty or whitespace-only values for path variables.
fn validate_non_empty(key: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "value must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_accepts_paths() {
        assert!(validate_non_empty("TEST_VAR", "fitgear-data").is_ok());
        assert!(validate_non_empty("TEST_VAR", "/var/lib/fitgear").is_ok());
    }

    #[test]
    fn test_validate_non_empty_rejects_blank() {
        assert!(validate_non_empty("TEST_VAR", "").is_err());
        assert!(validate_non_empty("TEST_VAR", "   ").is_err());
    }

    #[test]
    fn test_default_config() {
        let config = StorefrontConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("fitgear-data"));
        assert!(config.catalog_path.is_none());
    }
}
