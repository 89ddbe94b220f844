//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `OCEANPRO_STATE_DIR` - Directory holding the cart state file
//!   (default: `.oceanpro` in the working directory)
//! - `OCEANPRO_CATALOG` - Path to a JSON product catalog file; when unset
//!   the bundled demo catalog is used

use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable held a value the CLI cannot use.
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Directory the file-backed cart store is rooted at.
    pub state_dir: PathBuf,
    /// Optional catalog file; `None` means the bundled demo catalog.
    pub catalog_path: Option<PathBuf>,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable holds a non-unicode value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let state_dir = PathBuf::from(get_env_or_default("OCEANPRO_STATE_DIR", ".oceanpro"));
        let catalog_path = get_optional_env("OCEANPRO_CATALOG")?.map(PathBuf::from);

        Ok(Self {
            state_dir,
            catalog_path,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get an optional environment variable, rejecting non-unicode values.
fn get_optional_env(key: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "value is not valid unicode".to_string(),
        )),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_get_env_or_default_falls_back() {
        let value = get_env_or_default("OCEANPRO_TEST_UNSET_VARIABLE", ".oceanpro");
        assert_eq!(value, ".oceanpro");
    }

    #[test]
    fn test_get_optional_env_absent_is_none() {
        let value = get_optional_env("OCEANPRO_TEST_UNSET_VARIABLE").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidEnvVar("OCEANPRO_CATALOG".to_string(), "bad".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid environment variable OCEANPRO_CATALOG: bad"
        );
    }
}
