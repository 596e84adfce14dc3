use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "docsearch";
const CONFIG_FILE: &str = "config.json";

/// Default number of documents reported per query
pub const DEFAULT_RESULT_LIMIT: usize = 5;

/// Environment variable overriding [`ServerConfig::result_limit`]
pub const RESULT_LIMIT_ENV: &str = "DOCSEARCH_RESULT_LIMIT";

/// Search server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Maximum number of documents listed in one result line
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,
}

fn default_result_limit() -> usize {
    DEFAULT_RESULT_LIMIT
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            result_limit: default_result_limit(),
        }
    }
}

impl ServerConfig {
    /// Read config from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: ServerConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Load config with priority: environment variables > config file > defaults
    ///
    /// An explicit `path` must exist. Without one, the file in the user config
    /// directory is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        config.apply_env();
        Ok(config)
    }

    /// Apply environment variable overrides. Unparseable values are ignored.
    pub fn apply_env(&mut self) {
        if let Ok(val) = std::env::var(RESULT_LIMIT_ENV) {
            match val.trim().parse() {
                Ok(limit) => self.result_limit = limit,
                Err(_) => tracing::warn!(
                    "ignoring {}={:?}: not a non-negative integer",
                    RESULT_LIMIT_ENV,
                    val
                ),
            }
        }
    }
}

/// Get the default config file location (`<config dir>/docsearch/config.json`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_limit() {
        assert_eq!(ServerConfig::default().result_limit, 5);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"result_limit": 3}}"#).unwrap();

        let config = ServerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.result_limit, 3);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{}}").unwrap();

        let config = ServerConfig::from_file(file.path()).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_invalid_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "result_limit = 3").unwrap();

        let err = ServerConfig::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    // The only test touching the process environment; keep every case on
    // RESULT_LIMIT_ENV here so nothing races on it.
    #[test]
    fn test_env_overrides_file_and_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"result_limit": 7}}"#).unwrap();

        // SAFETY: no other test reads or writes this variable
        unsafe { std::env::set_var(RESULT_LIMIT_ENV, " 3 ") };
        assert_eq!(ServerConfig::load(Some(file.path())).unwrap().result_limit, 3);
        assert_eq!(ServerConfig::load(None).unwrap().result_limit, 3);

        unsafe { std::env::set_var(RESULT_LIMIT_ENV, "0") };
        assert_eq!(ServerConfig::load(Some(file.path())).unwrap().result_limit, 0);

        // Unparseable values are ignored
        unsafe { std::env::set_var(RESULT_LIMIT_ENV, "lots") };
        assert_eq!(ServerConfig::load(Some(file.path())).unwrap().result_limit, 7);
        let mut config = ServerConfig::default();
        config.apply_env();
        assert_eq!(config, ServerConfig::default());

        unsafe { std::env::set_var(RESULT_LIMIT_ENV, "-2") };
        assert_eq!(ServerConfig::load(Some(file.path())).unwrap().result_limit, 7);

        unsafe { std::env::remove_var(RESULT_LIMIT_ENV) };
        assert_eq!(ServerConfig::load(Some(file.path())).unwrap().result_limit, 7);
    }

    #[test]
    fn test_missing_explicit_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(ServerConfig::load(Some(&missing)).is_err());
    }
}
