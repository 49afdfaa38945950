use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

use crate::error::ScoutError;

/// Top-level client configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Recipe catalog settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Local favorites storage settings
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Settings for the external recipe catalog
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// API key for authentication (can also be set via environment variable)
    pub api_key: Option<String>,
    /// Base URL for the catalog endpoint (for custom or proxy endpoints)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Maximum number of results per search
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            api_key: None,
            base_url: default_base_url(),
            timeout: default_timeout(),
            page_size: default_page_size(),
        }
    }
}

impl ApiConfig {
    /// Resolve the API credential: config first, then the environment.
    pub fn resolve_api_key(&self) -> Result<String, ScoutError> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("SPOONACULAR_API_KEY").ok())
            .ok_or(ScoutError::MissingApiKey)
    }
}

/// Settings for the durable favorites store
#[derive(Debug, Deserialize, Clone, Default)]
pub struct StorageConfig {
    /// Directory holding the favorites file. Defaults to the platform data
    /// directory.
    pub data_dir: Option<PathBuf>,
}

impl StorageConfig {
    /// Directory the favorites file lives in.
    pub fn resolve_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("recipe-scout")
        })
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://api.spoonacular.com/recipes".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_page_size() -> u32 {
    12
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with SCOUT__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: SCOUT__API__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Environment variables with SCOUT prefix
        // Use double underscore for nested: SCOUT__API__PAGE_SIZE
        .add_source(
            Environment::with_prefix("SCOUT")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        assert_eq!(default_base_url(), "https://api.spoonacular.com/recipes");
        assert_eq!(default_timeout(), 30);
        assert_eq!(default_page_size(), 12);
    }

    #[test]
    fn test_api_config_default() {
        let api = ApiConfig::default();
        assert!(api.api_key.is_none());
        assert_eq!(api.base_url, "https://api.spoonacular.com/recipes");
        assert_eq!(api.timeout, 30);
        assert_eq!(api.page_size, 12);
    }

    #[test]
    fn test_resolve_api_key_prefers_config() {
        let api = ApiConfig {
            api_key: Some("from-config".to_string()),
            ..ApiConfig::default()
        };
        assert_eq!(api.resolve_api_key().unwrap(), "from-config");
    }

    #[test]
    fn test_storage_data_dir_override() {
        let storage = StorageConfig {
            data_dir: Some(PathBuf::from("/tmp/scout-test")),
        };
        assert_eq!(storage.resolve_data_dir(), PathBuf::from("/tmp/scout-test"));
    }

    #[test]
    fn test_storage_data_dir_default_is_namespaced() {
        let storage = StorageConfig::default();
        let dir = storage.resolve_data_dir();
        assert!(dir.ends_with("recipe-scout"));
    }
}
