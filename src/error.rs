use thiserror::Error;

/// Errors that can occur while talking to the recipe catalog or the local
/// favorites store
#[derive(Error, Debug)]
pub enum ScoutError {
    /// Transport-level failure reaching the catalog
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog answered with a non-success status
    #[error("Recipe API returned status {0}")]
    ApiStatus(reqwest::StatusCode),

    /// Failed to serialize or deserialize a recipe collection
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Reading or writing the favorites store failed
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// No API credential available
    #[error("API key not found in config or SPOONACULAR_API_KEY environment variable")]
    MissingApiKey,
}
