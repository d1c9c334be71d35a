use thiserror::Error;

/// Errors that can occur while searching for and opening recipes
#[derive(Error, Debug)]
pub enum ScalerError {
    /// Failed to fetch or decode a response from the recipe API
    #[error("Failed to fetch recipes: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// The requested recipe does not exist in the result list
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),
}
