use thiserror::Error;

/// Errors that can occur while running a food assessment
#[derive(Error, Debug)]
pub enum FoodiqError {
    /// Input was present but unusable (e.g. a non-finite temperature)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Failed to serialize a result for output
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
