use thiserror::Error;

#[derive(Debug, Error)]
pub enum MockupError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Unauthorized: {0}")]
    AuthError(String),
    #[error("Request error: {0}")]
    RequestError(String),
    #[error("Response error: {0}")]
    ResponseError(String),
}

pub type Result<T> = std::result::Result<T, MockupError>;
