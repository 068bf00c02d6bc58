use connectors::error::BackendError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Raised synchronously in a flow, before any network call.
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("backend call failed: {0}")]
    Backend(#[from] BackendError),
}

impl EngineError {
    pub fn validation(message: impl Into<String>) -> Self {
        EngineError::Validation(message.into())
    }
}
