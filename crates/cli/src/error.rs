use connectors::error::{BackendError, ConfigError};
use engine::error::EngineError;
use ingest::error::MappingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read input file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("{0}")]
    Engine(#[from] EngineError),

    #[error("{0}")]
    Mapping(#[from] MappingError),

    #[error("invalid env file: {0}")]
    EnvFile(String),

    #[error("invalid run id: {0}")]
    InvalidRunId(String),

    #[error("supervisor password rejected")]
    PasswordRejected,

    #[error("processing failed: {0}")]
    ProcessingFailed(String),

    #[error("failed to serialize output to JSON: {0}")]
    JsonSerialize(serde_json::Error),
}
