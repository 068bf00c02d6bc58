use thiserror::Error;

#[derive(Debug, Error)]
pub enum MappingError {
    #[error("invalid mapping file: {0}")]
    InvalidSpec(#[from] serde_json::Error),

    #[error("unknown destination field for column '{column}': '{target}'")]
    UnknownTarget { column: String, target: String },
}
