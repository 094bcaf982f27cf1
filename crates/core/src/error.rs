use modscope_api::MetadataError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModscopeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Metadata error: {0}")]
    Metadata(#[from] MetadataError),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Index version mismatch (found {found}, expected {expected})")]
    IndexVersion { found: u32, expected: u32 },
}

pub type Result<T> = std::result::Result<T, ModscopeError>;
