/// Failures raised while reading binary metadata.
///
/// The resolver never produces these itself; they come from the string table or
/// identifier parsing and are passed through to the caller untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetadataError {
    #[error("String index {index} is out of range (table holds {len} entries)")]
    StringIndexOutOfRange { index: u32, len: usize },
    #[error("Invalid annotation identifier: {0:?}")]
    InvalidAnnotationId(String),
}

pub type MetadataResult<T> = std::result::Result<T, MetadataError>;
