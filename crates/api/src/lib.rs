pub mod error;
pub mod models;

pub use error::{MetadataError, MetadataResult};
pub use models::*;
