use modscope_api::MetadataResult;
use std::fmt::Debug;

/// Index into the string table shipped alongside a metadata record.
pub type StringIndex = u32;

/// Resolves interned indices of a metadata record back to strings.
pub trait NameResolver: Send + Sync + Debug {
    fn string(&self, index: StringIndex) -> MetadataResult<&str>;
}
