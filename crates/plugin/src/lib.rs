use modscope_api::models::{AnnotationId, DeclarationId};
use modscope_api::MetadataResult;

pub mod graph;
pub mod names;
pub mod provider;
pub mod source;

pub use graph::DeclarationGraph;
pub use names::{NameResolver, StringIndex};
pub use provider::ModuleAnnotationProvider;
pub use source::{
    AnnotatedSource, ClassRecord, ClassSource, ContainerSource, ModuleNameField,
    PackagePartSource, PackageRecord,
};

/// Answers "which annotations were declared on the module that compiled this symbol".
pub trait ModuleAnnotationsResolver: Send + Sync {
    /// Annotations of the module containing `decl`, or an empty list when the
    /// declaration has no binary module context.
    ///
    /// Errors only come from the string tables of the metadata being read.
    fn annotations_on_containing_module(
        &self,
        graph: &dyn DeclarationGraph,
        decl: DeclarationId,
    ) -> MetadataResult<Vec<AnnotationId>>;
}
