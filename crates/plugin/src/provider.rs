use modscope_api::models::{AnnotationId, ModuleName};

/// A source of module-level annotations keyed by module name.
///
/// Implementations own their index; a provider that knows nothing about a module
/// returns an empty list.
pub trait ModuleAnnotationProvider: Send + Sync {
    fn annotations_on_module(&self, module: &ModuleName) -> Vec<AnnotationId>;
}

impl<F> ModuleAnnotationProvider for F
where
    F: Fn(&ModuleName) -> Vec<AnnotationId> + Send + Sync,
{
    fn annotations_on_module(&self, module: &ModuleName) -> Vec<AnnotationId> {
        self(module)
    }
}
