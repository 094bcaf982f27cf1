//! Resolution of module-level annotations for arbitrary declarations.

mod container;
pub mod module_name;

use crate::registry::ProviderRegistry;
use modscope_api::MetadataResult;
use modscope_api::models::{AnnotationId, DeclarationId};
use modscope_plugin::{
    ContainerSource, DeclarationGraph, ModuleAnnotationProvider, ModuleAnnotationsResolver,
};
use std::sync::Arc;
use tracing::trace;

pub use module_name::module_name_of;

/// Resolves module annotations through inline annotated sources or, failing that, the
/// module name recorded in binary metadata and the registered providers.
#[derive(Debug, Clone, Default)]
pub struct AnnotationResolver {
    registry: ProviderRegistry,
}

impl AnnotationResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(registry: ProviderRegistry) -> Self {
        Self { registry }
    }

    pub fn builder() -> AnnotationResolverBuilder {
        AnnotationResolverBuilder::default()
    }

    /// Append a provider. Lookups see providers in the order they were added.
    pub fn add_provider(&mut self, provider: impl ModuleAnnotationProvider + 'static) {
        self.registry.register(Arc::new(provider));
    }

    pub fn add_shared_provider(&mut self, provider: Arc<dyn ModuleAnnotationProvider>) {
        self.registry.register(provider);
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }
}

impl ModuleAnnotationsResolver for AnnotationResolver {
    fn annotations_on_containing_module(
        &self,
        graph: &dyn DeclarationGraph,
        decl: DeclarationId,
    ) -> MetadataResult<Vec<AnnotationId>> {
        let Some(container) = container::find_container(graph, decl) else {
            trace!(?decl, "No class or package container");
            return Ok(Vec::new());
        };

        let member_source = container::member_source(graph, decl, container);
        let container_source = graph.source(container);

        let candidate = member_source.or(container_source);
        if let Some(annotations) = candidate.and_then(ContainerSource::direct_annotations) {
            trace!(?decl, count = annotations.len(), "Using inline module annotations");
            return Ok(annotations.to_vec());
        }

        let Some(module) = module_name::extract(member_source, container_source)? else {
            trace!(
                ?decl,
                ?container,
                source = candidate.map(ContainerSource::kind_name),
                "No module name recorded for declaration"
            );
            return Ok(Vec::new());
        };

        let annotations = self.registry.annotations_on_module(&module);
        trace!(
            ?decl,
            module = %module,
            count = annotations.len(),
            "Resolved module annotations from providers"
        );
        Ok(annotations)
    }
}

#[derive(Debug, Default)]
pub struct AnnotationResolverBuilder {
    registry: ProviderRegistry,
}

impl AnnotationResolverBuilder {
    pub fn with_provider(mut self, provider: impl ModuleAnnotationProvider + 'static) -> Self {
        self.registry.register(Arc::new(provider));
        self
    }

    pub fn build(self) -> AnnotationResolver {
        AnnotationResolver::with_registry(self.registry)
    }
}
