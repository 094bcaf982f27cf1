//! Ordered, append-only collection of module annotation providers.

use modscope_api::models::{AnnotationId, ModuleName};
use modscope_plugin::ModuleAnnotationProvider;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Providers queried in registration order.
///
/// Appending needs `&mut self` while lookups need `&self`, so a registry shared with
/// resolving threads is frozen for as long as it is borrowed.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: Vec<Arc<dyn ModuleAnnotationProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            providers: Vec::with_capacity(capacity),
        }
    }

    pub fn register(&mut self, provider: Arc<dyn ModuleAnnotationProvider>) {
        self.providers.push(provider);
        debug!(providers = self.providers.len(), "Registered module annotation provider");
    }

    pub fn register_batch(
        &mut self,
        providers: impl IntoIterator<Item = Arc<dyn ModuleAnnotationProvider>>,
    ) {
        for provider in providers {
            self.register(provider);
        }
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Concatenation of every provider's answer for `module`, duplicates included.
    pub fn annotations_on_module(&self, module: &ModuleName) -> Vec<AnnotationId> {
        self.providers
            .iter()
            .flat_map(|provider| provider.annotations_on_module(module))
            .collect()
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.providers.len())
            .finish()
    }
}
