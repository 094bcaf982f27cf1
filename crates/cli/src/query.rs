use modscope_api::models::{AnnotationId, ModuleName};
use modscope_core::{ModuleMappingIndex, ProviderRegistry};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, warn};

pub fn run(
    module: String,
    indices: Vec<PathBuf>,
    fqn: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let registry = load_registry(&indices)?;
    let module = ModuleName::from(module);

    let annotations = registry.annotations_on_module(&module);
    if annotations.is_empty() {
        warn!("No annotations recorded for module {}", module);
    }

    for line in render(&annotations, fqn) {
        println!("{}", line);
    }
    Ok(())
}

/// Register every index as a provider, preserving command-line order.
pub(crate) fn load_registry(
    indices: &[PathBuf],
) -> Result<ProviderRegistry, Box<dyn std::error::Error>> {
    let mut registry = ProviderRegistry::with_capacity(indices.len());
    for path in indices {
        let index = ModuleMappingIndex::load(path)?;
        debug!("Registered {} as provider #{}", path.display(), registry.len());
        registry.register(Arc::new(index));
    }
    Ok(registry)
}

pub(crate) fn render(annotations: &[AnnotationId], fqn: bool) -> Vec<String> {
    annotations
        .iter()
        .map(|a| if fqn { a.as_fqn() } else { a.to_string() })
        .collect()
}
