use modscope_api::models::DeclarationId;
use modscope_plugin::{ContainerSource, DeclarationGraph};

/// Nearest class or package fragment owning `decl`, `decl` included.
pub(crate) fn find_container(
    graph: &dyn DeclarationGraph,
    decl: DeclarationId,
) -> Option<DeclarationId> {
    graph.nearest_container(decl)
}

/// Per-symbol source of a deserialized member. Containers have none of their own here;
/// their source is read through the container itself.
pub(crate) fn member_source(
    graph: &dyn DeclarationGraph,
    decl: DeclarationId,
    container: DeclarationId,
) -> Option<&ContainerSource> {
    if decl == container {
        return None;
    }
    graph.source(decl)
}
