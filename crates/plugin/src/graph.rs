use crate::source::ContainerSource;
use modscope_api::models::{DeclarationId, DeclarationKind};

/// Read access to the symbol graph that declarations were loaded into.
pub trait DeclarationGraph: Send + Sync {
    fn kind(&self, decl: DeclarationId) -> Option<DeclarationKind>;

    fn parent(&self, decl: DeclarationId) -> Option<DeclarationId>;

    /// Binary source the declaration was deserialized from, if any.
    ///
    /// For classes and package fragments this is their own metadata; for members it is
    /// the per-symbol container source recorded at deserialization time.
    fn source(&self, decl: DeclarationId) -> Option<&ContainerSource>;

    /// Nearest class or package fragment, starting with `decl` itself.
    fn nearest_container(&self, decl: DeclarationId) -> Option<DeclarationId> {
        let mut current = Some(decl);
        while let Some(id) = current {
            if self.kind(id)?.is_container() {
                return Some(id);
            }
            current = self.parent(id);
        }
        None
    }
}
