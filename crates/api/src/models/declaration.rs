use serde::{Deserialize, Serialize};

/// Handle of a declaration inside a symbol graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DeclarationId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    Module,
    Package,
    Class,
    Interface,
    Object,
    Enum,
    Annotation,
    Function,
    Constructor,
    Property,
    TypeAlias,
    Parameter,
}

impl DeclarationKind {
    pub fn is_class_like(&self) -> bool {
        matches!(
            self,
            DeclarationKind::Class
                | DeclarationKind::Interface
                | DeclarationKind::Object
                | DeclarationKind::Enum
                | DeclarationKind::Annotation
        )
    }

    /// Classes and package fragments are the units module annotations attach to.
    pub fn is_container(&self) -> bool {
        self.is_class_like() || matches!(self, DeclarationKind::Package)
    }

}
