pub mod annotation;
pub mod declaration;
pub mod module;

pub use annotation::AnnotationId;
pub use declaration::{DeclarationId, DeclarationKind};
pub use module::{DEFAULT_MODULE_NAME, ModuleName};
