pub mod error;
pub mod index;
pub mod logging;
pub mod model;
pub mod registry;
pub mod resolver;

pub use error::{ModscopeError, Result};
pub use index::{ModuleMapping, ModuleMappingIndex};
pub use model::{DeclarationTree, StringTable};
pub use registry::ProviderRegistry;
pub use resolver::{AnnotationResolver, AnnotationResolverBuilder};
