use crate::names::{NameResolver, StringIndex};
use modscope_api::models::AnnotationId;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Records that carry the optional module-name extension field.
///
/// `None` means the field was never written, which is different from a field that
/// was written with an empty or default value.
pub trait ModuleNameField {
    fn module_name(&self) -> Option<StringIndex>;
}

/// Serialized class-level metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    pub module_name: Option<StringIndex>,
}

impl ModuleNameField for ClassRecord {
    fn module_name(&self) -> Option<StringIndex> {
        self.module_name
    }
}

/// Serialized metadata of one compiled file (a package part).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecord {
    pub module_name: Option<StringIndex>,
}

impl ModuleNameField for PackageRecord {
    fn module_name(&self) -> Option<StringIndex> {
        self.module_name
    }
}

#[derive(Debug, Clone)]
pub struct ClassSource {
    pub record: ClassRecord,
    pub names: Arc<dyn NameResolver>,
}

impl ClassSource {
    pub fn new(record: ClassRecord, names: Arc<dyn NameResolver>) -> Self {
        Self { record, names }
    }
}

#[derive(Debug, Clone)]
pub struct PackagePartSource {
    /// Binary name of the file class, e.g. `org/example/UtilsKt`.
    pub class_name: String,
    pub record: PackageRecord,
    pub names: Arc<dyn NameResolver>,
}

impl PackagePartSource {
    pub fn new(
        class_name: impl Into<String>,
        record: PackageRecord,
        names: Arc<dyn NameResolver>,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            record,
            names,
        }
    }
}

/// Container from the alternate encoding, annotations stored inline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotatedSource {
    pub annotations: Vec<AnnotationId>,
}

impl AnnotatedSource {
    pub fn new(annotations: Vec<AnnotationId>) -> Self {
        Self { annotations }
    }
}

/// Shapes of binary source a declaration can be deserialized from.
#[derive(Debug, Clone)]
pub enum ContainerSource {
    Class(ClassSource),
    PackagePart(PackagePartSource),
    Annotated(AnnotatedSource),
}

impl ContainerSource {
    /// Inline module annotations, only present for the alternate encoding.
    pub fn direct_annotations(&self) -> Option<&[AnnotationId]> {
        match self {
            ContainerSource::Annotated(source) => Some(&source.annotations),
            ContainerSource::Class(_) | ContainerSource::PackagePart(_) => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            ContainerSource::Class(_) => "class",
            ContainerSource::PackagePart(_) => "package-part",
            ContainerSource::Annotated(_) => "annotated",
        }
    }
}
