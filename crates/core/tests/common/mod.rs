#![allow(dead_code)]

use modscope_api::models::{AnnotationId, DeclarationId, DeclarationKind, ModuleName};
use modscope_core::model::StringTable;
use modscope_core::DeclarationTree;
use modscope_plugin::{
    AnnotatedSource, ClassRecord, ClassSource, ContainerSource, ModuleAnnotationProvider,
    PackagePartSource, PackageRecord,
};
use std::sync::Arc;

pub fn id(raw: &str) -> AnnotationId {
    AnnotationId::parse(raw).unwrap()
}

/// Provider answering `annotations` for exactly one module name.
pub fn provider_for(module: &str, annotations: &[&str]) -> impl ModuleAnnotationProvider + use<> {
    let module = ModuleName::from(module);
    let annotations: Vec<AnnotationId> = annotations.iter().map(|raw| id(raw)).collect();
    move |name: &ModuleName| {
        if *name == module {
            annotations.clone()
        } else {
            Vec::new()
        }
    }
}

/// Class metadata naming `module`, or leaving the module-name field unset for `None`.
pub fn class_source(module: Option<&str>) -> ContainerSource {
    let mut builder = StringTable::builder();
    builder.intern("org/example/Foo");
    let module_name = module.map(|m| builder.intern(m));
    ContainerSource::Class(ClassSource::new(
        ClassRecord { module_name },
        Arc::new(builder.build()),
    ))
}

pub fn package_part_source(module: Option<&str>) -> ContainerSource {
    let mut builder = StringTable::builder();
    let module_name = module.map(|m| builder.intern(m));
    ContainerSource::PackagePart(PackagePartSource::new(
        "org/example/UtilsKt",
        PackageRecord { module_name },
        Arc::new(builder.build()),
    ))
}

pub fn annotated_source(annotations: &[&str]) -> ContainerSource {
    ContainerSource::Annotated(AnnotatedSource::new(
        annotations.iter().map(|raw| id(raw)).collect(),
    ))
}

/// `org.example` package holding class `Foo` with function `bar`.
pub struct Fixture {
    pub tree: DeclarationTree,
    pub package: DeclarationId,
    pub class: DeclarationId,
    pub member: DeclarationId,
}

pub fn fixture() -> Fixture {
    let mut tree = DeclarationTree::new();
    let package = tree.add_root("org.example", DeclarationKind::Package);
    let class = tree.add_child(package, "Foo", DeclarationKind::Class);
    let member = tree.add_child(class, "bar", DeclarationKind::Function);
    Fixture {
        tree,
        package,
        class,
        member,
    }
}
