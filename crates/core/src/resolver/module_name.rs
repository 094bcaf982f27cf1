//! Module name extraction from binary metadata records.

use modscope_api::MetadataResult;
use modscope_api::models::ModuleName;
use modscope_plugin::{ContainerSource, ModuleNameField, NameResolver};
use tracing::trace;

/// Decode the module-name field of `record`, or the default module name when the field
/// was never written.
pub fn module_name_of<R>(record: &R, names: &dyn NameResolver) -> MetadataResult<ModuleName>
where
    R: ModuleNameField + ?Sized,
{
    match record.module_name() {
        Some(index) => Ok(ModuleName::new(names.string(index)?)),
        None => Ok(ModuleName::default_module()),
    }
}

/// Module name of a declaration given its own member source and its container's source.
///
/// A member's own package part wins over the lexical class container; `None` means no
/// module name can be derived from either.
pub(crate) fn extract(
    member_source: Option<&ContainerSource>,
    container_source: Option<&ContainerSource>,
) -> MetadataResult<Option<ModuleName>> {
    if let Some(ContainerSource::PackagePart(part)) = member_source {
        trace!(part = %part.class_name, "Reading module name from member's package part");
        return module_name_of(&part.record, part.names.as_ref()).map(Some);
    }

    match container_source {
        Some(ContainerSource::Class(class)) => {
            module_name_of(&class.record, class.names.as_ref()).map(Some)
        }
        Some(ContainerSource::PackagePart(_)) | Some(ContainerSource::Annotated(_)) | None => {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StringTable;
    use modscope_api::MetadataError;
    use modscope_plugin::{AnnotatedSource, ClassRecord, ClassSource, PackagePartSource, PackageRecord};
    use std::sync::Arc;

    fn table() -> Arc<StringTable> {
        Arc::new(StringTable::from_strings(["org/example/Foo", "moduleA", "moduleB"]))
    }

    fn class_source(module_name: Option<u32>) -> ContainerSource {
        ContainerSource::Class(ClassSource::new(
            ClassRecord { module_name },
            table(),
        ))
    }

    fn part_source(module_name: Option<u32>) -> ContainerSource {
        ContainerSource::PackagePart(PackagePartSource::new(
            "org/example/UtilsKt",
            PackageRecord { module_name },
            table(),
        ))
    }

    #[test]
    fn test_present_field_is_decoded() {
        let names = table();
        let record = ClassRecord { module_name: Some(1) };
        assert_eq!(module_name_of(&record, &*names).unwrap(), ModuleName::from("moduleA"));
    }

    #[test]
    fn test_absent_field_falls_back_to_default() {
        let names = table();
        let record = PackageRecord { module_name: None };
        assert!(module_name_of(&record, &*names).unwrap().is_default());
    }

    #[test]
    fn test_present_field_with_index_zero_is_not_default() {
        let names = Arc::new(StringTable::from_strings(["zero"]));
        let record = PackageRecord { module_name: Some(0) };
        assert_eq!(module_name_of(&record, &*names).unwrap().as_str(), "zero");
    }

    #[test]
    fn test_decode_failure_propagates() {
        let names = table();
        let record = ClassRecord { module_name: Some(40) };
        assert_eq!(
            module_name_of(&record, &*names),
            Err(MetadataError::StringIndexOutOfRange { index: 40, len: 3 })
        );
    }

    #[test]
    fn test_member_package_part_wins_over_class() {
        let member = part_source(Some(2));
        let container = class_source(Some(1));
        let name = extract(Some(&member), Some(&container)).unwrap();
        assert_eq!(name, Some(ModuleName::from("moduleB")));
    }

    #[test]
    fn test_class_container_without_member_source() {
        let container = class_source(None);
        let name = extract(None, Some(&container)).unwrap();
        assert_eq!(name, Some(ModuleName::default_module()));
    }

    #[test]
    fn test_unrecognized_shapes_yield_nothing() {
        let annotated = ContainerSource::Annotated(AnnotatedSource::default());
        assert_eq!(extract(None, None).unwrap(), None);
        assert_eq!(extract(None, Some(&annotated)).unwrap(), None);
        assert_eq!(extract(Some(&class_source(Some(1))), None).unwrap(), None);
    }
}
