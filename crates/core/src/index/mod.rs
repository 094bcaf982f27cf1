//! Module mapping index: a provider backed by per-artifact module descriptors.
//!
//! Each [`ModuleMapping`] records the annotations one artifact declared for its module.
//! A module compiled into several artifacts shows up as several mappings with the same
//! name; lookups return all of them in load order.

use crate::error::{ModscopeError, Result};
use modscope_api::models::{AnnotationId, ModuleName};
use modscope_plugin::ModuleAnnotationProvider;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// On-disk format version of [`ModuleMappingIndex`].
pub const CURRENT_VERSION: u32 = 1;

pub const DEFAULT_INDEX_DIR: &str = ".modscope/indices";

/// Base directory for stored indices, `MODSCOPE_INDEX_DIR` or `~/.modscope/indices`.
pub fn base_index_dir() -> PathBuf {
    if let Ok(env_dir) = std::env::var("MODSCOPE_INDEX_DIR") {
        return PathBuf::from(env_dir);
    }

    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(DEFAULT_INDEX_DIR)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleMapping {
    #[serde(rename = "module")]
    pub module_name: ModuleName,
    #[serde(default)]
    pub annotations: Vec<AnnotationId>,
    /// Artifact the mapping was read from, for diagnostics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
}

impl ModuleMapping {
    pub fn new(module_name: impl Into<ModuleName>, annotations: Vec<AnnotationId>) -> Self {
        Self {
            module_name: module_name.into(),
            annotations,
            origin: None,
        }
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }
}

#[derive(Serialize, Deserialize)]
struct StoredIndex {
    version: u32,
    mappings: Vec<ModuleMapping>,
}

#[derive(Debug, Clone, Default)]
pub struct ModuleMappingIndex {
    mappings: Vec<ModuleMapping>,
    by_module: HashMap<ModuleName, Vec<usize>>,
}

impl ModuleMappingIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_mappings(mappings: impl IntoIterator<Item = ModuleMapping>) -> Self {
        let mut index = Self::new();
        index.extend(mappings);
        index
    }

    pub fn push(&mut self, mapping: ModuleMapping) {
        self.by_module
            .entry(mapping.module_name.clone())
            .or_default()
            .push(self.mappings.len());
        self.mappings.push(mapping);
    }

    pub fn extend(&mut self, mappings: impl IntoIterator<Item = ModuleMapping>) {
        for mapping in mappings {
            self.push(mapping);
        }
    }

    pub fn mappings(&self) -> &[ModuleMapping] {
        &self.mappings
    }

    pub fn mappings_for<'a>(
        &'a self,
        module: &ModuleName,
    ) -> impl Iterator<Item = &'a ModuleMapping> + use<'a> {
        self.by_module
            .get(module)
            .into_iter()
            .flatten()
            .map(move |&i| &self.mappings[i])
    }

    /// Distinct module names, in first-seen order.
    pub fn module_names(&self) -> Vec<&ModuleName> {
        let mut seen = Vec::new();
        for mapping in &self.mappings {
            if !seen.contains(&&mapping.module_name) {
                seen.push(&mapping.module_name);
            }
        }
        seen
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Parse a JSON manifest: an array of `{"module", "annotations", "origin"}` objects.
    pub fn from_manifest_json(json: &str) -> Result<Self> {
        let mappings: Vec<ModuleMapping> = serde_json::from_str(json)?;
        Ok(Self::from_mappings(mappings))
    }

    /// Serialize to the compressed on-disk form.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let stored = StoredIndex {
            version: CURRENT_VERSION,
            mappings: self.mappings.clone(),
        };
        let bytes = rmp_serde::to_vec_named(&stored)
            .map_err(|e| ModscopeError::Serialization(format!("MSGPACK error: {}", e)))?;

        zstd::encode_all(&bytes[..], 0)
            .map_err(|e| ModscopeError::Serialization(format!("Zstd compression failed: {}", e)))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let decompressed = zstd::decode_all(bytes).map_err(|e| {
            ModscopeError::Serialization(format!("Zstd decompression failed: {}", e))
        })?;

        let stored: StoredIndex = rmp_serde::from_slice(&decompressed)
            .map_err(|e| ModscopeError::Serialization(format!("MSGPACK error: {}", e)))?;

        if stored.version != CURRENT_VERSION {
            return Err(ModscopeError::IndexVersion {
                found: stored.version,
                expected: CURRENT_VERSION,
            });
        }
        Ok(Self::from_mappings(stored.mappings))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let index = Self::from_bytes(&bytes)?;
        info!(
            "Loaded module mapping index from {} ({} mappings)",
            path.display(),
            index.len()
        );
        Ok(index)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_bytes()?)?;
        debug!("Saved {} mappings to {}", self.len(), path.display());
        Ok(())
    }
}

impl ModuleAnnotationProvider for ModuleMappingIndex {
    fn annotations_on_module(&self, module: &ModuleName) -> Vec<AnnotationId> {
        self.mappings_for(module)
            .flat_map(|mapping| mapping.annotations.iter().cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> AnnotationId {
        AnnotationId::parse(raw).unwrap()
    }

    #[test]
    fn test_mappings_for_same_module_are_concatenated() {
        let index = ModuleMappingIndex::from_mappings([
            ModuleMapping::new("core", vec![id("a/One")]).with_origin("core-1.jar"),
            ModuleMapping::new("util", vec![id("a/Other")]),
            ModuleMapping::new("core", vec![id("a/Two"), id("a/One")]).with_origin("core-2.jar"),
        ]);

        assert_eq!(
            index.annotations_on_module(&ModuleName::from("core")),
            vec![id("a/One"), id("a/Two"), id("a/One")]
        );
        assert_eq!(index.mappings_for(&ModuleName::from("core")).count(), 2);
        assert!(index.annotations_on_module(&ModuleName::from("missing")).is_empty());
    }

    #[test]
    fn test_module_names_in_first_seen_order() {
        let index = ModuleMappingIndex::from_mappings([
            ModuleMapping::new("b", vec![]),
            ModuleMapping::new("a", vec![]),
            ModuleMapping::new("b", vec![]),
        ]);
        let names: Vec<&str> = index.module_names().iter().map(|m| m.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_manifest_json() {
        let json = r#"[
            {"module": "main", "annotations": ["kotlin/jvm/JvmMultifileClass"], "origin": "app.jar"},
            {"module": "lib"}
        ]"#;
        let index = ModuleMappingIndex::from_manifest_json(json).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.mappings()[0].origin.as_deref(), Some("app.jar"));
        assert!(index.mappings()[1].annotations.is_empty());
        assert_eq!(
            index.annotations_on_module(&ModuleName::default_module()),
            vec![id("kotlin/jvm/JvmMultifileClass")]
        );
    }

    #[test]
    fn test_manifest_with_bad_annotation_id() {
        let json = r#"[{"module": "main", "annotations": ["kotlin/"]}]"#;
        assert!(matches!(
            ModuleMappingIndex::from_manifest_json(json),
            Err(ModscopeError::Json(_))
        ));
    }

    #[test]
    fn test_bytes_round_trip() {
        let index = ModuleMappingIndex::from_mappings([
            ModuleMapping::new("core", vec![id("a/One")]),
            ModuleMapping::new("core", vec![id("a/Two")]),
        ]);
        let restored = ModuleMappingIndex::from_bytes(&index.to_bytes().unwrap()).unwrap();
        assert_eq!(restored.mappings(), index.mappings());
        assert_eq!(
            restored.annotations_on_module(&ModuleName::from("core")),
            vec![id("a/One"), id("a/Two")]
        );
    }

    #[test]
    fn test_version_mismatch_is_rejected() {
        let stored = StoredIndex {
            version: CURRENT_VERSION + 1,
            mappings: Vec::new(),
        };
        let bytes = zstd::encode_all(&rmp_serde::to_vec_named(&stored).unwrap()[..], 0).unwrap();
        assert!(matches!(
            ModuleMappingIndex::from_bytes(&bytes),
            Err(ModscopeError::IndexVersion { found: 2, expected: 1 })
        ));
    }

    #[test]
    fn test_garbage_bytes() {
        assert!(matches!(
            ModuleMappingIndex::from_bytes(b"not an index"),
            Err(ModscopeError::Serialization(_))
        ));
    }
}
