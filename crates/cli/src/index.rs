use modscope_core::ModuleMappingIndex;
use modscope_core::index::base_index_dir;
use std::path::{Path, PathBuf};
use tracing::info;

pub fn run(manifest: PathBuf, output: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(&manifest)?;
    let index = ModuleMappingIndex::from_manifest_json(&json)?;

    let output = output.unwrap_or_else(|| default_output(&manifest));
    index.save(&output)?;

    info!(
        "Indexed {} mappings ({} modules) from {}",
        index.len(),
        index.module_names().len(),
        manifest.display()
    );
    println!("{}", output.display());
    Ok(())
}

fn default_output(manifest: &Path) -> PathBuf {
    let stem = manifest
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "modules".to_string());
    base_index_dir().join(format!("{stem}.idx"))
}
