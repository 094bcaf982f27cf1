use modscope_core::ModuleMappingIndex;
use std::path::PathBuf;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct MappingRow {
    #[tabled(rename = "Module")]
    module: String,
    #[tabled(rename = "Annotations")]
    annotations: String,
    #[tabled(rename = "Origin")]
    origin: String,
}

pub fn run(path: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let index = ModuleMappingIndex::load(&path)?;

    if index.is_empty() {
        println!("Index {} holds no mappings.", path.display());
        return Ok(());
    }

    let rows: Vec<MappingRow> = index
        .mappings()
        .iter()
        .map(|mapping| MappingRow {
            module: mapping.module_name.to_string(),
            annotations: mapping
                .annotations
                .iter()
                .map(|a| a.to_string())
                .collect::<Vec<_>>()
                .join("\n"),
            origin: mapping.origin.clone().unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    println!("{}", Table::new(rows));
    println!(
        "{} mappings, {} modules",
        index.len(),
        index.module_names().len()
    );
    Ok(())
}
