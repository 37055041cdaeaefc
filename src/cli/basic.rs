//! Basic CLI commands for file inspection.

use std::path::{Path, PathBuf};

use crate::Table;

/// Load a table from a file path based on extension.
pub(crate) fn load_table(path: &PathBuf) -> crate::Result<Table> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    match ext {
        "parquet" => Table::from_parquet(path),
        "csv" => Table::from_csv(path),
        "json" | "jsonl" => Table::from_json(path),
        ext => Err(crate::Error::unsupported_format(ext)),
    }
}

/// Get format name from file extension.
pub(crate) fn get_format(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("parquet") => "Parquet",
        Some("csv") => "CSV",
        Some("json" | "jsonl") => "JSON",
        _ => "Unknown",
    }
}

/// Display basic file information.
pub(crate) fn cmd_info(path: &PathBuf) -> crate::Result<()> {
    let table = load_table(path)?;

    let file_size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);

    println!("File: {}", path.display());
    println!("Format: {}", get_format(path));
    println!("Rows: {}", table.num_rows());
    println!("Columns: {}", table.num_columns());
    println!("Size: {} bytes", file_size);

    Ok(())
}

/// Display the table schema.
pub(crate) fn cmd_schema(path: &PathBuf) -> crate::Result<()> {
    let table = load_table(path)?;
    let schema = table.schema();

    println!("Schema for {}:", path.display());
    println!();

    for (i, field) in schema.fields().iter().enumerate() {
        let nullable = if field.is_nullable() {
            "nullable"
        } else {
            "not null"
        };
        println!(
            "  {}: {} ({}) [{}]",
            i,
            field.name(),
            field.data_type(),
            nullable
        );
    }

    println!();
    println!("Total columns: {}", schema.fields().len());

    Ok(())
}
