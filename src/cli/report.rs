//! Profiling report CLI commands.

use std::path::PathBuf;

use crate::{
    categories::top_categories,
    correlate::correlation_matrix,
    profile::{compute_quality_flags_with, missing_table, summarize, QualityConfig},
    report,
};

use super::basic::load_table;

/// Full exploratory overview of a table file.
pub(crate) fn cmd_overview(
    path: &PathBuf,
    format: &str,
    max_cat_columns: usize,
    top_k: usize,
) -> crate::Result<()> {
    let table = load_table(path)?;

    let summary = summarize(&table);
    let missing = missing_table(&table);
    let matrix = correlation_matrix(&table);
    let categories = top_categories(&table, max_cat_columns, top_k);

    if format == "json" {
        let json = serde_json::json!({
            "path": path.display().to_string(),
            "rows": summary.n_rows,
            "columns": summary.n_cols,
            "summary": report::flatten_summary(&summary),
            "missing": missing.iter().map(|(name, stats)| {
                serde_json::json!({
                    "column": name,
                    "missing_count": stats.missing_count,
                    "missing_share": stats.missing_share,
                })
            }).collect::<Vec<_>>(),
            "correlation": matrix,
            "top_categories": categories,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&json).map_err(|e| crate::Error::Format(e.to_string()))?
        );
    } else {
        println!("Exploratory Overview");
        println!("====================");
        println!("File: {}", path.display());
        println!();
        println!("{}", report::render_summary(&summary));
        println!("Missing Values");
        println!("--------------");
        println!("{}", report::render_missing(&missing));
        println!("Correlation (Pearson)");
        println!("---------------------");
        println!("{}", report::render_correlation(&matrix));
        println!("Top Categories");
        println!("--------------");
        println!("{}", report::render_categories(&categories));
    }

    Ok(())
}

/// Quality flags and composite score for a table file.
pub(crate) fn cmd_quality(path: &PathBuf, format: &str, min_rows: usize) -> crate::Result<()> {
    let table = load_table(path)?;

    let summary = summarize(&table);
    let missing = missing_table(&table);
    let config = QualityConfig {
        min_rows,
        ..QualityConfig::default()
    };
    let flags = compute_quality_flags_with(&summary, &missing, &config);

    if format == "json" {
        let json = serde_json::json!({
            "path": path.display().to_string(),
            "rows": summary.n_rows,
            "columns": summary.n_cols,
            "flags": flags,
            "column_summaries": summary.columns.iter().map(|c| {
                serde_json::json!({
                    "column": c.name,
                    "non_null": c.non_null,
                    "unique": c.unique,
                    "is_numeric": c.is_numeric,
                    "missing_share": c.missing_share,
                })
            }).collect::<Vec<_>>(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&json).map_err(|e| crate::Error::Format(e.to_string()))?
        );
    } else {
        println!("Data Quality Report");
        println!("===================");
        println!("File: {}", path.display());
        println!("Rows: {}", summary.n_rows);
        println!("Columns: {}", summary.n_cols);
        println!();
        println!("{}", report::render_flags(&flags));
    }

    Ok(())
}
