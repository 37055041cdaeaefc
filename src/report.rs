//! Text rendering of profiling results.
//!
//! Flattens profiling records into row-per-column form and renders
//! aligned text tables for the CLI. Rendering is deterministic: maps
//! are sorted by column name before printing.

use std::collections::HashMap;
use std::fmt::Write as _;

use serde::Serialize;

use crate::{
    categories::CategoryCount,
    correlate::CorrelationMatrix,
    profile::{DatasetSummary, MissingTable, QualityFlags},
};

/// One row of a flattened dataset summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    /// Column name.
    pub column: String,
    /// Count of non-missing values.
    pub non_null: usize,
    /// Count of distinct non-missing values.
    pub unique: usize,
    /// Whether the column is numeric.
    pub is_numeric: bool,
    /// Share of missing values.
    pub missing_share: f64,
}

/// Flattens a summary into row-per-column records, in schema order.
pub fn flatten_summary(summary: &DatasetSummary) -> Vec<SummaryRow> {
    summary
        .columns
        .iter()
        .map(|c| SummaryRow {
            column: c.name.clone(),
            non_null: c.non_null,
            unique: c.unique,
            is_numeric: c.is_numeric,
            missing_share: c.missing_share,
        })
        .collect()
}

/// Renders a dataset summary as an aligned text table.
pub fn render_summary(summary: &DatasetSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Rows: {}", summary.n_rows);
    let _ = writeln!(out, "Columns: {}", summary.n_cols);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<20} {:<10} {:<10} {:<8} {:<10}",
        "COLUMN", "NON-NULL", "UNIQUE", "TYPE", "MISSING %"
    );
    let _ = writeln!(out, "{}", "-".repeat(60));

    for row in flatten_summary(summary) {
        let kind = if row.is_numeric { "num" } else { "cat" };
        let _ = writeln!(
            out,
            "{:<20} {:<10} {:<10} {:<8} {:<10.2}",
            row.column,
            row.non_null,
            row.unique,
            kind,
            row.missing_share * 100.0
        );
    }

    out
}

/// Renders per-column missing-value statistics, sorted by column name.
pub fn render_missing(missing: &MissingTable) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<20} {:<10} {:<10}", "COLUMN", "MISSING", "SHARE %");
    let _ = writeln!(out, "{}", "-".repeat(42));

    let mut entries: Vec<_> = missing.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    for (name, stats) in entries {
        let _ = writeln!(
            out,
            "{:<20} {:<10} {:<10.2}",
            name,
            stats.missing_count,
            stats.missing_share * 100.0
        );
    }

    out
}

/// Renders a correlation matrix as an aligned text table.
///
/// Column headers are truncated to keep the grid readable.
pub fn render_correlation(matrix: &CorrelationMatrix) -> String {
    let mut out = String::new();
    if matrix.is_empty() {
        let _ = writeln!(out, "No numeric columns.");
        return out;
    }

    let _ = write!(out, "{:<20}", "");
    for name in &matrix.columns {
        let _ = write!(out, " {:>10}", truncate(name, 10));
    }
    let _ = writeln!(out);

    for (i, name) in matrix.columns.iter().enumerate() {
        let _ = write!(out, "{:<20}", truncate(name, 20));
        for value in &matrix.values[i] {
            let _ = write!(out, " {value:>10.3}");
        }
        let _ = writeln!(out);
    }

    out
}

/// Renders top-category counts, sorted by column name.
pub fn render_categories(categories: &HashMap<String, Vec<CategoryCount>>) -> String {
    let mut out = String::new();

    let mut names: Vec<_> = categories.keys().collect();
    names.sort();

    for name in names {
        let _ = writeln!(out, "{name}:");
        let entries = &categories[name];
        if entries.is_empty() {
            let _ = writeln!(out, "  (no values)");
            continue;
        }
        for entry in entries {
            let _ = writeln!(out, "  {:<20} {}", entry.value, entry.count);
        }
    }

    out
}

/// Renders quality flags and the composite score.
pub fn render_flags(flags: &QualityFlags) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Quality Score: {:.2}", flags.quality_score);
    let _ = writeln!(out);
    let _ = writeln!(out, "{:<35} {}", "Constant columns:", mark(flags.has_constant_columns));
    let _ = writeln!(
        out,
        "{:<35} {}",
        "High-cardinality categoricals:",
        mark(flags.has_high_cardinality_categoricals)
    );
    let _ = writeln!(out, "{:<35} {}", "Too few rows:", mark(flags.has_too_few_rows));
    let _ = writeln!(
        out,
        "{:<35} {}",
        "High missing share:",
        mark(flags.has_high_missing_share)
    );
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "High-cardinality threshold: {:.1}",
        flags.high_cardinality_threshold
    );
    let _ = writeln!(
        out,
        "Average missing share: {:.2}%",
        flags.average_missing_share * 100.0
    );
    out
}

fn mark(flag: bool) -> &'static str {
    if flag {
        "\u{2717} yes"
    } else {
        "\u{2713} no"
    }
}

// Cuts on a char boundary; column names are not guaranteed ASCII.
fn truncate(s: &str, max: usize) -> &str {
    s.char_indices().nth(max).map_or(s, |(i, _)| &s[..i])
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use arrow::{
        array::{Float64Array, StringArray},
        datatypes::{DataType, Field, Schema},
        record_batch::RecordBatch,
    };

    use super::*;
    use crate::{
        categories::top_categories,
        correlate::correlation_matrix,
        profile::{compute_quality_flags, missing_table, summarize},
        table::Table,
    };

    fn table() -> Table {
        let schema = Arc::new(Schema::new(vec![
            Field::new("score", DataType::Float64, true),
            Field::new("group", DataType::Utf8, true),
        ]));
        let batch = RecordBatch::try_new(
            schema,
            vec![
                Arc::new(Float64Array::from(vec![Some(1.0), Some(2.0), None])),
                Arc::new(StringArray::from(vec![Some("a"), Some("a"), Some("b")])),
            ],
        )
        .unwrap();
        Table::from_batch(batch).unwrap()
    }

    #[test]
    fn test_flatten_preserves_order_and_values() {
        let summary = summarize(&table());
        let rows = flatten_summary(&summary);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].column, "score");
        assert_eq!(rows[0].non_null, 2);
        assert!(rows[0].is_numeric);
        assert_eq!(rows[1].column, "group");
        assert_eq!(rows[1].unique, 2);
    }

    #[test]
    fn test_render_summary_contains_columns() {
        let text = render_summary(&summarize(&table()));

        assert!(text.contains("Rows: 3"));
        assert!(text.contains("Columns: 2"));
        assert!(text.contains("score"));
        assert!(text.contains("group"));
        assert!(text.contains("COLUMN"));
    }

    #[test]
    fn test_render_missing_sorted() {
        let text = render_missing(&missing_table(&table()));

        let group_pos = text.find("group").unwrap();
        let score_pos = text.find("score").unwrap();
        assert!(group_pos < score_pos);
    }

    #[test]
    fn test_render_correlation_empty() {
        let schema = Arc::new(Schema::new(vec![Field::new("s", DataType::Utf8, false)]));
        let batch = RecordBatch::try_new(
            schema,
            vec![Arc::new(StringArray::from(vec!["x"])) as _],
        )
        .unwrap();
        let matrix = correlation_matrix(&Table::from_batch(batch).unwrap());

        assert!(render_correlation(&matrix).contains("No numeric columns"));
    }

    #[test]
    fn test_render_correlation_diagonal() {
        let text = render_correlation(&correlation_matrix(&table()));
        assert!(text.contains("score"));
        assert!(text.contains("1.000"));
    }

    #[test]
    fn test_render_correlation_non_ascii_names() {
        let schema = Arc::new(Schema::new(vec![
            Field::new("correlación_total", DataType::Float64, false),
            Field::new("año", DataType::Float64, false),
        ]));
        let batch = RecordBatch::try_new(
            schema,
            vec![
                Arc::new(Float64Array::from(vec![1.0, 2.0, 3.0])),
                Arc::new(Float64Array::from(vec![2.0, 4.0, 6.0])),
            ],
        )
        .unwrap();
        let matrix = correlation_matrix(&Table::from_batch(batch).unwrap());

        let text = render_correlation(&matrix);
        assert!(text.contains("año"));
        assert!(text.contains("1.000"));
    }

    #[test]
    fn test_truncate_char_boundary() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("correlación_total", 10), "correlació");
        assert_eq!(truncate("ñññ", 2), "ññ");
    }

    #[test]
    fn test_render_categories() {
        let cats = top_categories(&table(), 10, 10);
        let text = render_categories(&cats);

        assert!(text.contains("group:"));
        assert!(text.contains('a'));
    }

    #[test]
    fn test_render_flags() {
        let t = table();
        let flags = compute_quality_flags(&summarize(&t), &missing_table(&t));
        let text = render_flags(&flags);

        assert!(text.contains("Quality Score:"));
        assert!(text.contains("Too few rows:"));
        assert!(text.contains("\u{2717} yes"));
    }
}
