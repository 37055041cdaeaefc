//! Missing-Value Table
//!
//! Computes per-column missing-value counts and shares, keyed by column
//! name. Computed independently of the column summarizer but must agree
//! with it numerically.

use std::collections::HashMap;

use serde::Serialize;

use crate::table::Table;

/// Missing-value statistics for a single column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MissingStats {
    /// Count of missing values.
    pub missing_count: usize,
    /// `missing_count / n_rows`, or 0.0 for a zero-row table.
    pub missing_share: f64,
}

/// Per-column missing-value statistics, keyed by column name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MissingTable {
    entries: HashMap<String, MissingStats>,
}

impl MissingTable {
    /// Looks up the stats for a column by name.
    pub fn get(&self, name: &str) -> Option<&MissingStats> {
        self.entries.get(name)
    }

    /// Number of columns in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(column name, stats)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &MissingStats)> {
        self.entries.iter()
    }

    /// Mean missing share across all columns, 0.0 when there are none.
    pub fn average_missing_share(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let n = self.entries.len() as f64;
        self.entries.values().map(|s| s.missing_share).sum::<f64>() / n
    }
}

/// Computes missing-value statistics for every column of a table.
///
/// A zero-column table yields an empty [`MissingTable`]; a zero-row
/// table yields all-zero entries. Never fails on a well-formed table.
pub fn missing_table(table: &Table) -> MissingTable {
    let schema = table.schema();
    let n_rows = table.num_rows();

    let mut entries = HashMap::with_capacity(schema.fields().len());

    for (idx, field) in schema.fields().iter().enumerate() {
        let missing_count: usize = table
            .batches()
            .iter()
            .map(|batch| batch.column(idx).null_count())
            .sum();

        #[allow(clippy::cast_precision_loss)]
        let missing_share = if n_rows > 0 {
            missing_count as f64 / n_rows as f64
        } else {
            0.0
        };

        entries.insert(
            field.name().clone(),
            MissingStats {
                missing_count,
                missing_share,
            },
        );
    }

    MissingTable { entries }
}
