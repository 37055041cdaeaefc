//! Top-category frequency counts for categorical columns.
//!
//! For each non-numeric column, counts the occurrences of every
//! distinct non-missing value and keeps the most frequent ones. Ties on
//! count break toward the lexicographically smaller value, so the
//! output is fully deterministic.

use std::collections::HashMap;

use serde::Serialize;

use crate::{
    profile::{is_numeric_type, scalar_key},
    table::Table,
};

/// A single category value and its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    /// The category value, rendered as text.
    pub value: String,
    /// Number of rows holding this value.
    pub count: usize,
}

/// Counts the most frequent values of the leading categorical columns.
///
/// At most `max_columns` non-numeric columns participate, taken in
/// schema order; each maps to at most `top_k` entries sorted by count
/// descending, then value ascending. Missing values are never counted
/// as a category. Numeric columns are skipped and an all-missing column
/// maps to an empty list.
pub fn top_categories(
    table: &Table,
    max_columns: usize,
    top_k: usize,
) -> HashMap<String, Vec<CategoryCount>> {
    let schema = table.schema();
    let mut result = HashMap::new();

    let mut taken = 0usize;
    for (idx, field) in schema.fields().iter().enumerate() {
        if is_numeric_type(field.data_type()) {
            continue;
        }
        if taken >= max_columns {
            break;
        }
        taken += 1;

        let mut counts: HashMap<String, usize> = HashMap::new();
        for batch in table.batches() {
            let array = batch.column(idx);
            for i in 0..array.len() {
                if !array.is_null(i) {
                    *counts.entry(scalar_key(array.as_ref(), i)).or_insert(0) += 1;
                }
            }
        }

        let mut entries: Vec<CategoryCount> = counts
            .into_iter()
            .map(|(value, count)| CategoryCount { value, count })
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
        entries.truncate(top_k);

        result.insert(field.name().clone(), entries);
    }

    result
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use arrow::{
        array::{Int64Array, StringArray},
        datatypes::{DataType, Field, Schema},
        record_batch::RecordBatch,
    };

    use super::*;

    fn category_table() -> Table {
        let schema = Arc::new(Schema::new(vec![
            Field::new("id", DataType::Int64, false),
            Field::new("city", DataType::Utf8, true),
            Field::new("tier", DataType::Utf8, false),
        ]));
        let batch = RecordBatch::try_new(
            schema,
            vec![
                Arc::new(Int64Array::from(vec![1, 2, 3, 4, 5, 6])),
                Arc::new(StringArray::from(vec![
                    Some("lima"),
                    Some("quito"),
                    Some("lima"),
                    None,
                    Some("bogota"),
                    Some("lima"),
                ])),
                Arc::new(StringArray::from(vec!["a", "b", "a", "b", "c", "d"])),
            ],
        )
        .unwrap();
        Table::from_batch(batch).unwrap()
    }

    #[test]
    fn test_counts_and_ordering() {
        let cats = top_categories(&category_table(), 10, 10);

        // Numeric id column is skipped.
        assert!(!cats.contains_key("id"));
        assert_eq!(cats.len(), 2);

        let city = &cats["city"];
        assert_eq!(city[0], CategoryCount { value: "lima".into(), count: 3 });
        // Missing row is not a category.
        assert_eq!(city.iter().map(|c| c.count).sum::<usize>(), 5);
        // Ties break by value ascending.
        assert_eq!(city[1].value, "bogota");
        assert_eq!(city[2].value, "quito");
    }

    #[test]
    fn test_top_k_truncation() {
        let cats = top_categories(&category_table(), 10, 2);

        let tier = &cats["tier"];
        assert_eq!(tier.len(), 2);
        assert_eq!(tier[0], CategoryCount { value: "a".into(), count: 2 });
        assert_eq!(tier[1], CategoryCount { value: "b".into(), count: 2 });
    }

    #[test]
    fn test_max_columns_limit() {
        let cats = top_categories(&category_table(), 1, 10);

        // Only the first categorical column in schema order survives.
        assert_eq!(cats.len(), 1);
        assert!(cats.contains_key("city"));
    }

    #[test]
    fn test_all_missing_column_is_empty() {
        let schema = Arc::new(Schema::new(vec![Field::new("c", DataType::Utf8, true)]));
        let batch = RecordBatch::try_new(
            schema,
            vec![Arc::new(StringArray::from(vec![None::<&str>, None])) as _],
        )
        .unwrap();
        let cats = top_categories(&Table::from_batch(batch).unwrap(), 10, 10);

        assert_eq!(cats["c"], Vec::<CategoryCount>::new());
    }

    #[test]
    fn test_empty_table() {
        let cats = top_categories(&Table::empty(), 10, 10);
        assert!(cats.is_empty());
    }

    #[test]
    fn test_zero_limits() {
        let cats = top_categories(&category_table(), 0, 10);
        assert!(cats.is_empty());

        let cats = top_categories(&category_table(), 10, 0);
        assert!(cats["city"].is_empty());
        assert!(cats["tier"].is_empty());
    }
}
