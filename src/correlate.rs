//! Pairwise Pearson correlation over numeric columns.
//!
//! Builds a symmetric correlation matrix from the numeric columns of a
//! table. Missing values are handled by pairwise deletion: each cell is
//! computed over the rows where both columns are present. Degenerate
//! pairs (fewer than two shared observations, or zero variance on
//! either side) report 0.0 rather than NaN, so the matrix is always
//! finite.
//!
//! # Example
//!
//! ```ignore
//! use perfilar::{correlation_matrix, Table};
//!
//! let table = Table::from_csv("data.csv")?;
//! let matrix = correlation_matrix(&table);
//! if let Some(r) = matrix.get("age", "income") {
//!     println!("age/income: {r:.3}");
//! }
//! ```

// Statistical computation requires casts and similar variable names
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]

use arrow::array::{
    Array, Float32Array, Float64Array, Int16Array, Int32Array, Int64Array, Int8Array, UInt16Array,
    UInt32Array, UInt64Array, UInt8Array,
};
use serde::Serialize;

use crate::{profile::is_numeric_type, table::Table};

/// Symmetric Pearson correlation matrix over the numeric columns of a
/// table.
///
/// `columns` lists the participating column names in schema order;
/// `values[i][j]` is the coefficient between `columns[i]` and
/// `columns[j]`. Every entry is finite; the diagonal is exactly 1.0 for
/// any column with at least one observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    /// Numeric column names, in schema order.
    pub columns: Vec<String>,
    /// Row-major coefficient matrix, `columns.len()` square.
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Looks up the coefficient for a pair of columns by name.
    ///
    /// Returns `None` if either column is not part of the matrix.
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == a)?;
        let j = self.columns.iter().position(|c| c == b)?;
        Some(self.values[i][j])
    }

    /// Number of columns in the matrix.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the table had no numeric columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Computes the Pearson correlation matrix over all numeric columns.
///
/// Columns with a non-numeric declared type are skipped entirely. A
/// table with no numeric columns yields an empty matrix.
pub fn correlation_matrix(table: &Table) -> CorrelationMatrix {
    let schema = table.schema();

    let mut columns = Vec::new();
    let mut series: Vec<Vec<Option<f64>>> = Vec::new();

    for (idx, field) in schema.fields().iter().enumerate() {
        if !is_numeric_type(field.data_type()) {
            continue;
        }
        columns.push(field.name().clone());

        let mut values = Vec::with_capacity(table.num_rows());
        for batch in table.batches() {
            let array = batch.column(idx);
            for i in 0..array.len() {
                if array.is_null(i) {
                    values.push(None);
                } else {
                    values.push(numeric_value(array.as_ref(), i));
                }
            }
        }
        series.push(values);
    }

    let n = columns.len();
    let mut values = vec![vec![0.0; n]; n];

    for i in 0..n {
        // A column with no observations correlates with nothing, itself
        // included.
        if series[i].iter().any(Option::is_some) {
            values[i][i] = 1.0;
        }
        for j in (i + 1)..n {
            let r = pearson(&series[i], &series[j]);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    CorrelationMatrix { columns, values }
}

/// Pearson coefficient over the rows where both series are present.
///
/// Returns 0.0 for fewer than two shared observations or when either
/// side has zero variance.
fn pearson(xs: &[Option<f64>], ys: &[Option<f64>]) -> f64 {
    let pairs: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys.iter())
        .filter_map(|(x, y)| match (x, y) {
            (Some(x), Some(y)) => Some((*x, *y)),
            _ => None,
        })
        .collect();

    if pairs.len() < 2 {
        return 0.0;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        return 0.0;
    }
    cov / denom
}

/// Extracts the value at `idx` as f64 for any integer or float array.
fn numeric_value(array: &dyn Array, idx: usize) -> Option<f64> {
    if let Some(a) = array.as_any().downcast_ref::<Float64Array>() {
        Some(a.value(idx))
    } else if let Some(a) = array.as_any().downcast_ref::<Float32Array>() {
        Some(f64::from(a.value(idx)))
    } else if let Some(a) = array.as_any().downcast_ref::<Int8Array>() {
        Some(f64::from(a.value(idx)))
    } else if let Some(a) = array.as_any().downcast_ref::<Int16Array>() {
        Some(f64::from(a.value(idx)))
    } else if let Some(a) = array.as_any().downcast_ref::<Int32Array>() {
        Some(f64::from(a.value(idx)))
    } else if let Some(a) = array.as_any().downcast_ref::<Int64Array>() {
        Some(a.value(idx) as f64)
    } else if let Some(a) = array.as_any().downcast_ref::<UInt8Array>() {
        Some(f64::from(a.value(idx)))
    } else if let Some(a) = array.as_any().downcast_ref::<UInt16Array>() {
        Some(f64::from(a.value(idx)))
    } else if let Some(a) = array.as_any().downcast_ref::<UInt32Array>() {
        Some(f64::from(a.value(idx)))
    } else if let Some(a) = array.as_any().downcast_ref::<UInt64Array>() {
        Some(a.value(idx) as f64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use arrow::{
        array::{Float64Array, Int64Array, StringArray},
        datatypes::{DataType, Field, Schema},
        record_batch::RecordBatch,
    };

    use super::*;

    fn numeric_table() -> Table {
        let schema = Arc::new(Schema::new(vec![
            Field::new("x", DataType::Int64, true),
            Field::new("y", DataType::Float64, true),
            Field::new("label", DataType::Utf8, true),
        ]));
        let batch = RecordBatch::try_new(
            schema,
            vec![
                Arc::new(Int64Array::from(vec![1, 2, 3, 4, 5])),
                Arc::new(Float64Array::from(vec![2.0, 4.0, 6.0, 8.0, 10.0])),
                Arc::new(StringArray::from(vec!["a", "b", "c", "d", "e"])),
            ],
        )
        .unwrap();
        Table::from_batch(batch).unwrap()
    }

    #[test]
    fn test_perfect_positive_correlation() {
        let matrix = correlation_matrix(&numeric_table());

        assert_eq!(matrix.columns, vec!["x", "y"]);
        assert!((matrix.get("x", "y").unwrap() - 1.0).abs() < 1e-12);
        assert_eq!(matrix.get("x", "x"), Some(1.0));
        // Text columns never participate.
        assert!(matrix.get("x", "label").is_none());
    }

    #[test]
    fn test_perfect_negative_correlation() {
        let schema = Arc::new(Schema::new(vec![
            Field::new("up", DataType::Float64, false),
            Field::new("down", DataType::Float64, false),
        ]));
        let batch = RecordBatch::try_new(
            schema,
            vec![
                Arc::new(Float64Array::from(vec![1.0, 2.0, 3.0, 4.0])),
                Arc::new(Float64Array::from(vec![8.0, 6.0, 4.0, 2.0])),
            ],
        )
        .unwrap();
        let matrix = correlation_matrix(&Table::from_batch(batch).unwrap());

        assert!((matrix.get("up", "down").unwrap() + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_matrix_is_symmetric() {
        let matrix = correlation_matrix(&numeric_table());
        for i in 0..matrix.len() {
            for j in 0..matrix.len() {
                assert!((matrix.values[i][j] - matrix.values[j][i]).abs() < 1e-12);
                assert!(matrix.values[i][j].is_finite());
                assert!(matrix.values[i][j].abs() <= 1.0 + 1e-12);
            }
        }
    }

    #[test]
    fn test_pairwise_deletion() {
        let schema = Arc::new(Schema::new(vec![
            Field::new("a", DataType::Float64, true),
            Field::new("b", DataType::Float64, true),
        ]));
        // Rows 1 and 3 are incomplete; the shared rows are (1,2), (3,6),
        // (5,10), still perfectly correlated.
        let batch = RecordBatch::try_new(
            schema,
            vec![
                Arc::new(Float64Array::from(vec![
                    Some(1.0),
                    None,
                    Some(3.0),
                    Some(4.0),
                    Some(5.0),
                ])),
                Arc::new(Float64Array::from(vec![
                    Some(2.0),
                    Some(9.0),
                    Some(6.0),
                    None,
                    Some(10.0),
                ])),
            ],
        )
        .unwrap();
        let matrix = correlation_matrix(&Table::from_batch(batch).unwrap());

        assert!((matrix.get("a", "b").unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_variance_yields_zero() {
        let schema = Arc::new(Schema::new(vec![
            Field::new("constant", DataType::Float64, false),
            Field::new("varying", DataType::Float64, false),
        ]));
        let batch = RecordBatch::try_new(
            schema,
            vec![
                Arc::new(Float64Array::from(vec![7.0, 7.0, 7.0])),
                Arc::new(Float64Array::from(vec![1.0, 2.0, 3.0])),
            ],
        )
        .unwrap();
        let matrix = correlation_matrix(&Table::from_batch(batch).unwrap());

        assert_eq!(matrix.get("constant", "varying"), Some(0.0));
        // Diagonal stays 1.0 even for a constant column.
        assert_eq!(matrix.get("constant", "constant"), Some(1.0));
    }

    #[test]
    fn test_too_few_observations_yields_zero() {
        let schema = Arc::new(Schema::new(vec![
            Field::new("a", DataType::Float64, true),
            Field::new("b", DataType::Float64, true),
        ]));
        let batch = RecordBatch::try_new(
            schema,
            vec![
                Arc::new(Float64Array::from(vec![Some(1.0), None])),
                Arc::new(Float64Array::from(vec![Some(2.0), Some(3.0)])),
            ],
        )
        .unwrap();
        let matrix = correlation_matrix(&Table::from_batch(batch).unwrap());

        assert_eq!(matrix.get("a", "b"), Some(0.0));
    }

    #[test]
    fn test_all_null_column_diagonal() {
        let schema = Arc::new(Schema::new(vec![
            Field::new("empty", DataType::Float64, true),
            Field::new("full", DataType::Float64, false),
        ]));
        let batch = RecordBatch::try_new(
            schema,
            vec![
                Arc::new(Float64Array::from(vec![None::<f64>, None])),
                Arc::new(Float64Array::from(vec![1.0, 2.0])),
            ],
        )
        .unwrap();
        let matrix = correlation_matrix(&Table::from_batch(batch).unwrap());

        assert_eq!(matrix.get("empty", "empty"), Some(0.0));
        assert_eq!(matrix.get("full", "full"), Some(1.0));
        assert_eq!(matrix.get("empty", "full"), Some(0.0));
    }

    #[test]
    fn test_no_numeric_columns() {
        let schema = Arc::new(Schema::new(vec![Field::new("s", DataType::Utf8, false)]));
        let batch = RecordBatch::try_new(
            schema,
            vec![Arc::new(StringArray::from(vec!["a", "b"])) as _],
        )
        .unwrap();
        let matrix = correlation_matrix(&Table::from_batch(batch).unwrap());

        assert!(matrix.is_empty());
        assert!(matrix.values.is_empty());
    }

    #[test]
    fn test_empty_table() {
        let matrix = correlation_matrix(&Table::empty());
        assert!(matrix.is_empty());
    }
}
