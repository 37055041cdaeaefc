//! Column Summarizer
//!
//! Scans a table once and produces descriptive statistics for every
//! column: row count, non-null count, distinct-value count, numeric
//! classification, and missing share.

use std::collections::HashSet;

use arrow::array::{
    Array, BooleanArray, Date32Array, Date64Array, DictionaryArray, Float32Array, Float64Array,
    Int16Array, Int32Array, Int64Array, Int8Array, LargeStringArray, StringArray, UInt16Array,
    UInt32Array, UInt64Array, UInt8Array,
};
use arrow::datatypes::{DataType, Int32Type};
use arrow::util::display::array_value_to_string;
use serde::Serialize;

use crate::table::Table;

/// Descriptive statistics for a single column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    /// Column name, unique within a summary.
    pub name: String,
    /// Total row count (equal to the dataset row count).
    pub n_rows: usize,
    /// Count of non-missing values.
    pub non_null: usize,
    /// Count of distinct non-missing values. An all-missing column
    /// reports 0, never an implicit single value.
    pub unique: usize,
    /// Whether the declared element type is an integer or float kind.
    /// Boolean, date, text and dictionary columns are non-numeric.
    pub is_numeric: bool,
    /// `(n_rows - non_null) / n_rows`, or 0.0 for a zero-row column.
    pub missing_share: f64,
}

impl ColumnSummary {
    /// Count of missing values.
    pub fn missing_count(&self) -> usize {
        self.n_rows - self.non_null
    }
}

/// Aggregated summaries for a whole table.
///
/// `columns` preserves the original column order; `n_cols` always
/// equals `columns.len()`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    /// Total row count.
    pub n_rows: usize,
    /// Total column count.
    pub n_cols: usize,
    /// Per-column summaries, in schema order.
    pub columns: Vec<ColumnSummary>,
}

impl DatasetSummary {
    /// Looks up a column summary by name.
    pub fn column(&self, name: &str) -> Option<&ColumnSummary> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// Summarizes every column of a table in a single scan.
///
/// Output order matches the input column order. A zero-row table yields
/// summaries with `non_null == 0`, `unique == 0` and
/// `missing_share == 0.0`; a zero-column table yields an empty list.
pub fn summarize(table: &Table) -> DatasetSummary {
    let schema = table.schema();
    let n_rows = table.num_rows();

    let mut columns = Vec::with_capacity(schema.fields().len());

    for (idx, field) in schema.fields().iter().enumerate() {
        let mut non_null = 0usize;
        let mut distinct: HashSet<String> = HashSet::new();

        for batch in table.batches() {
            let array = batch.column(idx);
            non_null += array.len() - array.null_count();

            for i in 0..array.len() {
                if !array.is_null(i) {
                    distinct.insert(scalar_key(array.as_ref(), i));
                }
            }
        }

        let missing_share = if n_rows > 0 {
            (n_rows - non_null) as f64 / n_rows as f64
        } else {
            0.0
        };

        columns.push(ColumnSummary {
            name: field.name().clone(),
            n_rows,
            non_null,
            unique: distinct.len(),
            is_numeric: is_numeric_type(field.data_type()),
            missing_share,
        });
    }

    DatasetSummary {
        n_rows,
        n_cols: columns.len(),
        columns,
    }
}

/// Classifies a declared Arrow type as numeric.
///
/// Only integer and floating-point kinds count. Boolean and date
/// columns are deliberately non-numeric so they participate in the
/// high-cardinality categorical check.
pub(crate) fn is_numeric_type(data_type: &DataType) -> bool {
    matches!(
        data_type,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float16
            | DataType::Float32
            | DataType::Float64
    )
}

/// Produces a hashable key for the non-null value at `idx`.
///
/// Equality of keys is equality of values. Common types go through
/// direct downcasts; everything else (timestamps, decimals, nested
/// types) renders through Arrow's display formatter so distinct values
/// always yield distinct keys.
pub(crate) fn scalar_key(array: &dyn Array, idx: usize) -> String {
    if let Some(a) = array.as_any().downcast_ref::<StringArray>() {
        a.value(idx).to_string()
    } else if let Some(a) = array.as_any().downcast_ref::<LargeStringArray>() {
        a.value(idx).to_string()
    } else if let Some(a) = array.as_any().downcast_ref::<Int8Array>() {
        a.value(idx).to_string()
    } else if let Some(a) = array.as_any().downcast_ref::<Int16Array>() {
        a.value(idx).to_string()
    } else if let Some(a) = array.as_any().downcast_ref::<Int32Array>() {
        a.value(idx).to_string()
    } else if let Some(a) = array.as_any().downcast_ref::<Int64Array>() {
        a.value(idx).to_string()
    } else if let Some(a) = array.as_any().downcast_ref::<UInt8Array>() {
        a.value(idx).to_string()
    } else if let Some(a) = array.as_any().downcast_ref::<UInt16Array>() {
        a.value(idx).to_string()
    } else if let Some(a) = array.as_any().downcast_ref::<UInt32Array>() {
        a.value(idx).to_string()
    } else if let Some(a) = array.as_any().downcast_ref::<UInt64Array>() {
        a.value(idx).to_string()
    } else if let Some(a) = array.as_any().downcast_ref::<Float32Array>() {
        a.value(idx).to_string()
    } else if let Some(a) = array.as_any().downcast_ref::<Float64Array>() {
        a.value(idx).to_string()
    } else if let Some(a) = array.as_any().downcast_ref::<BooleanArray>() {
        a.value(idx).to_string()
    } else if let Some(a) = array.as_any().downcast_ref::<Date32Array>() {
        a.value(idx).to_string()
    } else if let Some(a) = array.as_any().downcast_ref::<Date64Array>() {
        a.value(idx).to_string()
    } else if let Some(a) = array.as_any().downcast_ref::<DictionaryArray<Int32Type>>() {
        let key = usize::try_from(a.keys().value(idx)).unwrap_or(0);
        if let Some(values) = a.values().as_any().downcast_ref::<StringArray>() {
            values.value(key).to_string()
        } else {
            key.to_string()
        }
    } else {
        array_value_to_string(array, idx).unwrap_or_else(|_| "?".to_string())
    }
}
