//! Quality Flag Engine
//!
//! Applies threshold heuristics to a [`DatasetSummary`] and
//! [`MissingTable`] and produces boolean flags plus a composite quality
//! score. The score starts at 1.0; each triggered heuristic subtracts a
//! fixed penalty from [`QualityConfig`]; the result is clamped to
//! `[0.0, 1.0]`.

use serde::Serialize;

use super::{missing::MissingTable, summary::DatasetSummary};

/// Thresholds and penalty magnitudes for the flag engine.
///
/// Every deduction the engine can apply is a named field here, so the
/// scoring policy is tunable and testable in isolation.
#[derive(Debug, Clone, PartialEq)]
pub struct QualityConfig {
    /// Minimum row count before the "too few rows" penalty applies
    /// (default: 30).
    pub min_rows: usize,
    /// Penalty when `n_rows < min_rows` (default: 0.2).
    pub too_few_rows_penalty: f64,
    /// Penalty when at least one constant column exists, applied once
    /// (default: 0.15).
    pub constant_column_penalty: f64,
    /// Penalty when at least one high-cardinality categorical exists,
    /// applied once (default: 0.15).
    pub high_cardinality_penalty: f64,
    /// Fraction of the row count used as the absolute unique-count
    /// threshold for the high-cardinality check (default: 0.5).
    pub high_cardinality_ratio: f64,
    /// Maximum acceptable mean missing share across columns
    /// (default: 0.2).
    pub max_average_missing_share: f64,
    /// Penalty when the mean missing share exceeds the maximum
    /// (default: 0.1).
    pub missing_share_penalty: f64,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            min_rows: 30,
            too_few_rows_penalty: 0.2,
            constant_column_penalty: 0.15,
            high_cardinality_penalty: 0.15,
            high_cardinality_ratio: 0.5,
            max_average_missing_share: 0.2,
            missing_share_penalty: 0.1,
        }
    }
}

/// Quality flags and composite score for a dataset.
///
/// Immutable value record; recomputed fully on every call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityFlags {
    /// True iff at least one column has `non_null > 0 && unique <= 1`.
    /// All-missing columns are exempt: they are empty, not constant,
    /// and their problem is already captured by the missing-data check.
    pub has_constant_columns: bool,
    /// True iff any non-numeric column has more distinct values than
    /// `high_cardinality_threshold`.
    pub has_high_cardinality_categoricals: bool,
    /// True iff the table has fewer rows than the configured minimum.
    pub has_too_few_rows: bool,
    /// True iff the mean missing share exceeds the configured maximum.
    pub has_high_missing_share: bool,
    /// Absolute unique-count threshold for the high-cardinality check
    /// (`high_cardinality_ratio * n_rows`, not a fraction).
    pub high_cardinality_threshold: f64,
    /// Mean missing share across all columns.
    pub average_missing_share: f64,
    /// Composite score in `[0.0, 1.0]`.
    pub quality_score: f64,
}

/// Computes quality flags with the default [`QualityConfig`].
pub fn compute_quality_flags(summary: &DatasetSummary, missing: &MissingTable) -> QualityFlags {
    compute_quality_flags_with(summary, missing, &QualityConfig::default())
}

/// Computes quality flags with an explicit configuration.
///
/// Pure function: no column at all means no structural flag can
/// trigger, and a zero-row table never divides by zero.
pub fn compute_quality_flags_with(
    summary: &DatasetSummary,
    missing: &MissingTable,
    config: &QualityConfig,
) -> QualityFlags {
    let mut penalties = 0.0;

    let has_too_few_rows = summary.n_rows < config.min_rows;
    if has_too_few_rows {
        penalties += config.too_few_rows_penalty;
    }

    // Constant: at least one non-missing value, at most one distinct.
    let has_constant_columns = summary
        .columns
        .iter()
        .any(|c| c.non_null > 0 && c.unique <= 1);
    if has_constant_columns {
        penalties += config.constant_column_penalty;
    }

    #[allow(clippy::cast_precision_loss)]
    let high_cardinality_threshold = config.high_cardinality_ratio * summary.n_rows as f64;
    #[allow(clippy::cast_precision_loss)]
    let has_high_cardinality_categoricals = summary
        .columns
        .iter()
        .any(|c| !c.is_numeric && c.unique as f64 > high_cardinality_threshold);
    if has_high_cardinality_categoricals {
        penalties += config.high_cardinality_penalty;
    }

    let average_missing_share = missing.average_missing_share();
    let has_high_missing_share = average_missing_share > config.max_average_missing_share;
    if has_high_missing_share {
        penalties += config.missing_share_penalty;
    }

    let quality_score = (1.0 - penalties).clamp(0.0, 1.0);

    QualityFlags {
        has_constant_columns,
        has_high_cardinality_categoricals,
        has_too_few_rows,
        has_high_missing_share,
        high_cardinality_threshold,
        average_missing_share,
        quality_score,
    }
}
