//! perfilar - Exploratory Data Profiling in Pure Rust
//!
//! One-shot exploratory diagnostics for in-memory tables: per-column
//! summaries, missing-value statistics, Pearson correlation, top
//! category counts, and a quality-flag engine with a composite score.
//!
//! # Design Principles
//!
//! 1. **Pure functions** - Every diagnostic is a fresh value computed
//!    from an immutable table; no caches, no shared state
//! 2. **Pure Rust** - No Python, no FFI
//! 3. **Zero-copy** - Arrow `RecordBatch` throughout
//! 4. **Ecosystem aligned** - Arrow 53, Parquet 53
//!
//! # Quick Start
//!
//! ```no_run
//! use perfilar::{compute_quality_flags, missing_table, summarize, Table};
//!
//! let table = Table::from_csv("data/train.csv").unwrap();
//!
//! let summary = summarize(&table);
//! let missing = missing_table(&table);
//! let flags = compute_quality_flags(&summary, &missing);
//!
//! println!("quality score: {:.2}", flags.quality_score);
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
// Allow common test patterns
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::cast_lossless,
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        clippy::cast_precision_loss,
        clippy::redundant_clone,
        clippy::too_many_lines,
        clippy::float_cmp,
        clippy::similar_names,
        clippy::unreadable_literal
    )
)]
// Allow some pedantic lints for cleaner code
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]
#![allow(clippy::map_unwrap_or)]

pub mod categories;
/// CLI module for command-line interface
#[cfg(feature = "cli")]
pub mod cli;
pub mod correlate;
pub mod error;
pub mod profile;
pub mod report;
pub mod table;

// Re-exports for convenience
// Re-export arrow types commonly needed
pub use arrow::{
    array::RecordBatch,
    datatypes::{Schema, SchemaRef},
};
pub use categories::{top_categories, CategoryCount};
pub use correlate::{correlation_matrix, CorrelationMatrix};
pub use error::{Error, Result};
pub use profile::{
    compute_quality_flags, compute_quality_flags_with, missing_table, summarize, ColumnSummary,
    DatasetSummary, MissingStats, MissingTable, QualityConfig, QualityFlags,
};
pub use report::{flatten_summary, SummaryRow};
pub use table::{CsvOptions, Table};
