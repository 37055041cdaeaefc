//! Dataset profiling: column summaries, missing-value statistics, and
//! quality flags.
//!
//! The pipeline runs in dependency order: [`summarize`] scans the table
//! once and produces a [`DatasetSummary`]; [`missing_table`] computes an
//! independent per-column [`MissingTable`]; [`compute_quality_flags`]
//! consumes both and applies threshold heuristics to produce
//! [`QualityFlags`] with a composite score in `[0.0, 1.0]`.
//!
//! Every step is a pure function over the in-memory table: no I/O, no
//! shared state, fresh records on every call.
//!
//! # Example
//!
//! ```ignore
//! use perfilar::{compute_quality_flags, missing_table, summarize, Table};
//!
//! let table = Table::from_csv("data.csv")?;
//! let summary = summarize(&table);
//! let missing = missing_table(&table);
//! let flags = compute_quality_flags(&summary, &missing);
//! println!("quality score: {:.2}", flags.quality_score);
//! ```

// Statistical computation over table sizes
#![allow(clippy::cast_precision_loss)]

mod flags;
mod missing;
mod summary;


pub use flags::{compute_quality_flags, compute_quality_flags_with, QualityConfig, QualityFlags};
pub use missing::{missing_table, MissingStats, MissingTable};
pub use summary::{summarize, ColumnSummary, DatasetSummary};

pub(crate) use summary::{is_numeric_type, scalar_key};
