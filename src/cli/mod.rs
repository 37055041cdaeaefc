//! perfilar CLI - Exploratory Data Profiling
//!
//! Command-line interface for profiling tabular files.

use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};

mod basic;
mod report;

/// perfilar - Exploratory Data Profiling in Pure Rust
#[derive(Parser)]
#[command(name = "perfilar")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display basic file information
    Info {
        /// Path to table file
        path: PathBuf,
    },
    /// Display the table schema
    Schema {
        /// Path to table file
        path: PathBuf,
    },
    /// Full exploratory overview: summary, missing values, correlation
    /// and top categories
    Overview {
        /// Path to table file
        path: PathBuf,
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
        /// Maximum categorical columns in the top-category section
        #[arg(long, default_value = "10")]
        max_cat_columns: usize,
        /// Values kept per categorical column
        #[arg(long, default_value = "10")]
        top_k: usize,
    },
    /// Quality flags and composite score
    Quality {
        /// Path to table file
        path: PathBuf,
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
        /// Minimum acceptable row count
        #[arg(long, default_value = "30")]
        min_rows: usize,
    },
}

/// Run the perfilar CLI.
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Info { path } => basic::cmd_info(&path),
        Commands::Schema { path } => basic::cmd_schema(&path),
        Commands::Overview {
            path,
            format,
            max_cat_columns,
            top_k,
        } => report::cmd_overview(&path, &format, max_cat_columns, top_k),
        Commands::Quality {
            path,
            format,
            min_rows,
        } => report::cmd_quality(&path, &format, min_rows),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
