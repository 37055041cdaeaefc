//! perfilar CLI entry point.

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::process::ExitCode;

fn main() -> ExitCode {
    perfilar::cli::run()
}
