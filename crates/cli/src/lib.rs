// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! pmrs - library behind the `primer` binary.
//!
//! `primer` reports trial-division primality for the fixed range 2
//! through 49, one line per integer:
//!
//! ```text
//! 2 prime!
//! 3 prime!
//! 4 not prime
//! ```
//!
//! The checker and reporter live in [`pm_core`]; this crate adds the
//! CLI surface and the [`run`] entry point.

mod cli;

pub use cli::Cli;
pub use pm_core::{Error, Result};

use std::io::Write;

use pm_core::{write_report, RANGE_BOUND, RANGE_START};

/// Write the fixed-range report to stdout.
///
/// This is the whole program: the equivalent of the original script's
/// top-level `loop(2, 50)` call, behind an explicit entry point.
pub fn run() -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    write_report(&mut out, RANGE_START, RANGE_BOUND)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
