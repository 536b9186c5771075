// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Range reporter: one classification line per integer.
//!
//! The original script recursed once per integer and stopped at a
//! hardcoded 50 regardless of the bound it was handed. This version
//! iterates and honors the bound parameter; at the fixed invocation
//! (`2..50`) the output is identical.

use std::io::Write;

use crate::error::Result;
use crate::trial;

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;

/// First integer tested by the fixed invocation.
pub const RANGE_START: u32 = 2;

/// Exclusive upper bound of the fixed invocation.
pub const RANGE_BOUND: u32 = 50;

/// Writes one line per integer in `start..bound`, ascending.
///
/// Each line is the decimal integer, a single space, and either
/// `prime!` or `not prime`, terminated by a newline. An empty range
/// writes nothing.
pub fn write_report<W: Write>(out: &mut W, start: u32, bound: u32) -> Result<()> {
    for n in start..bound {
        writeln!(out, "{} {}", n, trial::label(n))?;
    }
    Ok(())
}
