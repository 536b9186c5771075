// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::Parser;

/// Command-line surface of `primer`.
///
/// The tool takes no operands: the range is fixed at 2..50. Only the
/// standard help and version flags are accepted.
#[derive(Parser, Debug)]
#[command(name = "primer")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Report trial-division primality for the integers 2 through 49")]
#[command(
    long_about = "Report trial-division primality for the integers 2 through 49.\n\n\
    Prints one line per integer: the number, a space, and either 'prime!' or 'not prime'."
)]
// Allow the unit type field pattern which is required for clap's ArgAction::Version
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
