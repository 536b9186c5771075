// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! pm-core: Shared library for the primer CLI
//!
//! This crate provides the trial-division primality checker and the
//! range reporter used by the `primer` binary.

pub mod error;
pub mod report;
pub mod trial;

pub use error::{Error, Result};
pub use report::{write_report, RANGE_BOUND, RANGE_START};
pub use trial::{is_prime, label};
