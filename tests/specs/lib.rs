// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end specs for the `primer` CLI.

#[cfg(test)]
mod cli;
