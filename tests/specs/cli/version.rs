// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Version flag specs for `primer`.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::common::*;
use yare::parameterized;

#[parameterized(
    long = { "--version" },
    short = { "-v" },
    silent_alias = { "-V" },
)]
fn version_flag_outputs_version(flag: &str) {
    primer()
        .arg(flag)
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn v_and_version_produce_identical_output() {
    let short = primer().arg("-v").output().unwrap();
    let long = primer().arg("--version").output().unwrap();

    assert_eq!(short.stdout, long.stdout);
}

#[test]
fn version_flags_documented_in_help() {
    primer()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("-v, --version"));
}
