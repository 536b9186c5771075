// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Trial-division primality testing.
//!
//! Intentionally naive: the divisor scan runs over the full `2..n`
//! range with no square-root cutoff. The exercised range is tiny, so
//! clarity wins over speed here.

#[cfg(test)]
#[path = "trial_tests.rs"]
mod tests;

/// Label printed for primes.
pub const PRIME_LABEL: &str = "prime!";

/// Label printed for composites.
pub const NOT_PRIME_LABEL: &str = "not prime";

/// Tests `n` for primality by trial division.
///
/// Returns `true` iff `n >= 2` and no integer in `2..n` divides `n`
/// evenly. For `n = 2` the divisor range is empty, so 2 is prime.
pub fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    for i in 2..n {
        if n % i == 0 {
            return false;
        }
    }
    true
}

/// Returns the report label for `n`.
pub fn label(n: u32) -> &'static str {
    if is_prime(n) {
        PRIME_LABEL
    } else {
        NOT_PRIME_LABEL
    }
}
