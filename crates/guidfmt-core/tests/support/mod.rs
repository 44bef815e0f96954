// crates/guidfmt-core/tests/support/mod.rs
// ============================================================================
// Module: Test Support
// Description: Shared result helpers and a test-only GUID text reader.
// ============================================================================
//! ## Overview
//! Shared test helpers for consistent Result-based assertions, plus a reader
//! that undoes the field permutation so rendered text can be compared with
//! the stored bytes it came from.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    dead_code,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::error::Error;
use std::fmt;

// ========================================================================
// Test Result Helpers
// ========================================================================

/// Standard result type used across encoder integration tests.
pub type TestResult<T = ()> = Result<T, Box<dyn Error>>;

/// Lightweight error type for test assertions.
#[derive(Debug)]
struct TestError {
    /// Human-readable failure message.
    message: String,
}

impl TestError {
    /// Creates a new test error with the provided message.
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for TestError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl Error for TestError {}

/// Returns an error when a test condition fails.
///
/// # Errors
/// Returns a `TestError` when the condition is false.
pub fn ensure(condition: bool, message: impl Into<String>) -> TestResult {
    if condition { Ok(()) } else { Err(Box::new(TestError::new(message))) }
}

// ========================================================================
// Rendered Text Reader
// ========================================================================

/// Stored byte positions in the order their digits appear in the text.
const TEXT_ORDER: [usize; 16] = [3, 2, 1, 0, 5, 4, 7, 6, 8, 9, 10, 11, 12, 13, 14, 15];

/// Recovers the stored bytes from any rendered layout.
///
/// Brackets and hyphens are skipped; the remaining 32 digits are mapped back
/// through the field permutation.
///
/// # Errors
/// Returns a `TestError` when the text does not hold exactly 32 hex digits.
pub fn stored_bytes_from_text(text: &str) -> TestResult<[u8; 16]> {
    let digits: Vec<u8> = text.bytes().filter(u8::is_ascii_hexdigit).collect();
    ensure(digits.len() == 32, format!("expected 32 hex digits in {text}"))?;
    let mut stored = [0u8; 16];
    for (pair, position) in digits.chunks_exact(2).zip(TEXT_ORDER) {
        let pair = std::str::from_utf8(pair)?;
        stored[position] = u8::from_str_radix(pair, 16)?;
    }
    Ok(stored)
}
