//! JSON output helpers.
//!
//! Every reporting command prints exactly one pretty-printed JSON document on
//! stdout under `--json`, including failures. `run` and `logs` print nothing
//! of their own there; stdout belongs to the program they hand off to.

use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: bool,
    message: &'a str,
    code: u8,
}

/// `{"error": true, "message": ..., "code": ...}` for a failed command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: u8) -> Result<String> {
    to_pretty(&ErrorBody {
        error: true,
        message,
        code,
    })
}

/// Pretty-print any report.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn to_pretty<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("cannot encode JSON output")
}
