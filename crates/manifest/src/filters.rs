// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Custom template filters
//!
//! - `b64encode`: base64-encode a value for Secret `data` fields
//! - `b64decode`: inverse of `b64encode`
//!
//! The filters are thin wrappers over [`encode`] and [`decode`], which are
//! plain functions so they can be used and tested without an engine.

use base64::{engine::general_purpose::STANDARD, Engine};
use minijinja::{Error, ErrorKind, Value};

/// Marker produced for an absent value.
pub const EMPTY: &str = "";

/// Base64-encode a string; `None` yields [`EMPTY`].
pub fn encode(value: Option<&str>) -> String {
    match value {
        Some(s) => STANDARD.encode(s.as_bytes()),
        None => EMPTY.to_string(),
    }
}

/// Decode base64 text back to a UTF-8 string.
pub fn decode(text: &str) -> Result<String, String> {
    let bytes = STANDARD.decode(text).map_err(|e| format!("base64 decode error: {}", e))?;
    String::from_utf8(bytes).map_err(|e| format!("base64 decode produced invalid UTF-8: {}", e))
}

/// Base64 encode filter
///
/// Usage: `{{ hf_token | b64encode }}`
pub fn b64encode(value: Value) -> String {
    if value.is_none() || value.is_undefined() {
        return encode(None);
    }
    match value.as_str() {
        Some(s) => encode(Some(s)),
        None => encode(Some(&value.to_string())),
    }
}

/// Base64 decode filter
///
/// Usage: `{{ encoded | b64decode }}`
pub fn b64decode(value: &str) -> Result<String, Error> {
    decode(value).map_err(|msg| Error::new(ErrorKind::InvalidOperation, msg))
}

#[cfg(test)]
#[path = "filters_tests.rs"]
mod tests;
