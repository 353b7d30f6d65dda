// SPDX-FileCopyrightText: 2026 Corvid Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Payload field extraction shared by the built-in tools.

use corvid_core::CorvidError;
use serde_json::Value;

/// A required string field. Missing or non-string is a validation error.
pub fn required_str<'a>(input: &'a Value, key: &str) -> Result<&'a str, CorvidError> {
    input
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| CorvidError::Validation(format!("missing required '{key}' parameter")))
}

/// An optional string field; absent and non-string both read as `None`.
pub fn optional_str<'a>(input: &'a Value, key: &str) -> Option<&'a str> {
    input.get(key).and_then(Value::as_str)
}

/// An optional unsigned integer field.
pub fn optional_u64(input: &Value, key: &str) -> Option<u64> {
    input.get(key).and_then(Value::as_u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_str_present_and_missing() {
        let input = serde_json::json!({"path": "/tmp/x", "count": 3});
        assert_eq!(required_str(&input, "path").unwrap(), "/tmp/x");

        let err = required_str(&input, "content").unwrap_err();
        assert!(err.to_string().contains("'content'"));

        // Wrong type reads as missing.
        assert!(required_str(&input, "count").is_err());
    }

    #[test]
    fn optional_fields_read_as_none_when_absent() {
        let input = serde_json::json!({"limit": 5});
        assert_eq!(optional_str(&input, "query"), None);
        assert_eq!(optional_u64(&input, "limit"), Some(5));
        assert_eq!(optional_u64(&input, "offset"), None);
    }
}
