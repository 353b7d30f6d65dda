// SPDX-FileCopyrightText: 2026 Corvid Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Corvid agent runtime.

use thiserror::Error;

use crate::types::Origin;

/// The primary error type used across the Corvid dispatch pipeline and tools.
///
/// No error in this taxonomy crosses the registry boundary as a fault: the
/// registry converts every variant into a textual error result the calling
/// agent can reason about.
#[derive(Debug, Error)]
pub enum CorvidError {
    /// Configuration errors (invalid TOML, unknown access level, bad deny list).
    #[error("configuration error: {0}")]
    Config(String),

    /// Malformed call payload, or an unknown resource/action for a domain tool.
    #[error("{0}")]
    Validation(String),

    /// The call's origin is on the deny list for the requested tool.
    #[error("tool '{tool}' is not permitted for {origin}-origin requests")]
    PermissionDenied { tool: String, origin: Origin },

    /// The approval hook answered the request with a denial.
    #[error("approval denied for tool '{tool}'")]
    ApprovalDenied { tool: String },

    /// The caller's cancellation signal or deadline fired while waiting.
    #[error("request canceled before the operation completed")]
    Canceled,

    /// A tool-internal operation exceeded its own time budget.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// A backing engine or OS surface failed (process spawn, driver call).
    #[error("backend error: {message}")]
    Backend {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl CorvidError {
    /// Shorthand for a [`CorvidError::Backend`] without an underlying source.
    pub fn backend(message: impl Into<String>) -> Self {
        CorvidError::Backend {
            message: message.into(),
            source: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_denied_message_names_origin_and_tool() {
        let err = CorvidError::PermissionDenied {
            tool: "exec".to_string(),
            origin: Origin::Agent,
        };
        let msg = err.to_string();
        assert!(msg.contains("not permitted"));
        assert!(msg.contains("agent-origin"));
        assert!(msg.contains("'exec'"));
    }

    #[test]
    fn validation_message_passes_through() {
        let err = CorvidError::Validation("unknown action 'zap'".to_string());
        assert_eq!(err.to_string(), "unknown action 'zap'");
    }

    #[test]
    fn backend_shorthand_has_no_source() {
        let err = CorvidError::backend("browser driver unavailable");
        assert!(err.to_string().contains("browser driver unavailable"));
        match err {
            CorvidError::Backend { source, .. } => assert!(source.is_none()),
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
