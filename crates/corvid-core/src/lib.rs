// SPDX-FileCopyrightText: 2026 Corvid Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Corvid agent runtime.
//!
//! This crate provides the foundational pieces the dispatch pipeline is
//! built from: the error taxonomy, the origin/trust model, the explicit
//! request context, and the boundary traits for external engines.

pub mod context;
pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use context::RequestContext;
pub use error::CorvidError;
pub use types::{AccessLevel, Origin, Platform, RequestId, SessionId};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_variants_are_constructible() {
        let _config = CorvidError::Config("test".into());
        let _validation = CorvidError::Validation("test".into());
        let _denied = CorvidError::PermissionDenied {
            tool: "exec".into(),
            origin: Origin::Agent,
        };
        let _approval = CorvidError::ApprovalDenied { tool: "exec".into() };
        let _canceled = CorvidError::Canceled;
        let _timeout = CorvidError::Timeout {
            duration: std::time::Duration::from_secs(30),
        };
        let _backend = CorvidError::backend("test");
        let _internal = CorvidError::Internal("test".into());
    }

    #[test]
    fn boundary_traits_are_object_safe() {
        fn _scheduler(_: &dyn traits::SchedulerBackend) {}
        fn _memory(_: &dyn traits::MemoryBackend) {}
        fn _browser(_: &dyn traits::BrowserDriver) {}
    }
}
