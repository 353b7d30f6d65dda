// SPDX-FileCopyrightText: 2026 Corvid Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scripted approval hooks for pipeline tests.

use std::sync::Mutex;

use async_trait::async_trait;
use corvid_core::{CorvidError, RequestContext, RequestId};
use corvid_dispatch::ApprovalHook;
use serde_json::Value;

/// Answers every request with a fixed decision and records what it saw.
pub struct ScriptedApproval {
    approve: bool,
    seen: Mutex<Vec<(RequestId, String)>>,
}

impl ScriptedApproval {
    pub fn approving() -> Self {
        Self {
            approve: true,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn denying() -> Self {
        Self {
            approve: false,
            seen: Mutex::new(Vec::new()),
        }
    }

    /// The (request id, tool name) pairs this hook was asked about.
    pub fn seen(&self) -> Vec<(RequestId, String)> {
        self.seen.lock().unwrap().clone()
    }

    /// Number of approval requests received.
    pub fn request_count(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

#[async_trait]
impl ApprovalHook for ScriptedApproval {
    async fn request(
        &self,
        _ctx: &RequestContext,
        request_id: RequestId,
        tool_name: &str,
        _input: &Value,
    ) -> Result<bool, CorvidError> {
        self.seen
            .lock()
            .unwrap()
            .push((request_id, tool_name.to_string()));
        Ok(self.approve)
    }
}

/// Never answers. Resolves only through the caller's cancellation, per the
/// hook contract; used to test deadline behavior while waiting for a human.
pub struct NeverApprove;

#[async_trait]
impl ApprovalHook for NeverApprove {
    async fn request(
        &self,
        ctx: &RequestContext,
        _request_id: RequestId,
        _tool_name: &str,
        _input: &Value,
    ) -> Result<bool, CorvidError> {
        ctx.cancelled().await;
        Err(CorvidError::Canceled)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use corvid_core::SessionId;

    use super::*;

    fn ctx() -> RequestContext {
        RequestContext::new(SessionId("approval-mock-test".to_string()))
    }

    #[tokio::test]
    async fn scripted_approval_records_requests() {
        let hook = ScriptedApproval::denying();
        let approved = hook
            .request(&ctx(), RequestId::generate(), "exec", &serde_json::json!({}))
            .await
            .unwrap();
        assert!(!approved);
        assert_eq!(hook.request_count(), 1);
        assert_eq!(hook.seen()[0].1, "exec");
    }

    #[tokio::test]
    async fn never_approve_resolves_on_deadline() {
        let hook = NeverApprove;
        let ctx = ctx().with_deadline(Duration::from_millis(10));
        let result = hook
            .request(&ctx, RequestId::generate(), "exec", &serde_json::json!({}))
            .await;
        assert!(matches!(result, Err(CorvidError::Canceled)));
    }
}
