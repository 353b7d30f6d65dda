// SPDX-FileCopyrightText: 2026 Corvid Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Human-in-the-loop approval gate.
//!
//! The registry blocks a gated call on [`ApprovalHook::request`] and treats
//! denial as terminal. [`ApprovalBroker`] is the standard hook: each request
//! becomes a [`PendingApproval`] on an mpsc queue the host UI consumes,
//! answered through a oneshot keyed by a generated request id. The waiting
//! side aborts when the caller's cancellation or deadline fires.

use async_trait::async_trait;
use corvid_core::{CorvidError, RequestContext, RequestId, SessionId};
use serde_json::Value;
use tokio::sync::{mpsc, oneshot};
use tracing::debug;

/// Host-supplied approval surface, consulted before gated executions.
///
/// Implementations must support being interrupted: a request whose caller
/// cancels mid-wait returns `Err(CorvidError::Canceled)` rather than
/// blocking forever.
#[async_trait]
pub trait ApprovalHook: Send + Sync {
    async fn request(
        &self,
        ctx: &RequestContext,
        request_id: RequestId,
        tool_name: &str,
        input: &Value,
    ) -> Result<bool, CorvidError>;
}

/// Approves everything. For deployments without a human in the loop and
/// for tests.
pub struct AutoApprove;

#[async_trait]
impl ApprovalHook for AutoApprove {
    async fn request(
        &self,
        _ctx: &RequestContext,
        _request_id: RequestId,
        _tool_name: &str,
        _input: &Value,
    ) -> Result<bool, CorvidError> {
        Ok(true)
    }
}

/// One approval request awaiting a human (or auto-rule) answer.
pub struct PendingApproval {
    pub request_id: RequestId,
    pub session_id: SessionId,
    pub tool_name: String,
    pub input: Value,
    respond: oneshot::Sender<bool>,
}

impl PendingApproval {
    /// Answers the request. Dropping a `PendingApproval` unanswered aborts
    /// the waiting call with an error.
    pub fn answer(self, approved: bool) {
        // The waiter may have cancelled already; nothing to do then.
        let _ = self.respond.send(approved);
    }

    pub fn approve(self) {
        self.answer(true);
    }

    pub fn deny(self) {
        self.answer(false);
    }
}

/// Async request/response correlation between the dispatch pipeline and the
/// host's approval surface.
pub struct ApprovalBroker {
    tx: mpsc::Sender<PendingApproval>,
}

impl ApprovalBroker {
    /// Creates a broker and the receiver of pending requests the host must
    /// drain.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<PendingApproval>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }
}

#[async_trait]
impl ApprovalHook for ApprovalBroker {
    async fn request(
        &self,
        ctx: &RequestContext,
        request_id: RequestId,
        tool_name: &str,
        input: &Value,
    ) -> Result<bool, CorvidError> {
        let (respond_tx, respond_rx) = oneshot::channel();
        let pending = PendingApproval {
            request_id: request_id.clone(),
            session_id: ctx.session_id().clone(),
            tool_name: tool_name.to_string(),
            input: input.clone(),
            respond: respond_tx,
        };

        tokio::select! {
            sent = self.tx.send(pending) => {
                sent.map_err(|_| {
                    CorvidError::Internal("approval queue is closed".to_string())
                })?;
            }
            _ = ctx.cancelled() => return Err(CorvidError::Canceled),
        }

        debug!(request_id = %request_id, tool = %tool_name, "approval requested");

        tokio::select! {
            answer = respond_rx => match answer {
                Ok(approved) => Ok(approved),
                Err(_) => Err(CorvidError::Internal(
                    "approval request dropped without an answer".to_string(),
                )),
            },
            _ = ctx.cancelled() => Err(CorvidError::Canceled),
        }
    }
}
