// SPDX-FileCopyrightText: 2026 Corvid Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request-scoped context threaded through every tool call.
//!
//! The context carries the security-relevant origin value explicitly rather
//! than through ambient task-local state, so no boundary can forget to
//! propagate it. It also carries the caller's cancellation token and an
//! optional deadline; waits inside the dispatch pipeline (approval, desktop
//! lane) abort when either fires.

use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::types::{Origin, SessionId};

/// Per-call context: origin, session identity, and cancellation.
#[derive(Debug, Clone)]
pub struct RequestContext {
    origin: Origin,
    session_id: SessionId,
    cancel: CancellationToken,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// Creates a context for the given session with `Origin::User`.
    ///
    /// The user default is deliberate: untagged calls are treated as coming
    /// from the human operator. Bridging hosts must call [`with_origin`]
    /// before dispatching on behalf of another agent or a scheduled job.
    ///
    /// [`with_origin`]: RequestContext::with_origin
    pub fn new(session_id: SessionId) -> Self {
        Self {
            origin: Origin::User,
            session_id,
            cancel: CancellationToken::new(),
            deadline: None,
        }
    }

    /// Sets the trust provenance of this call.
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    /// Uses a caller-supplied cancellation token instead of a fresh one.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Sets a deadline relative to now. Waits in the pipeline abort once it
    /// passes; a tool already executing finishes on its own terms.
    pub fn with_deadline(mut self, timeout: Duration) -> Self {
        self.deadline = Some(Instant::now() + timeout);
        self
    }

    /// The trust provenance of this call.
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// The session this call belongs to.
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// The cancellation token carried by this call.
    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancel
    }

    /// True once the token has fired or the deadline has passed.
    pub fn is_cancelled(&self) -> bool {
        if self.cancel.is_cancelled() {
            return true;
        }
        match self.deadline {
            Some(deadline) => Instant::now() >= deadline,
            None => false,
        }
    }

    /// Resolves when the caller cancels or the deadline elapses.
    ///
    /// Never resolves for an uncancelled context without a deadline.
    pub async fn cancelled(&self) {
        match self.deadline {
            Some(deadline) => {
                tokio::select! {
                    _ = self.cancel.cancelled() => {}
                    _ = tokio::time::sleep_until(deadline) => {}
                }
            }
            None => self.cancel.cancelled().await,
        }
    }
}
