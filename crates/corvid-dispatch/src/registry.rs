// SPDX-FileCopyrightText: 2026 Corvid Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The registry dispatch pipeline: the single entry point every tool call
//! passes through.
//!
//! `execute` never raises. Each gate converts failure into a terminal,
//! fully-formed [`ToolOutput`]: the consumer is a conversational loop that
//! must keep reasoning from a textual result, not recover from a thrown
//! fault. Gates run in order — lookup, origin deny, approval, desktop lane
//! hand-off, execution, truncation — and a failed gate short-circuits the
//! rest without invoking the tool.

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use corvid_core::{CorvidError, RequestContext, RequestId};
use corvid_tools::{CapabilityCatalog, ToolCall, ToolOutput};
use futures::FutureExt;
use futures::future::BoxFuture;
use tracing::{debug, warn};

use crate::approval::ApprovalHook;
use crate::lane::DesktopLane;
use crate::policy::PolicyHandle;

/// Default cap on result content length, in characters.
pub const DEFAULT_MAX_RESULT_CHARS: usize = 100_000;

/// Fixed marker appended when a result is clipped at the cap.
pub const TRUNCATION_MARKER: &str = "\n[output truncated]";

/// Hints appended to execution errors the calling agent can act on.
const RETRY_HINTS: &[(&str, &str)] = &[
    ("command not found", "the binary may not be installed on this host"),
    ("No such file or directory", "check that the path exists before retrying"),
    ("Permission denied", "the agent user cannot access this path"),
];

/// The tool registry and its dispatch pipeline.
///
/// Owns the platform-filtered catalog, the access policy handle, and the
/// approval hook. The desktop lane is attached lazily: the serialization
/// primitive may depend on host wiring that exists only in certain run
/// modes, and without one desktop tools simply run inline.
pub struct Registry {
    catalog: CapabilityCatalog,
    policy: PolicyHandle,
    approvals: Arc<dyn ApprovalHook>,
    lane: ArcSwapOption<DesktopLane>,
    max_result_chars: usize,
}

impl Registry {
    pub fn new(
        catalog: CapabilityCatalog,
        policy: PolicyHandle,
        approvals: Arc<dyn ApprovalHook>,
    ) -> Self {
        Self {
            catalog,
            policy,
            approvals,
            lane: ArcSwapOption::empty(),
            max_result_chars: DEFAULT_MAX_RESULT_CHARS,
        }
    }

    /// Overrides the result cap (from `limits.max_result_chars`).
    pub fn with_max_result_chars(mut self, cap: usize) -> Self {
        self.max_result_chars = cap;
        self
    }

    /// Attaches the desktop lane. From here on, desktop-category tools are
    /// serialized instead of running inline.
    pub fn attach_desktop_lane(&self, lane: DesktopLane) {
        self.lane.store(Some(Arc::new(lane)));
    }

    /// Detaches the desktop lane; desktop tools fall back to inline runs.
    pub fn detach_desktop_lane(&self) {
        self.lane.store(None);
    }

    /// The live catalog, for help and schema output.
    pub fn catalog(&self) -> &CapabilityCatalog {
        &self.catalog
    }

    /// The access policy handle, for host-side settings toggles.
    pub fn policy(&self) -> &PolicyHandle {
        &self.policy
    }

    /// Dispatches one tool call. Never panics and never returns a raw
    /// fault; every failure mode is a textual error output.
    pub async fn execute(&self, ctx: &RequestContext, call: ToolCall) -> ToolOutput {
        if ctx.is_cancelled() {
            return self.finish(ToolOutput::error(CorvidError::Canceled.to_string()));
        }

        let Some(entry) = self.catalog.get(&call.name) else {
            return self.finish(ToolOutput::error(format!("unknown tool '{}'", call.name)));
        };
        let category = entry.category;

        let policy = self.policy.load();
        let origin = ctx.origin();
        if policy.denies(origin, &call.name) {
            warn!(tool = %call.name, origin = %origin, "origin deny list rejected call");
            let err = CorvidError::PermissionDenied {
                tool: call.name.clone(),
                origin,
            };
            return self.finish(ToolOutput::error(err.to_string()));
        }

        if policy.call_requires_approval(entry.tool.as_ref(), &call.input) {
            let request_id = RequestId::generate();
            debug!(
                tool = %call.name,
                request_id = %request_id,
                "call held for approval"
            );
            match self
                .approvals
                .request(ctx, request_id, &call.name, &call.input)
                .await
            {
                Ok(true) => {}
                Ok(false) => {
                    let err = CorvidError::ApprovalDenied {
                        tool: call.name.clone(),
                    };
                    return self.finish(ToolOutput::error(err.to_string()));
                }
                Err(err) => return self.finish(ToolOutput::error(err.to_string())),
            }
        }

        let run = invocation(ctx, &call, Arc::clone(&entry.tool));
        let result = if category.requires_desktop_lane() {
            match self.lane.load_full() {
                Some(lane) => {
                    debug!(tool = %call.name, "handing execution to the desktop lane");
                    lane.enqueue(ctx, run).await
                }
                None => run.await,
            }
        } else {
            run.await
        };

        let output = match result {
            Ok(output) => output,
            Err(err) => ToolOutput::error(with_retry_hint(err.to_string())),
        };
        self.finish(output)
    }

    /// Post-processing: cap content length, appending the fixed marker when
    /// clipped. Losing the tail of an oversized payload is preferable to
    /// breaking the conversational loop.
    fn finish(&self, mut output: ToolOutput) -> ToolOutput {
        output.content = truncate_content(output.content, self.max_result_chars);
        output
    }
}

/// Builds the execution future for a call: the tool's own `invoke` with
/// panics caught at the boundary and converted into an error.
fn invocation(
    ctx: &RequestContext,
    call: &ToolCall,
    tool: Arc<dyn corvid_tools::Tool>,
) -> BoxFuture<'static, Result<ToolOutput, CorvidError>> {
    let ctx = ctx.clone();
    let name = call.name.clone();
    let input = call.input.clone();
    async move {
        match std::panic::AssertUnwindSafe(tool.invoke(&ctx, input))
            .catch_unwind()
            .await
        {
            Ok(result) => result,
            Err(_) => Err(CorvidError::Internal(format!(
                "tool '{name}' panicked during execution"
            ))),
        }
    }
    .boxed()
}

/// Clips `content` to at most `cap` characters, appending the truncation
/// marker when anything was dropped.
fn truncate_content(content: String, cap: usize) -> String {
    match content.char_indices().nth(cap) {
        None => content,
        Some((byte_index, _)) => {
            debug!(
                total_chars = content.chars().count(),
                cap, "truncating oversized tool output"
            );
            let mut clipped = content;
            clipped.truncate(byte_index);
            clipped.push_str(TRUNCATION_MARKER);
            clipped
        }
    }
}

/// Appends an actionable hint when the error text matches a known failure.
fn with_retry_hint(message: String) -> String {
    for (needle, hint) in RETRY_HINTS {
        if message.contains(needle) {
            return format!("{message} (hint: {hint})");
        }
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_below_cap_is_identity() {
        let content = "short output".to_string();
        assert_eq!(truncate_content(content.clone(), 100), content);
    }

    #[test]
    fn truncate_at_cap_exactly_is_untouched() {
        let content = "x".repeat(100);
        let result = truncate_content(content.clone(), 100);
        assert_eq!(result, content);
    }

    #[test]
    fn truncate_over_cap_is_cap_chars_plus_marker() {
        let content = "x".repeat(150);
        let result = truncate_content(content, 100);
        assert!(result.ends_with(TRUNCATION_MARKER));
        let body = &result[..result.len() - TRUNCATION_MARKER.len()];
        assert_eq!(body.chars().count(), 100);
    }

    #[test]
    fn truncate_respects_multibyte_boundaries() {
        let content = "é".repeat(10);
        let result = truncate_content(content, 4);
        assert!(result.ends_with(TRUNCATION_MARKER));
        let body = &result[..result.len() - TRUNCATION_MARKER.len()];
        assert_eq!(body.chars().count(), 4);
        assert_eq!(body, "éééé");
    }

    #[test]
    fn retry_hint_matches_known_substrings() {
        let hinted = with_retry_hint("bash: foobar: command not found".to_string());
        assert!(hinted.contains("hint:"));

        let plain = with_retry_hint("some novel failure".to_string());
        assert!(!plain.contains("hint:"));
    }
}
