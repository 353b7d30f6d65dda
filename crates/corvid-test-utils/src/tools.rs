// SPDX-FileCopyrightText: 2026 Corvid Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock tools for exercising the dispatch pipeline.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use corvid_core::{CorvidError, RequestContext};
use corvid_tools::{Tool, ToolOutput};
use serde_json::Value;

fn object_schema() -> Value {
    serde_json::json!({"type": "object", "properties": {}})
}

/// Records the wall-clock interval of every invocation. Used to prove
/// mutual exclusion (or its absence) between concurrent executions.
pub struct RecordingTool {
    name: String,
    hold: Duration,
    intervals: Arc<Mutex<Vec<(Instant, Instant)>>>,
}

impl RecordingTool {
    pub fn new(name: impl Into<String>, hold: Duration) -> Self {
        Self {
            name: name.into(),
            hold,
            intervals: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// The recorded (start, end) pairs, in completion order.
    pub fn intervals(&self) -> Vec<(Instant, Instant)> {
        self.intervals.lock().unwrap().clone()
    }

    /// Shared handle to the interval log, for asserting after the tool has
    /// been moved into a catalog.
    pub fn interval_log(&self) -> Arc<Mutex<Vec<(Instant, Instant)>>> {
        Arc::clone(&self.intervals)
    }
}

#[async_trait]
impl Tool for RecordingTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        "records execution intervals"
    }

    fn parameters_schema(&self) -> Value {
        object_schema()
    }

    async fn invoke(
        &self,
        _ctx: &RequestContext,
        _input: Value,
    ) -> Result<ToolOutput, CorvidError> {
        let start = Instant::now();
        tokio::time::sleep(self.hold).await;
        self.intervals.lock().unwrap().push((start, Instant::now()));
        Ok(ToolOutput::ok("recorded"))
    }
}

/// Counts invocations; optionally declares a hard approval requirement.
/// Used to assert that a gate rejected a call before `invoke` ran.
pub struct CountingTool {
    name: String,
    requires_approval: bool,
    calls: Arc<AtomicUsize>,
}

impl CountingTool {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requires_approval: false,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn gated(name: impl Into<String>) -> Self {
        Self {
            requires_approval: true,
            ..Self::new(name)
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl Tool for CountingTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        "counts invocations"
    }

    fn parameters_schema(&self) -> Value {
        object_schema()
    }

    fn requires_approval(&self) -> bool {
        self.requires_approval
    }

    async fn invoke(
        &self,
        _ctx: &RequestContext,
        _input: Value,
    ) -> Result<ToolOutput, CorvidError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(ToolOutput::ok("counted"))
    }
}

/// Completes only once `participants` concurrent invocations are in flight.
/// Two calls through an unserialized path both finish; a serialized path
/// deadlocks instead, which tests surface with a timeout.
pub struct BarrierTool {
    name: String,
    barrier: Arc<tokio::sync::Barrier>,
}

impl BarrierTool {
    pub fn new(name: impl Into<String>, participants: usize) -> Self {
        Self {
            name: name.into(),
            barrier: Arc::new(tokio::sync::Barrier::new(participants)),
        }
    }
}

#[async_trait]
impl Tool for BarrierTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        "waits for concurrent peers"
    }

    fn parameters_schema(&self) -> Value {
        object_schema()
    }

    async fn invoke(
        &self,
        _ctx: &RequestContext,
        _input: Value,
    ) -> Result<ToolOutput, CorvidError> {
        self.barrier.wait().await;
        Ok(ToolOutput::ok("passed the barrier"))
    }
}

/// Produces `size` characters of output. Used for truncation tests.
pub struct BigOutputTool {
    name: String,
    size: usize,
}

impl BigOutputTool {
    pub fn new(name: impl Into<String>, size: usize) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

#[async_trait]
impl Tool for BigOutputTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        "produces oversized output"
    }

    fn parameters_schema(&self) -> Value {
        object_schema()
    }

    async fn invoke(
        &self,
        _ctx: &RequestContext,
        _input: Value,
    ) -> Result<ToolOutput, CorvidError> {
        Ok(ToolOutput::ok("x".repeat(self.size)))
    }
}

/// Always fails with a backend error carrying the given message.
pub struct FailTool {
    name: String,
    message: String,
}

impl FailTool {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

#[async_trait]
impl Tool for FailTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        "always fails"
    }

    fn parameters_schema(&self) -> Value {
        object_schema()
    }

    async fn invoke(
        &self,
        _ctx: &RequestContext,
        _input: Value,
    ) -> Result<ToolOutput, CorvidError> {
        Err(CorvidError::backend(self.message.clone()))
    }
}

/// Panics on every invocation. The pipeline must absorb it.
pub struct PanicTool {
    name: String,
}

impl PanicTool {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait]
impl Tool for PanicTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        "always panics"
    }

    fn parameters_schema(&self) -> Value {
        object_schema()
    }

    async fn invoke(
        &self,
        _ctx: &RequestContext,
        _input: Value,
    ) -> Result<ToolOutput, CorvidError> {
        panic!("mock tool panic");
    }
}

#[cfg(test)]
mod tests {
    use corvid_core::SessionId;

    use super::*;

    fn ctx() -> RequestContext {
        RequestContext::new(SessionId("mock-test".to_string()))
    }

    #[tokio::test]
    async fn counting_tool_counts() {
        let tool = CountingTool::new("count");
        assert_eq!(tool.calls(), 0);
        tool.invoke(&ctx(), serde_json::json!({})).await.unwrap();
        tool.invoke(&ctx(), serde_json::json!({})).await.unwrap();
        assert_eq!(tool.calls(), 2);
    }

    #[tokio::test]
    async fn recording_tool_captures_interval() {
        let tool = RecordingTool::new("record", Duration::from_millis(5));
        tool.invoke(&ctx(), serde_json::json!({})).await.unwrap();
        let intervals = tool.intervals();
        assert_eq!(intervals.len(), 1);
        assert!(intervals[0].1 >= intervals[0].0);
    }

    #[tokio::test]
    async fn big_output_tool_emits_requested_size() {
        let tool = BigOutputTool::new("big", 1234);
        let output = tool.invoke(&ctx(), serde_json::json!({})).await.unwrap();
        assert_eq!(output.content.len(), 1234);
    }
}
