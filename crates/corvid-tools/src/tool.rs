// SPDX-FileCopyrightText: 2026 Corvid Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The capability contract every tool implements.
//!
//! Flat tools are addressed by name alone; domain tools are additionally
//! addressed by a (resource, action) pair validated by the STRAP router
//! before any handler runs.

use async_trait::async_trait;
use corvid_core::{CorvidError, RequestContext};
use serde::{Deserialize, Serialize};

use crate::strap::ResourceSpec;

/// Output from a tool invocation.
///
/// `content` is the only channel back to the calling agent: diagnostics,
/// results, and errors all travel as text the conversational loop can keep
/// reasoning from. The registry caps its length after execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolOutput {
    /// The content returned by the tool (text output, JSON, etc.).
    pub content: String,
    /// Whether the tool invocation resulted in an error.
    pub is_error: bool,
}

impl ToolOutput {
    /// A successful output with the given content.
    pub fn ok(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_error: false,
        }
    }

    /// An error output with the given diagnostic text.
    pub fn error(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_error: true,
        }
    }
}

/// A single invocation request: tool name plus raw structured input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    pub name: String,
    pub input: serde_json::Value,
}

impl ToolCall {
    pub fn new(name: impl Into<String>, input: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }
}

/// Unified trait for all tools dispatched through the registry.
///
/// `description()` and `parameters_schema()` must be pure functions of the
/// tool's configuration: the catalog calls them repeatedly to build help
/// and schema output, and hosts may cache the results.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The tool's unique name (used for lookup and API serialization).
    fn name(&self) -> &str;

    /// Human/LLM-facing description of what the tool does.
    fn description(&self) -> &str;

    /// JSON Schema describing the tool's input parameters.
    fn parameters_schema(&self) -> serde_json::Value;

    /// Whether every invocation must pass the human approval gate.
    fn requires_approval(&self) -> bool {
        false
    }

    /// For command-style tools: the concrete command string inside `input`
    /// that the policy's classifier should judge. `None` for everything
    /// else.
    fn command_to_classify<'a>(&self, _input: &'a serde_json::Value) -> Option<&'a str> {
        None
    }

    /// Runs the tool. Failures are returned, never thrown; the registry
    /// converts them into error outputs.
    async fn invoke(
        &self,
        ctx: &RequestContext,
        input: serde_json::Value,
    ) -> Result<ToolOutput, CorvidError>;
}

/// A tool addressed by (resource, action) pairs instead of a flat name.
///
/// `resources()` must be a pure function of the tool's configuration, and
/// every action it declares must be accepted by the tool's own dispatcher;
/// the STRAP router validates inbound calls against the same tables.
pub trait DomainTool: Tool {
    /// The domain name, e.g. "schedule" or "browser".
    fn domain(&self) -> &str;

    /// The ordered resource/action tables for this domain.
    fn resources(&self) -> &'static [ResourceSpec];

    /// The action set for one resource, if it exists.
    fn actions_for(&self, resource: &str) -> Option<&'static [&'static str]> {
        self.resources()
            .iter()
            .find(|spec| spec.name == resource)
            .map(|spec| spec.actions)
    }
}
