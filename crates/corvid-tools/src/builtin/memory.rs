// SPDX-FileCopyrightText: 2026 Corvid Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in memory tool over the external note store.

use std::sync::Arc;

use async_trait::async_trait;
use corvid_core::traits::{MemoryBackend, MemoryNote};
use corvid_core::{CorvidError, RequestContext};
use serde_json::Value;

use crate::args;
use crate::strap::{self, ResourceSpec, Routed};
use crate::tool::{DomainTool, Tool, ToolOutput};

/// Default number of notes returned by recall.
const DEFAULT_RECALL_LIMIT: usize = 5;

const RESOURCES: &[ResourceSpec] = &[ResourceSpec {
    name: "note",
    aliases: &["memo", "fact"],
    actions: &["store", "recall", "forget", "list"],
}];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MemoryOp {
    Store,
    Recall,
    Forget,
    List,
}

impl MemoryOp {
    fn from_routed(routed: Routed) -> Option<Self> {
        match (routed.resource, routed.action) {
            ("note", "store") => Some(MemoryOp::Store),
            ("note", "recall") => Some(MemoryOp::Recall),
            ("note", "forget") => Some(MemoryOp::Forget),
            ("note", "list") => Some(MemoryOp::List),
            _ => None,
        }
    }
}

/// Stores and retrieves long-lived notes through the host's memory store.
pub struct MemoryTool {
    backend: Arc<dyn MemoryBackend>,
    description: String,
}

impl MemoryTool {
    pub fn new(backend: Arc<dyn MemoryBackend>) -> Self {
        Self {
            backend,
            description: format!(
                "Store and retrieve persistent notes; {}",
                strap::describe(RESOURCES)
            ),
        }
    }

    fn render(note: &MemoryNote) -> String {
        format!("{} ({}): {}", note.id, note.created_at.to_rfc3339(), note.text)
    }
}

#[async_trait]
impl Tool for MemoryTool {
    fn name(&self) -> &str {
        "memory"
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn parameters_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "resource": {
                    "type": "string",
                    "enum": ["note"],
                    "description": "Target resource; inferred when omitted"
                },
                "action": {
                    "type": "string",
                    "enum": ["store", "recall", "forget", "list"],
                    "description": "The operation to perform"
                },
                "text": {
                    "type": "string",
                    "description": "Note text (required for store)"
                },
                "query": {
                    "type": "string",
                    "description": "Search query (required for recall)"
                },
                "id": {
                    "type": "string",
                    "description": "Note id (required for forget)"
                },
                "limit": {
                    "type": "integer",
                    "description": "Maximum notes returned by recall (default 5)"
                }
            },
            "required": ["action"]
        })
    }

    async fn invoke(
        &self,
        _ctx: &RequestContext,
        input: Value,
    ) -> Result<ToolOutput, CorvidError> {
        let routed = strap::route_payload(self.domain(), RESOURCES, &input)?;
        let op = MemoryOp::from_routed(routed).ok_or_else(|| {
            CorvidError::Internal(format!(
                "routed pair ({}, {}) has no memory handler",
                routed.resource, routed.action
            ))
        })?;

        match op {
            MemoryOp::Store => {
                let text = args::required_str(&input, "text")?;
                let note = self.backend.store(text).await?;
                Ok(ToolOutput::ok(format!("Stored note {}", note.id)))
            }
            MemoryOp::Recall => {
                let query = args::required_str(&input, "query")?;
                let limit = args::optional_u64(&input, "limit")
                    .map(|l| l as usize)
                    .unwrap_or(DEFAULT_RECALL_LIMIT);
                let notes = self.backend.recall(query, limit).await?;
                if notes.is_empty() {
                    return Ok(ToolOutput::ok(format!("No notes matching '{query}'")));
                }
                let rendered: Vec<String> = notes.iter().map(Self::render).collect();
                Ok(ToolOutput::ok(rendered.join("\n")))
            }
            MemoryOp::Forget => {
                let id = args::required_str(&input, "id")?;
                if self.backend.forget(id).await? {
                    Ok(ToolOutput::ok(format!("Forgot note {id}")))
                } else {
                    Ok(ToolOutput::error(format!("No note with id {id}")))
                }
            }
            MemoryOp::List => {
                let notes = self.backend.list().await?;
                if notes.is_empty() {
                    return Ok(ToolOutput::ok("No stored notes"));
                }
                let rendered: Vec<String> = notes.iter().map(Self::render).collect();
                Ok(ToolOutput::ok(rendered.join("\n")))
            }
        }
    }
}

impl DomainTool for MemoryTool {
    fn domain(&self) -> &str {
        "memory"
    }

    fn resources(&self) -> &'static [ResourceSpec] {
        RESOURCES
    }
}
