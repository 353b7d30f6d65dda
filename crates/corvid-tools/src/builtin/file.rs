// SPDX-FileCopyrightText: 2026 Corvid Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in file I/O tool.
//!
//! Reads, writes, and lists files on the filesystem. Read contents are
//! capped at 100KB; the registry applies its own overall result cap on top.

use async_trait::async_trait;
use corvid_core::{CorvidError, RequestContext};
use serde_json::Value;

use crate::args;
use crate::tool::{Tool, ToolOutput};

/// Maximum file read size in bytes (100KB).
const MAX_READ_SIZE: usize = 100 * 1024;

/// Reads, writes, and lists files on the filesystem.
pub struct FileTool;

#[async_trait]
impl Tool for FileTool {
    fn name(&self) -> &str {
        "file"
    }

    fn description(&self) -> &str {
        "Read, write, or list files on the filesystem"
    }

    fn parameters_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "action": {
                    "type": "string",
                    "enum": ["read", "write", "list"],
                    "description": "The file operation to perform"
                },
                "path": {
                    "type": "string",
                    "description": "File path for read/write, directory path for list"
                },
                "content": {
                    "type": "string",
                    "description": "Content to write (required for write action)"
                }
            },
            "required": ["action", "path"]
        })
    }

    async fn invoke(
        &self,
        _ctx: &RequestContext,
        input: Value,
    ) -> Result<ToolOutput, CorvidError> {
        let action = args::required_str(&input, "action")?;
        let path = args::required_str(&input, "path")?;

        match action {
            "read" => {
                let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
                    CorvidError::Backend {
                        message: format!("failed to read file '{path}': {e}"),
                        source: Some(Box::new(e)),
                    }
                })?;

                let output = if contents.len() > MAX_READ_SIZE {
                    let mut clipped = contents;
                    let mut end = MAX_READ_SIZE;
                    while !clipped.is_char_boundary(end) {
                        end -= 1;
                    }
                    let total = clipped.len();
                    clipped.truncate(end);
                    format!("{clipped}...\n\n[File truncated from {total} to {end} bytes]")
                } else {
                    contents
                };

                Ok(ToolOutput::ok(output))
            }
            "write" => {
                let content = args::required_str(&input, "content")?;

                tokio::fs::write(path, content).await.map_err(|e| {
                    CorvidError::Backend {
                        message: format!("failed to write file '{path}': {e}"),
                        source: Some(Box::new(e)),
                    }
                })?;

                Ok(ToolOutput::ok(format!(
                    "Wrote {} bytes to '{path}'",
                    content.len()
                )))
            }
            "list" => {
                let mut dir = tokio::fs::read_dir(path).await.map_err(|e| {
                    CorvidError::Backend {
                        message: format!("failed to list directory '{path}': {e}"),
                        source: Some(Box::new(e)),
                    }
                })?;

                let mut names = Vec::new();
                while let Some(entry) = dir.next_entry().await.map_err(|e| {
                    CorvidError::Backend {
                        message: format!("failed to list directory '{path}': {e}"),
                        source: Some(Box::new(e)),
                    }
                })? {
                    let mut name = entry.file_name().to_string_lossy().into_owned();
                    if entry.file_type().await.map(|t| t.is_dir()).unwrap_or(false) {
                        name.push('/');
                    }
                    names.push(name);
                }
                names.sort();

                Ok(ToolOutput::ok(names.join("\n")))
            }
            other => Ok(ToolOutput::error(format!(
                "Unknown action '{other}'. Supported actions: 'read', 'write', 'list'."
            ))),
        }
    }
}
