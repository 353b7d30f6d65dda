// SPDX-FileCopyrightText: 2026 Corvid Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in shell command execution tool.
//!
//! Executes commands via `bash -c` and returns stdout/stderr. This is a
//! command-style tool: it exposes its concrete command string to the
//! policy's classifier, which decides per call whether the approval gate
//! applies.

use async_trait::async_trait;
use corvid_core::{CorvidError, RequestContext};
use serde_json::Value;

use crate::args;
use crate::tool::{Tool, ToolOutput};

/// Executes shell commands and returns stdout/stderr.
pub struct ExecTool;

#[async_trait]
impl Tool for ExecTool {
    fn name(&self) -> &str {
        "exec"
    }

    fn description(&self) -> &str {
        "Execute a shell command and return stdout/stderr"
    }

    fn parameters_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "command": {
                    "type": "string",
                    "description": "The shell command to execute"
                }
            },
            "required": ["command"]
        })
    }

    fn command_to_classify<'a>(&self, input: &'a Value) -> Option<&'a str> {
        input.get("command").and_then(Value::as_str)
    }

    async fn invoke(
        &self,
        _ctx: &RequestContext,
        input: Value,
    ) -> Result<ToolOutput, CorvidError> {
        let command = args::required_str(&input, "command")?;

        let output = tokio::process::Command::new("bash")
            .arg("-c")
            .arg(command)
            .output()
            .await
            .map_err(|e| CorvidError::Backend {
                message: format!("failed to execute command: {e}"),
                source: Some(Box::new(e)),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        let is_error = !output.status.success();
        let content = if is_error {
            let exit_code = output.status.code().unwrap_or(-1);
            format!("Exit code: {exit_code}\nstdout:\n{stdout}\nstderr:\n{stderr}")
        } else if stderr.is_empty() {
            stdout.to_string()
        } else {
            format!("{stdout}\nstderr:\n{stderr}")
        };

        Ok(ToolOutput { content, is_error })
    }
}

#[cfg(test)]
mod tests {
    use corvid_core::SessionId;

    use super::*;

    fn ctx() -> RequestContext {
        RequestContext::new(SessionId("exec-test".to_string()))
    }

    #[tokio::test]
    async fn exec_tool_echo() {
        let tool = ExecTool;
        let input = serde_json::json!({"command": "echo hello"});
        let output = tool.invoke(&ctx(), input).await.unwrap();
        assert_eq!(output.content.trim(), "hello");
        assert!(!output.is_error);
    }

    #[tokio::test]
    async fn exec_tool_nonzero_exit_is_error_output() {
        let tool = ExecTool;
        let input = serde_json::json!({"command": "exit 3"});
        let output = tool.invoke(&ctx(), input).await.unwrap();
        assert!(output.is_error);
        assert!(output.content.contains("Exit code: 3"));
    }

    #[tokio::test]
    async fn exec_tool_missing_command_is_validation_error() {
        let tool = ExecTool;
        let result = tool.invoke(&ctx(), serde_json::json!({})).await;
        assert!(matches!(result, Err(CorvidError::Validation(_))));
    }

    #[test]
    fn exec_tool_exposes_command_for_classification() {
        let tool = ExecTool;
        let input = serde_json::json!({"command": "rm -rf /tmp/scratch"});
        assert_eq!(tool.command_to_classify(&input), Some("rm -rf /tmp/scratch"));
        assert_eq!(tool.command_to_classify(&serde_json::json!({})), None);
    }

    #[test]
    fn exec_tool_does_not_hard_require_approval() {
        // The classifier decides per command; there is no blanket gate.
        assert!(!ExecTool.requires_approval());
    }
}
