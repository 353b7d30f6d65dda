// SPDX-FileCopyrightText: 2026 Corvid Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Heuristic safe/unsafe classification for free-form shell commands.
//!
//! Zero-cost table lookups, no network, no latency. A command is safe when
//! its leading word is on the read-only allowlist and the line carries no
//! shell control operators; everything else is routed through the approval
//! gate under the allowlist access level.

/// Commands that only read state. First-word matches classify as safe.
const SAFE_COMMANDS: &[&str] = &[
    "ls", "cat", "head", "tail", "grep", "rg", "find", "echo", "pwd",
    "whoami", "date", "df", "du", "ps", "uname", "wc", "which", "stat",
    "env", "printenv", "uptime", "id", "hostname", "file", "basename",
    "dirname", "realpath", "readlink", "sort", "uniq", "tr", "cut", "diff",
];

/// Git subcommands that only read repository state.
const SAFE_GIT_SUBCOMMANDS: &[&str] = &[
    "status", "log", "diff", "show", "branch", "remote", "tag", "blame",
];

/// Shell control operators. Their presence defeats first-word analysis, so
/// any command carrying one needs review.
const CONTROL_OPERATORS: &[&str] = &["&&", "||", ";", "|", ">", "<", "`", "$("];

/// Whether a classified command may run without the approval gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandSafety {
    Safe,
    NeedsApproval,
}

/// Result of classifying one command line.
#[derive(Debug, Clone)]
pub struct Classification {
    pub safety: CommandSafety,
    /// Human-readable reason, surfaced in approval prompts.
    pub reason: String,
}

impl Classification {
    fn safe(reason: impl Into<String>) -> Self {
        Self {
            safety: CommandSafety::Safe,
            reason: reason.into(),
        }
    }

    fn needs_approval(reason: impl Into<String>) -> Self {
        Self {
            safety: CommandSafety::NeedsApproval,
            reason: reason.into(),
        }
    }
}

/// Safe-command classifier with an operator-configurable extension list.
#[derive(Debug, Clone, Default)]
pub struct CommandClassifier {
    /// Additional safe command words from config, on top of the built-ins.
    extra_safe: Vec<String>,
}

impl CommandClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extends the safe allowlist with operator-configured command words.
    pub fn with_extra_safe(extra_safe: Vec<String>) -> Self {
        Self { extra_safe }
    }

    /// Classifies a command line as safe or needing approval.
    pub fn classify(&self, command: &str) -> Classification {
        let trimmed = command.trim();
        if trimmed.is_empty() {
            return Classification::needs_approval("empty command");
        }

        if let Some(op) = CONTROL_OPERATORS.iter().find(|op| trimmed.contains(**op)) {
            return Classification::needs_approval(format!(
                "command contains shell control operator '{op}'"
            ));
        }

        let first = trimmed.split_whitespace().next().unwrap_or("");
        // Strip a leading path so `/bin/ls` classifies like `ls`.
        let word = first.rsplit('/').next().unwrap_or(first);

        if word == "git" {
            let sub = trimmed.split_whitespace().nth(1).unwrap_or("");
            if SAFE_GIT_SUBCOMMANDS.contains(&sub) {
                return Classification::safe(format!("read-only git subcommand '{sub}'"));
            }
            return Classification::needs_approval(format!(
                "git subcommand '{sub}' can modify repository state"
            ));
        }

        if SAFE_COMMANDS.contains(&word) || self.extra_safe.iter().any(|s| s == word) {
            return Classification::safe(format!("'{word}' is on the safe command list"));
        }

        Classification::needs_approval(format!("'{word}' is not on the safe command list"))
    }
}
