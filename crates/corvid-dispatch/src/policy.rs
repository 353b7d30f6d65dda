// SPDX-FileCopyrightText: 2026 Corvid Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Access policy: global level, per-origin deny lists, command classifier.
//!
//! The policy is read on every dispatch and mutated rarely (a host toggling
//! a setting), so it lives behind an `ArcSwap`: readers take a cheap
//! snapshot, writers replace the whole value.

use std::collections::{HashMap, HashSet};
use std::str::FromStr;
use std::sync::Arc;

use arc_swap::ArcSwap;
use corvid_config::AccessConfig;
use corvid_core::{AccessLevel, CorvidError, Origin};
use corvid_tools::Tool;
use serde_json::Value;

use crate::classifier::{CommandClassifier, CommandSafety};

/// The access control state consulted by the registry on every call.
#[derive(Debug, Clone, Default)]
pub struct AccessPolicy {
    level: AccessLevel,
    origin_deny: HashMap<Origin, HashSet<String>>,
    classifier: CommandClassifier,
}

impl AccessPolicy {
    /// An empty policy at the given level: no deny entries, built-in
    /// classifier allowlist.
    pub fn new(level: AccessLevel) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }

    /// Builds the policy from loaded configuration.
    pub fn from_config(config: &AccessConfig) -> Result<Self, CorvidError> {
        let level = AccessLevel::from_str(&config.level).map_err(|_| {
            CorvidError::Config(format!(
                "unknown access level '{}'; expected 'allowlist' or 'full'",
                config.level
            ))
        })?;

        let mut policy = Self::new(level);
        policy.classifier = CommandClassifier::with_extra_safe(config.safe_commands.clone());
        policy = policy
            .deny(Origin::User, &config.deny.user)
            .deny(Origin::Agent, &config.deny.agent)
            .deny(Origin::Plugin, &config.deny.plugin)
            .deny(Origin::Skill, &config.deny.skill)
            .deny(Origin::System, &config.deny.system);
        Ok(policy)
    }

    /// Adds tool names to one origin's deny list.
    pub fn deny<S: AsRef<str>>(mut self, origin: Origin, tools: &[S]) -> Self {
        let entry = self.origin_deny.entry(origin).or_default();
        for tool in tools {
            entry.insert(tool.as_ref().to_string());
        }
        self
    }

    /// Replaces the command classifier.
    pub fn with_classifier(mut self, classifier: CommandClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// The global access level.
    pub fn level(&self) -> AccessLevel {
        self.level
    }

    /// Whether calls of this origin are denied the named tool.
    ///
    /// Independent of the access level: raising the level to `Full` does
    /// not bypass a deny entry.
    pub fn denies(&self, origin: Origin, tool_name: &str) -> bool {
        self.origin_deny
            .get(&origin)
            .is_some_and(|tools| tools.contains(tool_name))
    }

    /// Whether this concrete call must pass the approval gate.
    ///
    /// A hard `requires_approval` flag always gates. Command-style tools
    /// additionally gate per command under the allowlist level; the full
    /// level auto-approves classified commands.
    pub fn call_requires_approval(&self, tool: &dyn Tool, input: &Value) -> bool {
        if tool.requires_approval() {
            return true;
        }
        match tool.command_to_classify(input) {
            Some(command) => match self.level {
                AccessLevel::Full => false,
                AccessLevel::Allowlist => {
                    self.classifier.classify(command).safety == CommandSafety::NeedsApproval
                }
            },
            None => false,
        }
    }
}

/// Shared, hot-swappable handle to the current [`AccessPolicy`].
pub struct PolicyHandle {
    inner: ArcSwap<AccessPolicy>,
}

impl PolicyHandle {
    pub fn new(policy: AccessPolicy) -> Self {
        Self {
            inner: ArcSwap::from_pointee(policy),
        }
    }

    /// Snapshot of the current policy. Cheap; taken per dispatch.
    pub fn load(&self) -> Arc<AccessPolicy> {
        self.inner.load_full()
    }

    /// Replaces the policy. In-flight dispatches keep their snapshot.
    pub fn replace(&self, policy: AccessPolicy) {
        self.inner.store(Arc::new(policy));
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use corvid_core::RequestContext;
    use corvid_tools::ToolOutput;

    use super::*;

    struct CommandishTool;

    #[async_trait]
    impl Tool for CommandishTool {
        fn name(&self) -> &str {
            "exec"
        }

        fn description(&self) -> &str {
            "test command tool"
        }

        fn parameters_schema(&self) -> Value {
            serde_json::json!({"type": "object"})
        }

        fn command_to_classify<'a>(&self, input: &'a Value) -> Option<&'a str> {
            input.get("command").and_then(Value::as_str)
        }

        async fn invoke(
            &self,
            _ctx: &RequestContext,
            _input: Value,
        ) -> Result<ToolOutput, CorvidError> {
            Ok(ToolOutput::ok("ran"))
        }
    }

    struct GatedTool;

    #[async_trait]
    impl Tool for GatedTool {
        fn name(&self) -> &str {
            "wipe"
        }

        fn description(&self) -> &str {
            "always gated"
        }

        fn parameters_schema(&self) -> Value {
            serde_json::json!({"type": "object"})
        }

        fn requires_approval(&self) -> bool {
            true
        }

        async fn invoke(
            &self,
            _ctx: &RequestContext,
            _input: Value,
        ) -> Result<ToolOutput, CorvidError> {
            Ok(ToolOutput::ok("wiped"))
        }
    }

    #[test]
    fn deny_is_per_origin() {
        let policy = AccessPolicy::new(AccessLevel::Allowlist).deny(Origin::Agent, &["exec"]);
        assert!(policy.denies(Origin::Agent, "exec"));
        assert!(!policy.denies(Origin::User, "exec"));
        assert!(!policy.denies(Origin::Agent, "file"));
    }

    #[test]
    fn deny_holds_at_full_level() {
        let policy = AccessPolicy::new(AccessLevel::Full).deny(Origin::Agent, &["exec"]);
        assert!(policy.denies(Origin::Agent, "exec"));
    }

    #[test]
    fn safe_command_skips_approval_under_allowlist() {
        let policy = AccessPolicy::new(AccessLevel::Allowlist);
        let input = serde_json::json!({"command": "ls -la"});
        assert!(!policy.call_requires_approval(&CommandishTool, &input));
    }

    #[test]
    fn unsafe_command_gates_under_allowlist_but_not_full() {
        let input = serde_json::json!({"command": "rm -rf /"});

        let allowlist = AccessPolicy::new(AccessLevel::Allowlist);
        assert!(allowlist.call_requires_approval(&CommandishTool, &input));

        let full = AccessPolicy::new(AccessLevel::Full);
        assert!(!full.call_requires_approval(&CommandishTool, &input));
    }

    #[test]
    fn hard_approval_flag_gates_at_any_level() {
        let input = serde_json::json!({});
        let allowlist = AccessPolicy::new(AccessLevel::Allowlist);
        let full = AccessPolicy::new(AccessLevel::Full);
        assert!(allowlist.call_requires_approval(&GatedTool, &input));
        assert!(full.call_requires_approval(&GatedTool, &input));
    }

    #[test]
    fn from_config_parses_level_and_deny_lists() {
        let config = corvid_config::load_config_from_str(
            r#"
            [access]
            level = "full"
            safe_commands = ["jq"]

            [access.deny]
            agent = ["exec", "browser"]
            skill = ["exec"]
            "#,
        )
        .unwrap();

        let policy = AccessPolicy::from_config(&config.access).unwrap();
        assert_eq!(policy.level(), AccessLevel::Full);
        assert!(policy.denies(Origin::Agent, "exec"));
        assert!(policy.denies(Origin::Agent, "browser"));
        assert!(policy.denies(Origin::Skill, "exec"));
        assert!(!policy.denies(Origin::System, "exec"));
    }

    #[test]
    fn from_config_rejects_unknown_level() {
        let config = AccessConfig {
            level: "root".to_string(),
            ..AccessConfig::default()
        };
        let err = AccessPolicy::from_config(&config).unwrap_err();
        assert!(matches!(err, CorvidError::Config(_)));
    }

    #[test]
    fn handle_hot_swap_changes_future_loads() {
        let handle = PolicyHandle::new(AccessPolicy::new(AccessLevel::Allowlist));
        assert_eq!(handle.load().level(), AccessLevel::Allowlist);

        handle.replace(AccessPolicy::new(AccessLevel::Full));
        assert_eq!(handle.load().level(), AccessLevel::Full);
    }
}
