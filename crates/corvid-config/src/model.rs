// SPDX-FileCopyrightText: 2026 Corvid Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Corvid agent runtime.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Corvid configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to sensible
/// values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CorvidConfig {
    /// Runtime identity and logging settings.
    #[serde(default)]
    pub runtime: RuntimeConfig,

    /// Access policy settings (level, per-origin deny lists, classifier).
    #[serde(default)]
    pub access: AccessConfig,

    /// Dispatch limits (result cap, desktop lane queue depth).
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// Runtime identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RuntimeConfig {
    /// Display name of the agent.
    #[serde(default = "default_runtime_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            name: default_runtime_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_runtime_name() -> String {
    "corvid".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Access policy configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AccessConfig {
    /// Overall posture: "allowlist" (classify, then approve unsafe commands)
    /// or "full" (auto-approve classified commands).
    #[serde(default = "default_access_level")]
    pub level: String,

    /// Per-origin tool deny lists. Deny-list entries hold regardless of
    /// `level`.
    #[serde(default)]
    pub deny: DenyConfig,

    /// Additional command words the classifier treats as safe, on top of
    /// the built-in allowlist.
    #[serde(default)]
    pub safe_commands: Vec<String>,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            level: default_access_level(),
            deny: DenyConfig::default(),
            safe_commands: Vec::new(),
        }
    }
}

fn default_access_level() -> String {
    "allowlist".to_string()
}

/// Tool names denied per call origin.
///
/// The `agent` default exists because inter-agent channels are network
/// reachable: a peer agent must not be able to run commands or drive the
/// shared browser on this host unless the operator opts in.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DenyConfig {
    #[serde(default)]
    pub user: Vec<String>,

    #[serde(default = "default_agent_deny")]
    pub agent: Vec<String>,

    #[serde(default)]
    pub plugin: Vec<String>,

    #[serde(default)]
    pub skill: Vec<String>,

    #[serde(default)]
    pub system: Vec<String>,
}

impl Default for DenyConfig {
    fn default() -> Self {
        Self {
            user: Vec::new(),
            agent: default_agent_deny(),
            plugin: Vec::new(),
            skill: Vec::new(),
            system: Vec::new(),
        }
    }
}

fn default_agent_deny() -> Vec<String> {
    vec!["exec".to_string(), "browser".to_string()]
}

/// Dispatch limits configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LimitsConfig {
    /// Maximum characters of tool output returned to the caller. Longer
    /// output is truncated with a visible marker.
    #[serde(default = "default_max_result_chars")]
    pub max_result_chars: usize,

    /// Bounded depth of the desktop lane's job queue.
    #[serde(default = "default_lane_queue_depth")]
    pub lane_queue_depth: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_result_chars: default_max_result_chars(),
            lane_queue_depth: default_lane_queue_depth(),
        }
    }
}

fn default_max_result_chars() -> usize {
    100_000
}

fn default_lane_queue_depth() -> usize {
    32
}
