// SPDX-FileCopyrightText: 2026 Corvid Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across the Corvid runtime.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Unique identifier for a conversation session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

/// Correlation id for an approval round trip, generated per request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(pub String);

impl RequestId {
    /// Generates a fresh v4 request id.
    pub fn generate() -> Self {
        RequestId(uuid::Uuid::new_v4().to_string())
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trust provenance of a call entering the dispatch pipeline.
///
/// The default is `User`: a call that arrives without an explicit tag is
/// assumed to come from the human operator. Hosts that bridge inter-agent
/// messages, scheduled jobs, or skill invocations into the registry must tag
/// the matching origin themselves, or those calls run with user-level trust.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// A direct request from the human operator.
    #[default]
    User,
    /// A message bridged in from another agent over a comms channel.
    Agent,
    /// A call issued by an installed plugin.
    Plugin,
    /// A call triggered from inside a skill.
    Skill,
    /// A call issued by the runtime itself (scheduled jobs, maintenance).
    System,
}

/// Overall posture of the access policy.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    /// Classify commands, then require approval for anything unsafe.
    #[default]
    Allowlist,
    /// Auto-approve classified commands. Origin deny lists and hard
    /// `requires_approval` flags still apply.
    Full,
}

/// Operating systems a capability can declare support for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linux,
    Macos,
    Windows,
}

impl Platform {
    /// The platform this process is running on.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::Macos
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }

    /// All known platforms, for capabilities with no OS restriction.
    pub const ALL: &'static [Platform] = &[Platform::Linux, Platform::Macos, Platform::Windows];
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn origin_defaults_to_user() {
        assert_eq!(Origin::default(), Origin::User);
    }

    #[test]
    fn origin_display_and_parse_round_trip() {
        for origin in [
            Origin::User,
            Origin::Agent,
            Origin::Plugin,
            Origin::Skill,
            Origin::System,
        ] {
            let s = origin.to_string();
            assert_eq!(Origin::from_str(&s).unwrap(), origin);
        }
        assert_eq!(Origin::Agent.to_string(), "agent");
    }

    #[test]
    fn access_level_parses_lowercase() {
        assert_eq!(AccessLevel::from_str("allowlist").unwrap(), AccessLevel::Allowlist);
        assert_eq!(AccessLevel::from_str("full").unwrap(), AccessLevel::Full);
        assert!(AccessLevel::from_str("root").is_err());
    }

    #[test]
    fn platform_all_covers_current() {
        assert!(Platform::ALL.contains(&Platform::current()));
    }

    #[test]
    fn request_ids_are_unique() {
        assert_ne!(RequestId::generate(), RequestId::generate());
    }

    #[test]
    fn origin_serde_uses_lowercase() {
        let json = serde_json::to_string(&Origin::Agent).unwrap();
        assert_eq!(json, "\"agent\"");
        let parsed: Origin = serde_json::from_str("\"skill\"").unwrap();
        assert_eq!(parsed, Origin::Skill);
    }
}
