// SPDX-FileCopyrightText: 2026 Corvid Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./corvid.toml` > `~/.config/corvid/corvid.toml` >
//! `/etc/corvid/corvid.toml`, with environment variable overrides via the
//! `CORVID_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::CorvidConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/corvid/corvid.toml` (system-wide)
/// 3. `~/.config/corvid/corvid.toml` (user XDG config)
/// 4. `./corvid.toml` (local directory)
/// 5. `CORVID_*` environment variables
pub fn load_config() -> Result<CorvidConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(CorvidConfig::default()))
        .merge(Toml::file("/etc/corvid/corvid.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("corvid/corvid.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("corvid.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from an inline TOML string only (no XDG lookup).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<CorvidConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(CorvidConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<CorvidConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(CorvidConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` so underscore-containing
/// key names stay unambiguous: `CORVID_LIMITS_MAX_RESULT_CHARS` must map to
/// `limits.max_result_chars`, not `limits.max.result.chars`.
fn env_provider() -> Env {
    Env::prefixed("CORVID_").map(|key| {
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("runtime_", "runtime.", 1)
            .replacen("access_", "access.", 1)
            .replacen("limits_", "limits.", 1);
        mapped.into()
    })
}
