// SPDX-FileCopyrightText: 2026 Corvid Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for config loading and layering.

use corvid_config::{load_config_from_path, load_config_from_str};

#[test]
fn empty_config_yields_defaults() {
    let config = load_config_from_str("").expect("empty config should load");
    assert_eq!(config.runtime.name, "corvid");
    assert_eq!(config.access.level, "allowlist");
    assert_eq!(config.limits.max_result_chars, 100_000);
    assert_eq!(config.limits.lane_queue_depth, 32);
}

#[test]
fn partial_section_keeps_other_defaults() {
    let config = load_config_from_str(
        r#"
        [access]
        level = "full"
        "#,
    )
    .expect("config should load");
    assert_eq!(config.access.level, "full");
    // Untouched sections keep their defaults.
    assert_eq!(config.limits.max_result_chars, 100_000);
    assert!(config.access.deny.agent.contains(&"exec".to_string()));
}

#[test]
fn deny_lists_are_overridable_per_origin() {
    let config = load_config_from_str(
        r#"
        [access.deny]
        agent = ["exec", "browser", "schedule"]
        skill = ["exec"]
        "#,
    )
    .expect("config should load");
    assert_eq!(config.access.deny.agent.len(), 3);
    assert_eq!(config.access.deny.skill, vec!["exec".to_string()]);
    assert!(config.access.deny.plugin.is_empty());
}

#[test]
fn unknown_keys_are_rejected() {
    let result = load_config_from_str(
        r#"
        [limits]
        max_result_chars = 5000
        max_result_bytes = 5000
        "#,
    );
    assert!(result.is_err(), "unknown key should be a startup error");
}

#[test]
fn limits_are_overridable() {
    let config = load_config_from_str(
        r#"
        [limits]
        max_result_chars = 2048
        lane_queue_depth = 4
        "#,
    )
    .expect("config should load");
    assert_eq!(config.limits.max_result_chars, 2048);
    assert_eq!(config.limits.lane_queue_depth, 4);
}

#[test]
fn config_loads_from_file_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corvid.toml");
    std::fs::write(
        &path,
        r#"
        [runtime]
        name = "corvid-test"

        [access]
        safe_commands = ["jq"]
        "#,
    )
    .unwrap();

    let config = load_config_from_path(&path).expect("config should load from path");
    assert_eq!(config.runtime.name, "corvid-test");
    assert_eq!(config.access.safe_commands, vec!["jq".to_string()]);
}
