// SPDX-FileCopyrightText: 2026 Corvid Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration for the Corvid agent runtime.
//!
//! TOML model structs plus a Figment-based layered loader (system, XDG
//! user, local directory, `CORVID_` environment overrides).

pub mod loader;
pub mod model;

pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{AccessConfig, CorvidConfig, DenyConfig, LimitsConfig, RuntimeConfig};
