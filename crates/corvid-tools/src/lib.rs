// SPDX-FileCopyrightText: 2026 Corvid Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tool contracts, capability catalog, STRAP routing, and built-in tools
//! for the Corvid agent runtime.
//!
//! A tool is registered as a [`Capability`] (tool + platform set + display
//! category); the [`CapabilityCatalog`] filters registrations to the current
//! OS at boot. Domain tools share one resource/action routing convention in
//! [`strap`], so a dozen unrelated tools validate and self-describe the same
//! way.

pub mod args;
pub mod builtin;
pub mod capability;
pub mod strap;
pub mod tool;

pub use capability::{Capability, CapabilityCatalog, CatalogEntry, Category};
pub use strap::{ResourceSpec, Routed};
pub use tool::{DomainTool, Tool, ToolCall, ToolOutput};
