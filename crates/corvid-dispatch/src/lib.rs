// SPDX-FileCopyrightText: 2026 Corvid Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The Corvid dispatch pipeline.
//!
//! Everything a tool call passes through regardless of which tool it
//! targets: the access policy (level, per-origin deny lists, command
//! classifier), the human approval gate, the desktop lane serializing
//! shared-UI tools, and the registry tying the gates together.

pub mod approval;
pub mod classifier;
pub mod lane;
pub mod policy;
pub mod registry;

pub use approval::{ApprovalBroker, ApprovalHook, AutoApprove, PendingApproval};
pub use classifier::{Classification, CommandClassifier, CommandSafety};
pub use lane::DesktopLane;
pub use policy::{AccessPolicy, PolicyHandle};
pub use registry::{DEFAULT_MAX_RESULT_CHARS, Registry, TRUNCATION_MARKER};
