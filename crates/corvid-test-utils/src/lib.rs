// SPDX-FileCopyrightText: 2026 Corvid Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Corvid integration tests.
//!
//! Provides mock tools, scripted approval hooks, and in-memory backends for
//! fast, deterministic, CI-runnable tests without external services.
//!
//! # Components
//!
//! - [`tools`] - mock tools (recording, counting, barrier, panicking, ...)
//! - [`approvals`] - scripted and never-answering approval hooks
//! - [`backends`] - in-memory scheduler and memory store

pub mod approvals;
pub mod backends;
pub mod tools;

pub use approvals::{NeverApprove, ScriptedApproval};
pub use backends::{InMemoryMemory, InMemoryScheduler};
pub use tools::{BarrierTool, BigOutputTool, CountingTool, FailTool, PanicTool, RecordingTool};
