// SPDX-FileCopyrightText: 2026 Corvid Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Boundary traits for external collaborators.
//!
//! The engines behind these traits (cron-like scheduler, memory store,
//! browser/desktop driver) live outside the dispatch core. Tools wrap them
//! thinly; the runtime only ever sees these interfaces.

pub mod browser;
pub mod memory;
pub mod scheduler;

pub use browser::{BrowserDriver, TabInfo};
pub use memory::{MemoryBackend, MemoryNote};
pub use scheduler::{JobInfo, JobSpec, RunRecord, SchedulerBackend};
