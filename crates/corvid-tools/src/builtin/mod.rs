// SPDX-FileCopyrightText: 2026 Corvid Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in tools for the Corvid agent runtime.
//!
//! Registration is explicit: [`builtin_capabilities`] returns the ordered
//! descriptor list the host passes to the catalog build, together with each
//! tool's platform set and category.

pub mod browser;
pub mod exec;
pub mod file;
pub mod memory;
pub mod schedule;

pub use browser::BrowserTool;
pub use exec::ExecTool;
pub use file::FileTool;
pub use memory::MemoryTool;
pub use schedule::ScheduleTool;

use std::sync::Arc;

use corvid_core::Platform;
use corvid_core::traits::{BrowserDriver, MemoryBackend, SchedulerBackend};

use crate::capability::{Capability, Category};

/// The ordered built-in capability list.
///
/// `exec` runs through `bash -c` and is therefore not declared for Windows;
/// the catalog build drops it there. `browser` is desktop category and gets
/// serialized through the desktop lane when one is attached.
pub fn builtin_capabilities(
    scheduler: Arc<dyn SchedulerBackend>,
    memory: Arc<dyn MemoryBackend>,
    browser: Arc<dyn BrowserDriver>,
) -> Vec<Capability> {
    vec![
        Capability::new(Arc::new(ExecTool), Category::Exec)
            .on_platforms(&[Platform::Linux, Platform::Macos]),
        Capability::new(Arc::new(FileTool), Category::Files),
        Capability::new(Arc::new(BrowserTool::new(browser)), Category::Browser),
        Capability::new(Arc::new(ScheduleTool::new(scheduler)), Category::Schedule),
        Capability::new(Arc::new(MemoryTool::new(memory)), Category::Memory),
    ]
}
