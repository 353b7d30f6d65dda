// SPDX-FileCopyrightText: 2026 Corvid Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Boundary trait for the shared browser surface.
//!
//! The driver owns one real browser window. Because that window is a shared,
//! exclusive OS resource, the tool wrapping this trait is desktop-category
//! and is serialized through the desktop lane; no other code path may touch
//! the window directly.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CorvidError;

/// One open tab as reported by the driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabInfo {
    pub id: String,
    pub title: String,
    pub url: String,
    pub active: bool,
}

/// Interface to the browser automation driver.
#[async_trait]
pub trait BrowserDriver: Send + Sync {
    /// Opens a new tab at the given URL and makes it active.
    async fn open_tab(&self, url: &str) -> Result<TabInfo, CorvidError>;

    /// Lists all open tabs.
    async fn list_tabs(&self) -> Result<Vec<TabInfo>, CorvidError>;

    /// Makes the given tab active. Errors if it does not exist.
    async fn focus_tab(&self, id: &str) -> Result<TabInfo, CorvidError>;

    /// Closes a tab. Returns false if it was already gone.
    async fn close_tab(&self, id: &str) -> Result<bool, CorvidError>;

    /// Navigates the active tab and returns the resulting page title.
    async fn navigate(&self, url: &str) -> Result<String, CorvidError>;

    /// Returns a text snapshot of the active tab's content.
    async fn snapshot(&self) -> Result<String, CorvidError>;

    /// Returns the link URLs present on the active tab.
    async fn links(&self) -> Result<Vec<String>, CorvidError>;
}
