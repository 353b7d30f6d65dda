// SPDX-FileCopyrightText: 2026 Corvid Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in browser tool over the shared browser window.
//!
//! Desktop category: the driver owns one real window, so the registry
//! serializes this tool through the desktop lane when one is attached.

use std::sync::Arc;

use async_trait::async_trait;
use corvid_core::traits::{BrowserDriver, TabInfo};
use corvid_core::{CorvidError, RequestContext};
use serde_json::Value;

use crate::args;
use crate::strap::{self, ResourceSpec, Routed};
use crate::tool::{DomainTool, Tool, ToolOutput};

const RESOURCES: &[ResourceSpec] = &[
    ResourceSpec {
        name: "tab",
        aliases: &["window"],
        actions: &["open", "list", "focus", "close"],
    },
    ResourceSpec {
        name: "page",
        aliases: &["document"],
        actions: &["navigate", "snapshot", "links"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BrowserOp {
    TabOpen,
    TabList,
    TabFocus,
    TabClose,
    PageNavigate,
    PageSnapshot,
    PageLinks,
}

impl BrowserOp {
    fn from_routed(routed: Routed) -> Option<Self> {
        match (routed.resource, routed.action) {
            ("tab", "open") => Some(BrowserOp::TabOpen),
            ("tab", "list") => Some(BrowserOp::TabList),
            ("tab", "focus") => Some(BrowserOp::TabFocus),
            ("tab", "close") => Some(BrowserOp::TabClose),
            ("page", "navigate") => Some(BrowserOp::PageNavigate),
            ("page", "snapshot") => Some(BrowserOp::PageSnapshot),
            ("page", "links") => Some(BrowserOp::PageLinks),
            _ => None,
        }
    }
}

/// Drives the shared browser window through the host's driver.
pub struct BrowserTool {
    driver: Arc<dyn BrowserDriver>,
    description: String,
}

impl BrowserTool {
    pub fn new(driver: Arc<dyn BrowserDriver>) -> Self {
        Self {
            driver,
            description: format!(
                "Drive the shared browser window; {}",
                strap::describe(RESOURCES)
            ),
        }
    }

    fn render_tab(tab: &TabInfo) -> String {
        let marker = if tab.active { "*" } else { " " };
        format!("{marker} {} '{}' {}", tab.id, tab.title, tab.url)
    }
}

#[async_trait]
impl Tool for BrowserTool {
    fn name(&self) -> &str {
        "browser"
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn parameters_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "resource": {
                    "type": "string",
                    "enum": ["tab", "page"],
                    "description": "Target resource; inferred when the action is unambiguous"
                },
                "action": {
                    "type": "string",
                    "enum": ["open", "list", "focus", "close", "navigate", "snapshot", "links"],
                    "description": "The operation to perform"
                },
                "url": {
                    "type": "string",
                    "description": "URL (required for open and navigate)"
                },
                "id": {
                    "type": "string",
                    "description": "Tab id (required for focus and close)"
                }
            },
            "required": ["action"]
        })
    }

    async fn invoke(
        &self,
        _ctx: &RequestContext,
        input: Value,
    ) -> Result<ToolOutput, CorvidError> {
        let routed = strap::route_payload(self.domain(), RESOURCES, &input)?;
        let op = BrowserOp::from_routed(routed).ok_or_else(|| {
            CorvidError::Internal(format!(
                "routed pair ({}, {}) has no browser handler",
                routed.resource, routed.action
            ))
        })?;

        match op {
            BrowserOp::TabOpen => {
                let url = args::required_str(&input, "url")?;
                let tab = self.driver.open_tab(url).await?;
                Ok(ToolOutput::ok(format!("Opened {}", Self::render_tab(&tab))))
            }
            BrowserOp::TabList => {
                let tabs = self.driver.list_tabs().await?;
                if tabs.is_empty() {
                    return Ok(ToolOutput::ok("No open tabs"));
                }
                let rendered: Vec<String> = tabs.iter().map(Self::render_tab).collect();
                Ok(ToolOutput::ok(rendered.join("\n")))
            }
            BrowserOp::TabFocus => {
                let id = args::required_str(&input, "id")?;
                let tab = self.driver.focus_tab(id).await?;
                Ok(ToolOutput::ok(format!("Focused {}", Self::render_tab(&tab))))
            }
            BrowserOp::TabClose => {
                let id = args::required_str(&input, "id")?;
                if self.driver.close_tab(id).await? {
                    Ok(ToolOutput::ok(format!("Closed tab {id}")))
                } else {
                    Ok(ToolOutput::error(format!("No tab with id {id}")))
                }
            }
            BrowserOp::PageNavigate => {
                let url = args::required_str(&input, "url")?;
                let title = self.driver.navigate(url).await?;
                Ok(ToolOutput::ok(format!("Navigated to '{title}'")))
            }
            BrowserOp::PageSnapshot => {
                let text = self.driver.snapshot().await?;
                Ok(ToolOutput::ok(text))
            }
            BrowserOp::PageLinks => {
                let links = self.driver.links().await?;
                if links.is_empty() {
                    return Ok(ToolOutput::ok("No links on the current page"));
                }
                Ok(ToolOutput::ok(links.join("\n")))
            }
        }
    }
}

impl DomainTool for BrowserTool {
    fn domain(&self) -> &str {
        "browser"
    }

    fn resources(&self) -> &'static [ResourceSpec] {
        RESOURCES
    }
}
