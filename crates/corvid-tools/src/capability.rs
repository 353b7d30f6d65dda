// SPDX-FileCopyrightText: 2026 Corvid Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability descriptors and the platform-gated catalog.
//!
//! A capability pairs one tool with the platforms it runs on and a display
//! category. Registration is explicit and ordered: a startup routine
//! collects descriptors into a `Vec` and builds the catalog in one pass, so
//! boot order is deterministic and testable. After the build, the catalog
//! is read-only for the process lifetime.

use std::collections::HashMap;
use std::sync::Arc;

use corvid_core::Platform;
use tracing::{debug, warn};

use crate::tool::Tool;

/// Display category of a capability.
///
/// `Browser` and `Desktop` form the fixed desktop-category set: tools that
/// drive a shared screen/mouse/keyboard or a shared browser window, and
/// must therefore be serialized through the desktop lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Exec,
    Files,
    Browser,
    Desktop,
    Schedule,
    Memory,
}

impl Category {
    /// Whether tools in this category share one exclusive OS UI surface.
    pub fn requires_desktop_lane(&self) -> bool {
        matches!(self, Category::Browser | Category::Desktop)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Exec => write!(f, "exec"),
            Category::Files => write!(f, "files"),
            Category::Browser => write!(f, "browser"),
            Category::Desktop => write!(f, "desktop"),
            Category::Schedule => write!(f, "schedule"),
            Category::Memory => write!(f, "memory"),
        }
    }
}

/// A registration record pairing a tool with its supported platforms and
/// category. Immutable once created.
pub struct Capability {
    pub tool: Arc<dyn Tool>,
    pub platforms: &'static [Platform],
    pub category: Category,
}

impl Capability {
    /// A capability available on every platform.
    pub fn new(tool: Arc<dyn Tool>, category: Category) -> Self {
        Self {
            tool,
            platforms: Platform::ALL,
            category,
        }
    }

    /// Restricts the capability to the given platforms.
    pub fn on_platforms(mut self, platforms: &'static [Platform]) -> Self {
        self.platforms = platforms;
        self
    }
}

/// One live entry in the catalog.
pub struct CatalogEntry {
    pub tool: Arc<dyn Tool>,
    pub category: Category,
}

/// The process-wide set of tools available this run, keyed by name.
///
/// Built once at startup from the registered capabilities, filtered to the
/// current operating system.
pub struct CapabilityCatalog {
    entries: HashMap<String, CatalogEntry>,
}

impl CapabilityCatalog {
    /// Filters the registered capabilities to those supporting `platform`
    /// and indexes them by tool name.
    ///
    /// Registering the same name twice is a configuration error, not a
    /// crash: the last registration wins and the collision is logged.
    pub fn build(capabilities: Vec<Capability>, platform: Platform) -> Self {
        let mut entries: HashMap<String, CatalogEntry> = HashMap::new();
        for capability in capabilities {
            if !capability.platforms.contains(&platform) {
                debug!(
                    tool = %capability.tool.name(),
                    platform = %platform,
                    "skipping capability not supported on this platform"
                );
                continue;
            }
            let name = capability.tool.name().to_string();
            if entries.contains_key(&name) {
                warn!(
                    tool = %name,
                    "duplicate capability registration, keeping the later one"
                );
            }
            entries.insert(
                name,
                CatalogEntry {
                    tool: capability.tool,
                    category: capability.category,
                },
            );
        }
        Self { entries }
    }

    /// Looks up a live tool by name.
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.get(name)
    }

    /// Returns (name, description, category) for all live tools, sorted by
    /// name.
    pub fn list(&self) -> Vec<(&str, &str, Category)> {
        let mut rows: Vec<(&str, &str, Category)> = self
            .entries
            .values()
            .map(|e| (e.tool.name(), e.tool.description(), e.category))
            .collect();
        rows.sort_by_key(|(name, _, _)| *name);
        rows
    }

    /// Returns Anthropic-format tool definitions for all live tools.
    ///
    /// Each definition has the shape:
    /// ```json
    /// {
    ///   "name": "tool_name",
    ///   "description": "What the tool does",
    ///   "input_schema": { ... JSON Schema ... }
    /// }
    /// ```
    pub fn tool_definitions(&self) -> Vec<serde_json::Value> {
        let mut defs: Vec<serde_json::Value> = self
            .entries
            .values()
            .map(|e| {
                serde_json::json!({
                    "name": e.tool.name(),
                    "description": e.tool.description(),
                    "input_schema": e.tool.parameters_schema(),
                })
            })
            .collect();
        defs.sort_by(|a, b| {
            a["name"]
                .as_str()
                .unwrap_or("")
                .cmp(b["name"].as_str().unwrap_or(""))
        });
        defs
    }

    /// Number of live tools.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the catalog holds no tools.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use corvid_core::{CorvidError, RequestContext};

    use super::*;
    use crate::tool::ToolOutput;

    struct NamedTool {
        name: &'static str,
        description: &'static str,
    }

    #[async_trait]
    impl Tool for NamedTool {
        fn name(&self) -> &str {
            self.name
        }

        fn description(&self) -> &str {
            self.description
        }

        fn parameters_schema(&self) -> serde_json::Value {
            serde_json::json!({"type": "object", "properties": {}})
        }

        async fn invoke(
            &self,
            _ctx: &RequestContext,
            _input: serde_json::Value,
        ) -> Result<ToolOutput, CorvidError> {
            Ok(ToolOutput::ok(self.name))
        }
    }

    fn capability(name: &'static str, category: Category) -> Capability {
        Capability::new(
            Arc::new(NamedTool {
                name,
                description: "test tool",
            }),
            category,
        )
    }

    #[test]
    fn build_filters_by_platform() {
        let caps = vec![
            capability("everywhere", Category::Files),
            capability("mac-only", Category::Desktop)
                .on_platforms(&[Platform::Macos]),
        ];
        let catalog = CapabilityCatalog::build(caps, Platform::Linux);
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("everywhere").is_some());
        assert!(catalog.get("mac-only").is_none());
    }

    #[test]
    #[tracing_test::traced_test]
    fn duplicate_registration_keeps_last() {
        let caps = vec![
            Capability::new(
                Arc::new(NamedTool {
                    name: "dup",
                    description: "first",
                }),
                Category::Files,
            ),
            Capability::new(
                Arc::new(NamedTool {
                    name: "dup",
                    description: "second",
                }),
                Category::Exec,
            ),
        ];
        let catalog = CapabilityCatalog::build(caps, Platform::current());
        assert_eq!(catalog.len(), 1);
        let entry = catalog.get("dup").unwrap();
        assert_eq!(entry.tool.description(), "second");
        assert_eq!(entry.category, Category::Exec);
        assert!(logs_contain("duplicate capability registration"));
    }

    #[test]
    fn list_is_sorted_by_name() {
        let caps = vec![
            capability("zeta", Category::Files),
            capability("alpha", Category::Exec),
        ];
        let catalog = CapabilityCatalog::build(caps, Platform::current());
        let rows = catalog.list();
        assert_eq!(rows[0].0, "alpha");
        assert_eq!(rows[1].0, "zeta");
    }

    #[test]
    fn tool_definitions_are_sorted_and_complete() {
        let caps = vec![
            capability("zeta", Category::Files),
            capability("alpha", Category::Exec),
        ];
        let catalog = CapabilityCatalog::build(caps, Platform::current());
        let defs = catalog.tool_definitions();
        assert_eq!(defs.len(), 2);
        assert_eq!(defs[0]["name"], "alpha");
        assert_eq!(defs[1]["name"], "zeta");
        assert!(defs[0]["input_schema"].is_object());
    }

    #[test]
    fn desktop_lane_categories_are_browser_and_desktop() {
        assert!(Category::Browser.requires_desktop_lane());
        assert!(Category::Desktop.requires_desktop_lane());
        assert!(!Category::Exec.requires_desktop_lane());
        assert!(!Category::Files.requires_desktop_lane());
        assert!(!Category::Schedule.requires_desktop_lane());
        assert!(!Category::Memory.requires_desktop_lane());
    }
}
