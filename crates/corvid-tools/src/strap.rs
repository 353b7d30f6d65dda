// SPDX-FileCopyrightText: 2026 Corvid Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! STRAP: the shared resource/action routing convention for domain tools.
//!
//! Every domain tool receives one flat payload carrying an optional
//! `resource` and a required `action`. This module is the single routing
//! path for all of them: alias normalization, resource inference when the
//! action is unambiguous, and validation against the tool's declared
//! tables. A handler never sees a (resource, action) pair outside its
//! declared set.
//!
//! Language-model callers routinely omit the `resource` field or use a
//! synonym for it; routing here is what makes those loose calls resolve
//! deterministically instead of failing per-tool in a dozen slightly
//! different ways.

use corvid_core::CorvidError;
use serde_json::Value;

/// One resource of a domain tool: canonical name, accepted aliases, and the
/// closed set of actions it supports.
///
/// Tables are `'static`: a domain tool's routing surface is fixed at compile
/// time, and routed pairs borrow from it.
#[derive(Debug, Clone, Copy)]
pub struct ResourceSpec {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub actions: &'static [&'static str],
}

/// A validated (resource, action) pair, guaranteed to be in the tool's
/// declared tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Routed {
    pub resource: &'static str,
    pub action: &'static str,
}

/// Routes a payload's `resource`/`action` fields against the given tables.
///
/// Convenience wrapper over [`route`] for tools that take the raw JSON
/// payload.
pub fn route_payload(
    domain: &str,
    specs: &'static [ResourceSpec],
    input: &Value,
) -> Result<Routed, CorvidError> {
    let resource = input.get("resource").and_then(Value::as_str);
    let action = input
        .get("action")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            CorvidError::Validation(format!(
                "missing required 'action' parameter for '{domain}'; {}",
                describe(specs)
            ))
        })?;
    route(domain, specs, resource, action)
}

/// Routes an explicit (resource, action) pair against the given tables.
///
/// Steps, in order:
/// 1. alias normalization — map known synonyms to the canonical resource;
/// 2. resource inference — if `resource` is absent and `action` appears in
///    exactly one resource's action set, fill it in;
/// 3. validation — reject unknown pairs with an error enumerating the valid
///    sets, before any handler runs.
pub fn route(
    domain: &str,
    specs: &'static [ResourceSpec],
    resource: Option<&str>,
    action: &str,
) -> Result<Routed, CorvidError> {
    let action_norm = action.trim().to_ascii_lowercase();
    if action_norm.is_empty() {
        return Err(CorvidError::Validation(format!(
            "missing required 'action' parameter for '{domain}'; {}",
            describe(specs)
        )));
    }

    let resource_norm = resource
        .map(|r| r.trim().to_ascii_lowercase())
        .filter(|r| !r.is_empty());

    let spec = match resource_norm {
        Some(name) => canonicalize(specs, &name).ok_or_else(|| {
            CorvidError::Validation(format!(
                "unknown resource '{name}' for '{domain}'; valid resources: {}",
                resource_names(specs)
            ))
        })?,
        None => infer_resource(domain, specs, &action_norm)?,
    };

    let action_static = spec
        .actions
        .iter()
        .copied()
        .find(|a| *a == action_norm)
        .ok_or_else(|| {
            CorvidError::Validation(format!(
                "unknown action '{action_norm}' for '{domain}' resource '{}'; valid actions: {}",
                spec.name,
                spec.actions.join(", ")
            ))
        })?;

    Ok(Routed {
        resource: spec.name,
        action: action_static,
    })
}

/// Renders the full routing surface, for error messages and tool
/// descriptions: `resources: job (create, list, ...); history (list)`.
pub fn describe(specs: &[ResourceSpec]) -> String {
    let rendered: Vec<String> = specs
        .iter()
        .map(|spec| format!("{} ({})", spec.name, spec.actions.join(", ")))
        .collect();
    format!("resources: {}", rendered.join("; "))
}

/// All canonical resource names, in declaration order.
fn resource_names(specs: &[ResourceSpec]) -> String {
    specs
        .iter()
        .map(|spec| spec.name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Maps a normalized resource name (canonical or alias) to its spec.
fn canonicalize(specs: &'static [ResourceSpec], name: &str) -> Option<&'static ResourceSpec> {
    specs
        .iter()
        .find(|spec| spec.name == name || spec.aliases.contains(&name))
}

/// Infers the resource for an action that appears in exactly one resource's
/// action set.
fn infer_resource(
    domain: &str,
    specs: &'static [ResourceSpec],
    action: &str,
) -> Result<&'static ResourceSpec, CorvidError> {
    let mut matches = specs.iter().filter(|spec| spec.actions.contains(&action));
    match (matches.next(), matches.next()) {
        (Some(spec), None) => Ok(spec),
        (Some(first), Some(second)) => Err(CorvidError::Validation(format!(
            "action '{action}' for '{domain}' is ambiguous without a resource (matches '{}' and '{}'); pass 'resource' explicitly",
            first.name, second.name
        ))),
        (None, _) => Err(CorvidError::Validation(format!(
            "unknown action '{action}' for '{domain}'; {}",
            describe(specs)
        ))),
    }
}
