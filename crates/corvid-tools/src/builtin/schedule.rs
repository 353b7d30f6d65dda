// SPDX-FileCopyrightText: 2026 Corvid Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in scheduling tool over the external cron-like engine.
//!
//! A thin wrapper: the engine behind [`SchedulerBackend`] owns the actual
//! scheduling; this tool only routes (resource, action) pairs to it.

use std::sync::Arc;

use async_trait::async_trait;
use corvid_core::traits::{JobInfo, JobSpec, RunRecord, SchedulerBackend};
use corvid_core::{CorvidError, RequestContext};
use serde_json::Value;

use crate::args;
use crate::strap::{self, ResourceSpec, Routed};
use crate::tool::{DomainTool, Tool, ToolOutput};

const RESOURCES: &[ResourceSpec] = &[
    ResourceSpec {
        name: "job",
        aliases: &["cron", "routine", "task"],
        actions: &["create", "list", "pause", "resume", "delete", "run"],
    },
    ResourceSpec {
        name: "history",
        aliases: &["runs", "log"],
        actions: &["list"],
    },
];

/// Closed set of operations behind the routing tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScheduleOp {
    JobCreate,
    JobList,
    JobPause,
    JobResume,
    JobDelete,
    JobRun,
    HistoryList,
}

impl ScheduleOp {
    fn from_routed(routed: Routed) -> Option<Self> {
        match (routed.resource, routed.action) {
            ("job", "create") => Some(ScheduleOp::JobCreate),
            ("job", "list") => Some(ScheduleOp::JobList),
            ("job", "pause") => Some(ScheduleOp::JobPause),
            ("job", "resume") => Some(ScheduleOp::JobResume),
            ("job", "delete") => Some(ScheduleOp::JobDelete),
            ("job", "run") => Some(ScheduleOp::JobRun),
            ("history", "list") => Some(ScheduleOp::HistoryList),
            _ => None,
        }
    }
}

/// Manages scheduled jobs through the host's scheduling engine.
pub struct ScheduleTool {
    backend: Arc<dyn SchedulerBackend>,
    description: String,
}

impl ScheduleTool {
    pub fn new(backend: Arc<dyn SchedulerBackend>) -> Self {
        Self {
            backend,
            description: format!(
                "Manage scheduled jobs and their run history; {}",
                strap::describe(RESOURCES)
            ),
        }
    }

    fn render_job(job: &JobInfo) -> String {
        let state = if job.paused { "paused" } else { "active" };
        let next = job
            .next_run
            .map(|t| t.to_rfc3339())
            .unwrap_or_else(|| "-".to_string());
        format!(
            "{} [{}] '{}' schedule='{}' next={}",
            job.id, state, job.name, job.schedule, next
        )
    }

    fn render_run(run: &RunRecord) -> String {
        let outcome = if run.ok { "ok" } else { "failed" };
        format!(
            "{} at {} [{}] {}",
            run.job_id,
            run.started_at.to_rfc3339(),
            outcome,
            run.detail
        )
    }
}

#[async_trait]
impl Tool for ScheduleTool {
    fn name(&self) -> &str {
        "schedule"
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
                    "enum": ["job", "history"],
                    "description": "Target resource; inferred when the action is unambiguous"
                },
                "action": {
                    "type": "string",
                    "enum": ["create", "list", "pause", "resume", "delete", "run"],
                    "description": "The operation to perform"
                },
                "id": {
                    "type": "string",
                    "description": "Job id (required for pause/resume/delete/run, optional filter for history list)"
                },
                "name": {
                    "type": "string",
                    "description": "Job name (required for create)"
                },
                "schedule": {
                    "type": "string",
                    "description": "Cron expression (required for create)"
                },
                "payload": {
                    "type": "string",
                    "description": "Prompt or command delivered when the job fires (required for create)"
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
        let op = ScheduleOp::from_routed(routed).ok_or_else(|| {
            CorvidError::Internal(format!(
                "routed pair ({}, {}) has no schedule handler",
                routed.resource, routed.action
            ))
        })?;

        match op {
            ScheduleOp::JobCreate => {
                let spec = JobSpec {
                    name: args::required_str(&input, "name")?.to_string(),
                    schedule: args::required_str(&input, "schedule")?.to_string(),
                    payload: args::required_str(&input, "payload")?.to_string(),
                };
                let job = self.backend.create(spec).await?;
                Ok(ToolOutput::ok(format!("Created {}", Self::render_job(&job))))
            }
            ScheduleOp::JobList => {
                let jobs = self.backend.list().await?;
                if jobs.is_empty() {
                    return Ok(ToolOutput::ok("No scheduled jobs"));
                }
                let rendered: Vec<String> = jobs.iter().map(Self::render_job).collect();
                Ok(ToolOutput::ok(rendered.join("\n")))
            }
            ScheduleOp::JobPause | ScheduleOp::JobResume => {
                let id = args::required_str(&input, "id")?;
                let paused = op == ScheduleOp::JobPause;
                let job = self.backend.set_paused(id, paused).await?;
                Ok(ToolOutput::ok(Self::render_job(&job)))
            }
            ScheduleOp::JobDelete => {
                let id = args::required_str(&input, "id")?;
                if self.backend.delete(id).await? {
                    Ok(ToolOutput::ok(format!("Deleted job {id}")))
                } else {
                    Ok(ToolOutput::error(format!("No job with id {id}")))
                }
            }
            ScheduleOp::JobRun => {
                let id = args::required_str(&input, "id")?;
                let run = self.backend.run_now(id).await?;
                Ok(ToolOutput::ok(Self::render_run(&run)))
            }
            ScheduleOp::HistoryList => {
                let job_id = args::optional_str(&input, "id");
                let runs = self.backend.runs(job_id).await?;
                if runs.is_empty() {
                    return Ok(ToolOutput::ok("No run history"));
                }
                let rendered: Vec<String> = runs.iter().map(Self::render_run).collect();
                Ok(ToolOutput::ok(rendered.join("\n")))
            }
        }
    }
}

impl DomainTool for ScheduleTool {
    fn domain(&self) -> &str {
        "schedule"
    }

    fn resources(&self) -> &'static [ResourceSpec] {
        RESOURCES
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use corvid_core::SessionId;
    use tokio::sync::Mutex;

    use super::*;

    /// In-memory engine standing in for the external scheduler.
    #[derive(Default)]
    struct FakeScheduler {
        jobs: Mutex<Vec<JobInfo>>,
        runs: Mutex<Vec<RunRecord>>,
    }

    #[async_trait]
    impl SchedulerBackend for FakeScheduler {
        async fn create(&self, spec: JobSpec) -> Result<JobInfo, CorvidError> {
            let mut jobs = self.jobs.lock().await;
            let job = JobInfo {
                id: format!("job-{}", jobs.len() + 1),
                name: spec.name,
                schedule: spec.schedule,
                paused: false,
                next_run: None,
            };
            jobs.push(job.clone());
            Ok(job)
        }

        async fn list(&self) -> Result<Vec<JobInfo>, CorvidError> {
            Ok(self.jobs.lock().await.clone())
        }

        async fn set_paused(&self, id: &str, paused: bool) -> Result<JobInfo, CorvidError> {
            let mut jobs = self.jobs.lock().await;
            let job = jobs
                .iter_mut()
                .find(|j| j.id == id)
                .ok_or_else(|| CorvidError::backend(format!("no job {id}")))?;
            job.paused = paused;
            Ok(job.clone())
        }

        async fn delete(&self, id: &str) -> Result<bool, CorvidError> {
            let mut jobs = self.jobs.lock().await;
            let before = jobs.len();
            jobs.retain(|j| j.id != id);
            Ok(jobs.len() != before)
        }

        async fn run_now(&self, id: &str) -> Result<RunRecord, CorvidError> {
            let record = RunRecord {
                job_id: id.to_string(),
                started_at: Utc::now(),
                ok: true,
                detail: "manual run".to_string(),
            };
            self.runs.lock().await.push(record.clone());
            Ok(record)
        }

        async fn runs(&self, job_id: Option<&str>) -> Result<Vec<RunRecord>, CorvidError> {
            let runs = self.runs.lock().await;
            Ok(runs
                .iter()
                .filter(|r| job_id.is_none_or(|id| r.job_id == id))
                .cloned()
                .collect())
        }
    }

    fn tool() -> ScheduleTool {
        ScheduleTool::new(Arc::new(FakeScheduler::default()))
    }

    fn ctx() -> RequestContext {
        RequestContext::new(SessionId("schedule-test".to_string()))
    }

    #[tokio::test]
    async fn create_then_list_jobs() {
        let tool = tool();
        let create = serde_json::json!({
            "resource": "job",
            "action": "create",
            "name": "morning-brief",
            "schedule": "0 7 * * *",
            "payload": "summarize my inbox"
        });
        let output = tool.invoke(&ctx(), create).await.unwrap();
        assert!(!output.is_error);
        assert!(output.content.contains("morning-brief"));

        let list = serde_json::json!({"resource": "job", "action": "list"});
        let output = tool.invoke(&ctx(), list).await.unwrap();
        assert!(output.content.contains("job-1"));
        assert!(output.content.contains("0 7 * * *"));
    }

    #[tokio::test]
    async fn alias_resource_routes_to_job() {
        let tool = tool();
        let input = serde_json::json!({
            "resource": "cron",
            "action": "create",
            "name": "n",
            "schedule": "* * * * *",
            "payload": "p"
        });
        let output = tool.invoke(&ctx(), input).await.unwrap();
        assert!(!output.is_error);
    }

    #[tokio::test]
    async fn unambiguous_action_runs_without_resource() {
        let tool = tool();
        let input = serde_json::json!({
            "action": "create",
            "name": "n",
            "schedule": "* * * * *",
            "payload": "p"
        });
        let output = tool.invoke(&ctx(), input).await.unwrap();
        assert!(!output.is_error);
    }

    #[tokio::test]
    async fn ambiguous_list_without_resource_is_rejected() {
        let tool = tool();
        // "list" belongs to both job and history.
        let input = serde_json::json!({"action": "list"});
        let err = tool.invoke(&ctx(), input).await.unwrap_err();
        assert!(err.to_string().contains("ambiguous"));
    }

    #[tokio::test]
    async fn pause_resume_round_trip() {
        let tool = tool();
        let create = serde_json::json!({
            "action": "create", "name": "n", "schedule": "* * * * *", "payload": "p"
        });
        tool.invoke(&ctx(), create).await.unwrap();

        let pause = serde_json::json!({"action": "pause", "id": "job-1"});
        let output = tool.invoke(&ctx(), pause).await.unwrap();
        assert!(output.content.contains("[paused]"));

        let resume = serde_json::json!({"action": "resume", "id": "job-1"});
        let output = tool.invoke(&ctx(), resume).await.unwrap();
        assert!(output.content.contains("[active]"));
    }

    #[tokio::test]
    async fn delete_missing_job_is_error_output() {
        let tool = tool();
        let input = serde_json::json!({"action": "delete", "id": "job-99"});
        let output = tool.invoke(&ctx(), input).await.unwrap();
        assert!(output.is_error);
        assert!(output.content.contains("job-99"));
    }

    #[tokio::test]
    async fn run_then_history_list() {
        let tool = tool();
        let create = serde_json::json!({
            "action": "create", "name": "n", "schedule": "* * * * *", "payload": "p"
        });
        tool.invoke(&ctx(), create).await.unwrap();
        tool.invoke(&ctx(), serde_json::json!({"action": "run", "id": "job-1"}))
            .await
            .unwrap();

        let history = serde_json::json!({"resource": "history", "action": "list"});
        let output = tool.invoke(&ctx(), history).await.unwrap();
        assert!(output.content.contains("job-1"));
        assert!(output.content.contains("manual run"));
    }

    #[test]
    fn declared_actions_match_dispatcher() {
        // Every routable pair must resolve to an operation.
        let tool = tool();
        for spec in tool.resources() {
            for action in spec.actions {
                let routed = strap::route("schedule", RESOURCES, Some(spec.name), action).unwrap();
                assert!(
                    ScheduleOp::from_routed(routed).is_some(),
                    "undispatched pair ({}, {action})",
                    spec.name
                );
            }
        }
    }
}
