// SPDX-FileCopyrightText: 2026 Corvid Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Boundary trait for the cron-like scheduling engine.
//!
//! The scheduling algorithm itself is not part of the dispatch core; the
//! `schedule` tool talks to whatever engine the host wires in through this
//! interface.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CorvidError;

/// A request to create a scheduled job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSpec {
    /// Human-readable job name.
    pub name: String,
    /// Cron expression understood by the backing engine.
    pub schedule: String,
    /// The prompt or command delivered to the agent when the job fires.
    pub payload: String,
}

/// A scheduled job as reported by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobInfo {
    pub id: String,
    pub name: String,
    pub schedule: String,
    pub paused: bool,
    pub next_run: Option<DateTime<Utc>>,
}

/// One completed (or attempted) firing of a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    pub job_id: String,
    pub started_at: DateTime<Utc>,
    pub ok: bool,
    pub detail: String,
}

/// Interface to the scheduling engine.
#[async_trait]
pub trait SchedulerBackend: Send + Sync {
    /// Registers a new job and returns its assigned identity.
    async fn create(&self, spec: JobSpec) -> Result<JobInfo, CorvidError>;

    /// Lists all known jobs.
    async fn list(&self) -> Result<Vec<JobInfo>, CorvidError>;

    /// Pauses or resumes a job. Errors if the job does not exist.
    async fn set_paused(&self, id: &str, paused: bool) -> Result<JobInfo, CorvidError>;

    /// Deletes a job. Returns false if it was already gone.
    async fn delete(&self, id: &str) -> Result<bool, CorvidError>;

    /// Fires a job immediately, outside its schedule.
    async fn run_now(&self, id: &str) -> Result<RunRecord, CorvidError>;

    /// Run history, optionally filtered to a single job.
    async fn runs(&self, job_id: Option<&str>) -> Result<Vec<RunRecord>, CorvidError>;
}
