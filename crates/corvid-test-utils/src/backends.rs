// SPDX-FileCopyrightText: 2026 Corvid Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory backends standing in for the external engines.

use async_trait::async_trait;
use chrono::Utc;
use corvid_core::CorvidError;
use corvid_core::traits::{
    JobInfo, JobSpec, MemoryBackend, MemoryNote, RunRecord, SchedulerBackend,
};
use tokio::sync::Mutex;

/// Scheduler engine backed by plain vectors.
#[derive(Default)]
pub struct InMemoryScheduler {
    jobs: Mutex<Vec<JobInfo>>,
    runs: Mutex<Vec<RunRecord>>,
}

impl InMemoryScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SchedulerBackend for InMemoryScheduler {
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

/// Memory store backed by a plain vector with substring recall.
#[derive(Default)]
pub struct InMemoryMemory {
    notes: Mutex<Vec<MemoryNote>>,
}

impl InMemoryMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MemoryBackend for InMemoryMemory {
    async fn store(&self, text: &str) -> Result<MemoryNote, CorvidError> {
        let mut notes = self.notes.lock().await;
        let note = MemoryNote {
            id: format!("note-{}", notes.len() + 1),
            text: text.to_string(),
            created_at: Utc::now(),
        };
        notes.push(note.clone());
        Ok(note)
    }

    async fn recall(&self, query: &str, limit: usize) -> Result<Vec<MemoryNote>, CorvidError> {
        let notes = self.notes.lock().await;
        Ok(notes
            .iter()
            .filter(|n| n.text.to_lowercase().contains(&query.to_lowercase()))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn forget(&self, id: &str) -> Result<bool, CorvidError> {
        let mut notes = self.notes.lock().await;
        let before = notes.len();
        notes.retain(|n| n.id != id);
        Ok(notes.len() != before)
    }

    async fn list(&self) -> Result<Vec<MemoryNote>, CorvidError> {
        let mut notes = self.notes.lock().await.clone();
        notes.reverse();
        Ok(notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scheduler_create_list_delete() {
        let scheduler = InMemoryScheduler::new();
        let job = scheduler
            .create(JobSpec {
                name: "n".to_string(),
                schedule: "* * * * *".to_string(),
                payload: "p".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(scheduler.list().await.unwrap().len(), 1);
        assert!(scheduler.delete(&job.id).await.unwrap());
        assert!(!scheduler.delete(&job.id).await.unwrap());
    }

    #[tokio::test]
    async fn memory_recall_is_case_insensitive() {
        let memory = InMemoryMemory::new();
        memory.store("The Wifi password is hunter2").await.unwrap();
        let hits = memory.recall("wifi", 5).await.unwrap();
        assert_eq!(hits.len(), 1);
    }
}
