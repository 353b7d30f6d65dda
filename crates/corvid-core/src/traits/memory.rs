// SPDX-FileCopyrightText: 2026 Corvid Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Boundary trait for the persistent memory store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CorvidError;

/// A stored note as reported by the memory backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryNote {
    pub id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Interface to the memory store behind the `memory` tool.
#[async_trait]
pub trait MemoryBackend: Send + Sync {
    /// Stores a note and returns it with its assigned identity.
    async fn store(&self, text: &str) -> Result<MemoryNote, CorvidError>;

    /// Retrieves up to `limit` notes relevant to the query.
    async fn recall(&self, query: &str, limit: usize) -> Result<Vec<MemoryNote>, CorvidError>;

    /// Removes a note. Returns false if no such note existed.
    async fn forget(&self, id: &str) -> Result<bool, CorvidError>;

    /// Lists all stored notes, newest first.
    async fn list(&self) -> Result<Vec<MemoryNote>, CorvidError>;
}
