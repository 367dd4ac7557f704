// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job record and status state machine.

use crate::caller::CallerId;
use crate::context::ContextKey;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Unique identifier for a job.
///
/// Format is `job-{nanoid}` with a 19 character random suffix, assigned
/// by the job store at insert time. Total length fits `SmolStr` inline
/// capacity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(SmolStr);

impl JobId {
    pub const PREFIX: &'static str = "job-";

    /// Generate a new random ID with the type prefix.
    pub fn new() -> Self {
        Self(SmolStr::new(format!(
            "{}{}",
            Self::PREFIX,
            nanoid::nanoid!(19)
        )))
    }

    /// Create an ID from an existing string (for parsing/deserialization).
    pub fn from_string(id: impl Into<SmolStr>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for JobId {
    fn from(s: &str) -> Self {
        Self::from_string(s)
    }
}

impl From<String> for JobId {
    fn from(s: String) -> Self {
        Self::from_string(s)
    }
}

impl PartialEq<str> for JobId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for JobId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::borrow::Borrow<str> for JobId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Status of a job.
///
/// `Running` is the only non-terminal status. A job never re-enters
/// `Running` once it has left it; terminal statuses are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Computation is in flight (or was orphaned by a process restart)
    Running,
    /// Computation returned normally; a result is stored
    Done,
    /// Computation failed; a structured error description is stored
    Error,
    /// Canceled before completion; no result exists
    Canceled,
}

impl JobStatus {
    /// Check if this status is terminal (no further transitions).
    pub fn is_terminal(&self) -> bool {
        !matches!(self, JobStatus::Running)
    }

    pub fn is_running(&self) -> bool {
        matches!(self, JobStatus::Running)
    }

    /// Check if the computation ran to an outcome (done or error).
    pub fn is_done(&self) -> bool {
        matches!(self, JobStatus::Done | JobStatus::Error)
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            JobStatus::Running => "running",
            JobStatus::Done => "done",
            JobStatus::Error => "error",
            JobStatus::Canceled => "canceled",
        };
        write!(f, "{}", s)
    }
}

/// Parameters for a new job, before the store has assigned an id and
/// timestamps.
#[derive(Debug, Clone)]
pub struct JobDraft {
    pub creator: CallerId,
    pub kind: String,
    pub context: ContextKey,
}

impl JobDraft {
    pub fn new(creator: CallerId, kind: impl Into<String>, context: ContextKey) -> Self {
        Self {
            creator,
            kind: kind.into(),
            context,
        }
    }
}

/// One computation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    /// Identity of the submitting caller
    pub creator: CallerId,
    pub status: JobStatus,
    /// Tag distinguishing computation kinds (partitioning only)
    pub kind: String,
    /// Canonical key describing the computation's inputs
    pub context: ContextKey,
    pub created_at_ms: u64,
    /// Advances exactly once, at the terminal transition.
    pub updated_at_ms: u64,
}

impl Job {
    /// Create a job in `Running` status with a fresh id. Timestamps both
    /// start at `now_ms`; `updated_at_ms` moves only at the terminal
    /// transition.
    pub fn new(draft: JobDraft, now_ms: u64) -> Self {
        Self {
            id: JobId::new(),
            creator: draft.creator,
            status: JobStatus::Running,
            kind: draft.kind,
            context: draft.context,
            created_at_ms: now_ms,
            updated_at_ms: now_ms,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn is_running(&self) -> bool {
        self.status.is_running()
    }

    /// Check if the computation ran to an outcome (done or error).
    pub fn is_done(&self) -> bool {
        self.status.is_done()
    }

    /// Wall-clock time the computation took, in milliseconds. Zero while
    /// the job is still running.
    pub fn duration_ms(&self) -> u64 {
        self.updated_at_ms.saturating_sub(self.created_at_ms)
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
