// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job results: the stored outcome of a completed or failed job.

use crate::job::JobId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Retention class for a stored result.
///
/// Opaque to the engine, which only ever writes `Temporary`; retention
/// enforcement belongs to the result store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permanence {
    Temporary,
    Permanent,
}

/// Structured description of a failed computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureInfo {
    pub message: String,
    /// Optional machine-readable detail supplied by the computation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,
}

impl FailureInfo {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            detail: None,
        }
    }

    pub fn with_detail(message: impl Into<String>, detail: Value) -> Self {
        Self {
            message: message.into(),
            detail: Some(detail),
        }
    }
}

impl std::fmt::Display for FailureInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Payload of a stored result: either the computation's return value or
/// a structured error description, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultPayload {
    Success(Value),
    Failure(FailureInfo),
}

impl ResultPayload {
    pub fn is_success(&self) -> bool {
        matches!(self, ResultPayload::Success(_))
    }

    /// Returns the success value if this is a success payload.
    pub fn as_success(&self) -> Option<&Value> {
        match self {
            ResultPayload::Success(value) => Some(value),
            ResultPayload::Failure(_) => None,
        }
    }

    /// Returns the failure description if this is a failure payload.
    pub fn as_failure(&self) -> Option<&FailureInfo> {
        match self {
            ResultPayload::Failure(info) => Some(info),
            ResultPayload::Success(_) => None,
        }
    }
}

/// Outcome of a job. At most one exists per job, created atomically with
/// the job's terminal status update. Jobs that were canceled (or are
/// still running) have none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobResult {
    pub job_id: JobId,
    pub permanence: Permanence,
    pub payload: ResultPayload,
}

impl JobResult {
    /// Build the temporary-retention result the engine writes.
    pub fn temporary(job_id: JobId, payload: ResultPayload) -> Self {
        Self {
            job_id,
            permanence: Permanence::Temporary,
            payload,
        }
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
