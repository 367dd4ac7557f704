// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Persistence contracts required from the job and result stores.
//!
//! The engine does not persist anything itself; it drives these traits.
//! Implementations supply their own atomicity: per-method writes must be
//! indivisible, and [`Persistence::record_outcome`] must commit the
//! result insert and the terminal status update together.

use crate::error::StoreError;
use async_trait::async_trait;
use mj_core::{CallerId, ContextKey, Job, JobDraft, JobId, JobResult, JobStatus, ResultPayload};

/// Durable storage of job records.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Insert a new job in `Running` status, assigning its id and
    /// timestamps from `now_ms`.
    async fn insert(&self, draft: JobDraft, now_ms: u64) -> Result<Job, StoreError>;

    async fn get(&self, id: &JobId) -> Result<Option<Job>, StoreError>;

    /// The most recently updated job whose context equals `context` and
    /// whose status is not `Error`. Jobs in any other status qualify,
    /// including `Running`.
    async fn latest_by_context(&self, context: &ContextKey) -> Result<Option<Job>, StoreError>;

    /// All jobs owned by `creator` with exactly the given status.
    async fn list_by_creator(
        &self,
        creator: &CallerId,
        status: JobStatus,
    ) -> Result<Vec<Job>, StoreError>;

    /// Move a job to a terminal status, advancing `updated_at_ms` to
    /// `now_ms`. Compare-and-set: if the job is already terminal the call
    /// is a no-op and returns the stored record unchanged — a job never
    /// leaves a terminal status.
    async fn mark_terminal(
        &self,
        id: &JobId,
        status: JobStatus,
        now_ms: u64,
    ) -> Result<Job, StoreError>;
}

/// Durable storage of job results.
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Insert a result. At most one result may exist per job.
    async fn insert_result(&self, result: JobResult) -> Result<(), StoreError>;

    async fn fetch_result(&self, job_id: &JobId) -> Result<Option<JobResult>, StoreError>;
}

/// Combined store with the atomic completion write the runner needs.
#[async_trait]
pub trait Persistence: JobStore + ResultStore {
    /// Insert a temporary-retention result and mark the job terminal as
    /// one atomic write: a reader never observes a `done`/`error` job
    /// without its result. If the job is already terminal (a cancel won
    /// the race), both writes are skipped and the stored record is
    /// returned unchanged.
    async fn record_outcome(
        &self,
        id: &JobId,
        status: JobStatus,
        payload: ResultPayload,
        now_ms: u64,
    ) -> Result<Job, StoreError>;
}
