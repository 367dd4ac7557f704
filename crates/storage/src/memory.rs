// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory reference backend.
//!
//! One mutex over both tables, so every trait method — including the
//! combined write in `record_outcome` — is a single critical section.
//! Suitable for tests and single-process hosts; durable backends replace
//! this with their own transactions.

use crate::error::StoreError;
use crate::store::{JobStore, Persistence, ResultStore};
use async_trait::async_trait;
use mj_core::{CallerId, ContextKey, Job, JobDraft, JobId, JobResult, JobStatus, ResultPayload};
use parking_lot::Mutex;
use std::collections::HashMap;

#[derive(Default)]
struct Inner {
    /// Insertion-ordered so that `latest_by_context` ties on
    /// `updated_at_ms` break toward the most recently inserted job.
    jobs: Vec<Job>,
    results: HashMap<JobId, JobResult>,
}

impl Inner {
    fn job_mut(&mut self, id: &JobId) -> Result<&mut Job, StoreError> {
        self.jobs
            .iter_mut()
            .find(|job| &job.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }
}

/// In-memory job and result store.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored jobs (for tests and diagnostics).
    pub fn job_count(&self) -> usize {
        self.inner.lock().jobs.len()
    }
}

#[async_trait]
impl JobStore for MemoryStore {
    async fn insert(&self, draft: JobDraft, now_ms: u64) -> Result<Job, StoreError> {
        let job = Job::new(draft, now_ms);
        self.inner.lock().jobs.push(job.clone());
        Ok(job)
    }

    async fn get(&self, id: &JobId) -> Result<Option<Job>, StoreError> {
        Ok(self
            .inner
            .lock()
            .jobs
            .iter()
            .find(|job| &job.id == id)
            .cloned())
    }

    async fn latest_by_context(&self, context: &ContextKey) -> Result<Option<Job>, StoreError> {
        let inner = self.inner.lock();
        let mut latest: Option<&Job> = None;
        for job in &inner.jobs {
            if job.status == JobStatus::Error || &job.context != context {
                continue;
            }
            // Later insertion wins ties (>=), matching descending-order,
            // limit-one queries on a real backend.
            if latest.is_none_or(|best| job.updated_at_ms >= best.updated_at_ms) {
                latest = Some(job);
            }
        }
        Ok(latest.cloned())
    }

    async fn list_by_creator(
        &self,
        creator: &CallerId,
        status: JobStatus,
    ) -> Result<Vec<Job>, StoreError> {
        Ok(self
            .inner
            .lock()
            .jobs
            .iter()
            .filter(|job| &job.creator == creator && job.status == status)
            .cloned()
            .collect())
    }

    async fn mark_terminal(
        &self,
        id: &JobId,
        status: JobStatus,
        now_ms: u64,
    ) -> Result<Job, StoreError> {
        let mut inner = self.inner.lock();
        let job = inner.job_mut(id)?;
        if job.is_terminal() {
            tracing::debug!(job = %id, current = %job.status, "terminal status unchanged");
            return Ok(job.clone());
        }
        job.status = status;
        job.updated_at_ms = now_ms;
        Ok(job.clone())
    }
}

#[async_trait]
impl ResultStore for MemoryStore {
    async fn insert_result(&self, result: JobResult) -> Result<(), StoreError> {
        let mut inner = self.inner.lock();
        if inner.results.contains_key(&result.job_id) {
            return Err(StoreError::DuplicateResult(result.job_id));
        }
        inner.results.insert(result.job_id.clone(), result);
        Ok(())
    }

    async fn fetch_result(&self, job_id: &JobId) -> Result<Option<JobResult>, StoreError> {
        Ok(self.inner.lock().results.get(job_id).cloned())
    }
}

#[async_trait]
impl Persistence for MemoryStore {
    async fn record_outcome(
        &self,
        id: &JobId,
        status: JobStatus,
        payload: ResultPayload,
        now_ms: u64,
    ) -> Result<Job, StoreError> {
        let mut inner = self.inner.lock();
        let current = inner.job_mut(id)?.clone();
        if current.is_terminal() {
            // Cancel won the race; the computed result is discarded.
            tracing::debug!(job = %id, current = %current.status, "outcome dropped, job already terminal");
            return Ok(current);
        }
        if inner.results.contains_key(id) {
            return Err(StoreError::DuplicateResult(id.clone()));
        }
        inner
            .results
            .insert(id.clone(), JobResult::temporary(id.clone(), payload));
        let job = inner.job_mut(id)?;
        job.status = status;
        job.updated_at_ms = now_ms;
        Ok(job.clone())
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
