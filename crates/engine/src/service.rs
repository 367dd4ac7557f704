// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Public facade: submit, cancel, query outcome, list running jobs.

use crate::error::EngineError;
use crate::registry::JobRegistry;
use crate::resolver::CacheResolver;
use crate::runner::{Computation, JobRunner};
use mj_core::{
    CallerId, Clock, ContextKey, IdentityProvider, Job, JobDraft, JobId, JobStatus, ResultPayload,
    Settings,
};
use mj_storage::Persistence;
use serde_json::Value;
use std::sync::Arc;

/// What a caller sees when asking for a job's result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    /// The computation has not run to an outcome (running or canceled);
    /// only the status is reported.
    Pending { status: JobStatus },
    /// Done or error, with the stored payload.
    Finished {
        status: JobStatus,
        result: ResultPayload,
        created_at_ms: u64,
    },
    /// The job reports done/error but no result row exists. Surfaced as
    /// its own value instead of an error: it reflects a persistence
    /// inconsistency the caller cannot fix.
    Unavailable { status: JobStatus },
}

impl JobOutcome {
    pub fn status(&self) -> JobStatus {
        match self {
            JobOutcome::Pending { status }
            | JobOutcome::Finished { status, .. }
            | JobOutcome::Unavailable { status } => *status,
        }
    }

    /// Status label for callers that render the outcome, with the
    /// distinct marker for the missing-result case.
    pub fn status_label(&self) -> &'static str {
        match self {
            JobOutcome::Unavailable { .. } => "result_unavailable",
            JobOutcome::Pending { status } | JobOutcome::Finished { status, .. } => match status {
                JobStatus::Running => "running",
                JobStatus::Done => "done",
                JobStatus::Error => "error",
                JobStatus::Canceled => "canceled",
            },
        }
    }

    /// The stored payload, when finished.
    pub fn result(&self) -> Option<&ResultPayload> {
        match self {
            JobOutcome::Finished { result, .. } => Some(result),
            _ => None,
        }
    }
}

/// In-process job service.
///
/// Owns one [`JobRegistry`]; hosts construct one service per isolation
/// boundary (one per process in production, one per test).
pub struct JobService<C: Clock> {
    store: Arc<dyn Persistence>,
    registry: Arc<JobRegistry>,
    resolver: CacheResolver,
    runner: JobRunner<C>,
    identity: Arc<dyn IdentityProvider>,
    clock: C,
}

impl<C: Clock> JobService<C> {
    pub fn new(
        store: Arc<dyn Persistence>,
        settings: Arc<dyn Settings>,
        identity: Arc<dyn IdentityProvider>,
        clock: C,
    ) -> Self {
        let registry = Arc::new(JobRegistry::new());
        Self {
            resolver: CacheResolver::new(Arc::clone(&store), settings),
            runner: JobRunner::new(Arc::clone(&store), Arc::clone(&registry), clock.clone()),
            store,
            registry,
            identity,
            clock,
        }
    }

    /// Submit a computation described by `context`.
    ///
    /// When caching is enabled and a reusable prior job exists, that
    /// job's id is returned and nothing is launched. Otherwise a new job
    /// is created and the computation starts on a background task. Never
    /// fails because of the computation itself — failures surface later
    /// through [`JobService::outcome`].
    pub async fn submit(
        &self,
        kind: &str,
        context: &Value,
        computation: impl Computation,
    ) -> Result<JobId, EngineError> {
        let key = ContextKey::new(context);
        if let Some(job) = self.resolver.resolve(&key, self.clock.epoch_ms()).await? {
            tracing::info!(job = %job.id, "submission resolved to prior job");
            return Ok(job.id);
        }
        let draft = JobDraft::new(self.identity.current(), kind, key);
        let job = self.runner.start(draft, computation).await?;
        Ok(job.id)
    }

    /// Cancel a running job.
    ///
    /// No-op unless the caller's view of the job shows `running`. If this
    /// process holds the live handle it is removed and fired; the status
    /// write is a compare-and-set, so losing the race against natural
    /// completion never overwrites a terminal status. Jobs without a
    /// handle (resolved from cache, or orphaned by a restart) are still
    /// marked canceled if the store agrees they are running.
    pub async fn cancel(&self, job: &Job) -> Result<(), EngineError> {
        if !job.is_running() {
            return Ok(());
        }
        if let Some(token) = self.registry.remove(&job.id) {
            token.cancel();
        }
        let stored = self
            .store
            .mark_terminal(&job.id, JobStatus::Canceled, self.clock.epoch_ms())
            .await?;
        if stored.status == JobStatus::Canceled {
            tracing::info!(job = %job.id, "job canceled");
        }
        Ok(())
    }

    /// The caller-facing view of a job's result.
    pub async fn outcome(&self, job: &Job) -> Result<JobOutcome, EngineError> {
        if !job.is_done() {
            return Ok(JobOutcome::Pending { status: job.status });
        }
        match self.store.fetch_result(&job.id).await? {
            Some(result) => Ok(JobOutcome::Finished {
                status: job.status,
                result: result.payload,
                created_at_ms: job.created_at_ms,
            }),
            None => {
                tracing::warn!(job = %job.id, status = %job.status, "done job has no stored result");
                Ok(JobOutcome::Unavailable { status: job.status })
            }
        }
    }

    /// True iff the computation ran to an outcome (done or error).
    pub fn done(&self, job: &Job) -> bool {
        job.is_done()
    }

    pub fn running(&self, job: &Job) -> bool {
        job.is_running()
    }

    /// Jobs currently `running` for `creator`, defaulting to the current
    /// caller identity.
    pub async fn list_running(&self, creator: Option<&CallerId>) -> Result<Vec<Job>, EngineError> {
        let creator = match creator {
            Some(id) => id.clone(),
            None => self.identity.current(),
        };
        Ok(self
            .store
            .list_by_creator(&creator, JobStatus::Running)
            .await?)
    }

    /// Fetch a job record by id.
    pub async fn get(&self, id: &JobId) -> Result<Option<Job>, EngineError> {
        Ok(self.store.get(id).await?)
    }

    /// The live-handle registry (diagnostics and tests).
    pub fn registry(&self) -> &JobRegistry {
        &self.registry
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
