// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job runner: launches computations on background tasks and drives
//! their terminal transition.

use crate::error::EngineError;
use crate::registry::JobRegistry;
use mj_core::{Clock, FailureInfo, Job, JobDraft, JobStatus, ResultPayload};
use mj_storage::Persistence;
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// A user-supplied computation: an owned future resolving to either the
/// value to store or a structured failure description.
pub trait Computation: Future<Output = Result<Value, FailureInfo>> + Send + 'static {}

impl<F> Computation for F where F: Future<Output = Result<Value, FailureInfo>> + Send + 'static {}

/// Starts computations and owns their completion path.
pub struct JobRunner<C: Clock> {
    store: Arc<dyn Persistence>,
    registry: Arc<JobRegistry>,
    clock: C,
}

impl<C: Clock> JobRunner<C> {
    pub fn new(store: Arc<dyn Persistence>, registry: Arc<JobRegistry>, clock: C) -> Self {
        Self {
            store,
            registry,
            clock,
        }
    }

    /// Persist a new `Running` job and launch its computation on a
    /// background task. Returns as soon as the record exists and the
    /// task is registered; the caller never waits on the computation.
    pub async fn start(
        &self,
        draft: JobDraft,
        computation: impl Computation,
    ) -> Result<Job, EngineError> {
        let job = self.store.insert(draft, self.clock.epoch_ms()).await?;

        let token = CancellationToken::new();
        self.registry.put(job.id.clone(), token.clone());
        tracing::info!(job = %job.id, kind = %job.kind, "job launched");

        let store = Arc::clone(&self.store);
        let registry = Arc::clone(&self.registry);
        let clock = self.clock.clone();
        let id = job.id.clone();
        tokio::spawn(async move {
            let outcome = tokio::select! {
                // The cancel path owns the status write and has already
                // pulled the handle; just stop computing.
                _ = token.cancelled() => {
                    tracing::info!(job = %id, "computation canceled");
                    return;
                }
                outcome = computation => outcome,
            };

            let (status, payload) = match outcome {
                Ok(value) => (JobStatus::Done, ResultPayload::Success(value)),
                Err(failure) => {
                    tracing::info!(job = %id, error = %failure, "computation failed");
                    (JobStatus::Error, ResultPayload::Failure(failure))
                }
            };

            // Persist first, deregister second. The reverse order would
            // let a concurrent cancel grab the handle and race the
            // terminal write. The window where the record is terminal
            // but the handle still present is benign: cancel on a
            // terminal job is a no-op.
            match store
                .record_outcome(&id, status, payload, clock.epoch_ms())
                .await
            {
                Ok(job) => {
                    tracing::info!(job = %id, status = %job.status, "job finished");
                    registry.remove(&id);
                }
                Err(e) => {
                    // Not retried; the job stays `running` and its handle
                    // stays registered, so it can still be canceled.
                    tracing::error!(job = %id, error = %e, "failed to persist job outcome");
                }
            }
        });

        Ok(job)
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
