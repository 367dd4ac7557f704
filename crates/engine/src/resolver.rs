// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cache resolution: find a prior job that can stand in for a new
//! submission.

use crate::error::EngineError;
use crate::freshness::is_fresh;
use mj_core::{ContextKey, Job, Settings};
use mj_storage::Persistence;
use std::sync::Arc;

/// Read-only lookup of reusable prior jobs.
#[derive(Clone)]
pub struct CacheResolver {
    store: Arc<dyn Persistence>,
    settings: Arc<dyn Settings>,
}

impl CacheResolver {
    pub fn new(store: Arc<dyn Persistence>, settings: Arc<dyn Settings>) -> Self {
        Self { store, settings }
    }

    /// The most recent non-error job for `context`, if it can be reused.
    ///
    /// A running match is returned as-is: identical work is already in
    /// flight, and the freshness policy never evaluates a running job. A
    /// terminal match is returned only while fresh. Staleness is not an
    /// error, just a miss.
    pub async fn resolve(
        &self,
        context: &ContextKey,
        now_ms: u64,
    ) -> Result<Option<Job>, EngineError> {
        if !self.settings.caching_enabled() {
            return Ok(None);
        }
        let Some(job) = self.store.latest_by_context(context).await? else {
            return Ok(None);
        };
        if job.is_running() {
            tracing::debug!(job = %job.id, "cache hit: identical job in flight");
            return Ok(Some(job));
        }
        if is_fresh(&job, self.settings.ttl_ratio(), now_ms) {
            tracing::debug!(job = %job.id, status = %job.status, "cache hit: fresh result");
            Ok(Some(job))
        } else {
            tracing::debug!(job = %job.id, "cache miss: stale result");
            Ok(None)
        }
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
