// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Registry of live job handles.
//!
//! Maps a running job's id to the cancellation token of its background
//! task. Entries exist only between launch and terminal transition (or
//! cancel); nothing here is persisted, so jobs from a previous process
//! are never present and cannot be interrupted.
//!
//! This is an explicit component owned by whatever hosts the job system,
//! not a process singleton — construct one per [`JobService`] instance.
//!
//! [`JobService`]: crate::service::JobService

use mj_core::JobId;
use parking_lot::Mutex;
use std::collections::HashMap;
use tokio_util::sync::CancellationToken;

/// Process-local table of cancellable job handles.
#[derive(Default)]
pub struct JobRegistry {
    live: Mutex<HashMap<JobId, CancellationToken>>,
}

impl JobRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the handle for a freshly launched job.
    pub fn put(&self, id: JobId, token: CancellationToken) {
        self.live.lock().insert(id, token);
    }

    /// Remove and return a job's handle. Whoever gets the token owns the
    /// terminal transition for status purposes.
    pub fn remove(&self, id: &JobId) -> Option<CancellationToken> {
        self.live.lock().remove(id)
    }

    /// A clone of the job's handle, without removing it.
    pub fn get(&self, id: &JobId) -> Option<CancellationToken> {
        self.live.lock().get(id).cloned()
    }

    pub fn contains(&self, id: &JobId) -> bool {
        self.live.lock().contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.live.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.lock().is_empty()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
