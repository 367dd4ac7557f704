// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Storage errors.

use mj_core::JobId;
use thiserror::Error;

/// Errors a persistence backend can report.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("job not found: {0}")]
    NotFound(JobId),
    #[error("result already exists for job: {0}")]
    DuplicateResult(JobId),
    /// Backend-specific failure (I/O, connection, transaction).
    #[error("storage backend error: {0}")]
    Backend(String),
}
