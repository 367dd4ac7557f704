// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Engine errors.

use mj_storage::StoreError;
use thiserror::Error;

/// Errors surfaced by the job facade.
///
/// The computation itself never fails a submit call; its errors are
/// captured as the job's stored failure payload.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}
