// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Freshness policy: is a past result still usable?
//!
//! A result's time-to-live is proportional to how long the job took:
//! `ttl = (updated_at - created_at) * ttl_ratio`. The result is fresh
//! while its age (`now - updated_at`) is within that ttl. An
//! instantaneous job therefore gets a zero ttl and is fresh only at the
//! instant it finished; that is intended behavior, not a defect.
//!
//! Callers must not evaluate a job that is still running; the cache
//! resolver short-circuits those before consulting this policy.

use mj_core::Job;

/// Decide whether `job`'s result is still within its ttl at `now_ms`.
pub fn is_fresh(job: &Job, ttl_ratio: f64, now_ms: u64) -> bool {
    let ttl_ms = job.duration_ms() as f64 * ttl_ratio;
    let age_ms = now_ms.saturating_sub(job.updated_at_ms);
    age_ms as f64 <= ttl_ms
}

#[cfg(test)]
#[path = "freshness_tests.rs"]
mod tests;
