// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use mj_core::{CallerId, ContextKey, JobDraft, JobStatus};
use serde_json::json;

/// Job that ran from `created_ms` to `updated_ms` and completed.
fn finished_job(created_ms: u64, updated_ms: u64) -> Job {
    let mut job = Job::new(
        JobDraft::new(
            CallerId::new("u1"),
            "report",
            ContextKey::new(&json!({"q": 1})),
        ),
        created_ms,
    );
    job.status = JobStatus::Done;
    job.updated_at_ms = updated_ms;
    job
}

// t0 = 100_000ms; the job took 10s, so with ratio 2.0 the ttl is 20s.
#[yare::parameterized(
    at_completion      = { 110_000, true },
    age_under_ttl      = { 129_000, true },
    age_equals_ttl     = { 130_000, true },
    age_just_over_ttl  = { 131_000, false },
    long_stale         = { 500_000, false },
)]
fn ten_second_job_ratio_two(now_ms: u64, expected: bool) {
    let job = finished_job(100_000, 110_000);
    assert_eq!(is_fresh(&job, 2.0, now_ms), expected);
}

#[test]
fn zero_duration_job_is_fresh_only_at_its_own_instant() {
    let job = finished_job(100_000, 100_000);
    assert!(is_fresh(&job, 2.0, 100_000));
    assert!(!is_fresh(&job, 2.0, 100_001));
}

#[test]
fn zero_ratio_disables_reuse() {
    let job = finished_job(100_000, 110_000);
    assert!(!is_fresh(&job, 0.0, 110_001));
    // Still fresh at the exact completion instant (age 0 <= ttl 0).
    assert!(is_fresh(&job, 0.0, 110_000));
}

#[test]
fn fractional_ratio() {
    let job = finished_job(100_000, 110_000);
    assert!(is_fresh(&job, 0.5, 115_000));
    assert!(!is_fresh(&job, 0.5, 115_001));
}

#[test]
fn clock_behind_updated_at_counts_as_age_zero() {
    let job = finished_job(100_000, 110_000);
    assert!(is_fresh(&job, 0.0, 109_000));
}
