// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! mj-engine: Asynchronous job execution with freshness-based result
//! reuse.
//!
//! Submissions run on background tokio tasks while the caller gets a job
//! id back immediately. When caching is enabled, a submission whose
//! canonical context matches a recent job is resolved to that job instead
//! of recomputing. In-flight work is tracked in a [`JobRegistry`] of
//! cancellation tokens, the only process-wide mutable state.

pub mod error;
pub mod freshness;
pub mod registry;
pub mod resolver;
pub mod runner;
pub mod service;

pub use error::EngineError;
pub use freshness::is_fresh;
pub use registry::JobRegistry;
pub use resolver::CacheResolver;
pub use runner::{Computation, JobRunner};
pub use service::{JobOutcome, JobService};
