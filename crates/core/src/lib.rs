// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! mj-core: Domain types for the memojob compute-caching library

pub mod caller;
pub mod clock;
pub mod context;
pub mod job;
pub mod result;
pub mod settings;

pub use caller::{CallerId, IdentityProvider, StaticIdentity};
pub use clock::{Clock, FakeClock, SystemClock};
pub use context::ContextKey;
pub use job::{Job, JobDraft, JobId, JobStatus};
pub use result::{FailureInfo, JobResult, Permanence, ResultPayload};
pub use settings::{CacheSettings, Settings, SettingsError};
