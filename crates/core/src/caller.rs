// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Caller identity: who submitted a job.
//!
//! Identity is opaque to this library. A collaborator supplies it via
//! [`IdentityProvider`]; the engine only stamps it on new jobs and uses
//! it to scope `list_running`.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Opaque identity of an invoking principal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallerId(SmolStr);

impl CallerId {
    pub fn new(id: impl Into<SmolStr>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CallerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CallerId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CallerId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Supplies the identity of the current caller.
pub trait IdentityProvider: Send + Sync {
    fn current(&self) -> CallerId;
}

/// Fixed identity, for hosts with a single principal and for tests.
#[derive(Debug, Clone)]
pub struct StaticIdentity(CallerId);

impl StaticIdentity {
    pub fn new(id: impl Into<CallerId>) -> Self {
        Self(id.into())
    }
}

impl IdentityProvider for StaticIdentity {
    fn current(&self) -> CallerId {
        self.0.clone()
    }
}

#[cfg(test)]
#[path = "caller_tests.rs"]
mod tests;
