// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Canonical context keys for cache matching.
//!
//! The caller-supplied description of "what to compute" is free-form JSON.
//! Two submissions must produce the same key if and only if they describe
//! the same computation, so the key is a deterministic encoding: object
//! keys sorted recursively, array order preserved, scalars in compact
//! `serde_json` form.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Canonicalized description of a computation's inputs.
///
/// Used as the exact-match cache key and persisted verbatim on the job
/// record. Construction is the only place canonicalization happens; the
/// stored form is compared byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextKey(String);

impl ContextKey {
    /// Canonicalize a JSON value into a context key.
    pub fn new(value: &Value) -> Self {
        let mut out = String::new();
        write_canonical(value, &mut out);
        Self(out)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContextKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&Value> for ContextKey {
    fn from(value: &Value) -> Self {
        Self::new(value)
    }
}

/// Append the canonical encoding of `value` to `out`.
///
/// Scalars delegate to `serde_json`'s compact `Display` (which also
/// handles string escaping); containers are written structurally so that
/// object keys can be emitted in sorted order.
fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            out.push('{');
            for (i, key) in keys.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&Value::String((*key).clone()).to_string());
                out.push(':');
                if let Some(child) = map.get(*key) {
                    write_canonical(child, out);
                }
            }
            out.push('}');
        }
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        scalar => out.push_str(&scalar.to_string()),
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
