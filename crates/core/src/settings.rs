// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime settings for result reuse.
//!
//! Hosts that carry live configuration implement [`Settings`];
//! [`CacheSettings`] is the plain TOML-backed form for everything else.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Settings the engine consults on every cache lookup.
pub trait Settings: Send + Sync {
    /// When false, every submission computes fresh.
    fn caching_enabled(&self) -> bool;

    /// Non-negative multiplier applied to a job's duration to derive its
    /// result's time-to-live. Zero disables reuse entirely.
    fn ttl_ratio(&self) -> f64;
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("ttl_ratio must be non-negative, got {0}")]
    NegativeTtlRatio(f64),
    #[error("invalid settings: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Static cache settings, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CacheSettings {
    #[serde(default = "default_caching_enabled")]
    pub caching_enabled: bool,
    #[serde(default = "default_ttl_ratio")]
    pub ttl_ratio: f64,
}

fn default_caching_enabled() -> bool {
    true
}

fn default_ttl_ratio() -> f64 {
    1.0
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            caching_enabled: default_caching_enabled(),
            ttl_ratio: default_ttl_ratio(),
        }
    }
}

impl CacheSettings {
    pub fn new(caching_enabled: bool, ttl_ratio: f64) -> Result<Self, SettingsError> {
        let settings = Self {
            caching_enabled,
            ttl_ratio,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Parse and validate settings from a TOML document.
    pub fn from_toml(text: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Caching disabled, for hosts that always want fresh computation.
    pub fn disabled() -> Self {
        Self {
            caching_enabled: false,
            ttl_ratio: 0.0,
        }
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.ttl_ratio < 0.0 || self.ttl_ratio.is_nan() {
            return Err(SettingsError::NegativeTtlRatio(self.ttl_ratio));
        }
        Ok(())
    }
}

impl Settings for CacheSettings {
    fn caching_enabled(&self) -> bool {
        self.caching_enabled
    }

    fn ttl_ratio(&self) -> f64 {
        self.ttl_ratio
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
