// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn defaults_enable_caching() {
    let settings = CacheSettings::default();
    assert!(settings.caching_enabled());
    assert_eq!(settings.ttl_ratio(), 1.0);
}

#[test]
fn from_toml_full() {
    let settings = CacheSettings::from_toml(
        r#"
caching_enabled = true
ttl_ratio = 2.5
"#,
    )
    .unwrap();
    assert!(settings.caching_enabled());
    assert_eq!(settings.ttl_ratio(), 2.5);
}

#[test]
fn from_toml_applies_defaults() {
    let settings = CacheSettings::from_toml("caching_enabled = false\n").unwrap();
    assert!(!settings.caching_enabled());
    assert_eq!(settings.ttl_ratio(), 1.0);
}

#[test]
fn from_toml_rejects_unknown_fields() {
    assert!(CacheSettings::from_toml("ttl = 3\n").is_err());
}

#[test]
fn negative_ttl_ratio_rejected() {
    let err = CacheSettings::new(true, -0.5).unwrap_err();
    assert!(matches!(err, SettingsError::NegativeTtlRatio(_)));

    let err = CacheSettings::from_toml("ttl_ratio = -1.0\n").unwrap_err();
    assert!(matches!(err, SettingsError::NegativeTtlRatio(_)));
}

#[test]
fn zero_ratio_is_valid() {
    let settings = CacheSettings::new(true, 0.0).unwrap();
    assert_eq!(settings.ttl_ratio(), 0.0);
}

#[test]
fn disabled_settings() {
    let settings = CacheSettings::disabled();
    assert!(!settings.caching_enabled());
}

#[test]
fn toml_round_trip() {
    let settings = CacheSettings::new(true, 2.0).unwrap();
    let text = toml::to_string(&settings).unwrap();
    assert_eq!(CacheSettings::from_toml(&text).unwrap(), settings);
}
