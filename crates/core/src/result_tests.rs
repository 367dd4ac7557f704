// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serde_json::json;

#[test]
fn success_payload_accessors() {
    let payload = ResultPayload::Success(json!({"rows": 3}));
    assert!(payload.is_success());
    assert_eq!(payload.as_success(), Some(&json!({"rows": 3})));
    assert!(payload.as_failure().is_none());
}

#[test]
fn failure_payload_accessors() {
    let payload = ResultPayload::Failure(FailureInfo::new("boom"));
    assert!(!payload.is_success());
    assert!(payload.as_success().is_none());
    assert_eq!(payload.as_failure().map(|f| f.message.as_str()), Some("boom"));
}

#[test]
fn failure_serializes_without_empty_detail() {
    let encoded = serde_json::to_value(FailureInfo::new("boom")).unwrap();
    assert_eq!(encoded, json!({"message": "boom"}));

    let encoded =
        serde_json::to_value(FailureInfo::with_detail("boom", json!({"code": 7}))).unwrap();
    assert_eq!(encoded, json!({"message": "boom", "detail": {"code": 7}}));
}

#[test]
fn payload_tagging_snake_case() {
    let encoded = serde_json::to_value(ResultPayload::Success(json!(1))).unwrap();
    assert_eq!(encoded, json!({"success": 1}));
}

#[test]
fn temporary_result() {
    let result = JobResult::temporary("job-1".into(), ResultPayload::Success(json!(true)));
    assert_eq!(result.permanence, Permanence::Temporary);
    assert_eq!(result.job_id, "job-1");
}

#[test]
fn permanence_serde() {
    assert_eq!(
        serde_json::to_string(&Permanence::Temporary).unwrap(),
        "\"temporary\""
    );
    let parsed: Permanence = serde_json::from_str("\"permanent\"").unwrap();
    assert_eq!(parsed, Permanence::Permanent);
}
