// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn put_get_remove() {
    let registry = JobRegistry::new();
    let id = JobId::new();
    let token = CancellationToken::new();

    assert!(!registry.contains(&id));
    registry.put(id.clone(), token.clone());
    assert!(registry.contains(&id));
    assert_eq!(registry.len(), 1);

    // get() clones; the entry stays.
    assert!(registry.get(&id).is_some());
    assert!(registry.contains(&id));

    assert!(registry.remove(&id).is_some());
    assert!(registry.is_empty());
}

#[test]
fn remove_yields_token_once() {
    let registry = JobRegistry::new();
    let id = JobId::new();
    registry.put(id.clone(), CancellationToken::new());

    assert!(registry.remove(&id).is_some());
    assert!(registry.remove(&id).is_none());
}

#[test]
fn cloned_token_observes_cancellation() {
    let registry = JobRegistry::new();
    let id = JobId::new();
    let token = CancellationToken::new();
    registry.put(id.clone(), token.clone());

    let held = registry.remove(&id).unwrap();
    held.cancel();
    assert!(token.is_cancelled());
}

#[test]
fn independent_entries() {
    let registry = JobRegistry::new();
    let a = JobId::new();
    let b = JobId::new();
    registry.put(a.clone(), CancellationToken::new());
    registry.put(b.clone(), CancellationToken::new());

    registry.remove(&a);
    assert!(!registry.contains(&a));
    assert!(registry.contains(&b));
}
