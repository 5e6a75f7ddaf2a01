// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Tracking token resolution against an in-memory record store.

use guardia_tracker::db::{tables, MemoryStore};
use guardia_tracker::error::AppError;
use guardia_tracker::services::{FixedGeolocator, ShiftInitiator, ShiftResolver};
use std::sync::Arc;

mod common;

fn resolver(store: &Arc<MemoryStore>) -> ShiftResolver {
    ShiftResolver::new(store.clone(), "https://www.google.com")
}

#[tokio::test]
async fn test_unknown_token_is_not_found() {
    let store = Arc::new(MemoryStore::new());

    let err = resolver(&store)
        .resolve_shift("does-not-exist")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound));
    assert_eq!(store.select_count(), 1);
}

#[tokio::test]
async fn test_active_shift_view() {
    let store = Arc::new(MemoryStore::new());
    common::seed_shift(&store, "tok-active", "active");

    let view = resolver(&store).resolve_shift("tok-active").await.unwrap();

    assert_eq!(view.status_label, "ACTIVE");
    assert_eq!(view.status.as_str(), "active");
    assert!(view.is_active);
    assert_eq!(view.start_latitude, 40.4168);
    assert_eq!(view.start_longitude, -3.7038);
    assert!(view.map_url.contains("q=40.4168,-3.7038"));

    // Stored value is untouched.
    assert_eq!(store.rows(tables::GUARDIAS)[0]["estado"], "active");
}

#[tokio::test]
async fn test_token_match_is_exact() {
    let store = Arc::new(MemoryStore::new());
    common::seed_shift(&store, "Tok-Case", "activo");

    let resolver = resolver(&store);
    assert!(resolver.resolve_shift("Tok-Case").await.is_ok());
    assert!(matches!(
        resolver.resolve_shift("tok-case").await,
        Err(AppError::NotFound)
    ));
    assert!(matches!(
        resolver.resolve_shift(" Tok-Case").await,
        Err(AppError::NotFound)
    ));
}

#[tokio::test]
async fn test_store_failure_is_lookup_failed() {
    let store = Arc::new(MemoryStore::failing("connection reset"));

    let err = resolver(&store).resolve_shift("anything").await.unwrap_err();

    match err {
        AppError::LookupFailed(msg) => assert_eq!(msg, "connection reset"),
        other => panic!("expected LookupFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_started_shift_resolves_by_its_token() {
    let store = Arc::new(MemoryStore::new());
    let geo = FixedGeolocator::at(-34.6037, -58.3816);

    let started = ShiftInitiator::new(store.clone(), "http://localhost:8080")
        .start_shift(Some(&geo))
        .await
        .unwrap();
    let view = resolver(&store)
        .resolve_shift(&started.tracking_token)
        .await
        .unwrap();

    assert!(view.is_active);
    assert_eq!(view.status_label, "ACTIVO");
    assert_eq!(view.map_url, "https://www.google.com/maps?q=-34.6037,-58.3816");
}
