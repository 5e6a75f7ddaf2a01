// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Server-rendered page tests.

use axum::http::{header, StatusCode};
use guardia_tracker::db::MemoryStore;
use std::sync::Arc;
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_tracking_page_shows_shift() {
    let (app, _, store) = common::create_test_app();
    common::seed_shift(&store, "tok-page", "active");

    let response = app.oneshot(common::get("/track/tok-page")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    let html = common::body_text(response).await;
    assert!(html.contains("Seguimiento de Guardia"));
    assert!(html.contains("ACTIVE"));
    assert!(html.contains("status-active"));
    assert!(html.contains("40.4168"));
    assert!(html.contains("-3.7038"));
    assert!(html.contains("https://www.google.com/maps?q=40.4168,-3.7038"));
}

#[tokio::test]
async fn test_tracking_page_not_found() {
    let (app, _, _) = common::create_test_app();

    let response = app
        .oneshot(common::get("/track/does-not-exist"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(common::body_text(response)
        .await
        .contains("Guardia No Encontrada"));
}

#[tokio::test]
async fn test_tracking_page_store_error() {
    let store = Arc::new(MemoryStore::failing("database unavailable"));
    let (app, _) = common::create_test_app_with(store);

    let response = app.oneshot(common::get("/track/tok")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let html = common::body_text(response).await;
    assert!(html.contains("Error de Seguimiento"));
    assert!(html.contains("database unavailable"));
}

#[tokio::test]
async fn test_home_page_and_script() {
    let (app, _, _) = common::create_test_app();

    let response = app.clone().oneshot(common::get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = common::body_text(response).await;
    assert!(html.contains("Iniciar Guardia"));
    assert!(html.contains("/app.js"));

    let response = app.oneshot(common::get("/app.js")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get("Permissions-Policy")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("geolocation=(self)"));
    let script = common::body_text(response).await;
    assert!(script.contains("enableHighAccuracy: true"));
}
