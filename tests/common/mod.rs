// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use guardia_tracker::config::Config;
use guardia_tracker::db::{tables, MemoryStore};
use guardia_tracker::routes::create_router;
use guardia_tracker::AppState;
use serde_json::{json, Value};
use std::sync::Arc;

/// Origin used by test configs.
#[allow(dead_code)]
pub const TEST_ORIGIN: &str = "https://guardias.example.org";

#[allow(dead_code)]
pub fn test_config() -> Config {
    Config {
        public_origin: TEST_ORIGIN.to_string(),
        ..Config::default()
    }
}

/// Create a test app over the given in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app_with(store: Arc<MemoryStore>) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(test_config(), store));
    (create_router(state.clone()), state)
}

/// Create a test app over an empty in-memory store.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let (app, state) = create_test_app_with(store.clone());
    (app, state, store)
}

/// Seed one shift row with the given token and status.
#[allow(dead_code)]
pub fn seed_shift(store: &MemoryStore, token: &str, status: &str) {
    store.seed(
        tables::GUARDIAS,
        json!({
            "id": 101,
            "cuidador_id": "5f0c1c9e-1111-4c3a-9a57-000000000001",
            "paciente_id": "5f0c1c9e-2222-4c3a-9a57-000000000002",
            "latitud_inicio": 40.4168,
            "longitud_inicio": -3.7038,
            "link_seguimiento": token,
            "estado": status,
        }),
    );
}

#[allow(dead_code)]
pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[allow(dead_code)]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[allow(dead_code)]
pub async fn body_json(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).expect("response body is JSON")
}

#[allow(dead_code)]
pub async fn body_text(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}
