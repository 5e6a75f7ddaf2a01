// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! JSON API for starting and viewing shifts.

use crate::error::{AppError, Result};
use crate::models::{Coordinates, ShiftView, StartShiftState};
use crate::services::{GeolocationReport, Geolocator, ReportedPosition};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

/// API routes. No authentication: the tracking token is the capability.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/shifts", post(start_shift))
        .route("/api/track/{token}", get(track_shift))
}

// ─── Start Shift ─────────────────────────────────────────────

/// Start-shift request from the caregiver's device.
#[derive(Debug, Deserialize)]
pub struct StartShiftRequest {
    /// Outcome of the device's position request; absent when the device
    /// has no geolocation support.
    #[serde(default)]
    pub geolocation: Option<GeolocationReport>,
}

/// Start a new shift and return its tracking URL.
async fn start_shift(
    State(state): State<Arc<AppState>>,
    Json(request): Json<StartShiftRequest>,
) -> Result<(StatusCode, Json<StartShiftState>)> {
    if let Some(GeolocationReport::Fix {
        latitude,
        longitude,
        ..
    }) = &request.geolocation
    {
        Coordinates {
            latitude: *latitude,
            longitude: *longitude,
        }
        .validate()
        .map_err(|e| AppError::BadRequest(format!("Invalid coordinates: {}", e)))?;
    }

    let geolocator = request.geolocation.map(ReportedPosition::new);
    let outcome = state
        .initiator
        .start_shift(geolocator.as_ref().map(|g| g as &dyn Geolocator))
        .await;

    // One request is one submit; the page holds the state across clicks and
    // adopts this body as its next state. Failures go out as error bodies.
    let session = StartShiftState::Submitting.finish(&outcome);
    outcome?;

    Ok((StatusCode::CREATED, Json(session)))
}

// ─── Track Shift ─────────────────────────────────────────────

/// Read-only shift view for a tracking token.
async fn track_shift(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
) -> Result<Json<ShiftView>> {
    let view = state.resolver.resolve_shift(&token).await?;
    Ok(Json(view))
}
