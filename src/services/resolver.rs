// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shift resolver: look up a shift by tracking token for read-only viewing.

use crate::db::{columns, tables, Filter, RecordStore};
use crate::error::AppError;
use crate::models::{ShiftSnapshot, ShiftView};
use std::sync::Arc;

/// Default map provider.
pub const DEFAULT_MAP_BASE_URL: &str = "https://www.google.com";

/// Columns exposed to tracking-link holders.
const VIEW_COLUMNS: &[&str] = &[
    columns::STATUS,
    columns::START_LATITUDE,
    columns::START_LONGITUDE,
];

/// Map deep link for a coordinate pair on the default provider.
pub fn coords_to_map_url(lat: f64, lon: f64) -> String {
    map_url(DEFAULT_MAP_BASE_URL, lat, lon)
}

/// Map deep link `<base>/maps?q=<lat>,<lon>`.
///
/// Floats are written in shortest round-trip form, so no digits are lost.
pub fn map_url(base: &str, lat: f64, lon: f64) -> String {
    format!("{}/maps?q={},{}", base.trim_end_matches('/'), lat, lon)
}

/// Resolves tracking tokens against a record store.
#[derive(Clone)]
pub struct ShiftResolver {
    store: Arc<dyn RecordStore>,
    map_base_url: String,
}

impl ShiftResolver {
    pub fn new(store: Arc<dyn RecordStore>, map_base_url: impl Into<String>) -> Self {
        Self {
            store,
            map_base_url: map_base_url.into(),
        }
    }

    /// Look up the shift behind `token`.
    ///
    /// The token is matched exactly as given. A store failure is
    /// `LookupFailed`; no match is `NotFound`.
    pub async fn resolve_shift(&self, token: &str) -> Result<ShiftView, AppError> {
        let row = self
            .store
            .select_one(
                tables::GUARDIAS,
                &Filter::eq(columns::TRACKING_TOKEN, token),
                VIEW_COLUMNS,
            )
            .await
            .map_err(AppError::lookup)?
            .ok_or(AppError::NotFound)?;

        let snapshot: ShiftSnapshot = serde_json::from_value(row)
            .map_err(|e| AppError::LookupFailed(format!("Unexpected row returned: {}", e)))?;

        Ok(self.view(snapshot))
    }

    fn view(&self, snapshot: ShiftSnapshot) -> ShiftView {
        ShiftView {
            status_label: snapshot.status.label(),
            is_active: snapshot.status.is_active(),
            map_url: map_url(
                &self.map_base_url,
                snapshot.start_latitude,
                snapshot.start_longitude,
            ),
            status: snapshot.status,
            start_latitude: snapshot.start_latitude,
            start_longitude: snapshot.start_longitude,
        }
    }
}
