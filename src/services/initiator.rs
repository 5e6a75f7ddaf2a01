// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shift initiator: capture a fix, mint a tracking token, write the row.

use crate::db::{tables, RecordStore};
use crate::error::AppError;
use crate::models::{NewShift, ShiftId, ShiftRecord, ShiftStatus};
use crate::services::geolocation::{Geolocator, PositionOptions};
use std::sync::Arc;

/// Path prefix of public tracking links.
pub const TRACK_PATH: &str = "/track/";

/// Result of a successful shift start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartedShift {
    /// Internal row id, for local display only
    pub shift_id: ShiftId,
    pub tracking_token: String,
    pub tracking_url: String,
}

/// Starts shifts against a record store.
#[derive(Clone)]
pub struct ShiftInitiator {
    store: Arc<dyn RecordStore>,
    public_origin: String,
}

/// Fresh opaque identifier (UUID v4 from the OS CSPRNG).
pub fn new_opaque_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Build `<origin>/track/<token>`.
pub fn tracking_url(origin: &str, token: &str) -> String {
    format!(
        "{}{}{}",
        origin.trim_end_matches('/'),
        TRACK_PATH,
        urlencoding::encode(token)
    )
}

impl ShiftInitiator {
    pub fn new(store: Arc<dyn RecordStore>, public_origin: impl Into<String>) -> Self {
        Self {
            store,
            public_origin: public_origin.into(),
        }
    }

    /// Start a new shift at the device's current position.
    ///
    /// `None` means the device has no geolocation capability. Nothing is
    /// written unless a fix was obtained, and a failed insert is not retried.
    /// Every call creates a new shift with its own token.
    pub async fn start_shift(
        &self,
        geolocator: Option<&dyn Geolocator>,
    ) -> Result<StartedShift, AppError> {
        let geolocator = geolocator.ok_or(AppError::CapabilityUnavailable)?;

        let position = geolocator
            .current_position(PositionOptions::high_accuracy())
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Geolocation failed");
                AppError::GeolocationFailed(e.to_string())
            })?;

        let row = NewShift {
            caregiver_id: new_opaque_id(),
            patient_id: new_opaque_id(),
            start_latitude: position.latitude,
            start_longitude: position.longitude,
            tracking_token: new_opaque_id(),
            status: ShiftStatus::Active,
        };

        let value = serde_json::to_value(&row)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to encode shift: {}", e)))?;

        let stored = self
            .store
            .insert(tables::GUARDIAS, value)
            .await
            .map_err(AppError::persistence)?;

        let record: ShiftRecord = serde_json::from_value(stored).map_err(|e| {
            AppError::PersistenceFailed(format!("Unexpected row returned: {}", e))
        })?;

        tracing::info!(shift_id = %record.id, "Guardia started");

        Ok(StartedShift {
            tracking_url: tracking_url(&self.public_origin, &row.tracking_token),
            tracking_token: row.tracking_token,
            shift_id: record.id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracking_url() {
        assert_eq!(
            tracking_url("https://guardias.example.org", "abc-123"),
            "https://guardias.example.org/track/abc-123"
        );
        assert_eq!(
            tracking_url("http://localhost:8080/", "abc"),
            "http://localhost:8080/track/abc"
        );
    }

    #[test]
    fn test_opaque_ids_are_distinct_uuids() {
        let a = new_opaque_id();
        let b = new_opaque_id();
        assert_ne!(a, b);
        assert_eq!(uuid::Uuid::parse_str(&a).unwrap().get_version_num(), 4);
    }
}
