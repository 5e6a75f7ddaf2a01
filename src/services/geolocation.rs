// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Device geolocation capability.
//!
//! Position fixes happen on the caregiver's device. The server sees the
//! result as a [`GeolocationReport`] and replays it through the same
//! [`Geolocator`] seam the initiator uses.

use crate::models::Coordinates;
use async_trait::async_trait;
use serde::Deserialize;

/// One-shot position request options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    pub high_accuracy: bool,
}

impl PositionOptions {
    pub fn high_accuracy() -> Self {
        Self {
            high_accuracy: true,
        }
    }
}

/// Why a position fix could not be obtained.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeolocationError {
    #[error("User denied Geolocation")]
    PermissionDenied,

    #[error("Position unavailable")]
    PositionUnavailable,

    #[error("Timeout expired")]
    Timeout,

    #[error("{0}")]
    Other(String),
}

impl GeolocationError {
    /// Map a browser `GeolocationPositionError.code` (1, 2, 3).
    pub fn from_code(code: u16, message: Option<String>) -> Self {
        match code {
            1 => GeolocationError::PermissionDenied,
            2 => GeolocationError::PositionUnavailable,
            3 => GeolocationError::Timeout,
            _ => GeolocationError::Other(
                message.unwrap_or_else(|| format!("Unknown geolocation error code {}", code)),
            ),
        }
    }
}

/// Source of a single position fix.
#[async_trait]
pub trait Geolocator: Send + Sync {
    /// Request one fix. This is not a subscription.
    async fn current_position(
        &self,
        options: PositionOptions,
    ) -> Result<Coordinates, GeolocationError>;
}

/// What the device reported when asked for its position.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum GeolocationReport {
    Fix {
        latitude: f64,
        longitude: f64,
        #[serde(default)]
        accuracy: Option<f64>,
    },
    Error {
        code: u16,
        #[serde(default)]
        message: Option<String>,
    },
}

/// A [`Geolocator`] that replays a device report.
#[derive(Debug, Clone)]
pub struct ReportedPosition {
    report: GeolocationReport,
}

impl ReportedPosition {
    pub fn new(report: GeolocationReport) -> Self {
        Self { report }
    }
}

#[async_trait]
impl Geolocator for ReportedPosition {
    async fn current_position(
        &self,
        options: PositionOptions,
    ) -> Result<Coordinates, GeolocationError> {
        match &self.report {
            GeolocationReport::Fix {
                latitude,
                longitude,
                accuracy,
            } => {
                tracing::debug!(
                    high_accuracy = options.high_accuracy,
                    accuracy_m = accuracy.unwrap_or(f64::NAN),
                    "Using device-reported position"
                );
                Ok(Coordinates {
                    latitude: *latitude,
                    longitude: *longitude,
                })
            }
            GeolocationReport::Error { code, message } => {
                Err(GeolocationError::from_code(*code, message.clone()))
            }
        }
    }
}

/// A [`Geolocator`] with a fixed answer, for tests and local tooling.
#[derive(Debug, Clone)]
pub struct FixedGeolocator {
    result: Result<Coordinates, GeolocationError>,
}

impl FixedGeolocator {
    pub fn at(latitude: f64, longitude: f64) -> Self {
        Self {
            result: Ok(Coordinates {
                latitude,
                longitude,
            }),
        }
    }

    pub fn failing(error: GeolocationError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl Geolocator for FixedGeolocator {
    async fn current_position(
        &self,
        _options: PositionOptions,
    ) -> Result<Coordinates, GeolocationError> {
        self.result.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            GeolocationError::from_code(1, None),
            GeolocationError::PermissionDenied
        );
        assert_eq!(
            GeolocationError::from_code(3, Some("ignored".to_string())),
            GeolocationError::Timeout
        );
        assert_eq!(
            GeolocationError::from_code(9, Some("sensor fault".to_string())).to_string(),
            "sensor fault"
        );
    }

    #[tokio::test]
    async fn test_reported_position_replays_report() {
        let report: GeolocationReport = serde_json::from_value(serde_json::json!({
            "outcome": "fix",
            "latitude": 40.4168,
            "longitude": -3.7038
        }))
        .unwrap();
        let fix = ReportedPosition::new(report)
            .current_position(PositionOptions::high_accuracy())
            .await
            .unwrap();
        assert_eq!(fix.latitude, 40.4168);
        assert_eq!(fix.longitude, -3.7038);

        let report: GeolocationReport = serde_json::from_value(serde_json::json!({
            "outcome": "error",
            "code": 1,
            "message": "User denied Geolocation"
        }))
        .unwrap();
        let err = ReportedPosition::new(report)
            .current_position(PositionOptions::high_accuracy())
            .await
            .unwrap_err();
        assert_eq!(err, GeolocationError::PermissionDenied);
    }
}
