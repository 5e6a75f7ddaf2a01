// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Caregiver "start shift" interaction state.

use crate::error::AppError;
use crate::services::initiator::StartedShift;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// State of one start-shift interaction.
///
/// Exactly one of these holds at a time, so a session can never be both
/// succeeded and failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum StartShiftState {
    #[default]
    Idle,
    Submitting,
    Succeeded {
        shift_id: String,
        tracking_url: String,
    },
    Failed {
        error: String,
    },
}

/// A submit was requested while one was already in flight.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("A shift start is already in progress")]
pub struct AlreadySubmitting;

impl StartShiftState {
    /// Move to `Submitting`. Any earlier outcome is cleared.
    pub fn begin(self) -> Result<Self, AlreadySubmitting> {
        match self {
            StartShiftState::Submitting => Err(AlreadySubmitting),
            _ => Ok(StartShiftState::Submitting),
        }
    }

    /// Record the outcome of the in-flight submit.
    ///
    /// Outside `Submitting` the outcome is stale and the state is unchanged.
    pub fn finish(self, outcome: &Result<StartedShift, AppError>) -> Self {
        match self {
            StartShiftState::Submitting => match outcome {
                Ok(started) => StartShiftState::Succeeded {
                    shift_id: started.shift_id.to_string(),
                    tracking_url: started.tracking_url.clone(),
                },
                Err(err) => StartShiftState::Failed {
                    error: err.to_string(),
                },
            },
            other => other,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, StartShiftState::Submitting)
    }

    pub fn tracking_url(&self) -> Option<&str> {
        match self {
            StartShiftState::Succeeded { tracking_url, .. } => Some(tracking_url),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShiftId;

    fn started() -> StartedShift {
        StartedShift {
            shift_id: ShiftId("17".to_string()),
            tracking_token: "tok".to_string(),
            tracking_url: "http://localhost:8080/track/tok".to_string(),
        }
    }

    #[test]
    fn test_success_path() {
        let state = StartShiftState::default().begin().unwrap();
        assert!(state.is_submitting());

        let state = state.finish(&Ok(started()));
        assert_eq!(
            state,
            StartShiftState::Succeeded {
                shift_id: "17".to_string(),
                tracking_url: "http://localhost:8080/track/tok".to_string(),
            }
        );
        assert_eq!(state.tracking_url(), Some("http://localhost:8080/track/tok"));
    }

    #[test]
    fn test_failure_clears_on_retry() {
        let state = StartShiftState::Idle
            .begin()
            .unwrap()
            .finish(&Err(AppError::CapabilityUnavailable));
        assert!(matches!(state, StartShiftState::Failed { .. }));
        assert_eq!(state.tracking_url(), None);

        let state = state.begin().unwrap();
        assert_eq!(state, StartShiftState::Submitting);
    }

    #[test]
    fn test_double_submit_rejected() {
        let state = StartShiftState::Idle.begin().unwrap();
        assert_eq!(state.begin(), Err(AlreadySubmitting));
    }

    #[test]
    fn test_finish_outside_submitting_is_ignored() {
        let state = StartShiftState::Idle.finish(&Ok(started()));
        assert_eq!(state, StartShiftState::Idle);
    }

    #[test]
    fn test_serialized_shape() {
        let state = StartShiftState::Failed {
            error: "Geolocation failed: Timeout expired".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            serde_json::json!({
                "state": "failed",
                "error": "Geolocation failed: Timeout expired"
            })
        );
    }
}
