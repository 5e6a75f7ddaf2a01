// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shift (guardia) model for storage and API.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use validator::Validate;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Stored value for an active shift.
pub const STATUS_ACTIVE: &str = "activo";

/// Stored values read back as active.
const ACTIVE_VALUES: &[&str] = &[STATUS_ACTIVE, "active"];

/// A WGS84 position fix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Coordinates {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

/// Shift status as stored in the `estado` column.
///
/// Only `Active` is ever written; anything else read back is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShiftStatus {
    Active,
    Other(String),
}

impl ShiftStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ShiftStatus::Active => STATUS_ACTIVE,
            ShiftStatus::Other(s) => s,
        }
    }

    /// Display label: the stored value uppercased.
    pub fn label(&self) -> String {
        self.as_str().to_uppercase()
    }

    pub fn is_active(&self) -> bool {
        match self {
            ShiftStatus::Active => true,
            ShiftStatus::Other(s) => ACTIVE_VALUES.contains(&s.as_str()),
        }
    }
}

impl From<String> for ShiftStatus {
    fn from(value: String) -> Self {
        if value == STATUS_ACTIVE {
            ShiftStatus::Active
        } else {
            ShiftStatus::Other(value)
        }
    }
}

impl fmt::Display for ShiftStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ShiftStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ShiftStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(ShiftStatus::from)
    }
}

/// Server-generated shift identifier.
///
/// The hosted table may use a UUID or a bigint key; both are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ShiftId(pub String);

impl<'de> Deserialize<'de> for ShiftId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => ShiftId(s),
            RawId::Number(n) => ShiftId(n.to_string()),
        })
    }
}

impl fmt::Display for ShiftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Row written when a shift starts.
///
/// `cuidador_id` and `paciente_id` are fresh placeholders on every start;
/// they do not refer to a durable caregiver or patient.
#[derive(Debug, Clone, Serialize)]
pub struct NewShift {
    #[serde(rename = "cuidador_id")]
    pub caregiver_id: String,
    #[serde(rename = "paciente_id")]
    pub patient_id: String,
    #[serde(rename = "latitud_inicio")]
    pub start_latitude: f64,
    #[serde(rename = "longitud_inicio")]
    pub start_longitude: f64,
    #[serde(rename = "link_seguimiento")]
    pub tracking_token: String,
    #[serde(rename = "estado")]
    pub status: ShiftStatus,
}

/// Full shift row as returned by the store after insert.
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftRecord {
    pub id: ShiftId,
    #[serde(rename = "cuidador_id")]
    pub caregiver_id: String,
    #[serde(rename = "paciente_id")]
    pub patient_id: String,
    #[serde(rename = "latitud_inicio")]
    pub start_latitude: f64,
    #[serde(rename = "longitud_inicio")]
    pub start_longitude: f64,
    #[serde(rename = "link_seguimiento")]
    pub tracking_token: String,
    #[serde(rename = "estado")]
    pub status: ShiftStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// The columns a viewer is allowed to see.
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftSnapshot {
    #[serde(rename = "estado")]
    pub status: ShiftStatus,
    #[serde(rename = "latitud_inicio")]
    pub start_latitude: f64,
    #[serde(rename = "longitud_inicio")]
    pub start_longitude: f64,
}

/// Read-only view of a shift for tracking-link holders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ShiftView {
    /// Stored status value, e.g. `activo`
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub status: ShiftStatus,
    /// Uppercased status for display
    pub status_label: String,
    pub is_active: bool,
    pub start_latitude: f64,
    pub start_longitude: f64,
    /// Map deep link for the starting position
    pub map_url: String,
}
