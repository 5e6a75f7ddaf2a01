// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Record store layer.
//!
//! The store is an external collaborator offering two primitives: insert a
//! row and select at most one row by equality filter. Rows travel as JSON.

pub mod memory;
pub mod supabase;

pub use memory::MemoryStore;
pub use supabase::SupabaseStore;

use async_trait::async_trait;
use serde_json::Value;

/// Table names as constants.
pub mod tables {
    pub const GUARDIAS: &str = "guardias";
}

/// Column names of the `guardias` table.
pub mod columns {
    pub const ID: &str = "id";
    pub const CAREGIVER_ID: &str = "cuidador_id";
    pub const PATIENT_ID: &str = "paciente_id";
    pub const START_LATITUDE: &str = "latitud_inicio";
    pub const START_LONGITUDE: &str = "longitud_inicio";
    pub const TRACKING_TOKEN: &str = "link_seguimiento";
    pub const STATUS: &str = "estado";
    pub const CREATED_AT: &str = "created_at";
}

/// Equality filter: `column == value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub column: &'static str,
    pub value: String,
}

impl Filter {
    pub fn eq(column: &'static str, value: impl Into<String>) -> Self {
        Self {
            column,
            value: value.into(),
        }
    }
}

/// Insert/select capability of the hosted data service.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert one row and return it as stored (with server-generated fields).
    async fn insert(&self, table: &str, row: Value) -> Result<Value, StoreError>;

    /// Select the first row matching `filter`, projected onto `columns`.
    ///
    /// No match is `Ok(None)`, never an error.
    async fn select_one(
        &self,
        table: &str,
        filter: &Filter,
        columns: &[&str],
    ) -> Result<Option<Value>, StoreError>;
}

/// Record store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Request to record store failed: {0}")]
    Transport(String),

    /// The store answered with an error payload.
    #[error("Record store returned {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("Duplicate value for {0}")]
    Conflict(String),

    #[error("No data returned")]
    EmptyResponse,

    #[error("Unexpected record store response: {0}")]
    Decode(String),
}

impl StoreError {
    /// The message shown to the end user: the store's own text when it sent one.
    pub fn user_message(&self) -> String {
        match self {
            StoreError::Rejected { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
