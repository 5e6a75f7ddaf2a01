// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory record store for local development and tests.

use crate::db::{columns, Filter, RecordStore, StoreError};
use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::{Map, Value};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Columns that must be unique across a table's rows.
const UNIQUE_COLUMNS: &[&str] = &[columns::ID, columns::TRACKING_TOKEN];

/// Record store held in process memory.
///
/// Rows get an `id` (UUID v4) and `created_at` on insert, like the hosted
/// table defaults. Inserts and selects are counted so tests can assert on
/// how the store was used.
#[derive(Default)]
pub struct MemoryStore {
    tables: DashMap<String, Vec<Value>>,
    inserts: AtomicUsize,
    selects: AtomicUsize,
    failure: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// Put a row in place without counting it as an insert.
    pub fn seed(&self, table: &str, row: Value) {
        self.tables.entry(table.to_string()).or_default().push(row);
    }

    /// Number of insert calls received.
    pub fn insert_count(&self) -> usize {
        self.inserts.load(Ordering::Relaxed)
    }

    /// Number of select calls received.
    pub fn select_count(&self) -> usize {
        self.selects.load(Ordering::Relaxed)
    }

    /// All rows currently stored in `table`.
    pub fn rows(&self, table: &str) -> Vec<Value> {
        self.tables
            .get(table)
            .map(|rows| rows.value().clone())
            .unwrap_or_default()
    }

    fn check_failure(&self) -> Result<(), StoreError> {
        match &self.failure {
            Some(message) => Err(StoreError::Rejected {
                status: 500,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

fn row_matches(row: &Value, filter: &Filter) -> bool {
    match row.get(filter.column) {
        Some(Value::String(s)) => *s == filter.value,
        Some(Value::Null) | None => false,
        Some(other) => other.to_string() == filter.value,
    }
}

fn project(row: &Value, columns: &[&str]) -> Value {
    if columns.is_empty() {
        return row.clone();
    }

    let projected: Map<String, Value> = columns
        .iter()
        .map(|c| (c.to_string(), row.get(*c).cloned().unwrap_or(Value::Null)))
        .collect();
    Value::Object(projected)
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn insert(&self, table: &str, row: Value) -> Result<Value, StoreError> {
        self.inserts.fetch_add(1, Ordering::Relaxed);
        self.check_failure()?;

        let Value::Object(mut fields) = row else {
            return Err(StoreError::Decode("row must be a JSON object".to_string()));
        };

        fields
            .entry(columns::ID)
            .or_insert_with(|| Value::String(uuid::Uuid::new_v4().to_string()));
        fields
            .entry(columns::CREATED_AT)
            .or_insert_with(|| Value::String(chrono::Utc::now().to_rfc3339()));
        let row = Value::Object(fields);

        // Hold the table entry for the whole check-then-push.
        let mut rows = self.tables.entry(table.to_string()).or_default();
        for column in UNIQUE_COLUMNS {
            if let Some(value) = row.get(*column).filter(|v| !v.is_null()) {
                if rows.iter().any(|r| r.get(*column) == Some(value)) {
                    return Err(StoreError::Conflict((*column).to_string()));
                }
            }
        }
        rows.push(row.clone());

        Ok(row)
    }

    async fn select_one(
        &self,
        table: &str,
        filter: &Filter,
        columns: &[&str],
    ) -> Result<Option<Value>, StoreError> {
        self.selects.fetch_add(1, Ordering::Relaxed);
        self.check_failure()?;

        Ok(self.tables.get(table).and_then(|rows| {
            rows.iter()
                .find(|row| row_matches(row, filter))
                .map(|row| project(row, columns))
        }))
    }
}
