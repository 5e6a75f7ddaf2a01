// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Hosted record store client (Supabase REST / PostgREST).
//!
//! Handles:
//! - Row inserts with `Prefer: return=representation`
//! - Equality lookups limited to one row
//! - Decoding PostgREST error bodies into user-facing messages

use crate::db::{Filter, RecordStore, StoreError};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

/// Upper bound on a single store request; a start is never retried.
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// PostgREST client for a Supabase project.
#[derive(Clone)]
pub struct SupabaseStore {
    http: reqwest::Client,
    rest_url: String,
    anon_key: String,
}

/// PostgREST error body.
#[derive(Debug, Deserialize)]
pub struct PostgrestError {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

impl SupabaseStore {
    /// Create a client for the project at `project_url`.
    pub fn new(project_url: &str, anon_key: String) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .map_err(|e| StoreError::Transport(format!("Failed building HTTP client: {}", e)))?;

        Ok(Self {
            http,
            rest_url: format!("{}/rest/v1", project_url.trim_end_matches('/')),
            anon_key,
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.rest_url, urlencoding::encode(table))
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
    }

    /// Check response status and parse JSON rows.
    async fn check_response_rows(
        &self,
        response: reqwest::Response,
    ) -> Result<Vec<Value>, StoreError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(rejection(status.as_u16(), &body));
        }

        response
            .json::<Vec<Value>>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }
}

/// Turn a non-2xx body into a `StoreError`, preferring the PostgREST message.
pub fn rejection(status: u16, body: &str) -> StoreError {
    match serde_json::from_str::<PostgrestError>(body) {
        Ok(err) => {
            tracing::warn!(
                status,
                code = err.code.as_deref().unwrap_or(""),
                details = err.details.as_deref().unwrap_or(""),
                hint = err.hint.as_deref().unwrap_or(""),
                "Record store rejected request"
            );
            StoreError::Rejected {
                status,
                message: err.message,
            }
        }
        Err(_) => StoreError::Rejected {
            status,
            message: if body.trim().is_empty() {
                format!("HTTP {}", status)
            } else {
                body.trim().to_string()
            },
        },
    }
}

/// Build the PostgREST query pairs for a projected equality lookup.
pub fn select_query(filter: &Filter, columns: &[&str]) -> Vec<(String, String)> {
    let select = if columns.is_empty() {
        "*".to_string()
    } else {
        columns.join(",")
    };

    vec![
        ("select".to_string(), select),
        (filter.column.to_string(), format!("eq.{}", filter.value)),
        ("limit".to_string(), "1".to_string()),
    ]
}

#[async_trait]
impl RecordStore for SupabaseStore {
    async fn insert(&self, table: &str, row: Value) -> Result<Value, StoreError> {
        let response = self
            .authorized(self.http.post(self.table_url(table)))
            .header("Prefer", "return=representation")
            .json(&[row])
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        self.check_response_rows(response)
            .await?
            .into_iter()
            .next()
            .ok_or(StoreError::EmptyResponse)
    }

    async fn select_one(
        &self,
        table: &str,
        filter: &Filter,
        columns: &[&str],
    ) -> Result<Option<Value>, StoreError> {
        let response = self
            .authorized(self.http.get(self.table_url(table)))
            .query(&select_query(filter, columns))
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        Ok(self.check_response_rows(response).await?.into_iter().next())
    }
}
