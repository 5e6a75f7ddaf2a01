// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Guardia Tracker Server
//!
//! Serves the caregiver start page, the shift API and public tracking pages.

use guardia_tracker::{
    config::Config,
    db::{MemoryStore, RecordStore, SupabaseStore},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(
        port = config.port,
        origin = %config.public_origin,
        "Starting Guardia Tracker"
    );

    let store: Arc<dyn RecordStore> = match &config.supabase {
        Some(supabase) => {
            tracing::info!(url = %supabase.url, "Using hosted record store");
            Arc::new(SupabaseStore::new(&supabase.url, supabase.anon_key.clone())?)
        }
        None => {
            tracing::warn!("SUPABASE_URL not set; shifts are kept in memory only");
            Arc::new(MemoryStore::new())
        }
    };

    // Build shared state
    let state = Arc::new(AppState::new(config.clone(), store));

    // Build router
    let app = guardia_tracker::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("guardia_tracker=debug,info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .init();
}
