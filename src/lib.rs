// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Guardia tracker: start a caregiver shift at the device's position and
//! share a link to view it.
//!
//! This crate provides the backend that writes shift records to the hosted
//! record store and resolves public tracking tokens.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use db::RecordStore;
use services::{ShiftInitiator, ShiftResolver};
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub initiator: ShiftInitiator,
    pub resolver: ShiftResolver,
}

impl AppState {
    /// Wire the shift services to `store`.
    pub fn new(config: Config, store: Arc<dyn RecordStore>) -> Self {
        let initiator = ShiftInitiator::new(store.clone(), config.public_origin.clone());
        let resolver = ShiftResolver::new(store, config.map_base_url.clone());
        Self {
            config,
            initiator,
            resolver,
        }
    }
}
