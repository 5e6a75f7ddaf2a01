// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod geolocation;
pub mod initiator;
pub mod resolver;

pub use geolocation::{
    FixedGeolocator, GeolocationError, GeolocationReport, Geolocator, PositionOptions,
    ReportedPosition,
};
pub use initiator::{ShiftInitiator, StartedShift};
pub use resolver::{coords_to_map_url, ShiftResolver};
