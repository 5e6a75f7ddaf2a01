// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod session;
pub mod shift;

pub use session::StartShiftState;
pub use shift::{
    Coordinates, NewShift, ShiftId, ShiftRecord, ShiftSnapshot, ShiftStatus, ShiftView,
};
