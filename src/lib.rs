// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Calorie tracker: add and edit food and exercise entries.
//!
//! This crate provides the activity form controller, the reducer that owns
//! the activity list, and a headless host that drives both from events.

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use error::{FormError, Result};
pub use models::{Activity, ActivityAction, ActivityField, ActivityId, Dispatch};
pub use services::{ActivityForm, ActivityState, FormEvent, Tracker};
