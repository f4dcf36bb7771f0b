// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod action;
pub mod activity;
pub mod category;
pub mod summary;

pub use action::{ActivityAction, Dispatch};
pub use activity::{Activity, ActivityField, ActivityId, DEFAULT_CATEGORY};
pub use category::{Category, CategoryCatalog};
pub use summary::CalorieSummary;
