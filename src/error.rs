// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types for the activity form and its host.

use crate::models::ActivityField;

/// Errors raised by form operations, the category catalog and event replay.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("Unknown form field: {0}")]
    UnknownField(String),

    #[error("Invalid number for {field}: {value:?}")]
    InvalidNumber { field: ActivityField, value: String },

    #[error("Activity is not ready to save: {0}")]
    InvalidDraft(String),

    #[error("Category catalog error: {0}")]
    Catalog(String),

    #[error("Invalid event: {0}")]
    Event(String),
}

impl FormError {
    /// True for errors caused by user input rather than a programming
    /// mistake in the host. Rejected keystrokes are expected during typing.
    pub fn is_user_input(&self) -> bool {
        matches!(self, FormError::InvalidNumber { .. })
    }
}

/// Result type alias for form operations
pub type Result<T> = std::result::Result<T, FormError>;
