// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Food or exercise entry tracked by calories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::{Validate, ValidationError};

use crate::error::FormError;

/// Category assigned to a blank activity (food).
pub const DEFAULT_CATEGORY: u32 = 1;

/// Opaque activity identifier. Generated ids are UUID strings, but any
/// string the host stores is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivityId(String);

impl ActivityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ActivityId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ActivityId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A single calorie entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Activity {
    /// Assigned at creation, never changed afterwards
    pub id: ActivityId,
    /// Id into the category catalog (1 = food)
    pub category: u32,
    /// Free-text label, e.g. "Orange juice"
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    /// Calories eaten or burned
    #[validate(range(exclusive_min = 0.0, message = "Calories must be greater than zero"))]
    pub calories: f64,
}

impl Activity {
    /// A blank activity with default fields and the given id.
    pub fn blank(id: ActivityId) -> Self {
        Self {
            id,
            category: DEFAULT_CATEGORY,
            name: String::new(),
            calories: 0.0,
        }
    }

    /// Check whether this activity can be saved.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl Default for Activity {
    fn default() -> Self {
        Self::blank(ActivityId::default())
    }
}

fn validate_not_blank(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Name cannot be empty".into());
        return Err(err);
    }
    Ok(())
}

/// Editable fields of an activity. The id is not editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityField {
    Category,
    Name,
    Calories,
}

impl ActivityField {
    pub const ALL: [ActivityField; 3] = [
        ActivityField::Category,
        ActivityField::Name,
        ActivityField::Calories,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityField::Category => "category",
            ActivityField::Name => "name",
            ActivityField::Calories => "calories",
        }
    }

    /// Whether raw input for this field must be parsed as a number.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ActivityField::Category | ActivityField::Calories)
    }
}

impl fmt::Display for ActivityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}
