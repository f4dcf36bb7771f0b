// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Draft form controller.
//!
//! Holds one draft activity at all times and handles three kinds of input:
//! 1. Selection changes pushed by the host (load an activity for editing)
//! 2. Field edits from the user
//! 3. Submit, which dispatches `save-activity` and starts a fresh draft
//!
//! The controller never mutates the host's activity list; it only reads it
//! and requests changes through [`Dispatch`].

use serde::{Deserialize, Serialize};
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

use crate::error::{FormError, Result};
use crate::models::{
    Activity, ActivityAction, ActivityField, ActivityId, Dispatch, DEFAULT_CATEGORY,
};
use crate::services::ids::{IdGenerator, UuidGenerator};

/// Whether the draft is a new entry or a copy of an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum FormMode {
    New,
    Editing,
}

/// Form controller owning the draft activity.
#[derive(Debug, Clone)]
pub struct ActivityForm<G = UuidGenerator> {
    draft: Activity,
    ids: G,
}

impl ActivityForm<UuidGenerator> {
    pub fn new() -> Self {
        Self::with_id_generator(UuidGenerator)
    }
}

impl Default for ActivityForm<UuidGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> ActivityForm<G> {
    /// Create a form with a blank draft, using `ids` for every fresh draft.
    pub fn with_id_generator(mut ids: G) -> Self {
        let draft = Activity::blank(ids.next_id());
        Self { draft, ids }
    }

    /// The current draft.
    pub fn draft(&self) -> &Activity {
        &self.draft
    }

    /// Replace the whole draft.
    pub fn set(&mut self, activity: Activity) {
        self.draft = activity;
    }

    /// Discard the draft and start a blank one with a fresh id.
    pub fn reset(&mut self) {
        self.draft = Activity::blank(self.ids.next_id());
    }

    /// Sync the draft with the host's active id.
    ///
    /// With a non-empty id, the first activity carrying that id is copied
    /// into the draft. An empty id, or one that matches nothing, leaves the
    /// draft untouched. Returns whether the draft was replaced.
    pub fn on_external_selection_change(
        &mut self,
        active_id: Option<&ActivityId>,
        activities: &[Activity],
    ) -> bool {
        let Some(active_id) = active_id.filter(|id| !id.is_empty()) else {
            return false;
        };

        match activities.iter().find(|a| &a.id == active_id) {
            Some(selected) => {
                tracing::debug!(id = %active_id, "Loaded activity into form");
                self.set(selected.clone());
                true
            }
            None => {
                tracing::warn!(id = %active_id, "Active id not found, keeping draft");
                false
            }
        }
    }

    /// Update one field from raw input, addressed by field identifier.
    ///
    /// Unknown identifiers are a host bug and are logged at error level.
    pub fn on_field_change(&mut self, field: &str, raw_value: &str) -> Result<()> {
        let field = ActivityField::from_str(field).inspect_err(|err| {
            tracing::error!(error = %err, "Form field change rejected");
        })?;
        self.set_field(field, raw_value)
    }

    /// Update one field from raw input.
    ///
    /// Numeric fields are parsed; text that is not a number is rejected
    /// and the previous value is kept. Category takes whole ids only,
    /// calories take any finite number (`"0.5"`, `"1e2"`).
    pub fn set_field(&mut self, field: ActivityField, raw_value: &str) -> Result<()> {
        match field {
            ActivityField::Name => self.draft.name = raw_value.to_string(),
            ActivityField::Category => {
                self.draft.category = parse_number(field, raw_value)?;
            }
            ActivityField::Calories => {
                self.draft.calories = parse_calories(raw_value)?;
            }
        }

        tracing::debug!(field = %field, "Draft field updated");
        Ok(())
    }

    /// True when the draft has a non-blank name and positive calories.
    pub fn is_valid(&self) -> bool {
        self.draft.is_valid()
    }

    /// Like [`is_valid`](Self::is_valid), but reports what is wrong.
    pub fn validate(&self) -> Result<()> {
        self.draft
            .validate()
            .map_err(|errors| FormError::InvalidDraft(errors.to_string()))
    }

    /// Save the draft.
    ///
    /// Dispatches exactly one `save-activity` action carrying the draft, then
    /// starts a blank draft with a fresh id. An invalid draft dispatches
    /// nothing and is left as is. Returns the id of the saved activity.
    pub fn submit<D>(&mut self, dispatcher: &mut D) -> Result<ActivityId>
    where
        D: Dispatch + ?Sized,
    {
        self.validate()?;

        let fresh = Activity::blank(self.ids.next_id());
        let saved = std::mem::replace(&mut self.draft, fresh);
        let id = saved.id.clone();

        tracing::info!(
            id = %id,
            category = saved.category,
            calories = saved.calories,
            "Saving activity"
        );
        dispatcher.dispatch(ActivityAction::SaveActivity {
            new_activity: saved,
        });

        Ok(id)
    }

    /// `Editing` when the draft id is present in `activities`.
    pub fn mode(&self, activities: &[Activity]) -> FormMode {
        if activities.iter().any(|a| a.id == self.draft.id) {
            FormMode::Editing
        } else {
            FormMode::New
        }
    }

    /// Submit button text, chosen by category.
    pub fn submit_label(&self) -> &'static str {
        if self.draft.category == DEFAULT_CATEGORY {
            "Guardar Comida"
        } else {
            "Guardar Ejercicio"
        }
    }
}

/// Parse calories, rejecting NaN and infinities.
fn parse_calories(raw_value: &str) -> Result<f64> {
    let field = ActivityField::Calories;
    let calories: f64 = parse_number(field, raw_value)?;
    if !calories.is_finite() {
        tracing::warn!(field = %field, value = raw_value, "Rejected non-finite input");
        return Err(FormError::InvalidNumber {
            field,
            value: raw_value.to_string(),
        });
    }
    Ok(calories)
}

/// Parse raw numeric input. Blank input counts as zero.
fn parse_number<T>(field: ActivityField, raw_value: &str) -> Result<T>
where
    T: FromStr + Default,
{
    let trimmed = raw_value.trim();
    if trimmed.is_empty() {
        return Ok(T::default());
    }

    trimmed.parse().map_err(|_| {
        tracing::warn!(field = %field, value = raw_value, "Rejected non-numeric input");
        FormError::InvalidNumber {
            field,
            value: raw_value.to_string(),
        }
    })
}
