// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Host wiring between the shared state and the form.
//!
//! The tracker plays the role of the UI shell: it owns the reducer state,
//! feeds user events to the form and tells the form whenever the active id
//! changes.

use serde::{Deserialize, Serialize};

use crate::error::{FormError, Result};
use crate::models::{Activity, ActivityAction, ActivityId, CalorieSummary, CategoryCatalog};
use crate::services::form::{ActivityForm, FormMode};
use crate::services::ids::{IdGenerator, UuidGenerator};
use crate::services::reducer::ActivityState;

/// One user or host event, serialized as `{"type": "...", ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum FormEvent {
    /// Field edit in the form
    Change { field: String, value: String },
    /// Edit button on an activity in the list
    Select { id: ActivityId },
    /// Delete button on an activity in the list
    Delete { id: ActivityId },
    /// Form submit
    Submit,
    /// Clear all activities
    Restart,
}

impl FormEvent {
    /// Parse one JSON event line.
    pub fn parse(line: &str) -> Result<Self> {
        serde_json::from_str(line).map_err(|e| FormError::Event(e.to_string()))
    }
}

/// Observable state after an event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub draft: Activity,
    pub valid: bool,
    pub mode: FormMode,
    pub submit_label: String,
    pub category_name: Option<String>,
    pub active_id: Option<ActivityId>,
    pub activities: Vec<Activity>,
    pub summary: CalorieSummary,
}

/// Shared state plus the form that edits it.
pub struct Tracker<G = UuidGenerator> {
    state: ActivityState,
    form: ActivityForm<G>,
    categories: CategoryCatalog,
}

impl Tracker<UuidGenerator> {
    pub fn new(categories: CategoryCatalog) -> Self {
        Self::with_form(categories, ActivityForm::new())
    }
}

impl<G: IdGenerator> Tracker<G> {
    pub fn with_form(categories: CategoryCatalog, form: ActivityForm<G>) -> Self {
        Self {
            state: ActivityState::default(),
            form,
            categories,
        }
    }

    pub fn state(&self) -> &ActivityState {
        &self.state
    }

    pub fn form(&self) -> &ActivityForm<G> {
        &self.form
    }

    pub fn categories(&self) -> &CategoryCatalog {
        &self.categories
    }

    /// Handle one event. On error the state and draft are unchanged.
    pub fn handle(&mut self, event: FormEvent) -> Result<()> {
        match event {
            FormEvent::Change { field, value } => self.form.on_field_change(&field, &value),
            FormEvent::Select { id } => {
                self.dispatch(ActivityAction::SetActiveId { id });
                Ok(())
            }
            FormEvent::Delete { id } => {
                self.dispatch(ActivityAction::DeleteActivity { id });
                Ok(())
            }
            FormEvent::Submit => {
                let mut outbox = Vec::with_capacity(1);
                self.form.submit(&mut outbox)?;
                for action in outbox {
                    self.dispatch(action);
                }
                Ok(())
            }
            FormEvent::Restart => {
                self.dispatch(ActivityAction::RestartApp);
                Ok(())
            }
        }
    }

    /// Apply an action and notify the form if the active id changed.
    pub fn dispatch(&mut self, action: ActivityAction) {
        let previous = self.state.active_id.clone();
        self.state.apply(action);

        if self.state.active_id != previous {
            self.form.on_external_selection_change(
                self.state.active_id.as_ref(),
                &self.state.activities,
            );
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let draft = self.form.draft().clone();
        Snapshot {
            valid: self.form.is_valid(),
            mode: self.form.mode(&self.state.activities),
            submit_label: self.form.submit_label().to_string(),
            category_name: self.categories.get(draft.category).map(|c| c.name.clone()),
            active_id: self.state.active_id.clone(),
            activities: self.state.activities.clone(),
            summary: CalorieSummary::from_activities(&self.state.activities),
            draft,
        }
    }
}
