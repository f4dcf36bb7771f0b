// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared activity state and the reducer that applies actions to it.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{Activity, ActivityAction, ActivityId, Dispatch};

/// The activity list and the id of the activity selected for editing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivityState {
    pub activities: Vec<Activity>,
    pub active_id: Option<ActivityId>,
}

impl ActivityState {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self {
            activities,
            active_id: None,
        }
    }

    pub fn get(&self, id: &ActivityId) -> Option<&Activity> {
        self.activities.iter().find(|a| &a.id == id)
    }

    /// Apply one action.
    pub fn apply(&mut self, action: ActivityAction) {
        match action {
            ActivityAction::SaveActivity { new_activity } => {
                match self
                    .activities
                    .iter_mut()
                    .find(|a| a.id == new_activity.id)
                {
                    Some(existing) => {
                        tracing::debug!(id = %new_activity.id, "Updated activity");
                        *existing = new_activity;
                    }
                    None => {
                        tracing::debug!(id = %new_activity.id, "Added activity");
                        self.activities.push(new_activity);
                    }
                }
                self.active_id = None;
            }
            ActivityAction::SetActiveId { id } => {
                self.active_id = Some(id);
            }
            ActivityAction::DeleteActivity { id } => {
                let before = self.activities.len();
                self.activities.retain(|a| a.id != id);
                if self.activities.len() == before {
                    tracing::warn!(id = %id, "Delete requested for unknown activity");
                }
                if self.active_id.as_ref() == Some(&id) {
                    self.active_id = None;
                }
            }
            ActivityAction::RestartApp => {
                tracing::info!(count = self.activities.len(), "Clearing all activities");
                self.activities.clear();
                self.active_id = None;
            }
        }
    }
}

impl Dispatch for ActivityState {
    fn dispatch(&mut self, action: ActivityAction) {
        self.apply(action);
    }
}
