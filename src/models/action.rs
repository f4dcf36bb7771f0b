// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Actions sent to the activity reducer.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{Activity, ActivityId};

/// Reducer action, serialized as `{"type": "...", "payload": {...}}`.
///
/// The form only ever emits [`ActivityAction::SaveActivity`]; the other
/// variants come from the list view of the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "kebab-case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum ActivityAction {
    SaveActivity {
        #[serde(rename = "newActivity")]
        new_activity: Activity,
    },
    SetActiveId {
        id: ActivityId,
    },
    DeleteActivity {
        id: ActivityId,
    },
    RestartApp,
}

impl ActivityAction {
    /// Action type tag as it appears on the wire.
    pub fn kind(&self) -> &'static str {
        match self {
            ActivityAction::SaveActivity { .. } => "save-activity",
            ActivityAction::SetActiveId { .. } => "set-active-id",
            ActivityAction::DeleteActivity { .. } => "delete-activity",
            ActivityAction::RestartApp => "restart-app",
        }
    }
}

/// Recipient of reducer actions.
pub trait Dispatch {
    fn dispatch(&mut self, action: ActivityAction);
}

/// Records actions in order without applying them.
impl Dispatch for Vec<ActivityAction> {
    fn dispatch(&mut self, action: ActivityAction) {
        self.push(action);
    }
}
