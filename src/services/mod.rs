// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Form controller, reducer and the host that connects them.

pub mod form;
pub mod ids;
pub mod reducer;
pub mod tracker;

pub use form::{ActivityForm, FormMode};
pub use ids::{IdGenerator, SequentialIds, UuidGenerator};
pub use reducer::ActivityState;
pub use tracker::{FormEvent, Snapshot, Tracker};
