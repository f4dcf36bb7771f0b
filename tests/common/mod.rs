// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use calorie_tracker::models::{Activity, ActivityId, CategoryCatalog};
use calorie_tracker::services::{ActivityForm, SequentialIds, Tracker};

/// Form with predictable draft ids (`draft-1`, `draft-2`, ...).
#[allow(dead_code)]
pub fn test_form() -> ActivityForm<SequentialIds> {
    ActivityForm::with_id_generator(SequentialIds::new("draft"))
}

/// Tracker with built-in categories and predictable draft ids.
#[allow(dead_code)]
pub fn test_tracker() -> Tracker<SequentialIds> {
    Tracker::with_form(CategoryCatalog::default(), test_form())
}

#[allow(dead_code)]
pub fn activity(id: &str, category: u32, name: &str, calories: f64) -> Activity {
    Activity {
        id: ActivityId::from(id),
        category,
        name: name.to_string(),
        calories,
    }
}
