// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Draft form behavior: field edits, validation, selection sync and submit.

use calorie_tracker::error::FormError;
use calorie_tracker::models::{Activity, ActivityAction, ActivityField, ActivityId};
use calorie_tracker::services::FormMode;

mod common;
use common::{activity, test_form};

#[test]
fn test_new_food_entry_is_saved_and_form_resets() {
    let mut form = test_form();
    form.on_field_change("name", "Apple").unwrap();
    form.on_field_change("calories", "150").unwrap();
    assert!(form.is_valid());

    let mut outbox = Vec::new();
    let saved_id = form.submit(&mut outbox).unwrap();

    assert_eq!(saved_id.as_str(), "draft-1");
    assert_eq!(
        outbox,
        vec![ActivityAction::SaveActivity {
            new_activity: activity("draft-1", 1, "Apple", 150.0),
        }]
    );
    assert_eq!(form.draft(), &Activity::blank(ActivityId::from("draft-2")));
}

#[test]
fn test_zero_calories_is_invalid() {
    let mut form = test_form();
    form.on_field_change("name", "Apple").unwrap();
    form.on_field_change("calories", "150").unwrap();
    form.on_field_change("calories", "0").unwrap();
    assert!(!form.is_valid());
}

#[test]
fn test_validity_matrix() {
    let cases = [
        ("Apple", "150", true),
        ("  Apple  ", "1", true),
        ("", "150", false),
        ("   ", "150", false),
        ("\t", "150", false),
        ("Apple", "0", false),
        ("Apple", "-10", false),
        ("Apple", "0.25", true),
        ("Apple", "-0.5", false),
        ("Apple", "", false),
    ];

    for (name, calories, expected) in cases {
        let mut form = test_form();
        form.on_field_change("name", name).unwrap();
        form.on_field_change("calories", calories).unwrap();
        assert_eq!(form.is_valid(), expected, "name={:?} calories={:?}", name, calories);
    }
}

#[test]
fn test_invalid_submit_dispatches_nothing() {
    let mut form = test_form();
    form.on_field_change("name", "Apple").unwrap();
    let before = form.draft().clone();

    let mut outbox = Vec::new();
    let result = form.submit(&mut outbox);

    assert!(matches!(result, Err(FormError::InvalidDraft(_))));
    assert!(outbox.is_empty());
    assert_eq!(form.draft(), &before);
}

#[test]
fn test_selection_loads_matching_activity() {
    let activities = vec![activity("a1", 2, "Run", 300.0)];
    let mut form = test_form();

    assert!(form.on_external_selection_change(Some(&ActivityId::from("a1")), &activities));
    assert_eq!(form.draft(), &activities[0]);
    assert_eq!(form.mode(&activities), FormMode::Editing);
}

#[test]
fn test_selection_takes_first_match() {
    let activities = vec![
        activity("dup", 1, "First", 100.0),
        activity("dup", 2, "Second", 200.0),
    ];
    let mut form = test_form();

    form.on_external_selection_change(Some(&ActivityId::from("dup")), &activities);
    assert_eq!(form.draft().name, "First");
}

#[test]
fn test_unknown_selection_keeps_draft() {
    let activities = vec![activity("a1", 2, "Run", 300.0)];
    let mut form = test_form();
    form.on_field_change("name", "Half typed").unwrap();
    let before = form.draft().clone();

    assert!(!form.on_external_selection_change(Some(&ActivityId::from("unknown")), &activities));
    assert_eq!(form.draft(), &before);
    assert_eq!(form.mode(&activities), FormMode::New);
}

#[test]
fn test_empty_selection_is_ignored() {
    let activities = vec![activity("a1", 2, "Run", 300.0)];
    let mut form = test_form();
    form.on_field_change("calories", "75").unwrap();
    let before = form.draft().clone();

    assert!(!form.on_external_selection_change(None, &activities));
    assert!(!form.on_external_selection_change(Some(&ActivityId::from("")), &activities));
    assert_eq!(form.draft(), &before);
}

#[test]
fn test_editing_keeps_id_through_submit() {
    let activities = vec![activity("a1", 2, "Run", 300.0)];
    let mut form = test_form();
    form.on_external_selection_change(Some(&ActivityId::from("a1")), &activities);
    form.on_field_change("calories", "450").unwrap();

    let mut outbox = Vec::new();
    form.submit(&mut outbox).unwrap();

    assert_eq!(
        outbox,
        vec![ActivityAction::SaveActivity {
            new_activity: activity("a1", 2, "Run", 450.0),
        }]
    );
    assert_ne!(form.draft().id.as_str(), "a1");
    assert_eq!(form.draft().name, "");
}

#[test]
fn test_non_numeric_category_keeps_previous_value() {
    let mut form = test_form();
    form.on_field_change("category", "2").unwrap();

    let result = form.on_field_change("category", "abc");

    match result {
        Err(err @ FormError::InvalidNumber { .. }) => {
            assert!(err.is_user_input());
            assert!(err.to_string().contains("category"));
        }
        other => panic!("expected InvalidNumber, got {:?}", other),
    }
    assert_eq!(form.draft().category, 2);
}

#[test]
fn test_non_numeric_calories_keeps_previous_value() {
    let mut form = test_form();
    form.on_field_change("calories", "150").unwrap();
    assert!(form.on_field_change("calories", "12abc").is_err());
    assert!(form.on_field_change("calories", "NaN").is_err());
    assert!(form.on_field_change("calories", "infinity").is_err());
    assert_eq!(form.draft().calories, 150.0);
}

#[test]
fn test_fractional_calories_are_valid() {
    let mut form = test_form();
    form.on_field_change("name", "Gum").unwrap();
    form.on_field_change("calories", "0.5").unwrap();

    assert_eq!(form.draft().calories, 0.5);
    assert!(form.is_valid());

    let mut outbox = Vec::new();
    form.submit(&mut outbox).unwrap();
    assert_eq!(
        outbox,
        vec![ActivityAction::SaveActivity {
            new_activity: activity("draft-1", 1, "Gum", 0.5),
        }]
    );
}

#[test]
fn test_exponent_calories_are_parsed() {
    let mut form = test_form();
    form.on_field_change("name", "Bar").unwrap();
    form.on_field_change("calories", "1e2").unwrap();

    assert_eq!(form.draft().calories, 100.0);
    assert!(form.is_valid());
}

#[test]
fn test_blank_number_clears_to_zero() {
    let mut form = test_form();
    form.on_field_change("calories", "150").unwrap();
    form.on_field_change("calories", "").unwrap();
    assert_eq!(form.draft().calories, 0.0);
}

#[test]
fn test_name_stored_verbatim() {
    let mut form = test_form();
    form.on_field_change("name", "  Jugo de naranja ").unwrap();
    assert_eq!(form.draft().name, "  Jugo de naranja ");
}

#[test]
fn test_same_name_twice_is_idempotent() {
    let mut once = test_form();
    once.on_field_change("name", "Tea").unwrap();

    let mut twice = test_form();
    twice.on_field_change("name", "Tea").unwrap();
    twice.on_field_change("name", "Tea").unwrap();

    assert_eq!(once.draft(), twice.draft());
}

#[test]
fn test_unknown_field_is_rejected() {
    let mut form = test_form();
    let before = form.draft().clone();

    for field in ["id", "Calories", "", "kcal"] {
        let result = form.on_field_change(field, "10");
        assert!(
            matches!(&result, Err(FormError::UnknownField(f)) if f == field),
            "field {:?} gave {:?}",
            field,
            result
        );
    }
    assert_eq!(form.draft(), &before);
}

#[test]
fn test_out_of_range_category_is_accepted() {
    let mut form = test_form();
    form.set_field(ActivityField::Category, "42").unwrap();
    form.set_field(ActivityField::Name, "Yoga").unwrap();
    form.set_field(ActivityField::Calories, "120").unwrap();

    assert!(form.is_valid());
    assert_eq!(form.submit_label(), "Guardar Ejercicio");
}

#[test]
fn test_every_submit_draws_a_new_id() {
    let mut form = test_form();
    let mut outbox = Vec::new();
    let mut seen = std::collections::HashSet::new();

    for i in 1..=5 {
        form.on_field_change("name", &format!("Meal {}", i)).unwrap();
        form.on_field_change("calories", "200").unwrap();
        let id = form.submit(&mut outbox).unwrap();
        assert!(seen.insert(id));
        assert!(!seen.contains(&form.draft().id));
    }

    assert_eq!(outbox.len(), 5);
}
