//! Calorie totals for the activity list.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{Activity, DEFAULT_CATEGORY};

/// Consumed vs. burned calories.
///
/// Food entries (category 1) count as consumed, everything else as burned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CalorieSummary {
    pub consumed: f64,
    pub burned: f64,
    /// consumed - burned
    pub net: f64,
}

impl CalorieSummary {
    pub fn from_activities<'a, I>(activities: I) -> Self
    where
        I: IntoIterator<Item = &'a Activity>,
    {
        let mut summary = Self::default();
        for activity in activities {
            summary.add(activity);
        }
        summary
    }

    /// Fold one activity into the totals.
    pub fn add(&mut self, activity: &Activity) {
        if activity.category == DEFAULT_CATEGORY {
            self.consumed += activity.calories;
        } else {
            self.burned += activity.calories;
        }
        self.net = self.consumed - self.burned;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityId;

    fn entry(id: &str, category: u32, calories: f64) -> Activity {
        Activity {
            id: ActivityId::from(id),
            category,
            name: id.to_string(),
            calories,
        }
    }

    #[test]
    fn test_empty_summary() {
        let activities: Vec<Activity> = Vec::new();
        assert_eq!(
            CalorieSummary::from_activities(&activities),
            CalorieSummary::default()
        );
    }

    #[test]
    fn test_food_and_exercise_totals() {
        let activities = vec![
            entry("breakfast", 1, 450.0),
            entry("run", 2, 300.0),
            entry("lunch", 1, 700.5),
            entry("swim", 3, 200.0),
        ];

        let summary = CalorieSummary::from_activities(&activities);
        assert_eq!(summary.consumed, 1150.5);
        assert_eq!(summary.burned, 500.0);
        assert_eq!(summary.net, 650.5);
    }

    #[test]
    fn test_net_can_go_negative() {
        let activities = [entry("hike", 2, 900.0), entry("snack", 1, 100.0)];
        let summary = CalorieSummary::from_activities(&activities);
        assert_eq!(summary.net, -800.0);
    }
}
