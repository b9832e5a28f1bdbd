use std::collections::HashMap;

use chrono::{DateTime, Local};

/// Append-only ledger of meal consumption, keyed by roll number.
///
/// The ledger does not validate roll numbers against the directory; a meal
/// recorded for an unknown roll simply waits there until billing asks for it.
#[derive(Debug, Default)]
pub struct MealLedger {
    meals: HashMap<String, Vec<DateTime<Local>>>,
}

impl MealLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one meal. Always succeeds; there is no removal path.
    pub fn record_meal(&mut self, roll_number: &str, at: DateTime<Local>) {
        self.meals
            .entry(roll_number.to_string())
            .or_default()
            .push(at);
    }

    /// Number of meals recorded for a roll number, 0 if none.
    pub fn meal_count(&self, roll_number: &str) -> usize {
        self.meals.get(roll_number).map(Vec::len).unwrap_or(0)
    }

    /// Meal timestamps for a roll number in insertion order.
    pub fn meal_times(&self, roll_number: &str) -> &[DateTime<Local>] {
        self.meals
            .get(roll_number)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
