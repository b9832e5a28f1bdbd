use chrono::{DateTime, Local, Timelike};

use crate::billing::constants::SERVING_WINDOWS;

/// Dining-hall serving windows as local hour ranges, end exclusive.
#[derive(Debug)]
pub struct MealSchedule {
    windows: Vec<(u32, u32)>,
}

impl Default for MealSchedule {
    fn default() -> Self {
        Self {
            windows: SERVING_WINDOWS.to_vec(),
        }
    }
}

impl MealSchedule {
    pub fn new(windows: Vec<(u32, u32)>) -> Self {
        Self { windows }
    }

    /// Whether a meal is being served at the given time.
    pub fn is_meal_available(&self, at: DateTime<Local>) -> bool {
        let hour = at.hour();
        self.windows
            .iter()
            .any(|&(start, end)| hour >= start && hour < end)
    }

    pub fn windows(&self) -> &[(u32, u32)] {
        &self.windows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at_hour(hour: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 8, 26, hour, 15, 0).unwrap()
    }

    #[test]
    fn test_default_windows_cover_meal_hours() {
        let schedule = MealSchedule::default();
        assert!(schedule.is_meal_available(at_hour(8)));
        assert!(schedule.is_meal_available(at_hour(13)));
        assert!(schedule.is_meal_available(at_hour(19)));
    }

    #[test]
    fn test_outside_windows_not_available() {
        let schedule = MealSchedule::default();
        assert!(!schedule.is_meal_available(at_hour(11)));
        assert!(!schedule.is_meal_available(at_hour(22)));
        // End hour is exclusive.
        assert!(!schedule.is_meal_available(at_hour(10)));
    }
}
