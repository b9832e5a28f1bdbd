use chrono::{DateTime, Local, Timelike};

use crate::billing::constants::CURFEW_HOUR;

/// Flags gate entries that happen at or past the curfew hour.
#[derive(Debug)]
pub struct LateEntryLog {
    curfew_hour: u32,
    entries: Vec<(String, DateTime<Local>)>,
}

impl Default for LateEntryLog {
    fn default() -> Self {
        Self::new(CURFEW_HOUR)
    }
}

impl LateEntryLog {
    pub fn new(curfew_hour: u32) -> Self {
        Self {
            curfew_hour,
            entries: Vec::new(),
        }
    }

    /// Record the entry only when it falls at or past curfew.
    pub fn record(&mut self, roll_number: &str, at: DateTime<Local>) {
        if at.hour() >= self.curfew_hour {
            self.entries.push((roll_number.to_string(), at));
        }
    }

    pub fn entries(&self) -> &[(String, DateTime<Local>)] {
        &self.entries
    }
}
