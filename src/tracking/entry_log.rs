use chrono::{DateTime, Local};

use crate::models::EntryRecord;

/// Append-only gate log. Entries are never validated against the directory.
#[derive(Debug, Default)]
pub struct EntryLog {
    records: Vec<EntryRecord>,
}

impl EntryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_entry(&mut self, roll_number: &str, at: DateTime<Local>) {
        self.records.push(EntryRecord::new(roll_number, at));
    }

    /// Close the first open entry for the roll number. No-op if none is open.
    pub fn record_exit(&mut self, roll_number: &str, at: DateTime<Local>) {
        if let Some(record) = self
            .records
            .iter_mut()
            .find(|r| r.roll_number == roll_number && r.is_open())
        {
            record.exit_time = Some(at);
        }
    }

    pub fn records(&self) -> &[EntryRecord] {
        &self.records
    }
}
