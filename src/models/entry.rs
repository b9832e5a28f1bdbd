use chrono::{DateTime, Local};

/// One gate entry, with the exit recorded later if it happens.
#[derive(Debug, Clone)]
pub struct EntryRecord {
    pub roll_number: String,
    pub entry_time: DateTime<Local>,
    pub exit_time: Option<DateTime<Local>>,
}

impl EntryRecord {
    pub fn new(roll_number: &str, entry_time: DateTime<Local>) -> Self {
        Self {
            roll_number: roll_number.to_string(),
            entry_time,
            exit_time: None,
        }
    }

    /// An entry is open until an exit is recorded for it.
    pub fn is_open(&self) -> bool {
        self.exit_time.is_none()
    }
}
