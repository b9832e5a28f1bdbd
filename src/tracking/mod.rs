mod entry_log;
mod late_entry;
mod schedule;

pub use entry_log::EntryLog;
pub use late_entry::LateEntryLog;
pub use schedule::MealSchedule;
