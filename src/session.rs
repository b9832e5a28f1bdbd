use std::path::Path;

use chrono::{DateTime, Local};

use crate::billing::{BillingEngine, MealLedger};
use crate::error::{HallError, Result};
use crate::models::Student;
use crate::state::{load_students, save_students, LoadReport, StudentDirectory};
use crate::tracking::{EntryLog, LateEntryLog, MealSchedule};

/// All hall state for one interactive session: the student directory, the
/// meal ledger, billing, and the gate logs. One method per menu operation.
#[derive(Debug, Default)]
pub struct HallSession {
    pub directory: StudentDirectory,
    pub meals: MealLedger,
    pub billing: BillingEngine,
    pub entry_log: EntryLog,
    pub late_entries: LateEntryLog,
    pub schedule: MealSchedule,
}

impl HallSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_student(
        &mut self,
        name: &str,
        roll_number: &str,
        contact_details: &str,
        room_number: &str,
    ) -> Result<()> {
        self.directory
            .register(name, roll_number, contact_details, room_number)
    }

    pub fn set_meal_enabled(&mut self, roll_number: &str, enabled: bool) -> Result<()> {
        self.directory.set_meal_enabled(roll_number, enabled)
    }

    /// Record a gate entry; flags it as late when past curfew.
    pub fn record_entry(&mut self, roll_number: &str, at: DateTime<Local>) {
        self.entry_log.record_entry(roll_number, at);
        self.late_entries.record(roll_number, at);
    }

    pub fn record_exit(&mut self, roll_number: &str, at: DateTime<Local>) {
        self.entry_log.record_exit(roll_number, at);
    }

    pub fn record_meal(&mut self, roll_number: &str, at: DateTime<Local>) {
        self.meals.record_meal(roll_number, at);
    }

    pub fn make_payment(&mut self, roll_number: &str, amount: f64) -> Result<()> {
        self.directory.apply_payment(roll_number, amount)
    }

    /// Outstanding balance for one student.
    pub fn due_for(&self, roll_number: &str) -> Result<f64> {
        let student = self
            .directory
            .find(roll_number)
            .ok_or_else(|| HallError::NotFound(roll_number.to_string()))?;
        Ok(self.billing.total_due(&self.meals, student))
    }

    pub fn find_student(&self, roll_number: &str) -> Option<&Student> {
        self.directory.find(roll_number)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        save_students(path, &self.directory, &self.billing, &self.meals)
    }

    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<LoadReport> {
        load_students(path, &mut self.directory, &self.billing)
    }
}
