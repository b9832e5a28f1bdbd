use std::path::Path;

use serde::Deserialize;

use crate::billing::{BillingEngine, MealLedger};
use crate::error::{HallError, Result};
use crate::state::StudentDirectory;

const FIELDS_PER_RECORD: usize = 6;

/// One persisted line: six positional fields, no header row.
#[derive(Debug, Deserialize)]
struct RawRecord {
    name: String,
    roll_number: String,
    contact_details: String,
    room_number: String,
    meal_enabled: String,
    due: f64,
}

/// Outcome of a load: how many students were added, and which roll numbers
/// were skipped because they were already registered.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: Vec<String>,
}

/// Save all students to a flat comma-delimited file, one line per student in
/// registration order: name, roll, contact, room, meal flag (1/0), total due.
///
/// The due amount is computed at save time, so meal charges collapse into a
/// single figure; meal-event history is not persisted. Fields containing
/// commas are quoted by the csv writer.
pub fn save_students<P: AsRef<Path>>(
    path: P,
    directory: &StudentDirectory,
    billing: &BillingEngine,
    ledger: &MealLedger,
) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for student in directory.students() {
        let due = billing.total_due(ledger, student);
        wtr.write_record([
            student.name.as_str(),
            student.roll_number.as_str(),
            student.contact_details.as_str(),
            student.room_number.as_str(),
            if student.meal_enabled { "1" } else { "0" },
            &format!("{:.6}", due),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Load students from a flat file into the directory.
///
/// Parsing is strict and two-phase: the whole file is parsed before the
/// directory is touched, so a malformed line (wrong field count, non-numeric
/// due) aborts the load with a `Parse` error and no partial mutation. Every
/// line must carry exactly six fields.
///
/// Meal history is not in the file, so each loaded student gets a
/// compensating payment applied: the recomputed total due (enrollment fee
/// plus adjustment, zero meals) equals the saved figure exactly. Roll
/// numbers already present in the directory are skipped and reported.
pub fn load_students<P: AsRef<Path>>(
    path: P,
    directory: &mut StudentDirectory,
    billing: &BillingEngine,
) -> Result<LoadReport> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut records = Vec::new();
    for (index, result) in rdr.records().enumerate() {
        let record = result.map_err(|e| parse_error(e, index))?;
        if record.len() != FIELDS_PER_RECORD {
            return Err(HallError::Parse {
                line: record_line(&record, index),
                reason: format!(
                    "expected {} fields, found {}",
                    FIELDS_PER_RECORD,
                    record.len()
                ),
            });
        }
        let raw: RawRecord = record.deserialize(None).map_err(|e| parse_error(e, index))?;
        records.push(raw);
    }

    let mut report = LoadReport::default();
    for record in records {
        match directory.register(
            &record.name,
            &record.roll_number,
            &record.contact_details,
            &record.room_number,
        ) {
            Ok(()) => {}
            Err(HallError::AlreadyExists(roll)) => {
                report.skipped.push(roll);
                continue;
            }
            Err(e) => return Err(e),
        }

        // Anything other than "1" counts as disabled.
        let enabled = record.meal_enabled == "1";
        directory.set_meal_enabled(&record.roll_number, enabled)?;

        // total_due re-adds the enrollment fee on top of the adjustment, so
        // the fee has to be netted out here for the saved figure to survive
        // the round trip.
        let compensation = billing.enrollment_fee(enabled) - record.due;
        directory.apply_payment(&record.roll_number, compensation)?;
        report.loaded += 1;
    }

    Ok(report)
}

fn record_line(record: &csv::StringRecord, index: usize) -> usize {
    record
        .position()
        .map(|p| p.line() as usize)
        .unwrap_or(index + 1)
}

fn parse_error(e: csv::Error, index: usize) -> HallError {
    let line = e
        .position()
        .map(|p| p.line() as usize)
        .unwrap_or(index + 1);
    HallError::Parse {
        line,
        reason: e.to_string(),
    }
}
