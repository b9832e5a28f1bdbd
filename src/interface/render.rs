use chrono::{DateTime, Local};

use crate::billing::{BillingEngine, MealLedger};
use crate::models::{EntryRecord, Student};

const TIME_FORMAT: &str = "%a %b %e %T %Y";

/// Display the resident table with per-student due balances.
pub fn display_students(students: &[Student], billing: &BillingEngine, ledger: &MealLedger) {
    if students.is_empty() {
        println!("No students registered.");
        return;
    }

    println!(
        "{:<20} {:<12} {:<22} {:<12} {:<10} {:>12}",
        "Name", "Roll", "Contact", "Room", "Meal", "Due (BDT)"
    );
    println!("{}", "-".repeat(92));

    for student in students {
        let due = billing.total_due(ledger, student);
        println!(
            "{:<20} {:<12} {:<22} {:<12} {:<10} {:>12.2}",
            student.name,
            student.roll_number,
            student.contact_details,
            student.room_number,
            student.meal_status(),
            due
        );
    }

    println!();
    println!("Total students: {}", students.len());
}

/// Display the gate entry/exit log.
pub fn display_entry_logs(records: &[EntryRecord]) {
    if records.is_empty() {
        println!("No entries recorded.");
        return;
    }

    println!();
    println!("=== Entry and Exit Logs ===");
    println!();

    for record in records {
        println!("Roll number: {}", record.roll_number);
        println!("Entry time:  {}", record.entry_time.format(TIME_FORMAT));
        if let Some(exit) = record.exit_time {
            println!("Exit time:   {}", exit.format(TIME_FORMAT));
        }
        println!();
    }
}

/// Display entries flagged as past curfew.
pub fn display_late_entries(entries: &[(String, DateTime<Local>)]) {
    if entries.is_empty() {
        println!("No late entries recorded.");
        return;
    }

    println!();
    println!("=== Late Entries ===");
    println!();

    for (roll, at) in entries {
        println!("Roll number: {}", roll);
        println!("Entry time:  {}", at.format(TIME_FORMAT));
        println!();
    }
}
