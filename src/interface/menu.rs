use chrono::Local;
use dialoguer::Select;

use crate::error::Result;
use crate::interface::prompts::{
    prompt_amount, prompt_file_name, prompt_roll_number, prompt_student_details, prompt_yes_no,
};
use crate::interface::render::{display_entry_logs, display_late_entries, display_students};
use crate::session::HallSession;

const MENU_ITEMS: [&str; 13] = [
    "Register student",
    "Enable/disable meal plan",
    "Record student entry",
    "Record student exit",
    "Show due payment",
    "Make payment",
    "Print student information",
    "Print entry and exit logs",
    "Print late entries",
    "Save student data to file",
    "Load student data from file",
    "Record meal",
    "Exit",
];

/// Run the interactive menu loop until the user exits.
///
/// Errors from individual operations are reported and the loop continues;
/// only a broken prompt terminal aborts the session.
pub fn run_menu(session: &mut HallSession, default_file: &str) -> Result<()> {
    loop {
        println!();
        let choice = Select::new()
            .with_prompt("Hall Management System")
            .items(&MENU_ITEMS)
            .default(0)
            .interact()?;

        if choice == MENU_ITEMS.len() - 1 {
            println!("Exiting...");
            return Ok(());
        }

        if let Err(e) = dispatch(session, choice, default_file) {
            eprintln!("Error: {}", e);
        }
    }
}

fn dispatch(session: &mut HallSession, choice: usize, default_file: &str) -> Result<()> {
    match choice {
        0 => {
            let (name, roll, contact, room) = prompt_student_details()?;
            session.register_student(&name, &roll, &contact, &room)?;
            println!("Student registered successfully: {} ({})", name, roll);
        }
        1 => {
            let roll = prompt_roll_number(session.directory.students())?;
            let enable = prompt_yes_no("Enable meal plan?", true)?;
            session.set_meal_enabled(&roll, enable)?;
            println!(
                "Meal plan {} for student {}",
                if enable { "enabled" } else { "disabled" },
                roll
            );
        }
        2 => {
            let roll = prompt_roll_number(session.directory.students())?;
            session.record_entry(&roll, Local::now());
            println!("Entry recorded for student {}", roll);
        }
        3 => {
            let roll = prompt_roll_number(session.directory.students())?;
            session.record_exit(&roll, Local::now());
            println!("Exit recorded for student {}", roll);
        }
        4 => {
            let roll = prompt_roll_number(session.directory.students())?;
            let due = session.due_for(&roll)?;
            println!("Due payment for student {}: BDT {:.2}", roll, due);
        }
        5 => {
            let roll = prompt_roll_number(session.directory.students())?;
            let amount = prompt_amount()?;
            session.make_payment(&roll, amount)?;
            println!(
                "Payment recorded. Remaining due for {}: BDT {:.2}",
                roll,
                session.due_for(&roll)?
            );
        }
        6 => {
            display_students(
                session.directory.students(),
                &session.billing,
                &session.meals,
            );
        }
        7 => display_entry_logs(session.entry_log.records()),
        8 => display_late_entries(session.late_entries.entries()),
        9 => {
            let file = prompt_file_name(default_file)?;
            session.save_to_file(&file)?;
            println!("Student data saved to file: {}", file);
        }
        10 => {
            let file = prompt_file_name(default_file)?;
            let report = session.load_from_file(&file)?;
            println!("Loaded {} students from {}", report.loaded, file);
            if !report.skipped.is_empty() {
                println!("Skipped already-registered rolls: {}", report.skipped.join(", "));
            }
        }
        // Select is bounded to the menu items and the exit index returns
        // before dispatch, so index 11 (record meal) is all that remains.
        _ => {
            let roll = prompt_roll_number(session.directory.students())?;
            let now = Local::now();

            if !session.schedule.is_meal_available(now) {
                let anyway = prompt_yes_no("Outside serving hours. Record meal anyway?", false)?;
                if !anyway {
                    println!("Meal not recorded.");
                    return Ok(());
                }
            }

            session.record_meal(&roll, now);
            println!(
                "Meal recorded for student {} ({} total)",
                roll,
                session.meals.meal_count(&roll)
            );
        }
    }

    Ok(())
}
