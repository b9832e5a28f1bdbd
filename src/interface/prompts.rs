use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{HallError, Result};
use crate::models::Student;

/// Prompt for the four registration fields.
pub fn prompt_student_details() -> Result<(String, String, String, String)> {
    let name: String = Input::new().with_prompt("Student name").interact_text()?;
    let roll: String = Input::new().with_prompt("Roll number").interact_text()?;
    let contact: String = Input::new()
        .with_prompt("Contact details")
        .interact_text()?;
    let room: String = Input::new().with_prompt("Room number").interact_text()?;
    Ok((name, roll, contact, room))
}

/// Prompt for a roll number, falling back to fuzzy lookup by student name.
///
/// If the input matches a registered roll number it is returned as-is.
/// Otherwise candidates are ranked by name similarity and offered for
/// confirmation; with no plausible candidate the raw input is returned and
/// the operation surfaces `NotFound` downstream.
pub fn prompt_roll_number(students: &[Student]) -> Result<String> {
    let input: String = Input::new().with_prompt("Roll number").interact_text()?;
    let input = input.trim().to_string();

    if students.iter().any(|s| s.roll_number == input) {
        return Ok(input);
    }

    let mut candidates: Vec<(&Student, f64)> = students
        .iter()
        .map(|s| (s, jaro_winkler(&s.name.to_lowercase(), &input.to_lowercase())))
        .filter(|(_, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        return Ok(input);
    }

    if candidates.len() == 1 {
        let student = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!(
                "Did you mean {} ({})?",
                student.name, student.roll_number
            ))
            .default(true)
            .interact()?;

        if confirm {
            return Ok(student.roll_number.clone());
        }
        return Ok(input);
    }

    // Several plausible students: offer a short pick list.
    let options: Vec<String> = candidates
        .iter()
        .take(5)
        .map(|(s, _)| format!("{} ({})", s.name, s.roll_number))
        .collect();

    let mut selection_options = options.clone();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which student did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    if selection < candidates.len() {
        Ok(candidates[selection].0.roll_number.clone())
    } else {
        Ok(input)
    }
}

/// Prompt for a payment amount.
pub fn prompt_amount() -> Result<f64> {
    let input: String = Input::new().with_prompt("Amount (BDT)").interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| HallError::InvalidInput("Invalid amount".to_string()))
}

/// Prompt for a file name with a default.
pub fn prompt_file_name(default: &str) -> Result<String> {
    Ok(Input::new()
        .with_prompt("File name")
        .default(default.to_string())
        .interact_text()?)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
