pub mod menu;
pub mod prompts;
pub mod render;

pub use menu::run_menu;
pub use prompts::{
    prompt_amount, prompt_file_name, prompt_roll_number, prompt_student_details, prompt_yes_no,
};
pub use render::{display_entry_logs, display_late_entries, display_students};
