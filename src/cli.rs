use clap::{Parser, Subcommand};

/// HallManager — a dormitory hall management CLI for residents, meals, and billing.
#[derive(Parser, Debug)]
#[command(name = "hall_manager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the student data file.
    #[arg(short, long, default_value = "students.txt")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the interactive hall management menu.
    Run,

    /// Load the student data file and print the resident table.
    Report,
}

impl Default for Command {
    fn default() -> Self {
        Command::Run
    }
}
