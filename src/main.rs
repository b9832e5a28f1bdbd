use clap::Parser;
use std::path::Path;

use hall_manager_rs::cli::{Cli, Command};
use hall_manager_rs::error::Result;
use hall_manager_rs::interface::{display_students, run_menu};
use hall_manager_rs::session::HallSession;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Run => cmd_run(&cli.file),
        Command::Report => cmd_report(&cli.file),
    }
}

/// Start the interactive hall management menu.
fn cmd_run(file_path: &str) -> Result<()> {
    let mut session = HallSession::new();

    if Path::new(file_path).exists() {
        println!(
            "Data file found: {} (use 'Load student data from file' to load it)",
            file_path
        );
    }

    run_menu(&mut session, file_path)
}

/// Load the data file and print the resident table without entering the menu.
fn cmd_report(file_path: &str) -> Result<()> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Student data file not found: {}", file_path);
        return Ok(());
    }

    let mut session = HallSession::new();
    let report = session.load_from_file(path)?;
    println!("Loaded {} students", report.loaded);
    println!();

    display_students(
        session.directory.students(),
        &session.billing,
        &session.meals,
    );

    Ok(())
}
