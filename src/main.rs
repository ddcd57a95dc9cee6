//! tablas CLI
//!
//! Ask for numbers, print their multiplication tables, then print the
//! tables of 0 through 10.

use std::io;
use std::process::ExitCode;

use clap::Parser;

use tablas::session::TableSession;

#[derive(Parser)]
#[command(name = "tablas")]
#[command(about = "Print multiplication tables interactively")]
#[command(version)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    // Logs go to stderr; stdout carries only the session text.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut session = TableSession::new(stdin.lock(), stdout.lock());
    session.run().map_err(|e| e.to_string())?;

    Ok(())
}
