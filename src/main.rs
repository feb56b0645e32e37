use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use evnote::EvnoteError;
use evnote::cli::{Cli, Command};
use evnote::{annotate, status};

fn default_events_path() -> PathBuf {
    PathBuf::from("public").join("events.json")
}

fn run() -> Result<(), EvnoteError> {
    let cli = Cli::parse();
    let file = cli.file.unwrap_or_else(default_events_path);

    match cli.command {
        Command::Annotate(args) => annotate::handle_annotate(&file, &args),
        Command::Status(args) => status::handle_status(&file, &args),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("evnote: {e}");
            ExitCode::from(1)
        }
    }
}
