use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "evnote", version, about = "Attach commentary to calendar event records")]
pub struct Cli {
    /// Events JSON file (default: public/events.json)
    #[arg(long, env = "EVNOTE_FILE", global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Annotate matching events with commentary and save the file
    Annotate(AnnotateArgs),
    /// Show file health: size, record count, annotated and pending counts
    Status(StatusArgs),
}

#[derive(Parser)]
pub struct AnnotateArgs {
    /// TOML commentary table (default: built-in table)
    #[arg(long, env = "EVNOTE_COMMENTS")]
    pub comments: Option<PathBuf>,

    /// Run the pass and print diagnostics without writing the file
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct StatusArgs {
    /// TOML commentary table used for the pending-match count
    #[arg(long, env = "EVNOTE_COMMENTS")]
    pub comments: Option<PathBuf>,
}
