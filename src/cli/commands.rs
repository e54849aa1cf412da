use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mg", about = concat!("[ ] margin v", env!("CARGO_PKG_VERSION"), " - a sidebar for plain-text notes"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON (todos, count)
    #[arg(long, global = true)]
    pub json: bool,

    /// Notes directory for the TUI (default: current directory)
    #[arg(short = 'C', long = "notes-dir", global = true)]
    pub notes_dir: Option<PathBuf>,

    /// Config file (default: $XDG_CONFIG_HOME/margin/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the tasks in a note
    Todos(DocArgs),
    /// Check or uncheck the task on a line; prints the new note
    Toggle(LineArgs),
    /// Add a pending task; prints the new note
    Add(AddArgs),
    /// Remove the task on a line; prints the new note
    Rm(LineArgs),
    /// Count words and characters
    Count(DocArgs),
}

#[derive(Args)]
pub struct DocArgs {
    /// Note to read (default or `-`: stdin)
    pub file: Option<PathBuf>,
}

#[derive(Args)]
pub struct LineArgs {
    /// 1-based line number, as printed by `mg todos`
    pub line: usize,
    /// Note to read (default or `-`: stdin)
    pub file: Option<PathBuf>,
}

#[derive(Args)]
pub struct AddArgs {
    /// Task text
    pub text: String,
    /// Note to read (default or `-`: stdin)
    pub file: Option<PathBuf>,
    /// Leading header lines to skip when the note has no pending tasks
    #[arg(long)]
    pub header_skip: Option<usize>,
}
