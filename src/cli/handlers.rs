use std::path::Path;

use tracing::debug;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;
use crate::io::workspace_io::read_document;
use crate::model::config::Config;
use crate::model::todo::TodoItem;
use crate::ops::counters::DocumentStats;
use crate::ops::todo_ops;
use crate::parse::extract_todos;

type CmdResult = Result<(), Box<dyn std::error::Error>>;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> CmdResult {
    let json = cli.json;
    let config = config_io::load_config(cli.config.as_deref())?;

    match cli.command {
        None => Ok(()),
        Some(cmd) => match cmd {
            Commands::Todos(args) => cmd_todos(args, json),
            Commands::Count(args) => cmd_count(args, json),
            Commands::Toggle(args) => {
                reject_json(json, "toggle")?;
                cmd_toggle(args)
            }
            Commands::Add(args) => {
                reject_json(json, "add")?;
                cmd_add(args, &config)
            }
            Commands::Rm(args) => {
                reject_json(json, "rm")?;
                cmd_rm(args)
            }
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read(file: Option<&Path>) -> Result<String, Box<dyn std::error::Error>> {
    Ok(read_document(file)?)
}

/// The task on a 1-based line
fn todo_at_line(document: &str, line: usize) -> Result<TodoItem, Box<dyn std::error::Error>> {
    let index = line
        .checked_sub(1)
        .ok_or("line numbers start at 1")?;
    extract_todos(document)
        .iter()
        .find(|t| t.line_index == index)
        .cloned()
        .ok_or_else(|| format!("line {} is not a task", line).into())
}

/// Write commands print the note itself, so `--json` has nothing to shape
fn reject_json(json: bool, command: &str) -> CmdResult {
    if json {
        return Err(format!(
            "{} prints the updated note; --json is not supported",
            command
        )
        .into());
    }
    Ok(())
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

// ---------------------------------------------------------------------------
// Read command handlers
// ---------------------------------------------------------------------------

fn cmd_todos(args: DocArgs, json: bool) -> CmdResult {
    let document = read(args.file.as_deref())?;
    let lists = extract_todos(&document);
    if json {
        println!("{}", serde_json::to_string_pretty(&todos_to_json(&lists))?);
    } else {
        print_lines(&format_todos(&lists));
    }
    Ok(())
}

fn cmd_count(args: DocArgs, json: bool) -> CmdResult {
    let document = read(args.file.as_deref())?;
    let stats = DocumentStats::of(&document);
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print_lines(&format_stats(&stats));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write command handlers (print the new document, never write files)
// ---------------------------------------------------------------------------

fn cmd_toggle(args: LineArgs) -> CmdResult {
    let document = read(args.file.as_deref())?;
    let item = todo_at_line(&document, args.line)?;
    let updated = todo_ops::toggle_todo(&document, &item)?;
    debug!(line = args.line, "toggle");
    print!("{}", updated);
    Ok(())
}

fn cmd_add(args: AddArgs, config: &Config) -> CmdResult {
    let document = read(args.file.as_deref())?;
    let header_skip = args.header_skip.unwrap_or(config.sidebar.header_skip);
    match todo_ops::add_todo(&document, &args.text, header_skip) {
        Some(updated) => print!("{}", updated),
        // Blank text: echo the note unchanged
        None => print!("{}", document),
    }
    Ok(())
}

fn cmd_rm(args: LineArgs) -> CmdResult {
    let document = read(args.file.as_deref())?;
    let item = todo_at_line(&document, args.line)?;
    let updated = todo_ops::delete_todo(&document, &item)?;
    debug!(line = args.line, "rm");
    print!("{}", updated);
    Ok(())
}
