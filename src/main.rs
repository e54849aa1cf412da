use clap::Parser;
use margin::cli::commands::Cli;
use margin::cli::handlers;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            if let Err(e) =
                margin::tui::run(cli.notes_dir.as_deref(), cli.config.as_deref(), cli.verbose)
            {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            margin::logging::init_stderr(cli.verbose);
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
