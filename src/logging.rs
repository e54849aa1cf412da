use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Default level is `info` (`debug` with `verbose`); `RUST_LOG` overrides
/// both.
fn filter(verbose: bool) -> EnvFilter {
    let level = if verbose { "margin=debug" } else { "margin=info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Log to stderr. Used by the CLI subcommands.
pub fn init_stderr(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Log to `dir/margin.log`. The TUI owns the terminal, so nothing may reach
/// stdout or stderr while it runs. Keep the guard alive until exit.
pub fn init_file(dir: &Path, verbose: bool) -> WorkerGuard {
    let appender = tracing_appender::rolling::never(dir, "margin.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(writer)
        .with_ansi(false)
        .try_init();
    guard
}

/// Where the TUI log goes: next to the config file
pub fn log_dir() -> std::path::PathBuf {
    crate::io::config_io::default_config_path()
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(std::env::temp_dir)
}
