//! Console setup shared by all commands

use is_terminal::IsTerminal;
use tracing::Level;

/// Colors only when stdout is a terminal; piped output stays plain so the
/// listing and dry-run lines can be consumed by scripts.
pub fn configure_colors() {
    colored::control::set_override(std::io::stdout().is_terminal());
}

/// Diagnostics go to stderr so stdout carries only command output.
pub fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}
