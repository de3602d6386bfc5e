//! Learntris command runner (default binary).
//!
//! Reads commands from stdin and writes every display to stdout. Logging is
//! routed to stderr so stdout only carries command output.

use std::io;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use learntris::app::App;
use learntris::config::{parse_args, DEFAULT_LOG_FILTER, LOG_ENV, USAGE};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args)?;
    if config.show_help {
        print!("{}", USAGE);
        return Ok(());
    }

    let filter = match config.log_filter.as_deref() {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    tracing::info!(clear_mode = config.clear_mode.as_str(), "starting");

    let mut app = App::new(config.rules());
    app.run(io::stdin().lock(), io::stdout().lock())
}
