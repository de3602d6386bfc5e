//! Command-line configuration for the `learntris` binary.

use anyhow::{anyhow, Result};

use crate::core::{ClearMode, Rules};

/// Environment variable read for the log filter when `--log` is absent
pub const LOG_ENV: &str = "LEARNTRIS_LOG";

/// Log filter used when neither `--log` nor the environment sets one
pub const DEFAULT_LOG_FILTER: &str = "warn";

pub const USAGE: &str = "\
usage: learntris [--clear-mode <in-place|collapse>] [--log <filter>]

Reads single-character commands from stdin and writes output to stdout.
Logs go to stderr (filter from --log or the LEARNTRIS_LOG variable).
";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub clear_mode: ClearMode,
    pub log_filter: Option<String>,
    pub show_help: bool,
}

impl AppConfig {
    pub fn rules(&self) -> Rules {
        Rules::new(self.clear_mode)
    }
}

/// Parse arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<AppConfig> {
    let mut config = AppConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--clear-mode" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --clear-mode"))?;
                config.clear_mode = ClearMode::from_str(v)
                    .ok_or_else(|| anyhow!("invalid --clear-mode value: {}", v))?;
            }
            "--log" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --log"))?;
                config.log_filter = Some(v.clone());
            }
            "-h" | "--help" => {
                config.show_help = true;
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(config)
}
