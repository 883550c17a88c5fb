//! Logging bootstrap for the `taskmind` binary.
//!
//! The library only talks to the `log` facade; this wires it to stderr.
//! `RUST_LOG` wins over the level passed in.

use flexi_logger::{Logger, LoggerHandle};

use crate::error::{Result, TaskmindError};

pub const DEFAULT_LEVEL: &str = "warn";

const SUPPORTED_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Start logging to stderr. Keep the handle alive for the life of the process.
pub fn init_logging(level: &str) -> Result<LoggerHandle> {
    let level = normalize_level(level)?;

    Logger::try_with_env_or_str(level)
        .map_err(|e| TaskmindError::Config(format!("invalid log spec `{}`: {}", level, e)))?
        .log_to_stderr()
        .start()
        .map_err(|e| TaskmindError::Generic(format!("failed to start logger: {}", e)))
}

fn normalize_level(level: &str) -> Result<&'static str> {
    let wanted = level.trim().to_ascii_lowercase();
    SUPPORTED_LEVELS
        .iter()
        .find(|l| **l == wanted)
        .copied()
        .ok_or_else(|| {
            TaskmindError::Config(format!(
                "unsupported log level `{}`; expected one of {}",
                level,
                SUPPORTED_LEVELS.join(", ")
            ))
        })
}
