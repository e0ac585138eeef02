//! File-based logging
//!
//! The TUI owns stdout, so tracing output goes to a log file instead.

use crate::config::Config;
use anyhow::{anyhow, Result};
use std::fs::{self, OpenOptions};
use std::sync::Mutex;
use tracing::Level;

/// Install the global tracing subscriber
///
/// Does nothing when no log path can be determined.
pub fn init(config: &Config) -> Result<()> {
    let Some(path) = config.log_path() else {
        return Ok(());
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(parse_level(&config.log_level))
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {}", e))?;

    Ok(())
}

/// Parse a level name, falling back to INFO
fn parse_level(name: &str) -> Level {
    name.trim().parse().unwrap_or(Level::INFO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level_known_names() {
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level("WARN"), Level::WARN);
        assert_eq!(parse_level(" trace "), Level::TRACE);
    }

    #[test]
    fn test_parse_level_falls_back_to_info() {
        assert_eq!(parse_level(""), Level::INFO);
        assert_eq!(parse_level("chatty"), Level::INFO);
    }
}
