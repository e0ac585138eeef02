use crate::model::PageId;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Page shown after the splash screen (unknown ids fall back to home)
    pub start_page: String,
    pub tick_rate_ms: u64,
    pub splash_duration_ms: u64,
    /// Simulated "thinking" time before a canned chat reply appears
    pub chat_reply_delay_ms: u64,
    pub log_level: String,
    /// Overrides the default log location under the config dir
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_page: PageId::Home.as_str().to_string(),
            tick_rate_ms: 100,
            splash_duration_ms: 1500,
            chat_reply_delay_ms: 1500,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".investyc-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load the user config, or defaults when there is none
    pub fn load() -> anyhow::Result<Config> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load config from an explicit path
    ///
    /// A missing file is not an error. Unreadable or malformed files are.
    pub fn load_from(path: &Path) -> anyhow::Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(config)
    }

    pub fn start_page(&self) -> PageId {
        PageId::parse(&self.start_page)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }

    pub fn splash_duration(&self) -> Duration {
        Duration::from_millis(self.splash_duration_ms)
    }

    pub fn chat_reply_delay(&self) -> Duration {
        Duration::from_millis(self.chat_reply_delay_ms)
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| Self::config_dir().map(|dir| dir.join("investyc-tui.log")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_file(name: &str, contents: Option<&str>) -> PathBuf {
        let path = env::temp_dir().join(format!(
            "investyc-tui-{}-{}.json",
            name,
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        if let Some(contents) = contents {
            fs::write(&path, contents).unwrap();
        }
        path
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = scratch_file("missing", None);
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let path = scratch_file("partial", Some(r#"{"chat_reply_delay_ms": 250, "start_page": "startups"}"#));
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.chat_reply_delay(), Duration::from_millis(250));
        assert_eq!(config.start_page(), PageId::Startups);
        assert_eq!(config.tick_rate_ms, 100);
        assert_eq!(config.log_level, "info");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let path = scratch_file("malformed", Some("{ not json"));
        assert!(Config::load_from(&path).is_err());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_unknown_start_page_falls_back_to_home() {
        let config = Config {
            start_page: "pricing".to_string(),
            ..Config::default()
        };
        assert_eq!(config.start_page(), PageId::Home);
    }

    #[test]
    fn test_explicit_log_file_wins() {
        let config = Config {
            log_file: Some(PathBuf::from("/tmp/demo.log")),
            ..Config::default()
        };
        assert_eq!(config.log_path(), Some(PathBuf::from("/tmp/demo.log")));
    }
}
