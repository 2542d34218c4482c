//! Configuration loading from TOML files
//!
//! Config file is selected via:
//! 1. --config <path> command line argument
//! 2. CONFIG_FILE environment variable
//! 3. Default: config/journey.toml
//!
//! The gate answer and celebration dates are compile-time constants and
//! deliberately absent here.

use anyhow::Context;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_CONFIG_PATH: &str = "config/journey.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Redraw interval for animations (milliseconds)
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { tick_ms: default_tick_ms() }
    }
}

fn default_tick_ms() -> u64 {
    100
}

/// Page reveal timings, all in milliseconds
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimingsConfig {
    pub hint_visible: u64,
    pub gate_success_delay: u64,
    pub countdown_refresh: u64,
    pub birthday_message_delay: u64,
    pub birthday_button_delay: u64,
    pub paragraph_interval: u64,
    pub wishes_complete_delay: u64,
    pub slideshow_interval: u64,
    pub controls_hide_delay: u64,
}

impl Default for TimingsConfig {
    fn default() -> Self {
        Self {
            hint_visible: 3000,
            gate_success_delay: 2000,
            countdown_refresh: 1000,
            birthday_message_delay: 1000,
            birthday_button_delay: 4000,
            paragraph_interval: 4000,
            wishes_complete_delay: 1000,
            slideshow_interval: 4000,
            controls_hide_delay: 3000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: LogFormat,
    /// The terminal belongs to the UI, so logs go to a file
    #[serde(default = "default_log_file")]
    pub file: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), format: default_log_format(), file: default_log_file() }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> LogFormat {
    LogFormat::Text
}

fn default_log_file() -> String {
    "birthday-journey.log".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptConfig {
    #[serde(default)]
    pub enabled: bool,
    /// File path for session transcripts (JSONL format)
    #[serde(default = "default_transcript_file")]
    pub file: String,
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self { enabled: false, file: default_transcript_file() }
    }
}

fn default_transcript_file() -> String {
    "journeys.jsonl".to_string()
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct TomlConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub timings: TimingsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub transcript: TranscriptConfig,
}

/// Page timings as durations, handed to each page on mount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub hint_visible: Duration,
    pub gate_success_delay: Duration,
    pub countdown_refresh: Duration,
    pub birthday_message_delay: Duration,
    pub birthday_button_delay: Duration,
    pub paragraph_interval: Duration,
    pub wishes_complete_delay: Duration,
    pub slideshow_interval: Duration,
    pub controls_hide_delay: Duration,
}

impl From<&TimingsConfig> for Timings {
    fn from(t: &TimingsConfig) -> Self {
        let ms = Duration::from_millis;
        Self {
            hint_visible: ms(t.hint_visible),
            gate_success_delay: ms(t.gate_success_delay),
            countdown_refresh: ms(t.countdown_refresh.max(1)),
            birthday_message_delay: ms(t.birthday_message_delay),
            birthday_button_delay: ms(t.birthday_button_delay),
            paragraph_interval: ms(t.paragraph_interval.max(1)),
            wishes_complete_delay: ms(t.wishes_complete_delay),
            slideshow_interval: ms(t.slideshow_interval.max(1)),
            controls_hide_delay: ms(t.controls_hide_delay),
        }
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self::from(&TimingsConfig::default())
    }
}

/// Main configuration struct used throughout the application
#[derive(Debug, Clone)]
pub struct Config {
    tick_ms: u64,
    timings: Timings,
    log_level: String,
    log_format: LogFormat,
    log_file: String,
    transcript_enabled: bool,
    transcript_file: String,
    config_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_toml(TomlConfig::default(), "default")
    }
}

impl Config {
    fn from_toml(toml_config: TomlConfig, config_file: &str) -> Self {
        Self {
            tick_ms: toml_config.ui.tick_ms.max(10),
            timings: Timings::from(&toml_config.timings),
            log_level: toml_config.logging.level,
            log_format: toml_config.logging.format,
            log_file: toml_config.logging.file,
            transcript_enabled: toml_config.transcript.enabled,
            transcript_file: toml_config.transcript.file,
            config_file: config_file.to_string(),
        }
    }

    /// Determine config file path from an explicit argument or environment
    pub fn resolve_config_path(arg: Option<&str>) -> String {
        if let Some(path) = arg {
            return path.to_string();
        }

        if let Ok(path) = env::var("CONFIG_FILE") {
            return path;
        }

        DEFAULT_CONFIG_PATH.to_string()
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let toml_config: TomlConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        Ok(Self::from_toml(toml_config, &path.display().to_string()))
    }

    /// Load configuration - tries TOML file first, falls back to defaults
    pub fn load_from_path(path: &str) -> Self {
        match Self::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {:#}. Using defaults.", e);
                Self::default()
            }
        }
    }

    pub fn tick_ms(&self) -> u64 {
        self.tick_ms
    }

    pub fn timings(&self) -> Timings {
        self.timings
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    pub fn log_format(&self) -> LogFormat {
        self.log_format
    }

    pub fn log_file(&self) -> &str {
        &self.log_file
    }

    pub fn transcript_enabled(&self) -> bool {
        self.transcript_enabled
    }

    pub fn transcript_file(&self) -> &str {
        &self.transcript_file
    }

    pub fn config_file(&self) -> &str {
        &self.config_file
    }

    /// Builder method for tests to shorten every page timing
    #[cfg(test)]
    pub fn with_timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.tick_ms(), 100);
        assert_eq!(config.log_level(), "info");
        assert_eq!(config.log_format(), LogFormat::Text);
        assert_eq!(config.log_file(), "birthday-journey.log");
        assert!(!config.transcript_enabled());
        assert_eq!(config.transcript_file(), "journeys.jsonl");
        assert_eq!(config.config_file(), "default");
    }

    #[test]
    fn test_default_timings_match_pages() {
        let timings = Config::default().timings();
        assert_eq!(timings.hint_visible, Duration::from_millis(3000));
        assert_eq!(timings.gate_success_delay, Duration::from_millis(2000));
        assert_eq!(timings.countdown_refresh, Duration::from_millis(1000));
        assert_eq!(timings.birthday_message_delay, Duration::from_millis(1000));
        assert_eq!(timings.birthday_button_delay, Duration::from_millis(4000));
        assert_eq!(timings.paragraph_interval, Duration::from_millis(4000));
        assert_eq!(timings.wishes_complete_delay, Duration::from_millis(1000));
        assert_eq!(timings.slideshow_interval, Duration::from_millis(4000));
        assert_eq!(timings.controls_hide_delay, Duration::from_millis(3000));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let toml_config: TomlConfig = toml::from_str(
            r#"
[timings]
paragraph_interval = 250

[logging]
format = "json"
"#,
        )
        .unwrap();
        let config = Config::from_toml(toml_config, "inline");

        assert_eq!(config.timings().paragraph_interval, Duration::from_millis(250));
        assert_eq!(config.timings().hint_visible, Duration::from_millis(3000));
        assert_eq!(config.log_format(), LogFormat::Json);
        assert_eq!(config.log_level(), "info");
        assert_eq!(config.tick_ms(), 100);
    }

    #[test]
    fn test_zero_intervals_are_clamped() {
        let toml_config: TomlConfig = toml::from_str(
            r#"
[ui]
tick_ms = 0

[timings]
slideshow_interval = 0
countdown_refresh = 0
"#,
        )
        .unwrap();
        let config = Config::from_toml(toml_config, "inline");
        assert_eq!(config.tick_ms(), 10);
        assert_eq!(config.timings().slideshow_interval, Duration::from_millis(1));
        assert_eq!(config.timings().countdown_refresh, Duration::from_millis(1));
    }

    // CONFIG_FILE is process-wide; tests that touch it hold this lock
    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    #[test]
    fn test_resolve_config_path_from_arg() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        env::set_var("CONFIG_FILE", "config/from-env.toml");
        let resolved = Config::resolve_config_path(Some("config/other.toml"));
        env::remove_var("CONFIG_FILE");
        assert_eq!(resolved, "config/other.toml");
    }

    #[test]
    fn test_resolve_config_path_from_env() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        env::set_var("CONFIG_FILE", "config/from-env.toml");
        let resolved = Config::resolve_config_path(None);
        env::remove_var("CONFIG_FILE");
        assert_eq!(resolved, "config/from-env.toml");
    }

    #[test]
    fn test_resolve_config_path_default() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        env::remove_var("CONFIG_FILE");
        assert_eq!(Config::resolve_config_path(None), DEFAULT_CONFIG_PATH);
    }
}
