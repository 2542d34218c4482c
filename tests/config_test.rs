//! Integration tests for configuration loading

use birthday_journey::infra::{Config, LogFormat};
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

#[test]
fn test_load_config_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();

    let config_content = r#"
[ui]
tick_ms = 50

[timings]
hint_visible = 1500
slideshow_interval = 2500

[logging]
level = "debug"
format = "json"
file = "/tmp/journey-test.log"

[transcript]
enabled = true
file = "/tmp/journeys-test.jsonl"
"#;

    temp_file.write_all(config_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = Config::from_file(temp_file.path()).unwrap();

    assert_eq!(config.tick_ms(), 50);
    assert_eq!(config.timings().hint_visible, Duration::from_millis(1500));
    assert_eq!(config.timings().slideshow_interval, Duration::from_millis(2500));
    // Keys left out keep their defaults
    assert_eq!(config.timings().gate_success_delay, Duration::from_millis(2000));
    assert_eq!(config.log_level(), "debug");
    assert_eq!(config.log_format(), LogFormat::Json);
    assert!(config.transcript_enabled());
    assert_eq!(config.transcript_file(), "/tmp/journeys-test.jsonl");
    assert_eq!(config.config_file(), temp_file.path().display().to_string());
}

#[test]
fn test_shipped_config_parses() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/journey.toml");
    let config = Config::from_file(path).unwrap();
    assert_eq!(config.tick_ms(), 100);
    assert_eq!(config.timings().paragraph_interval, Duration::from_secs(4));
}

#[test]
fn test_invalid_toml_is_an_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[ui\ntick_ms = ").unwrap();
    temp_file.flush().unwrap();

    let err = Config::from_file(temp_file.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config file"));
}

#[test]
fn test_load_from_path_fallback() {
    let config = Config::load_from_path("/nonexistent/config.toml");
    assert_eq!(config.tick_ms(), 100);
    assert_eq!(config.log_format(), LogFormat::Text);
    assert_eq!(config.config_file(), "default");
}
