//! Integration tests for configuration files.

use std::io::Write;

use onevone::{AppConfig, ConfigError};
use tempfile::Builder;

fn config_file(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new()
        .prefix("onevone")
        .suffix(suffix)
        .tempfile()
        .expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_load_toml_file() {
    let file = config_file(
        ".toml",
        r#"
        base_url = "https://onevone.example"
        matchup_prefix = "/vs"

        [http]
        timeout_secs = 3

        [widget]
        max_results = 8
        "#,
    );

    let config = AppConfig::load(file.path()).expect("load");
    assert_eq!(config.base_url, "https://onevone.example");
    assert_eq!(config.matchup_prefix, "/vs");
    assert_eq!(config.http.timeout_secs, 3);
    assert_eq!(config.widget.max_results, 8);
    assert_eq!(config.widget.min_query_len, 2);
    assert_eq!(config.champions_endpoint, "/api/v0/champions");
}

#[test]
fn test_load_json_file() {
    let file = config_file(
        ".JSON",
        r#"{"retry": {"max_retries": 0}, "widget": {"min_query_len": 1}}"#,
    );

    let config = AppConfig::load(file.path()).expect("load");
    assert_eq!(config.retry.max_retries, 0);
    assert_eq!(config.retry.max_delay_ms, 30000);
    assert_eq!(config.widget.min_query_len, 1);
    assert_eq!(config.widget.max_results, 4);
}

#[test]
fn test_load_reports_parse_errors() {
    let file = config_file(".toml", "[widget\nmax_results = 8");
    assert!(matches!(
        AppConfig::load(file.path()),
        Err(ConfigError::Toml(_))
    ));
}

#[test]
fn test_load_rejects_unknown_extension() {
    let file = config_file(".ini", "base_url = x");
    let err = AppConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat { .. }));
    assert!(err.to_string().contains(".ini"));
}
