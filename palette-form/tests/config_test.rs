use palette_form::config::AppConfig;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_load_without_files_uses_defaults() {
    let dir = TempDir::new().unwrap();

    let config = AppConfig::load_with_base_dir(dir.path()).unwrap();

    assert_eq!(config.client.submit_path, "/api/submit");
    assert_eq!(config.client.result_storage_key, "paletteResult");
}

#[test]
fn test_environment_file_overrides_base_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        r#"
[client]
base_url = "http://palette.internal:8000"
request_timeout = 10

[i18n]
default_language = "it"
"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("config.dev.toml"),
        r#"
[client]
base_url = "http://127.0.0.1:3000"
"#,
    )
    .unwrap();

    let config = AppConfig::load_with_base_dir(dir.path()).unwrap();

    assert_eq!(config.client.base_url, "http://127.0.0.1:3000");
    assert_eq!(config.client.timeout(), Some(Duration::from_secs(10)));
    assert_eq!(config.i18n.default_language, "it");
    assert_eq!(config.client.thank_you_route, "/thank-you");
}

#[test]
fn test_from_file_rejects_invalid_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("palette.toml");
    fs::write(
        &path,
        r#"
[client]
submit_path = "api/submit"
"#,
    )
    .unwrap();

    let err = AppConfig::from_file(&path).unwrap_err();
    assert_eq!(err.error_code(), "E_CONFIG");
}

#[test]
fn test_from_file_reports_syntax_errors() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("palette.toml");
    fs::write(&path, "[client\nbase_url = ").unwrap();

    let err = AppConfig::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("palette.toml"));
}

#[test]
fn test_missing_file_is_config_error() {
    let err = AppConfig::from_file("/nonexistent/palette.toml").unwrap_err();
    assert_eq!(err.error_code(), "E_CONFIG");
}
