// tests/config_test.rs
use std::io::Write;
use tempfile::NamedTempFile;
use verfile::config::{load_config, Config};
use verfile::VerfileError;

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.version_file, None);
    assert_eq!(config.default_version, "0.0.1");
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
version_file = "app.version"
default_version = "1.0.0"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.version_file.as_deref(), Some("app.version"));
    assert_eq!(config.default_version, "1.0.0");
}

#[test]
fn test_load_partial_file_uses_defaults() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(br#"version_file = "app.version""#)
        .unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.default_version, "0.0.1");
}

#[test]
fn test_load_missing_explicit_file_is_io_error() {
    let err = load_config(Some("/no/such/verfile.toml")).unwrap_err();
    assert!(matches!(err, VerfileError::Io(_)));
}

#[test]
fn test_load_invalid_toml_is_config_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"version_file = [not toml").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(matches!(err, VerfileError::Config(_)));
}
