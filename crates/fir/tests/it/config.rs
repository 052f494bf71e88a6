use std::fs;

use fir::{ConfigError, Settings};

#[test]
fn missing_file_means_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load_from(&dir.path().join("settings.toml")).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn reads_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    fs::write(&path, "scope = \"work\"\nlog_level = \"debug\"\npretty = true\n").unwrap();

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(
        settings,
        Settings {
            scope: Some("work".to_string()),
            log_level: Some("debug".to_string()),
            pretty: true,
        }
    );
}

#[test]
fn malformed_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    fs::write(&path, "scope = [").unwrap();

    let err = Settings::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().starts_with("invalid settings in "));

    let err = Settings::load_from(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn location_from_env() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "scope = \"home\"\n").unwrap();

    std::env::set_var(fir::config::ENV_VAR, &path);
    let settings = Settings::load();
    std::env::remove_var(fir::config::ENV_VAR);

    assert_eq!(settings.unwrap().scope.as_deref(), Some("home"));
}
