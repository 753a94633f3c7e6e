// Integration tests for configuration loading

use crate::common::ConfigFile;
use cvsearch::core::config::Config;
use cvsearch::core::xdg::XdgDirs;
use serial_test::serial;
use std::env;
use tempfile::TempDir;

fn clear_env_vars() {
    for var in [
        "CVSEARCH_CONFIG",
        "CVSEARCH_CONFIG_FILE",
        "CVSEARCH_HOST",
        "CVSEARCH_INDEX",
        "CVSEARCH_AUTOCOMPLETE_MIN_CHARS",
        "CVSEARCH_DEBOUNCE_MS",
    ] {
        env::remove_var(var);
    }
}

fn empty_xdg() -> (XdgDirs, TempDir) {
    let temp = TempDir::new().unwrap();
    let xdg = XdgDirs {
        config_dir: temp.path().to_path_buf(),
    };
    (xdg, temp)
}

#[test]
#[serial]
fn test_defaults_without_config_file() {
    clear_env_vars();
    let (xdg, _temp) = empty_xdg();

    let config = Config::load_with_xdg(&xdg, None).unwrap();
    assert_eq!(config.connector.index, "cv-transcriptions");
    assert_eq!(config.ui.autocomplete_minimum_characters, 3);
}

#[test]
#[serial]
fn test_xdg_config_file_is_read() {
    clear_env_vars();
    let (xdg, _temp) = empty_xdg();
    std::fs::write(
        xdg.config_file(),
        "[connector]\nhost = \"https://es.example.org\"\n",
    )
    .unwrap();

    let config = Config::load_with_xdg(&xdg, None).unwrap();
    assert_eq!(config.connector.host, "https://es.example.org");
}

#[test]
#[serial]
fn test_explicit_path_wins_over_env() {
    clear_env_vars();
    let (xdg, _temp) = empty_xdg();
    let from_env = ConfigFile::new("[connector]\nindex = \"from-env\"\n");
    let explicit = ConfigFile::new("[connector]\nindex = \"from-flag\"\n");
    env::set_var("CVSEARCH_CONFIG", from_env.path());

    let config = Config::load_with_xdg(&xdg, Some(explicit.path())).unwrap();
    assert_eq!(config.connector.index, "from-flag");

    let config = Config::load_with_xdg(&xdg, None).unwrap();
    assert_eq!(config.connector.index, "from-env");

    clear_env_vars();
}

#[test]
#[serial]
fn test_env_overrides_file() {
    clear_env_vars();
    let (xdg, _temp) = empty_xdg();
    let file = ConfigFile::new("[ui]\ndebounce_length_ms = 100\n");
    env::set_var("CVSEARCH_DEBOUNCE_MS", "300");
    env::set_var("CVSEARCH_HOST", "https://override:9200");

    let config = Config::load_with_xdg(&xdg, Some(file.path())).unwrap();
    assert_eq!(config.ui.debounce_length_ms, 300);
    assert_eq!(config.connector.host, "https://override:9200");

    clear_env_vars();
}

#[test]
#[serial]
fn test_invalid_env_value_fails_validation() {
    clear_env_vars();
    let (xdg, _temp) = empty_xdg();
    env::set_var("CVSEARCH_INDEX", "Not An Index");

    let err = Config::load_with_xdg(&xdg, None).unwrap_err();
    assert!(err.is_configuration_error());

    clear_env_vars();
}

#[test]
#[serial]
fn test_negative_debounce_aborts_load() {
    clear_env_vars();
    let (xdg, _temp) = empty_xdg();
    env::set_var("CVSEARCH_DEBOUNCE_MS", "-5");

    let err = Config::load_with_xdg(&xdg, None).unwrap_err();
    clear_env_vars();

    assert!(err.is_configuration_error());
    assert!(err
        .to_string()
        .contains("CVSEARCH_DEBOUNCE_MS must be a non-negative integer, got '-5'"));
}

#[test]
#[serial]
fn test_malformed_toml_is_configuration_error() {
    clear_env_vars();
    let (xdg, _temp) = empty_xdg();
    let file = ConfigFile::new("[connector\nhost = 1");

    let err = Config::load_with_xdg(&xdg, Some(file.path())).unwrap_err();
    assert!(err.is_configuration_error());
}
