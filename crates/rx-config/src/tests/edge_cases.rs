use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err};
use serial_test::serial;

// =========================================================================
// Edge Cases
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error_mentions_file() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "this is not valid toml {{{{").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("config.toml"));
}

#[test]
#[serial]
fn given_base_url_without_scheme_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _base = EnvGuard::set("RX_API_BASE_URL", "localhost:5000");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("api.base_url"));
}

#[test]
#[serial]
fn given_unparseable_timeout_env_when_load_then_keeps_default() {
    // Given
    let _temp = setup_config_dir();
    let _timeout = EnvGuard::set("RX_API_TIMEOUT_SECS", "soon");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(config.api.timeout_secs, crate::DEFAULT_API_TIMEOUT_SECS);
}

#[test]
#[serial]
fn given_empty_storage_dir_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _base = EnvGuard::remove("RX_API_BASE_URL");
    let _dir = EnvGuard::set("RX_STORAGE_DIR", "  ");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("storage.dir"));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_created() {
    // Given
    let temp = tempfile::TempDir::new().unwrap();
    let nested = temp.path().join("a").join("b");
    let _guard = EnvGuard::set("RX_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert!(result.is_ok());
    assert!(nested.exists());
}
