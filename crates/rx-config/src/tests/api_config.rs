use crate::ApiConfig;

use std::time::Duration;

#[test]
fn test_default_api_config_is_valid() {
    let config = ApiConfig::default();
    assert_eq!(config.base_url, crate::DEFAULT_API_BASE_URL);
    assert_eq!(config.timeout(), Duration::from_secs(crate::DEFAULT_API_TIMEOUT_SECS));
    assert!(config.validate().is_ok());
}

#[test]
fn test_base_url_without_scheme_rejected() {
    let config = ApiConfig {
        base_url: "localhost:5000".to_string(),
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_https_base_url_accepted() {
    let config = ApiConfig {
        base_url: "https://api.rxorders.in".to_string(),
        ..Default::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_timeout_bounds() {
    let zero = ApiConfig {
        timeout_secs: 0,
        ..Default::default()
    };
    assert!(zero.validate().is_err());

    let huge = ApiConfig {
        timeout_secs: crate::MAX_API_TIMEOUT_SECS + 1,
        ..Default::default()
    };
    assert!(huge.validate().is_err());

    let max = ApiConfig {
        timeout_secs: crate::MAX_API_TIMEOUT_SECS,
        ..Default::default()
    };
    assert!(max.validate().is_ok());
}
