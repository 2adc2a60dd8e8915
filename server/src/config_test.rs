use super::*;
use std::collections::HashMap;

fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    AppConfig::from_lookup(|key| map.get(key).cloned())
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", "On", "  true  "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "NO"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_invalid_returns_none() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

// =============================================================================
// AppConfig
// =============================================================================

#[test]
fn missing_api_url_is_a_config_error() {
    assert_eq!(config(&[]), Err(ConfigError::MissingApiUrl));
    assert_eq!(config(&[("API_URL", "   ")]), Err(ConfigError::MissingApiUrl));
}

#[test]
fn api_url_must_be_http() {
    assert_eq!(
        config(&[("API_URL", "ftp://api.test")]),
        Err(ConfigError::InvalidApiUrl("ftp://api.test".to_owned()))
    );
}

#[test]
fn defaults_apply() {
    let cfg = config(&[("API_URL", "https://api.test/v1/")]).unwrap();
    assert_eq!(cfg.api_url, "https://api.test/v1");
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(!cfg.cookie_secure);
    assert_eq!(
        cfg.timeouts,
        RemoteTimeouts {
            request_secs: DEFAULT_REMOTE_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_REMOTE_CONNECT_TIMEOUT_SECS
        }
    );
}

#[test]
fn overrides_apply() {
    let cfg = config(&[
        ("API_URL", "http://localhost:4000"),
        ("PORT", "8080"),
        ("COOKIE_SECURE", "yes"),
        ("REMOTE_REQUEST_TIMEOUT_SECS", "30"),
        ("REMOTE_CONNECT_TIMEOUT_SECS", "2"),
    ])
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert!(cfg.cookie_secure);
    assert_eq!(cfg.timeouts, RemoteTimeouts { request_secs: 30, connect_secs: 2 });
}

#[test]
fn invalid_port_is_rejected() {
    assert_eq!(
        config(&[("API_URL", "http://x.test"), ("PORT", "eighty")]),
        Err(ConfigError::InvalidPort("eighty".to_owned()))
    );
}

#[test]
fn cookie_secure_inferred_from_public_url() {
    let cfg = config(&[("API_URL", "http://x.test"), ("PUBLIC_URL", "https://jobs.example.com")]).unwrap();
    assert!(cfg.cookie_secure);
    let explicit = config(&[
        ("API_URL", "http://x.test"),
        ("PUBLIC_URL", "https://jobs.example.com"),
        ("COOKIE_SECURE", "off"),
    ])
    .unwrap();
    assert!(!explicit.cookie_secure);
}

#[test]
fn zero_or_garbage_timeouts_fall_back_to_defaults() {
    let cfg = config(&[
        ("API_URL", "http://x.test"),
        ("REMOTE_REQUEST_TIMEOUT_SECS", "0"),
        ("REMOTE_CONNECT_TIMEOUT_SECS", "soon"),
    ])
    .unwrap();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_REMOTE_REQUEST_TIMEOUT_SECS);
    assert_eq!(cfg.timeouts.connect_secs, DEFAULT_REMOTE_CONNECT_TIMEOUT_SECS);
}
