use super::*;

// =============================================================================
// Config::new
// =============================================================================

#[test]
fn new_keeps_clean_url() {
    let config = Config::new("http://example.com:5000");
    assert_eq!(config.base_url, "http://example.com:5000");
}

#[test]
fn new_trims_trailing_slash() {
    let config = Config::new("http://example.com:5000/");
    assert_eq!(config.base_url, "http://example.com:5000");
}

#[test]
fn new_trims_multiple_trailing_slashes() {
    let config = Config::new("http://example.com:5000///");
    assert_eq!(config.base_url, "http://example.com:5000");
}

// =============================================================================
// Config::default
// =============================================================================

#[test]
fn default_points_at_local_backend() {
    let config = Config::default();
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
}

#[test]
fn default_base_url_has_no_trailing_slash() {
    assert!(!Config::default().base_url.ends_with('/'));
}

// =============================================================================
// Config::from_env
// =============================================================================

#[test]
fn from_env_value_uses_variable_when_set() {
    let config = Config::from_env_value(Some("http://backend:5000/"));
    assert_eq!(config.base_url, "http://backend:5000");
}

#[test]
fn from_env_value_falls_back_to_default() {
    let config = Config::from_env_value(None);
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
}
