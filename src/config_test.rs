use std::collections::HashMap;

use super::*;

fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_apply_when_unset() {
    let config = Config::from_vars(vars(&[])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(config.api_upstream, DEFAULT_API_UPSTREAM);
    assert_eq!(config.proxy_timeout, Duration::from_secs(DEFAULT_PROXY_TIMEOUT_SECS));
}

#[test]
fn present_values_override_defaults() {
    let config = Config::from_vars(vars(&[
        ("PORT", "8080"),
        ("BIND_ADDR", "127.0.0.1"),
        ("API_UPSTREAM", "https://api.example.com/"),
        ("PROXY_TIMEOUT_SECS", "5"),
    ]))
    .unwrap();
    assert_eq!(config.socket_addr(), "127.0.0.1:8080".parse().unwrap());
    assert_eq!(config.api_upstream, "https://api.example.com");
    assert_eq!(config.proxy_timeout, Duration::from_secs(5));
}

#[test]
fn invalid_numbers_fall_back_to_defaults() {
    let config = Config::from_vars(vars(&[("PORT", "notaport"), ("PROXY_TIMEOUT_SECS", "-1")])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.proxy_timeout, Duration::from_secs(DEFAULT_PROXY_TIMEOUT_SECS));
}

#[test]
fn out_of_range_port_falls_back_to_default() {
    let config = Config::from_vars(vars(&[("PORT", "70000")])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
}

#[test]
fn blank_upstream_uses_default() {
    let config = Config::from_vars(vars(&[("API_UPSTREAM", "   ")])).unwrap();
    assert_eq!(config.api_upstream, DEFAULT_API_UPSTREAM);
}

#[test]
fn malformed_upstream_is_a_config_error() {
    let err = Config::from_vars(vars(&[("API_UPSTREAM", "not a url")])).unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
    let err = Config::from_vars(vars(&[("API_UPSTREAM", "ftp://files.example.com")])).unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}
