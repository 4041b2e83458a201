use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(cfg.proxy_timeout, Duration::from_secs(DEFAULT_PROXY_TIMEOUT_SECS));
    assert_eq!(cfg.proxy_connect_timeout, Duration::from_secs(DEFAULT_PROXY_CONNECT_TIMEOUT_SECS));
}

#[test]
fn overrides_are_parsed_and_trimmed() {
    let cfg = HostConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("DATAHEX_BACKEND_URL", " https://api.example.test/v1/ "),
        ("DATAHEX_PROXY_TIMEOUT_SECS", "12"),
        ("DATAHEX_PROXY_CONNECT_TIMEOUT_SECS", "2"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.backend_url, "https://api.example.test/v1");
    assert_eq!(cfg.proxy_timeout, Duration::from_secs(12));
    assert_eq!(cfg.proxy_connect_timeout, Duration::from_secs(2));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = HostConfig::from_lookup(lookup(&[("PORT", " "), ("DATAHEX_BACKEND_URL", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
}

#[test]
fn bad_port_errors() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err().to_string();
    assert!(err.starts_with("invalid PORT"), "{err}");
}

#[test]
fn non_http_backend_errors() {
    let err = HostConfig::from_lookup(lookup(&[("DATAHEX_BACKEND_URL", "localhost:5000")]))
        .unwrap_err()
        .to_string();
    assert!(err.contains("DATAHEX_BACKEND_URL"), "{err}");
}

#[test]
fn from_env_reads_process_environment() {
    // Only variable this crate's tests set; no other test reads it.
    unsafe { std::env::set_var("DATAHEX_PROXY_CONNECT_TIMEOUT_SECS", "9") };
    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg.proxy_connect_timeout, Duration::from_secs(9));
    unsafe { std::env::remove_var("DATAHEX_PROXY_CONNECT_TIMEOUT_SECS") };
}
