use super::*;

#[test]
fn default_points_at_same_origin_api() {
    assert_eq!(ClientConfig::default().api_base_url, "/api");
}

#[test]
fn from_raw_trims_trailing_slashes() {
    let cfg = ClientConfig::from_raw(Some("https://media.example.test/v1//"));
    assert_eq!(cfg.api_base_url, "https://media.example.test/v1");
}

#[test]
fn from_raw_blank_falls_back_to_default() {
    assert_eq!(ClientConfig::from_raw(Some("   ")).api_base_url, DEFAULT_API_BASE_URL);
}
