#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn parse_session_config_absent_uses_defaults() {
    assert_eq!(parse_session_config(None), SessionConfig::default());
}

#[test]
fn parse_session_config_blank_uses_defaults() {
    assert_eq!(parse_session_config(Some("  \n ")), SessionConfig::default());
}

#[test]
fn parse_session_config_applies_overrides() {
    let config = parse_session_config(Some(r#"{"throttle_ms": 250, "words": ["cat", "dog"]}"#));
    assert_eq!(config.throttle_ms, 250.0);
    assert_eq!(config.words, vec!["cat".to_owned(), "dog".to_owned()]);
    assert_eq!(config.frame_size, SessionConfig::default().frame_size);
}

#[test]
fn parse_session_config_malformed_json_falls_back() {
    assert_eq!(parse_session_config(Some("{not json")), SessionConfig::default());
}

#[test]
fn parse_session_config_invalid_values_fall_back() {
    assert_eq!(parse_session_config(Some(r#"{"frame_size": 0}"#)), SessionConfig::default());
}
