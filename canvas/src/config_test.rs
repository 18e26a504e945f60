#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults_match_constants() {
    let config = SessionConfig::default();
    assert_eq!(config.throttle_ms, 100.0);
    assert_eq!(config.sketch_padding, 4.0);
    assert_eq!(config.brush_radius, 4.0);
    assert_eq!(config.line_width, 15.0);
    assert_eq!(config.frame_size, 224);
    assert_eq!(config.channel_policy, ChannelPolicy::Alpha);
    assert_eq!(config.model, "Xenova/quickdraw-mobilevit-small");
    assert_eq!(config.words.len(), DEFAULT_WORDS.len());
    assert!(config.validate().is_ok());
}

#[test]
fn empty_json_yields_defaults() {
    let config = SessionConfig::from_json("{}").unwrap();
    assert_eq!(config, SessionConfig::default());
}

#[test]
fn partial_json_overrides_fields() {
    let config =
        SessionConfig::from_json(r#"{"throttle_ms": 10, "channel_policy": "rgb_average", "words": ["cat", "dog"]}"#)
            .unwrap();
    assert_eq!(config.throttle_ms, 10.0);
    assert_eq!(config.channel_policy, ChannelPolicy::RgbAverage);
    assert_eq!(config.words, vec!["cat".to_owned(), "dog".to_owned()]);
    assert_eq!(config.frame_size, 224);
}

#[test]
fn malformed_json_is_parse_error() {
    assert!(matches!(SessionConfig::from_json("{"), Err(ConfigError::Parse(_))));
}

#[test]
fn unknown_field_is_parse_error() {
    assert!(matches!(SessionConfig::from_json(r#"{"zoom": 2}"#), Err(ConfigError::Parse(_))));
}

#[test]
fn empty_word_list_is_rejected() {
    assert!(matches!(SessionConfig::from_json(r#"{"words": []}"#), Err(ConfigError::EmptyWordList)));
}

#[test]
fn zero_frame_size_is_rejected() {
    let err = SessionConfig::from_json(r#"{"frame_size": 0}"#).unwrap_err();
    assert!(err.to_string().contains("frame_size"));
}

#[test]
fn negative_numbers_are_rejected() {
    for raw in [r#"{"throttle_ms": -1}"#, r#"{"sketch_padding": -4}"#, r#"{"brush_radius": -0.5}"#] {
        assert!(matches!(SessionConfig::from_json(raw), Err(ConfigError::Invalid(_))), "{raw}");
    }
}

#[test]
fn huge_sketch_padding_is_rejected() {
    let err = SessionConfig::from_json(r#"{"sketch_padding": 1e9}"#).unwrap_err();
    assert!(err.to_string().contains("sketch_padding"));
    assert!(SessionConfig::from_json(r#"{"sketch_padding": 1024}"#).is_ok());
}

#[test]
fn huge_brush_radius_is_rejected() {
    let err = SessionConfig::from_json(r#"{"brush_radius": 1025}"#).unwrap_err();
    assert!(err.to_string().contains("brush_radius"));
    assert!(SessionConfig::from_json(r#"{"brush_radius": 1024}"#).is_ok());
}

#[test]
fn huge_frame_size_is_rejected() {
    let err = SessionConfig::from_json(r#"{"frame_size": 100000}"#).unwrap_err();
    assert!(err.to_string().contains("frame_size"));
    assert!(SessionConfig::from_json(r#"{"frame_size": 1024}"#).is_ok());
}

#[test]
fn zero_line_width_is_rejected() {
    assert!(matches!(SessionConfig::from_json(r#"{"line_width": 0}"#), Err(ConfigError::Invalid(_))));
}

#[test]
fn blank_model_is_rejected() {
    assert!(matches!(SessionConfig::from_json(r#"{"model": " "}"#), Err(ConfigError::Invalid(_))));
}

#[test]
fn frame_config_mirrors_fields() {
    let config = SessionConfig { sketch_padding: 6.0, frame_size: 28, ..SessionConfig::default() };
    let frame = config.frame_config();
    assert_eq!(frame.padding, 6.0);
    assert_eq!(frame.size, 28);
    assert_eq!(frame.policy, ChannelPolicy::Alpha);
}
