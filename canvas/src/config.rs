//! Session configuration.
//!
//! Every field has a default taken from [`crate::consts`], so an empty JSON
//! object (or no config at all) yields the stock game. The browser host may
//! override fields from an inline `application/json` script element.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    BRUSH_RADIUS_PX, DEFAULT_MODEL, FRAME_SIZE, LINE_WIDTH_PX, MAX_FRAME_SIZE, MAX_MARGIN_PX, SKETCH_PADDING_PX,
    THROTTLE_MS,
};
use crate::frame::{ChannelPolicy, FrameConfig};
use crate::words::{DEFAULT_WORDS, WordList};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
    #[error("word list is empty")]
    EmptyWordList,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    pub throttle_ms: f64,
    pub sketch_padding: f64,
    pub brush_radius: f64,
    pub line_width: f64,
    pub frame_size: u32,
    pub channel_policy: ChannelPolicy,
    pub model: String,
    pub words: Vec<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            throttle_ms: THROTTLE_MS,
            sketch_padding: SKETCH_PADDING_PX,
            brush_radius: BRUSH_RADIUS_PX,
            line_width: LINE_WIDTH_PX,
            frame_size: FRAME_SIZE,
            channel_policy: ChannelPolicy::default(),
            model: DEFAULT_MODEL.to_owned(),
            words: DEFAULT_WORDS.iter().map(|w| (*w).to_owned()).collect(),
        }
    }
}

impl SessionConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields, and
    /// the [`SessionConfig::validate`] errors otherwise.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for out-of-range numbers or an empty
    /// model name, and [`ConfigError::EmptyWordList`] for an empty word list.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.throttle_ms.is_finite() || self.throttle_ms < 0.0 {
            return Err(ConfigError::Invalid(format!("throttle_ms must be >= 0, got {}", self.throttle_ms)));
        }
        if !(0.0..=MAX_MARGIN_PX).contains(&self.sketch_padding) {
            return Err(ConfigError::Invalid(format!(
                "sketch_padding must be within 0..={MAX_MARGIN_PX}, got {}",
                self.sketch_padding
            )));
        }
        if !(0.0..=MAX_MARGIN_PX).contains(&self.brush_radius) {
            return Err(ConfigError::Invalid(format!(
                "brush_radius must be within 0..={MAX_MARGIN_PX}, got {}",
                self.brush_radius
            )));
        }
        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return Err(ConfigError::Invalid(format!("line_width must be > 0, got {}", self.line_width)));
        }
        if !(1..=MAX_FRAME_SIZE).contains(&self.frame_size) {
            return Err(ConfigError::Invalid(format!(
                "frame_size must be within 1..={MAX_FRAME_SIZE}, got {}",
                self.frame_size
            )));
        }
        if self.model.trim().is_empty() {
            return Err(ConfigError::Invalid("model must not be empty".into()));
        }
        self.word_list().map(|_| ())
    }

    /// Extraction parameters derived from this config.
    #[must_use]
    pub fn frame_config(&self) -> FrameConfig {
        FrameConfig { padding: self.sketch_padding, size: self.frame_size, policy: self.channel_policy }
    }

    /// The configured word list.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyWordList`] when no usable word is configured.
    pub fn word_list(&self) -> Result<WordList, ConfigError> {
        WordList::new(self.words.clone())
    }
}
