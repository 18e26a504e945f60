//! Page-provided session configuration.
//!
//! The host page may embed overrides as JSON:
//!
//! ```html
//! <script id="sketch-config" type="application/json">{"throttle_ms": 150}</script>
//! ```
//!
//! Missing or invalid config never blocks the game; it falls back to defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use canvas::config::SessionConfig;

pub const CONFIG_ELEMENT_ID: &str = "sketch-config";

/// Read the session config from the current document.
pub fn read_session_config() -> SessionConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    parse_session_config(raw.as_deref())
}

/// Parse embedded config text, falling back to defaults when absent or invalid.
pub fn parse_session_config(raw: Option<&str>) -> SessionConfig {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return SessionConfig::default();
    };
    match SessionConfig::from_json(raw) {
        Ok(config) => {
            log::debug!("config: loaded from #{CONFIG_ELEMENT_ID}");
            config
        }
        Err(err) => {
            log::warn!("config: ignoring #{CONFIG_ELEMENT_ID}: {err}");
            SessionConfig::default()
        }
    }
}
