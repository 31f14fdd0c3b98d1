//! Behavior configuration
//!
//! Every constant the behaviors depend on (timings, selectors, colors, the
//! indicator id, the confirmation wording) lives here. The defaults match the
//! markup rendered by the server; a page may override any subset by defining a
//! global `examUiConfig` object before the module starts.

use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use crate::error::{PageError, Result};

/// Placeholder substituted with the item name in [`BehaviorConfig::delete_prompt`]
pub const ITEM_PLACEHOLDER: &str = "{item}";

/// Diagnostic verbosity forwarded to the browser console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => Self::OFF,
            LogLevel::Error => Self::ERROR,
            LogLevel::Warn => Self::WARN,
            LogLevel::Info => Self::INFO,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Trace => Self::TRACE,
        }
    }
}

/// Configuration shared by all page behaviors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BehaviorConfig {
    /// Selector matching the alert banners to dismiss
    pub alert_selector: String,
    /// Delay before an alert starts fading (milliseconds)
    pub alert_delay_ms: u32,
    /// Fade duration; the alert is removed once it elapses (milliseconds)
    pub alert_fade_ms: u32,
    /// Selector matching mandatory fields inside a form
    pub required_selector: String,
    /// Border color applied to an empty required field
    pub invalid_border_color: String,
    /// Border color restored on a filled required field
    pub valid_border_color: String,
    /// Identifier of the loading indicator element
    pub loading_id: String,
    /// `display` value used when the loading indicator is shown
    pub loading_display: String,
    /// Confirmation wording; `{item}` is replaced with the item name
    pub delete_prompt: String,
    /// Console verbosity
    pub log_level: LogLevel,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            alert_selector: ".alert".to_string(),
            alert_delay_ms: 5000,
            alert_fade_ms: 500,
            required_selector: "[required]".to_string(),
            invalid_border_color: "var(--danger-color)".to_string(),
            valid_border_color: "var(--border-color)".to_string(),
            loading_id: "loading".to_string(),
            loading_display: "flex".to_string(),
            delete_prompt: "{item} silinecek. Emin misiniz?".to_string(),
            log_level: LogLevel::Info,
        }
    }
}

impl BehaviorConfig {
    /// Parse a configuration from JSON, filling missing keys with defaults
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Config`] if the JSON is malformed or the parsed
    /// configuration fails [`BehaviorConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| PageError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the behaviors cannot work with
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Config`] naming the first empty selector or id.
    pub fn validate(&self) -> Result<()> {
        [
            ("alertSelector", &self.alert_selector),
            ("requiredSelector", &self.required_selector),
            ("loadingId", &self.loading_id),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map_or(Ok(()), |(key, _)| {
            Err(PageError::Config(format!("{key} must not be empty")))
        })
    }

    /// CSS `transition` value for the alert fade, e.g. `opacity 0.5s`
    #[must_use]
    pub fn fade_transition(&self) -> String {
        format!("opacity {}s", f64::from(self.alert_fade_ms) / 1000.0)
    }
}
