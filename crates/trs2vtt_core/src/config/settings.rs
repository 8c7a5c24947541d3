//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! Every field has a default, so a partial (or empty) file is valid.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Conversion options.
    #[serde(default)]
    pub conversion: ConversionSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Options controlling the TRS → WebVTT conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionSettings {
    /// Emit a `Language: <code>` header line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Prefix captions with a `<v Speaker>` voice tag.
    #[serde(default)]
    pub add_speakers: bool,

    /// Render instantaneous noise events such as laughter.
    #[serde(default)]
    pub preserve_noise: bool,
}

impl ConversionSettings {
    /// Set the header language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Enable or disable voice tags.
    pub fn with_speakers(mut self, enabled: bool) -> Self {
        self.add_speakers = enabled;
        self
    }

    /// Enable or disable noise events.
    pub fn with_noise(mut self, enabled: bool) -> Self {
        self.preserve_noise = enabled;
        self
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default level when `RUST_LOG` is not set.
    #[serde(default)]
    pub level: LogLevel,
}
