//! Configuration management for trs2vtt.
//!
//! This module provides:
//! - TOML-based configuration with `[conversion]` and `[logging]` sections
//! - Defaults for every field, so partial files are valid
//! - Atomic file writes (write to temp, then rename)
//!
//! # Example
//!
//! ```no_run
//! use trs2vtt_core::config::ConfigManager;
//!
//! let mut config = ConfigManager::new("trs2vtt.toml");
//! config.load_or_default().unwrap();
//!
//! config.settings_mut().conversion.add_speakers = true;
//! config.save().unwrap();
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{ConversionSettings, LoggingSettings, Settings};
