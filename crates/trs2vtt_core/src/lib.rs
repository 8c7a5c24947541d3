//! trs2vtt core - Transcriber TRS to WebVTT conversion
//!
//! This crate contains the conversion logic with no CLI dependencies.
//!
//! # Pipeline
//!
//! 1. [`trs`] decodes the input and flattens every turn into annotations
//! 2. [`speakers::SpeakerRegistry`] maps speaker ids to names
//! 3. [`transcode`] cuts turns into caption blocks
//! 4. [`vtt`] formats timestamps and assembles the document
//!
//! ```no_run
//! use trs2vtt_core::{convert_file, config::ConversionSettings};
//!
//! let options = ConversionSettings::default().with_speakers(true);
//! let vtt = convert_file("interview.trs", None, &options).unwrap();
//! print!("{}", vtt);
//! ```

pub mod config;
mod convert;
pub mod error;
pub mod logging;
pub mod speakers;
pub mod transcode;
pub mod trs;
pub mod vtt;

pub use convert::{convert_bytes, convert_file, convert_str, convert_transcript};
pub use error::{ConvertError, ConvertResult};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
