//! Conversion error types.

use std::path::PathBuf;

/// Errors that can occur while converting a TRS transcript.
///
/// Every variant aborts the conversion; no partial document is produced.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Failed to read the input file.
    #[error("Failed to read file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write the output file.
    #[error("Failed to write file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The input is not well-formed XML.
    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// The declared (or requested) character encoding is not supported.
    #[error("Unsupported encoding: '{0}'")]
    UnsupportedEncoding(String),

    /// The input bytes are not valid in the encoding they were decoded with.
    #[error("Input is not valid {0}")]
    Undecodable(&'static str),

    /// A required section, attribute or value is missing or unusable.
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    /// An element other than Sync/Who/Event/Comment appeared inside a turn.
    #[error("Unknown annotation node <{tag}> in turn starting at {turn_start}s")]
    UnrecognizedAnnotation { tag: String, turn_start: f64 },

    /// A `<Who nb=..>` index matches neither the turn nor the registry.
    #[error(
        "Speaker index {index} out of range (turn has {turn_speakers} speakers, {registered} registered)"
    )]
    UnknownSpeakerIndex {
        index: usize,
        turn_speakers: usize,
        registered: usize,
    },
}

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

impl ConvertError {
    /// Create a read error.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Create a write error.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteError {
            path: path.into(),
            source,
        }
    }

    /// Create a malformed document error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedDocument(message.into())
    }
}
