//! WebVTT output types.

/// One timed caption: `start --> end` plus a single text line.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionBlock {
    /// Start time in seconds.
    pub start: f64,
    /// End time in seconds (never before `start`).
    pub end: f64,
    /// Caption text, including the voice tag when speakers are enabled.
    pub text: String,
}

impl CaptionBlock {
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }
}

/// Document-level header fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VttHeader {
    /// Emitted as `Language: <code>` when set.
    pub language: Option<String>,
}

impl VttHeader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(language: impl Into<String>) -> Self {
        Self {
            language: Some(language.into()),
        }
    }
}
