//! Input decoding.
//!
//! Transcriber writes its files in the encoding named by the XML
//! declaration, usually `ISO-8859-1`. The bytes are decoded here so the
//! parser only ever sees Unicode text.
//!
//! Resolution order: an explicit override, then a byte order mark, then the
//! declaration, then UTF-8.

use encoding_rs::{Encoding, UTF_8};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ConvertError, ConvertResult};

static ENCODING_ATTR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"encoding\s*=\s*["']([A-Za-z0-9._:-]+)["']"#).expect("valid encoding regex")
});

/// Look up an encoding by its label (`ISO-8859-1`, `windows-1252`, `utf-16`, ...).
pub fn encoding_for_label(label: &str) -> ConvertResult<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| ConvertError::UnsupportedEncoding(label.to_string()))
}

/// Read the encoding label from the XML declaration, if there is one.
///
/// Only ASCII-compatible declarations are recognised; UTF-16 input is
/// detected by its byte order mark instead.
pub fn declared_encoding(bytes: &[u8]) -> Option<String> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    if !bytes.starts_with(b"<?xml") {
        return None;
    }
    let end = bytes.windows(2).position(|w| w == b"?>")?;
    let declaration = String::from_utf8_lossy(&bytes[..end]);
    ENCODING_ATTR
        .captures(&declaration)
        .map(|caps| caps[1].to_string())
}

/// Decode a TRS file, honouring `override_label` or else the detected encoding.
///
/// A leading byte order mark is removed. Bytes that are invalid in the
/// chosen encoding are an error rather than replaced.
pub fn decode_document(bytes: &[u8], override_label: Option<&str>) -> ConvertResult<String> {
    let encoding = match override_label {
        Some(label) => encoding_for_label(label)?,
        None => match Encoding::for_bom(bytes) {
            Some((encoding, _)) => encoding,
            None => match declared_encoding(bytes) {
                Some(label) => encoding_for_label(&label)?,
                None => UTF_8,
            },
        },
    };
    tracing::debug!(encoding = encoding.name(), "Decoding input");

    let (text, had_errors) = encoding.decode_with_bom_removal(bytes);
    if had_errors {
        return Err(ConvertError::Undecodable(encoding.name()));
    }
    Ok(text.into_owned())
}
