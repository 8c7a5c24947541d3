//! Transcriber (TRS) input.
//!
//! - **encoding**: decode raw bytes according to the XML declaration
//! - **parser**: parse the XML and flatten turns into annotation lists
//! - **types**: the parsed transcript model

pub mod encoding;
mod parser;
mod types;

use std::fs;
use std::path::Path;

pub use encoding::{declared_encoding, decode_document, encoding_for_label};
pub use parser::parse_trs;
pub use types::{Annotation, AnnotationKind, EventExtent, SpeakerDecl, Transcript, Turn};

use crate::error::{ConvertError, ConvertResult};

/// Decode and parse TRS bytes.
///
/// `encoding` overrides the encoding named in the XML declaration.
pub fn parse_bytes(bytes: &[u8], encoding: Option<&str>) -> ConvertResult<Transcript> {
    let text = decode_document(bytes, encoding)?;
    parse_trs(&text)
}

/// Read and parse a TRS file from disk.
pub fn parse_file(path: impl AsRef<Path>, encoding: Option<&str>) -> ConvertResult<Transcript> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| ConvertError::read(path, e))?;
    parse_bytes(&bytes, encoding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parse_latin1_file() {
        let mut bytes =
            b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\n<Trans><Speakers>".to_vec();
        bytes.extend_from_slice(b"<Speaker id=\"spk1\" name=\"Ren");
        bytes.push(0xE9);
        bytes.extend_from_slice(b"e\"/></Speakers><Episode/></Trans>");

        let mut file = NamedTempFile::with_suffix(".trs").unwrap();
        file.write_all(&bytes).unwrap();

        let transcript = parse_file(file.path(), None).unwrap();
        assert_eq!(transcript.speakers[0].name, "Ren\u{e9}e");
    }

    #[test]
    fn parse_windows_1252_bytes() {
        let mut bytes =
            b"<?xml version=\"1.0\" encoding=\"windows-1252\"?>\n<Trans><Speakers>".to_vec();
        bytes.extend_from_slice(b"<Speaker id=\"spk1\" name=\"Zo");
        bytes.push(0xEB);
        bytes.extend_from_slice(b" ");
        bytes.push(0x96);
        bytes.extend_from_slice(b" host\"/></Speakers><Episode/></Trans>");

        let transcript = parse_bytes(&bytes, None).unwrap();
        assert_eq!(transcript.speakers[0].name, "Zo\u{eb} \u{2013} host");
    }

    #[test]
    fn missing_file_is_read_error() {
        let result = parse_file("/nonexistent/input.trs", None);
        assert!(matches!(result, Err(ConvertError::ReadError { .. })));
    }
}
