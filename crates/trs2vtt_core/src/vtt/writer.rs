//! WebVTT writer.
//!
//! Output layout:
//! ```text
//! WEBVTT
//! Language: fi
//!
//! 00:00:01.000 --> 00:00:03.000
//! <v Alice>hello world
//!
//! ```

use super::timestamp::format_range;
use super::types::{CaptionBlock, VttHeader};

/// Assemble the full WebVTT document.
///
/// Blocks are written in the order given, lines joined with `\n`. Text is
/// written as is.
pub fn assemble(header: &VttHeader, blocks: &[CaptionBlock]) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(blocks.len() * 3 + 3);

    lines.push("WEBVTT".to_string());
    if let Some(language) = &header.language {
        lines.push(format!("Language: {}", language));
    }
    lines.push(String::new());

    for block in blocks {
        lines.push(format_range(block.start, block.end));
        lines.push(block.text.clone());
        lines.push(String::new());
    }

    lines.join("\n")
}
