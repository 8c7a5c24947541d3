//! WebVTT output.
//!
//! - **types**: caption blocks and the document header
//! - **timestamp**: `HH:MM:SS.mmm` formatting
//! - **writer**: document assembly

mod timestamp;
mod types;
mod writer;

use std::fs;
use std::path::Path;

pub use timestamp::{format_range, format_timestamp};
pub use types::{CaptionBlock, VttHeader};
pub use writer::assemble;

use crate::error::{ConvertError, ConvertResult};

/// Write a WebVTT document to disk as UTF-8.
pub fn write_file(content: &str, path: impl AsRef<Path>) -> ConvertResult<()> {
    let path = path.as_ref();
    fs::write(path, content).map_err(|e| ConvertError::write(path, e))
}
