//! Turn transcoding.
//!
//! Walks each turn's flattened annotation list and cuts it into caption
//! blocks. The state carried through a turn is small:
//!
//! - `start`: where the pending caption begins (turn start, then each sync)
//! - `prefix`: the active voice tag (`<v Name>`), switched by `<Who>`
//! - `buffer`: text accumulated since the last sync
//!
//! A sync point closes the pending caption at its time; the end of the turn
//! closes it at the turn's end time. Spans without text produce no block.

mod noise;

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

pub use noise::NoiseTable;

use crate::config::ConversionSettings;
use crate::error::{ConvertError, ConvertResult};
use crate::speakers::SpeakerRegistry;
use crate::trs::{AnnotationKind, EventExtent, Transcript, Turn};
use crate::vtt::CaptionBlock;

static SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").expect("valid space regex"));

/// Converts turns into caption blocks.
///
/// Holds read-only references to the per-document registry and the noise
/// table, so one transcoder serves every turn of a document.
pub struct TurnTranscoder<'a> {
    registry: &'a SpeakerRegistry,
    options: &'a ConversionSettings,
    noise: &'a NoiseTable,
}

impl<'a> TurnTranscoder<'a> {
    pub fn new(
        registry: &'a SpeakerRegistry,
        options: &'a ConversionSettings,
        noise: &'a NoiseTable,
    ) -> Self {
        Self {
            registry,
            options,
            noise,
        }
    }

    /// Transcode a single turn.
    pub fn transcode(&self, turn: &Turn) -> ConvertResult<Vec<CaptionBlock>> {
        let speakers = self.registry.resolve(turn);
        let mut pending = PendingCaption {
            start: turn.start,
            prefix: voice_tag(speakers.first().map(String::as_str).unwrap_or("")),
            buffer: String::new(),
        };

        let mut blocks = Vec::new();

        for annotation in &turn.annotations {
            match &annotation.kind {
                AnnotationKind::Sync { time } => {
                    blocks.extend(pending.flush(*time, self.options.add_speakers)?);
                    pending.start = *time;
                }
                AnnotationKind::Who { index } => {
                    let name = self.registry.resolve_by_index(&speakers, *index)?;
                    pending.prefix = voice_tag(&name);
                }
                AnnotationKind::Event {
                    extent,
                    description,
                } => {
                    if self.options.preserve_noise && *extent == EventExtent::Instantaneous {
                        let label = description
                            .as_deref()
                            .and_then(|description| self.noise.label(description));
                        if let Some(label) = label {
                            pending.buffer.push_str(&format!(" <i>({})</i> ", label));
                        }
                    }
                }
                AnnotationKind::Comment => {}
            }
            pending.push_tail(&annotation.tail);
        }

        blocks.extend(pending.flush(turn.end, self.options.add_speakers)?);

        tracing::trace!(
            start = turn.start,
            end = turn.end,
            blocks = blocks.len(),
            "Transcoded turn"
        );

        Ok(blocks)
    }
}

/// Transcode every turn of a transcript, in document order.
pub fn transcode_transcript(
    transcript: &Transcript,
    options: &ConversionSettings,
    noise: &NoiseTable,
) -> ConvertResult<Vec<CaptionBlock>> {
    let registry = SpeakerRegistry::build(&transcript.speakers);
    let transcoder = TurnTranscoder::new(&registry, options, noise);

    let mut blocks = Vec::new();
    for turn in &transcript.turns {
        blocks.extend(transcoder.transcode(turn)?);
    }

    tracing::debug!(
        turns = transcript.turn_count(),
        blocks = blocks.len(),
        "Transcoded transcript"
    );

    Ok(blocks)
}

/// Caption under construction.
struct PendingCaption {
    start: f64,
    prefix: String,
    buffer: String,
}

impl PendingCaption {
    /// Append a text fragment with its whitespace normalized.
    fn push_tail(&mut self, tail: &str) {
        for word in tail.split_whitespace() {
            self.buffer.push(' ');
            self.buffer.push_str(word);
        }
    }

    /// Close the pending caption at `end` and clear the buffer.
    ///
    /// Returns `None` when there is no text to show. Timing is only checked
    /// for spans that produce a block.
    fn flush(&mut self, end: f64, add_speakers: bool) -> ConvertResult<Option<CaptionBlock>> {
        let text = collapse_spaces(self.buffer.trim()).into_owned();
        self.buffer.clear();
        if text.is_empty() {
            return Ok(None);
        }

        if end < self.start {
            return Err(ConvertError::malformed(format!(
                "time {}s goes back before {}s",
                end, self.start
            )));
        }

        let text = if add_speakers {
            format!("{}{}", self.prefix, text)
        } else {
            text
        };
        Ok(Some(CaptionBlock::new(self.start, end, text)))
    }
}

/// Collapse every run of two or more spaces into one.
///
/// Adjacent noise markers (` <i>(laughs)</i>  <i>(coughs)</i> `) are the only
/// source of such runs in caption text. Idempotent.
pub fn collapse_spaces(text: &str) -> Cow<'_, str> {
    SPACE_RUN.replace_all(text, " ")
}

/// `<v Name>`, or nothing for an unnamed speaker.
fn voice_tag(name: &str) -> String {
    if name.is_empty() {
        String::new()
    } else {
        format!("<v {}>", name)
    }
}
