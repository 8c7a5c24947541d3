//! TRS transcript types.
//!
//! All times are `f64` seconds, as declared in the source document.
//! Each turn's annotation tree is already flattened into document order.

/// A parsed Transcriber document.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    /// Speaker declarations in document order as `(id, name)` pairs.
    pub speakers: Vec<SpeakerDecl>,
    /// Every turn of every section, in document order.
    pub turns: Vec<Turn>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of turns across all sections.
    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }
}

/// A `<Speaker id=".." name=".."/>` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeakerDecl {
    pub id: String,
    pub name: String,
}

impl SpeakerDecl {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// One speaker-attributed stretch of the transcript.
#[derive(Debug, Clone, Default)]
pub struct Turn {
    /// Declared start time in seconds.
    pub start: f64,
    /// Declared end time in seconds.
    pub end: f64,
    /// Speaker ids from the `speaker` attribute; the first is primary.
    pub speaker_ids: Vec<String>,
    /// Child annotations in document order.
    pub annotations: Vec<Annotation>,
}

impl Turn {
    /// Create a turn with no speakers and no annotations.
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            ..Default::default()
        }
    }

    /// Set the speaker ids.
    pub fn with_speakers<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.speaker_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Append an annotation.
    pub fn with(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}

/// An annotation node inside a turn, together with the text that follows it.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub kind: AnnotationKind,
    /// Free text following the node, up to the next element.
    pub tail: String,
}

impl Annotation {
    pub fn new(kind: AnnotationKind, tail: impl Into<String>) -> Self {
        Self {
            kind,
            tail: tail.into(),
        }
    }

    /// `<Sync time=..>` followed by `tail`.
    pub fn sync(time: f64, tail: impl Into<String>) -> Self {
        Self::new(AnnotationKind::Sync { time }, tail)
    }

    /// `<Who nb=..>` followed by `tail`.
    pub fn who(index: usize, tail: impl Into<String>) -> Self {
        Self::new(AnnotationKind::Who { index }, tail)
    }

    /// `<Event extent=.. desc=..>` followed by `tail`.
    pub fn event(
        extent: EventExtent,
        description: impl Into<String>,
        tail: impl Into<String>,
    ) -> Self {
        Self::new(
            AnnotationKind::Event {
                extent,
                description: Some(description.into()),
            },
            tail,
        )
    }

    /// `<Comment>` followed by `tail`.
    pub fn comment(tail: impl Into<String>) -> Self {
        Self::new(AnnotationKind::Comment, tail)
    }
}

/// The variant-specific part of an annotation.
#[derive(Debug, Clone, PartialEq)]
pub enum AnnotationKind {
    /// Timing boundary; closes the pending caption.
    Sync { time: f64 },
    /// Switch to the turn's `index`-th speaker (1-based).
    Who { index: usize },
    /// Non-speech event. `desc` is optional in the DTD.
    Event {
        extent: EventExtent,
        description: Option<String>,
    },
    /// Transcriber comment; ignored apart from its tail.
    Comment,
}

/// How an event relates to the surrounding speech.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventExtent {
    /// A momentary event at this point.
    Instantaneous,
    /// Start of a durational event.
    Begin,
    /// End of a durational event.
    End,
    /// Applies to the previous word.
    Previous,
    /// Applies to the next word.
    Next,
    /// Any value Transcriber does not define. Never rendered.
    Other,
}

impl EventExtent {
    /// Read the `extent` attribute; a missing one defaults to
    /// `instantaneous`, as in Transcriber's DTD.
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("instantaneous") => Self::Instantaneous,
            Some("begin") => Self::Begin,
            Some("end") => Self::End,
            Some("previous") => Self::Previous,
            Some("next") => Self::Next,
            Some(other) => {
                tracing::debug!(extent = other, "Unknown event extent");
                Self::Other
            }
        }
    }
}
