//! Noise event labels.
//!
//! Transcriber annotates non-speech events with short codes (`rire`, `b`,
//! `tx`, ...) or free words. Known descriptions map to a canonical English
//! label; anything else is shown as written, lower-cased.

use std::borrow::Cow;
use std::collections::HashMap;

use once_cell::sync::Lazy;

static STANDARD: Lazy<NoiseTable> = Lazy::new(NoiseTable::standard);

/// `(description, label)` pairs; descriptions are matched case-insensitively.
const STANDARD_LABELS: &[(&str, &str)] = &[
    // Transcriber noise codes
    ("rire", "laughs"),
    ("b", "breath"),
    ("r", "breath"),
    ("i", "inhales"),
    ("e", "exhales"),
    ("n", "sniffs"),
    ("tx", "coughs"),
    ("pf", "blows"),
    ("bb", "mouth noise"),
    ("sif", "whistles"),
    ("bg", "throat"),
    ("conv", "background conversation"),
    ("pap", "paper rustling"),
    ("mic", "microphone noise"),
    ("top", "beep"),
    ("shh", "electric hum"),
    ("musique", "music"),
    // Plain words
    ("laughter", "laughs"),
    ("laugh", "laughs"),
    ("laughs", "laughs"),
    ("breath", "breath"),
    ("breathing", "breath"),
    ("inhale", "inhales"),
    ("exhale", "exhales"),
    ("cough", "coughs"),
    ("sniff", "sniffs"),
    ("whistle", "whistles"),
    ("music", "music"),
    ("silence", "silence"),
    ("noise", "noise"),
];

/// Immutable description → label mapping.
#[derive(Debug, Clone)]
pub struct NoiseTable {
    labels: HashMap<String, String>,
}

impl NoiseTable {
    /// The built-in table of Transcriber codes and common words.
    fn standard() -> Self {
        let labels = STANDARD_LABELS
            .iter()
            .map(|&(desc, label)| (desc.to_lowercase(), label.to_string()))
            .collect();
        Self { labels }
    }

    /// The built-in table, built on first use.
    pub fn shared() -> &'static NoiseTable {
        &STANDARD
    }

    /// Label to render for an event description.
    ///
    /// Returns `None` for descriptions containing `/`, which Transcriber uses
    /// for alternatives and pronunciation notes rather than noises.
    pub fn label<'a>(&'a self, description: &str) -> Option<Cow<'a, str>> {
        if description.contains('/') {
            return None;
        }
        let key = description.trim().to_lowercase();
        match self.labels.get(&key) {
            Some(label) => Some(Cow::Borrowed(label.as_str())),
            None => {
                tracing::debug!(description = %key, "Unknown noise description, using it verbatim");
                Some(Cow::Owned(key))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_descriptions() {
        let table = NoiseTable::standard();
        assert_eq!(table.label("laughter").as_deref(), Some("laughs"));
        assert_eq!(table.label("rire").as_deref(), Some("laughs"));
        assert_eq!(table.label("tx").as_deref(), Some("coughs"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let table = NoiseTable::standard();
        assert_eq!(table.label(" Laughter ").as_deref(), Some("laughs"));
    }

    #[test]
    fn unknown_falls_back_to_lowercased_text() {
        let table = NoiseTable::standard();
        assert_eq!(table.label(" Door Slam ").as_deref(), Some("door slam"));
    }

    #[test]
    fn slash_descriptions_are_skipped() {
        let table = NoiseTable::standard();
        assert_eq!(table.label("pi/pf"), None);
    }

    #[test]
    fn shared_table_has_every_code() {
        let table = NoiseTable::shared();
        for (desc, label) in STANDARD_LABELS {
            assert_eq!(table.label(desc).as_deref(), Some(*label));
        }
    }
}
