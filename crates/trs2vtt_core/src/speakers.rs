//! Speaker registry.
//!
//! Maps speaker ids to display names in declaration order. The order matters:
//! a `<Who nb=..>` that points past the turn's own speaker list falls back to
//! the registry's n-th declared speaker, which is how Transcriber files with
//! an incomplete `speaker` attribute still resolve.

use std::collections::HashMap;

use crate::error::{ConvertError, ConvertResult};
use crate::trs::{SpeakerDecl, Turn};

/// Immutable id → name mapping built once per document.
#[derive(Debug, Clone, Default)]
pub struct SpeakerRegistry {
    /// Names in declaration order (duplicates removed).
    names: Vec<String>,
    /// Id → position in `names`.
    index: HashMap<String, usize>,
}

impl SpeakerRegistry {
    /// Build the registry from speaker declarations.
    ///
    /// If an id is declared more than once, the first declaration wins.
    pub fn build(decls: &[SpeakerDecl]) -> Self {
        let mut registry = Self::default();
        for decl in decls {
            if registry.index.contains_key(&decl.id) {
                tracing::warn!(id = %decl.id, name = %decl.name, "Ignoring duplicate speaker id");
                continue;
            }
            registry
                .index
                .insert(decl.id.clone(), registry.names.len());
            registry.names.push(decl.name.clone());
        }
        registry
    }

    /// Display name for `id`, or `""` when unknown.
    pub fn name(&self, id: &str) -> &str {
        self.index
            .get(id)
            .map(|&i| self.names[i].as_str())
            .unwrap_or("")
    }

    /// Resolve a turn's speaker ids to display names, in order.
    pub fn resolve(&self, turn: &Turn) -> Vec<String> {
        turn.speaker_ids
            .iter()
            .map(|id| self.name(id).to_string())
            .collect()
    }

    /// Name for a 1-based `<Who nb=..>` index.
    ///
    /// Looks in `turn_speakers` first, then falls back to the registry's
    /// `index`-th declared speaker.
    pub fn resolve_by_index(
        &self,
        turn_speakers: &[String],
        index: usize,
    ) -> ConvertResult<String> {
        let position = index
            .checked_sub(1)
            .ok_or_else(|| self.index_error(turn_speakers, index))?;

        if let Some(name) = turn_speakers.get(position) {
            return Ok(name.clone());
        }

        let name = self
            .names
            .get(position)
            .ok_or_else(|| self.index_error(turn_speakers, index))?;
        tracing::debug!(
            index,
            name = %name,
            "Speaker index beyond turn header, using registry order"
        );
        Ok(name.clone())
    }

    fn index_error(&self, turn_speakers: &[String], index: usize) -> ConvertError {
        ConvertError::UnknownSpeakerIndex {
            index,
            turn_speakers: turn_speakers.len(),
            registered: self.names.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> SpeakerRegistry {
        SpeakerRegistry::build(&[
            SpeakerDecl::new("spk1", "Alice"),
            SpeakerDecl::new("spk2", "Bob"),
            SpeakerDecl::new("spk3", "Carol"),
        ])
    }

    #[test]
    fn resolves_turn_speakers() {
        let turn = Turn::new(0.0, 1.0).with_speakers(["spk2", "spk1"]);
        assert_eq!(registry().resolve(&turn), vec!["Bob", "Alice"]);
    }

    #[test]
    fn unknown_id_resolves_to_empty() {
        let turn = Turn::new(0.0, 1.0).with_speakers(["spk9"]);
        assert_eq!(registry().resolve(&turn), vec![""]);
    }

    #[test]
    fn first_declaration_wins() {
        let registry = SpeakerRegistry::build(&[
            SpeakerDecl::new("spk1", "Alice"),
            SpeakerDecl::new("spk1", "Alicia"),
        ]);
        assert_eq!(registry.name("spk1"), "Alice");
        assert!(matches!(
            registry.resolve_by_index(&[], 2),
            Err(ConvertError::UnknownSpeakerIndex { registered: 1, .. })
        ));
    }

    #[test]
    fn index_within_turn() {
        let speakers = vec!["Bob".to_string(), "Alice".to_string()];
        assert_eq!(registry().resolve_by_index(&speakers, 2).unwrap(), "Alice");
    }

    #[test]
    fn index_falls_back_to_registry_order() {
        let speakers = vec!["Bob".to_string()];
        assert_eq!(registry().resolve_by_index(&speakers, 3).unwrap(), "Carol");
    }

    #[test]
    fn index_out_of_everything_fails() {
        let speakers = vec!["Bob".to_string()];
        assert!(matches!(
            registry().resolve_by_index(&speakers, 4),
            Err(ConvertError::UnknownSpeakerIndex {
                index: 4,
                turn_speakers: 1,
                registered: 3
            })
        ));
    }

    #[test]
    fn zero_index_fails() {
        assert!(matches!(
            registry().resolve_by_index(&[], 0),
            Err(ConvertError::UnknownSpeakerIndex { index: 0, .. })
        ));
    }
}
