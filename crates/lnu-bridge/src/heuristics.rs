//! Substring heuristics for animacy and worldview notes.
//!
//! Animacy stops at the first matching hint; worldview notes collect every
//! matching hint.

use lnu_core::Animacy;
use serde::{Deserialize, Serialize};

/// Fragment that suggests an animacy when found inside a word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimacyHint {
    pub fragment: String,
    pub animacy: Animacy,
}

/// Fragment that attaches a worldview note when found inside a word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldviewHint {
    pub fragment: String,
    pub note: String,
}

/// Ordered hint tables. Order decides which animacy hint wins and the
/// order notes are reported in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintTables {
    #[serde(default)]
    pub animacy: Vec<AnimacyHint>,
    #[serde(default)]
    pub worldview: Vec<WorldviewHint>,
}

impl HintTables {
    pub fn with_animacy(mut self, fragment: impl Into<String>, animacy: Animacy) -> Self {
        self.animacy.push(AnimacyHint {
            fragment: fragment.into(),
            animacy,
        });
        self
    }

    pub fn with_worldview(mut self, fragment: impl Into<String>, note: impl Into<String>) -> Self {
        self.worldview.push(WorldviewHint {
            fragment: fragment.into(),
            note: note.into(),
        });
        self
    }
}

/// Applies [`HintTables`] to surface forms. Stateless apart from the tables.
#[derive(Debug, Clone, Default)]
pub struct HeuristicAnnotator {
    hints: HintTables,
}

impl HeuristicAnnotator {
    pub fn new(hints: HintTables) -> Self {
        Self { hints }
    }

    pub fn hints(&self) -> &HintTables {
        &self.hints
    }

    /// Guess animacy from hint fragments, then from the `-jik` plural ending.
    ///
    /// Returns `None` when nothing is conclusive. A trailing `l` or `k`
    /// counts as no evidence.
    pub fn guess_animacy(&self, word: &str) -> Option<Animacy> {
        let lowered = word.to_lowercase();
        if let Some(hint) = self
            .hints
            .animacy
            .iter()
            .find(|h| lowered.contains(&h.fragment.to_lowercase()))
        {
            return Some(hint.animacy);
        }
        if lowered.ends_with("jik") {
            return Some(Animacy::Animate);
        }
        None
    }

    /// Notes for every worldview hint found in the word, in table order.
    pub fn collect_worldview_notes(&self, word: &str) -> Vec<String> {
        let lowered = word.to_lowercase();
        self.hints
            .worldview
            .iter()
            .filter(|h| lowered.contains(&h.fragment.to_lowercase()))
            .map(|h| h.note.clone())
            .collect()
    }

    /// Surface-pattern notes for words missing from the lexicon.
    pub fn pattern_notes(&self, word: &str) -> Vec<String> {
        let mut notes = Vec::new();
        if word.to_lowercase().ends_with("jik") {
            notes.push(
                "-jik often marks animate plural (people, animals, living beings).".to_string(),
            );
        }
        if word.contains('\'') || word.contains('\u{2019}') {
            notes.push("Apostrophes often mark long vowels or morpheme boundaries.".to_string());
        }
        notes
    }
}
