//! The lexicon store: curated entries keyed by headword.

use std::collections::{HashMap, HashSet};

use lnu_core::LexiconEntry;
use tracing::debug;

use crate::error::{BridgeError, BridgeResult};

/// Read-only access to a set of lexicon entries.
///
/// Implementors provide exact-key access and iteration; the lookup rules
/// are shared.
pub trait LexiconSource: Send + Sync {
    /// Entry stored under exactly this headword.
    fn get_exact(&self, headword: &str) -> Option<&LexiconEntry>;

    /// All entries in insertion order.
    fn entries(&self) -> Box<dyn Iterator<Item = &LexiconEntry> + '_>;

    /// Look up a Mi'kmaw form.
    ///
    /// The key is trimmed; an exact headword match wins, then a
    /// case-insensitive scan over headwords, then over Listuguj spellings,
    /// then over alternate forms.
    fn get(&self, key: &str) -> Option<&LexiconEntry> {
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        if let Some(entry) = self.get_exact(key) {
            return Some(entry);
        }
        let folded = key.to_lowercase();
        self.entries()
            .find(|e| e.headword.to_lowercase() == folded)
            .or_else(|| {
                self.entries().find(|e| {
                    e.listuguj
                        .as_ref()
                        .is_some_and(|lo| lo.trim().to_lowercase() == folded)
                })
            })
            .or_else(|| {
                self.entries().find(|e| {
                    e.alternate_forms
                        .iter()
                        .any(|form| form.to_lowercase() == folded)
                })
            })
    }

    /// Look up by English gloss: exact (case-insensitive) first, then substring.
    fn find_by_english(&self, gloss: &str) -> Option<&LexiconEntry> {
        let folded = gloss.trim().to_lowercase();
        if folded.is_empty() {
            return None;
        }
        self.entries()
            .find(|e| e.english_gloss.to_lowercase() == folded)
            .or_else(|| {
                self.entries()
                    .find(|e| e.english_gloss.to_lowercase().contains(&folded))
            })
    }
}

/// In-memory lexicon with unique (case-insensitive) headwords.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
    by_headword: HashMap<String, usize>,
    folded: HashSet<String>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a lexicon from entries, rejecting duplicates.
    pub fn from_entries<I>(entries: I) -> BridgeResult<Self>
    where
        I: IntoIterator<Item = LexiconEntry>,
    {
        let mut lexicon = Self::new();
        for entry in entries {
            lexicon.insert(entry)?;
        }
        Ok(lexicon)
    }

    /// Add an entry. Headwords are trimmed and must be unique ignoring case.
    /// Repeated worldview tags are collapsed.
    pub fn insert(&mut self, mut entry: LexiconEntry) -> BridgeResult<()> {
        let headword = entry.headword.trim().to_string();
        if headword.is_empty() {
            return Err(BridgeError::EmptyHeadword);
        }
        if !self.folded.insert(headword.to_lowercase()) {
            return Err(BridgeError::DuplicateHeadword { headword });
        }
        debug!(headword = %headword, "lexicon entry added");
        entry.headword = headword.clone();
        entry.dedup_worldview_tags();
        self.by_headword.insert(headword, self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Headwords in insertion order.
    pub fn headwords(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.headword.as_str())
    }
}

impl LexiconSource for Lexicon {
    fn get_exact(&self, headword: &str) -> Option<&LexiconEntry> {
        self.by_headword.get(headword).map(|&idx| &self.entries[idx])
    }

    fn entries(&self) -> Box<dyn Iterator<Item = &LexiconEntry> + '_> {
        Box::new(self.entries.iter())
    }
}
