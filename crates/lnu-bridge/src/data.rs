//! Language data: the immutable bundle every component reads from.
//!
//! Data is assembled once from the built-in seed and any number of data
//! documents (`.json` or `.toml`). All format differences are resolved here,
//! so lookups never care where an entry came from.
//!
//! ```toml
//! [[morphemes]]
//! surface = "samqwan"
//! gloss = "water"
//! role = "root"
//!
//! [[entries]]
//! headword = "samqwan"
//! english_gloss = "water"
//! part_of_speech = "NI"
//! animacy = "inanimate"
//!
//! [[records]]
//! lemma = "kwe'"
//! surface = "Kwe'"
//! pos = "interjection"
//! gloss = "Hello"
//! ```

use std::path::Path;

use lnu_core::{Animacy, LexiconEntry, Morpheme, MorphemeRole};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{BridgeError, BridgeResult};
use crate::heuristics::{AnimacyHint, HintTables, WorldviewHint};
use crate::lexicon::Lexicon;
use crate::morpheme_table::MorphemeTable;
use crate::seed;

// =============================================================================
// Documents
// =============================================================================

/// One data file. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataDocument {
    /// Morphemes appended to the table.
    #[serde(default)]
    pub morphemes: Vec<Morpheme>,
    /// Curated entries in the full schema.
    #[serde(default)]
    pub entries: Vec<LexiconEntry>,
    /// Flat "lemma/surface/morphology" records.
    #[serde(default)]
    pub records: Vec<FlatRecord>,
    /// Replaces the animacy hint table when non-empty.
    #[serde(default)]
    pub animacy_hints: Vec<AnimacyHint>,
    /// Replaces the worldview hint table when non-empty.
    #[serde(default)]
    pub worldview_hints: Vec<WorldviewHint>,
}

impl DataDocument {
    /// Read a document, picking the parser from the file extension.
    pub fn from_path(path: impl AsRef<Path>) -> BridgeResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        let contents = match extension.as_deref() {
            Some("json") | Some("toml") => std::fs::read_to_string(path)?,
            _ => {
                return Err(BridgeError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };
        debug!(path = %path.display(), "parsing data document");
        if extension.as_deref() == Some("toml") {
            Self::from_toml_str(&contents)
        } else {
            Self::from_json_str(&contents)
        }
    }

    pub fn from_json_str(contents: &str) -> BridgeResult<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn from_toml_str(contents: &str) -> BridgeResult<Self> {
        Ok(toml::from_str(contents)?)
    }
}

/// Flat lexicon record as exported by the web front-end.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlatRecord {
    pub lemma: String,
    #[serde(default)]
    pub surface: Option<String>,
    #[serde(default)]
    pub pos: String,
    #[serde(default)]
    pub gloss: String,
    #[serde(default)]
    pub animacy: Option<String>,
    #[serde(default, alias = "listuguj_orthography")]
    pub listuguj: Option<String>,
    #[serde(default)]
    pub morphology: Vec<FlatMorph>,
    #[serde(default)]
    pub examples: Vec<FlatExample>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub worldview_notes: Vec<String>,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub two_eyed_seeing: Option<String>,
    #[serde(default, rename = "needsReview", alias = "needs_review")]
    pub needs_review: bool,
}

/// One morphology piece of a [`FlatRecord`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlatMorph {
    pub piece: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub gloss: String,
}

/// Example sentence pair of a [`FlatRecord`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlatExample {
    pub mikmaq: String,
    #[serde(default)]
    pub english: String,
}

impl FlatRecord {
    /// Convert into a curated entry. Blank lemmas yield `Ok(None)`.
    pub fn into_entry(self, index: usize) -> BridgeResult<Option<LexiconEntry>> {
        let lemma = self.lemma.trim().to_string();
        if lemma.is_empty() {
            warn!(index, "skipping flat record with empty lemma");
            return Ok(None);
        }

        let animacy = match self.animacy.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(value) => Some(value.parse::<Animacy>().map_err(|message| {
                BridgeError::InvalidRecord { index, message }
            })?),
        };

        let morphemes = self
            .morphology
            .into_iter()
            .map(|piece| {
                Morpheme::new(piece.piece, piece.gloss, MorphemeRole::from_label(&piece.kind))
            })
            .collect();

        let mut entry = LexiconEntry::new(lemma, self.gloss, self.pos).with_morphemes(morphemes);
        entry.animacy = animacy;
        if let Some(surface) = self.surface.map(|s| s.trim().to_string()) {
            if !surface.is_empty() && surface.to_lowercase() != entry.headword.to_lowercase() {
                entry.alternate_forms.push(surface);
            }
        }
        entry.examples = self
            .examples
            .into_iter()
            .map(|ex| {
                if ex.english.is_empty() {
                    ex.mikmaq
                } else {
                    format!("{} – {}", ex.mikmaq, ex.english)
                }
            })
            .collect();
        entry.listuguj = non_blank(self.listuguj);
        entry.context = non_blank(self.context);
        entry.two_eyed_seeing = non_blank(self.two_eyed_seeing);
        entry.notes = self.worldview_notes;
        entry.source = self.source;
        entry.needs_review = self.needs_review;
        Ok(Some(entry))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// =============================================================================
// LanguageData
// =============================================================================

/// Morpheme table, lexicon and hint tables. Built once, then read-only.
#[derive(Debug, Clone)]
pub struct LanguageData {
    morphemes: MorphemeTable,
    lexicon: Lexicon,
    hints: HintTables,
}

impl LanguageData {
    /// The built-in seed only.
    pub fn seed() -> BridgeResult<Self> {
        Self::builder().build()
    }

    pub fn builder() -> LanguageDataBuilder {
        LanguageDataBuilder::default()
    }

    pub fn morphemes(&self) -> &MorphemeTable {
        &self.morphemes
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn hints(&self) -> &HintTables {
        &self.hints
    }
}

/// Layers data documents on top of (or instead of) the seed.
#[derive(Debug, Clone)]
pub struct LanguageDataBuilder {
    include_seed: bool,
    documents: Vec<DataDocument>,
}

impl Default for LanguageDataBuilder {
    fn default() -> Self {
        Self {
            include_seed: true,
            documents: Vec::new(),
        }
    }
}

impl LanguageDataBuilder {
    /// Start from empty tables instead of the seed.
    pub fn without_seed(mut self) -> Self {
        self.include_seed = false;
        self
    }

    pub fn with_document(mut self, document: DataDocument) -> Self {
        self.documents.push(document);
        self
    }

    /// Parse a data file and add it.
    pub fn with_file(self, path: impl AsRef<Path>) -> BridgeResult<Self> {
        let document = DataDocument::from_path(path)?;
        Ok(self.with_document(document))
    }

    pub fn build(self) -> BridgeResult<LanguageData> {
        let (mut morphemes, mut lexicon, mut hints) = if self.include_seed {
            (
                seed::morphemes(),
                Lexicon::from_entries(seed::entries())?,
                seed::hints(),
            )
        } else {
            (MorphemeTable::default(), Lexicon::new(), HintTables::default())
        };

        for document in self.documents {
            morphemes.extend(document.morphemes);
            for entry in document.entries {
                lexicon.insert(entry)?;
            }
            for (index, record) in document.records.into_iter().enumerate() {
                if let Some(entry) = record.into_entry(index)? {
                    lexicon.insert(entry)?;
                }
            }
            if !document.animacy_hints.is_empty() {
                hints.animacy = document.animacy_hints;
            }
            if !document.worldview_hints.is_empty() {
                hints.worldview = document.worldview_hints;
            }
        }

        info!(
            entries = lexicon.len(),
            morphemes = morphemes.len(),
            animacy_hints = hints.animacy.len(),
            worldview_hints = hints.worldview.len(),
            "language data loaded"
        );

        Ok(LanguageData {
            morphemes,
            lexicon,
            hints,
        })
    }
}
