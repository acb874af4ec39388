//! Core domain types shared across the entire L'nui'suti workspace.
//!
//! Everything here is plain data: morphemes, curated lexicon entries, the
//! per-request analysis envelope and the generation request/candidate pair.
//! The analysis and generation logic lives in `lnu-bridge`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentence every generated candidate's caution starts with.
pub const FLUENT_SPEAKER_CAUTION: &str =
    "Unverified: must be validated by fluent Mi'kmaw speakers and elders before adoption.";

// =============================================================================
// Morphemes
// =============================================================================

/// Grammatical role a morpheme plays inside a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MorphemeRole {
    /// Lexical root carrying the core meaning.
    Root,
    /// Bound element attached before the root.
    Prefix,
    /// Bound element attached after the root.
    Suffix,
    /// Bound element inserted inside the root.
    Infix,
    /// Preverb modifying the verb that follows.
    Preverb,
    /// Verb final (person/object marking).
    Final,
    /// Quantifier such as "msit" (all).
    Quantifier,
    /// Free noun inside a multi-word expression.
    Noun,
    /// Role not yet known.
    #[default]
    Unknown,
}

impl MorphemeRole {
    /// Get a display label for the role.
    pub fn label(&self) -> &'static str {
        match self {
            MorphemeRole::Root => "root",
            MorphemeRole::Prefix => "prefix",
            MorphemeRole::Suffix => "suffix",
            MorphemeRole::Infix => "infix",
            MorphemeRole::Preverb => "preverb",
            MorphemeRole::Final => "final",
            MorphemeRole::Quantifier => "quantifier",
            MorphemeRole::Noun => "noun",
            MorphemeRole::Unknown => "unknown",
        }
    }

    /// Lenient conversion used when importing hand-written data.
    ///
    /// Hedged labels such as `"root-ish"` map to their base role; anything
    /// unrecognised becomes [`MorphemeRole::Unknown`].
    pub fn from_label(label: &str) -> Self {
        let label = label.trim().to_lowercase();
        let base = label
            .strip_suffix("-ish")
            .or_else(|| label.strip_suffix("?"))
            .unwrap_or(&label);
        match base {
            "root" => MorphemeRole::Root,
            "prefix" => MorphemeRole::Prefix,
            "suffix" => MorphemeRole::Suffix,
            "infix" => MorphemeRole::Infix,
            "preverb" => MorphemeRole::Preverb,
            "final" => MorphemeRole::Final,
            "quantifier" => MorphemeRole::Quantifier,
            "noun" => MorphemeRole::Noun,
            _ => MorphemeRole::Unknown,
        }
    }
}

impl fmt::Display for MorphemeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Smallest meaningful unit of a word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Morpheme {
    /// Written form in Smith-Francis orthography.
    pub surface: String,
    /// Short English gloss.
    pub gloss: String,
    /// Role inside the word.
    #[serde(default)]
    pub role: MorphemeRole,
    /// Dialect, source or usage notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl Morpheme {
    /// Gloss used for residuals the morpheme table does not know.
    pub const UNKNOWN_ROOT_GLOSS: &'static str = "UNKNOWN-ROOT";

    /// Create a morpheme without notes.
    pub fn new(surface: impl Into<String>, gloss: impl Into<String>, role: MorphemeRole) -> Self {
        Self {
            surface: surface.into(),
            gloss: gloss.into(),
            role,
            notes: None,
        }
    }

    /// Attach a note.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        let notes = notes.into();
        self.notes = if notes.is_empty() { None } else { Some(notes) };
        self
    }

    /// Synthetic root for a residual not found in the morpheme table.
    pub fn unknown_root(residual: impl Into<String>) -> Self {
        Self::new(residual, Self::UNKNOWN_ROOT_GLOSS, MorphemeRole::Root)
            .with_notes("not yet in database")
    }

    /// Whether this is a synthetic unknown-root placeholder.
    pub fn is_unknown_root(&self) -> bool {
        self.role == MorphemeRole::Root && self.gloss == Self::UNKNOWN_ROOT_GLOSS
    }
}

// =============================================================================
// Lexicon Entries
// =============================================================================

/// Grammatical animacy of a noun or verb argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Animacy {
    Animate,
    Inanimate,
}

impl Animacy {
    pub fn label(&self) -> &'static str {
        match self {
            Animacy::Animate => "animate",
            Animacy::Inanimate => "inanimate",
        }
    }
}

impl fmt::Display for Animacy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Animacy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "animate" | "an" | "na" => Ok(Animacy::Animate),
            "inanimate" | "inan" | "ni" => Ok(Animacy::Inanimate),
            other => Err(format!("unknown animacy: {other}")),
        }
    }
}

/// One curated lexicon entry for a Mi'kmaw word or expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    /// Citation form, unique within a lexicon.
    pub headword: String,
    /// Core English translation.
    pub english_gloss: String,
    /// Part of speech ("VTA", "VAI", "NA", "expression", ...).
    pub part_of_speech: String,
    /// Animacy if known.
    #[serde(default)]
    pub animacy: Option<Animacy>,
    /// Ordered morpheme breakdown; may be empty.
    #[serde(default)]
    pub morphemes: Vec<Morpheme>,
    /// Register ("everyday", "ceremonial", ...).
    #[serde(default)]
    pub register: Option<String>,
    /// Worldview tags, ordered and without duplicates.
    #[serde(default)]
    pub worldview_tags: Vec<String>,
    /// Example sentences.
    #[serde(default)]
    pub examples: Vec<String>,
    /// Spelling in Listuguj orthography, when it differs from the headword.
    #[serde(default)]
    pub listuguj: Option<String>,
    /// Other spellings that should resolve to this entry (Pacifique forms, display surfaces).
    #[serde(default)]
    pub alternate_forms: Vec<String>,
    /// Where and how the word is used.
    #[serde(default)]
    pub context: Option<String>,
    /// Two-Eyed Seeing note: the Mi'kmaw and the Western reading side by side.
    #[serde(default)]
    pub two_eyed_seeing: Option<String>,
    /// Free-form cultural or usage notes.
    #[serde(default)]
    pub notes: Vec<String>,
    /// Where the entry comes from.
    #[serde(default)]
    pub source: Option<String>,
    /// Whether a fluent speaker still has to confirm the entry.
    #[serde(default)]
    pub needs_review: bool,
}

impl LexiconEntry {
    /// Create an entry with the three mandatory fields.
    pub fn new(
        headword: impl Into<String>,
        english_gloss: impl Into<String>,
        part_of_speech: impl Into<String>,
    ) -> Self {
        Self {
            headword: headword.into(),
            english_gloss: english_gloss.into(),
            part_of_speech: part_of_speech.into(),
            animacy: None,
            morphemes: Vec::new(),
            register: None,
            worldview_tags: Vec::new(),
            examples: Vec::new(),
            listuguj: None,
            alternate_forms: Vec::new(),
            context: None,
            two_eyed_seeing: None,
            notes: Vec::new(),
            source: None,
            needs_review: false,
        }
    }

    pub fn with_animacy(mut self, animacy: Animacy) -> Self {
        self.animacy = Some(animacy);
        self
    }

    pub fn with_morphemes(mut self, morphemes: Vec<Morpheme>) -> Self {
        self.morphemes = morphemes;
        self
    }

    pub fn with_register(mut self, register: impl Into<String>) -> Self {
        self.register = Some(register.into());
        self
    }

    /// Add worldview tags, skipping ones already present.
    pub fn with_worldview_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for tag in tags {
            self.add_worldview_tag(tag);
        }
        self
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }

    pub fn with_listuguj(mut self, spelling: impl Into<String>) -> Self {
        self.listuguj = Some(spelling.into());
        self
    }

    pub fn with_alternate_form(mut self, form: impl Into<String>) -> Self {
        self.alternate_forms.push(form.into());
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_two_eyed_seeing(mut self, note: impl Into<String>) -> Self {
        self.two_eyed_seeing = Some(note.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn needing_review(mut self) -> Self {
        self.needs_review = true;
        self
    }

    /// Insert a worldview tag unless it is already present.
    pub fn add_worldview_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.worldview_tags.contains(&tag) {
            self.worldview_tags.push(tag);
        }
    }

    /// Drop repeated worldview tags, keeping the first occurrence of each.
    pub fn dedup_worldview_tags(&mut self) {
        let tags = std::mem::take(&mut self.worldview_tags);
        for tag in tags {
            self.add_worldview_tag(tag);
        }
    }

    /// Concatenated surface forms of the stored breakdown.
    pub fn morpheme_surface(&self) -> String {
        self.morphemes.iter().map(|m| m.surface.as_str()).collect()
    }
}

// =============================================================================
// Analysis
// =============================================================================

/// Where an analysis came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisSource {
    /// Curated lexicon entry.
    Lexicon,
    /// Heuristic segmentation of an unknown word.
    Analysis,
}

/// Result of analysing one word.
///
/// Either `matched_entry` is set and `guessed_morphemes` is empty, or there
/// is no entry and `guessed_morphemes` holds the best-effort breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// The analysed word as received (trimmed).
    pub word: String,
    /// Curated entry, if the lexicon has one.
    pub matched_entry: Option<LexiconEntry>,
    /// Heuristic breakdown when no entry exists.
    pub guessed_morphemes: Vec<Morpheme>,
    /// Animacy: stored on a hit, guessed on a miss.
    pub animacy_guess: Option<Animacy>,
    /// Advisory notes for a human reviewer.
    pub worldview_notes: Vec<String>,
}

impl AnalysisResult {
    pub fn has_entry(&self) -> bool {
        self.matched_entry.is_some()
    }

    pub fn source(&self) -> AnalysisSource {
        if self.has_entry() {
            AnalysisSource::Lexicon
        } else {
            AnalysisSource::Analysis
        }
    }
}

/// Word-by-word analysis of a sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceAnalysis {
    /// Input sentence, unchanged.
    pub sentence: String,
    /// Tokens in input order.
    pub tokens: Vec<String>,
    /// One analysis per token, same order as `tokens`.
    pub analyses: Vec<AnalysisResult>,
}

/// Which side of the dictionary a lookup query is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    /// Try Mi'kmaw first, then English.
    #[default]
    Auto,
    Mikmaw,
    English,
}

impl FromStr for InputType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(InputType::Auto),
            "mikmaw" | "mi'kmaw" | "mikmaq" => Ok(InputType::Mikmaw),
            "english" | "en" => Ok(InputType::English),
            other => Err(format!(
                "unknown input type: {other} (expected auto, mikmaw or english)"
            )),
        }
    }
}

/// Which spelling(s) a dictionary answer should carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Orthography {
    /// Smith-Francis, the headword spelling.
    #[default]
    Sfo,
    /// Listuguj.
    Lo,
    /// Both spellings side by side.
    Both,
}

impl FromStr for Orthography {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sfo" | "smith-francis" => Ok(Orthography::Sfo),
            "lo" | "listuguj" => Ok(Orthography::Lo),
            "both" => Ok(Orthography::Both),
            other => Err(format!(
                "unknown orthography: {other} (expected SFO, LO or BOTH)"
            )),
        }
    }
}

/// A dictionary answer: the entry plus the spellings the caller asked for.
///
/// A spelling the caller did not ask for, or that the entry lacks, is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    #[serde(flatten)]
    pub entry: LexiconEntry,
    pub sfo_spelling: Option<String>,
    pub lo_spelling: Option<String>,
}

impl LookupResult {
    pub fn new(entry: LexiconEntry, orthography: Orthography) -> Self {
        let sfo = matches!(orthography, Orthography::Sfo | Orthography::Both)
            .then(|| entry.headword.clone());
        let lo = if matches!(orthography, Orthography::Lo | Orthography::Both) {
            entry.listuguj.clone()
        } else {
            None
        };
        Self {
            entry,
            sfo_spelling: sfo,
            lo_spelling: lo,
        }
    }
}

// =============================================================================
// Generation
// =============================================================================

/// Description of a concept that needs a Mi'kmaw-style word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Concept name, e.g. "refrigerator".
    #[serde(default)]
    pub concept: String,
    /// What the thing does, e.g. "keeps food cold and safe".
    #[serde(default)]
    pub purpose: String,
    /// Free-form domain tags ("home", "food", ...).
    #[serde(default)]
    pub domain_tags: Vec<String>,
}

impl GenerationRequest {
    pub fn new(concept: impl Into<String>, purpose: impl Into<String>) -> Self {
        Self {
            concept: concept.into(),
            purpose: purpose.into(),
            domain_tags: Vec::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for tag in tags {
            let tag = tag.into();
            if !self.domain_tags.contains(&tag) {
                self.domain_tags.push(tag);
            }
        }
        self
    }
}

/// A proposed word. Never authoritative: the caution always carries
/// [`FLUENT_SPEAKER_CAUTION`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CandidateRecord")]
pub struct GenerationCandidate {
    word: String,
    breakdown: Vec<Morpheme>,
    explanation: String,
    caution: String,
}

impl GenerationCandidate {
    /// Build a candidate. `caution` is extra advice appended after the
    /// mandatory validation sentence.
    pub fn new(
        word: impl Into<String>,
        breakdown: Vec<Morpheme>,
        explanation: impl Into<String>,
        caution: impl AsRef<str>,
    ) -> Self {
        let extra = caution.as_ref().trim();
        let caution = if extra.starts_with(FLUENT_SPEAKER_CAUTION) {
            extra.to_string()
        } else if extra.is_empty() {
            FLUENT_SPEAKER_CAUTION.to_string()
        } else {
            format!("{FLUENT_SPEAKER_CAUTION} {extra}")
        };
        Self {
            word: word.into(),
            breakdown,
            explanation: explanation.into(),
            caution,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn breakdown(&self) -> &[Morpheme] {
        &self.breakdown
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn caution(&self) -> &str {
        &self.caution
    }
}

#[derive(Deserialize)]
struct CandidateRecord {
    word: String,
    #[serde(default)]
    breakdown: Vec<Morpheme>,
    #[serde(default)]
    explanation: String,
    #[serde(default)]
    caution: String,
}

impl From<CandidateRecord> for GenerationCandidate {
    fn from(record: CandidateRecord) -> Self {
        GenerationCandidate::new(
            record.word,
            record.breakdown,
            record.explanation,
            record.caution,
        )
    }
}
