//! Morphological analysis and term generation for Mi'kmaw words.
//!
//! ## Components
//!
//! - **MorphemeTable**: known morpheme forms with gloss and role
//! - **Lexicon**: curated entries keyed by headword
//! - **Segmenter**: greedy longest-suffix-first peeling for unknown words
//! - **HeuristicAnnotator**: substring hints for animacy and worldview notes
//! - **Generator**: template-based candidate words for new concepts
//! - **Translator**: facade tying the above together
//!
//! ## Flow
//!
//! ```text
//! analyze_word ──▶ Lexicon::get ──hit──▶ stored entry + worldview notes
//!                       │
//!                      miss
//!                       ▼
//!                 Segmenter + HeuristicAnnotator ──▶ guessed breakdown + advisory notes
//!
//! generate_term ──▶ Generator (first matching template + generic fallback)
//! ```
//!
//! All tables live in an immutable [`LanguageData`] built once at startup and
//! shared behind an `Arc`; every operation is a pure function of its input.

pub mod data;
mod error;
pub mod generator;
pub mod heuristics;
pub mod lexicon;
pub mod morpheme_table;
pub mod seed;
pub mod segmenter;
mod translator;

pub use data::{DataDocument, FlatRecord, LanguageData, LanguageDataBuilder};
pub use error::{BridgeError, BridgeResult};
pub use generator::{
    GenericHelperTemplate, Generator, RefrigeratorTemplate, StorageTemplate, TemplateId,
    TermTemplate, WarmthTemplate,
};
pub use heuristics::{AnimacyHint, HeuristicAnnotator, HintTables, WorldviewHint};
pub use lexicon::{Lexicon, LexiconSource};
pub use morpheme_table::MorphemeTable;
pub use segmenter::Segmenter;
pub use translator::{tokenize, Translator, DEFAULT_MOTION_SUFFIX, NO_ENTRY_NOTE};

// Domain types, re-exported for downstream convenience.
pub use lnu_core::{
    AnalysisResult, AnalysisSource, Animacy, GenerationCandidate, GenerationRequest, InputType,
    LexiconEntry, LookupResult, Morpheme, MorphemeRole, Orthography, SentenceAnalysis,
    FLUENT_SPEAKER_CAUTION,
};
