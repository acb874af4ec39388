//! Translator facade: lexicon lookup first, heuristics on a miss.

use std::sync::Arc;

use lnu_core::{
    AnalysisResult, GenerationCandidate, GenerationRequest, InputType, LexiconEntry,
    LookupResult, Morpheme, MorphemeRole, Orthography, SentenceAnalysis,
};
use tracing::debug;

use crate::data::LanguageData;
use crate::generator::Generator;
use crate::heuristics::HeuristicAnnotator;
use crate::lexicon::LexiconSource;
use crate::segmenter::Segmenter;

/// Advisory note attached to every analysis of a word missing from the lexicon.
pub const NO_ENTRY_NOTE: &str = "No lexicon entry yet. This analysis is an unverified guess; \
     confirm it with fluent speakers or reference works.";

/// Default motion suffix for humorous compounds.
pub const DEFAULT_MOTION_SUFFIX: &str = "aqan";

/// Split a sentence into word tokens. Commas count as whitespace.
pub fn tokenize(sentence: &str) -> Vec<String> {
    sentence
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Entry point for analysis and generation.
///
/// Cheap to share: all state is immutable after construction.
#[derive(Debug)]
pub struct Translator {
    data: Arc<LanguageData>,
    segmenter: Segmenter,
    annotator: HeuristicAnnotator,
    generator: Generator,
}

impl Translator {
    pub fn new(data: Arc<LanguageData>) -> Self {
        let segmenter = Segmenter::new(data.morphemes());
        let annotator = HeuristicAnnotator::new(data.hints().clone());
        Self {
            data,
            segmenter,
            annotator,
            generator: Generator::new(),
        }
    }

    /// Replace the template set.
    pub fn with_generator(mut self, generator: Generator) -> Self {
        self.generator = generator;
        self
    }

    pub fn data(&self) -> &LanguageData {
        &self.data
    }

    pub fn segmenter(&self) -> &Segmenter {
        &self.segmenter
    }

    pub fn annotator(&self) -> &HeuristicAnnotator {
        &self.annotator
    }

    /// Dictionary lookup in either direction, answered in the requested
    /// orthography. Mi'kmaw queries match Smith-Francis and Listuguj spellings
    /// alike; `orthography` only picks the spellings returned.
    pub fn lookup(
        &self,
        query: &str,
        input_type: InputType,
        orthography: Orthography,
    ) -> Option<LookupResult> {
        self.find_entry(query, input_type)
            .map(|entry| LookupResult::new(entry.clone(), orthography))
    }

    /// The stored entry a lookup resolves to.
    pub fn find_entry(&self, query: &str, input_type: InputType) -> Option<&LexiconEntry> {
        let lexicon = self.data.lexicon();
        match input_type {
            InputType::Mikmaw => lexicon.get(query),
            InputType::English => lexicon.find_by_english(query),
            InputType::Auto => lexicon
                .get(query)
                .or_else(|| lexicon.find_by_english(query)),
        }
    }

    /// Analyse one word. `None` means the input was blank and nothing was
    /// attempted; an unknown word still yields `Some`.
    pub fn analyze_word(&self, word: &str) -> Option<AnalysisResult> {
        let word = word.trim();
        if word.is_empty() {
            return None;
        }
        Some(self.analyze_token(word))
    }

    fn analyze_token(&self, word: &str) -> AnalysisResult {
        if let Some(entry) = self.data.lexicon().get(word) {
            debug!(word, headword = %entry.headword, "lexicon hit");
            let mut notes = self.annotator.collect_worldview_notes(&entry.headword);
            if !entry.worldview_tags.is_empty() {
                notes.push(format!("Worldview tags: {}", entry.worldview_tags.join(", ")));
            }
            return AnalysisResult {
                word: word.to_string(),
                matched_entry: Some(entry.clone()),
                guessed_morphemes: Vec::new(),
                animacy_guess: entry.animacy,
                worldview_notes: notes,
            };
        }

        debug!(word, "lexicon miss, segmenting");
        let guessed = self.segmenter.segment(word);
        let animacy = self.annotator.guess_animacy(word);

        let mut notes = self.annotator.collect_worldview_notes(word);
        notes.extend(self.annotator.pattern_notes(word));
        notes.push(NO_ENTRY_NOTE.to_string());
        if let Some(animacy) = animacy {
            notes.push(format!("Animacy guess: {animacy}."));
        }

        AnalysisResult {
            word: word.to_string(),
            matched_entry: None,
            guessed_morphemes: guessed,
            animacy_guess: animacy,
            worldview_notes: notes,
        }
    }

    /// Analyse every token independently, in input order.
    pub fn analyze_sentence(&self, sentence: &str) -> SentenceAnalysis {
        let tokens = tokenize(sentence);
        let analyses = tokens.iter().map(|t| self.analyze_token(t)).collect();
        SentenceAnalysis {
            sentence: sentence.to_string(),
            tokens,
            analyses,
        }
    }

    /// Candidate words for a new concept. Never empty.
    pub fn generate_term(&self, request: &GenerationRequest) -> Vec<GenerationCandidate> {
        self.generator.generate(request)
    }

    /// English stub plus a motion suffix (default `aqan`).
    ///
    /// Unknown suffix forms are used as-is with a placeholder gloss.
    pub fn humorous_compound(&self, stub: &str, suffix: Option<&str>) -> GenerationCandidate {
        let form = suffix
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_MOTION_SUFFIX);
        let morpheme = self
            .data
            .morphemes()
            .get(form)
            .cloned()
            .unwrap_or_else(|| {
                Morpheme::new(form, "motion suffix (not in database)", MorphemeRole::Suffix)
            });
        self.generator.humorous_compound(stub, &morpheme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lnu_core::Animacy;

    fn translator() -> Translator {
        Translator::new(Arc::new(LanguageData::seed().unwrap()))
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("Kwe', teluisi Katew."), vec!["Kwe'", "teluisi", "Katew."]);
        assert_eq!(tokenize(" ,, a,b  c "), vec!["a", "b", "c"]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_hit_returns_stored_entry() {
        let tx = translator();
        let result = tx.analyze_word("Msit No'kmaq").unwrap();
        let entry = result.matched_entry.as_ref().unwrap();
        assert_eq!(entry.headword, "msit no'kmaq");
        assert!(result.guessed_morphemes.is_empty());
        assert_eq!(
            result.worldview_notes,
            vec![
                "Msit No'kmaq – all is related.".to_string(),
                "Relational kinship, not just biological family.".to_string(),
                "Worldview tags: msit_nokmaq, philosophy, relation".to_string(),
            ]
        );
    }

    #[test]
    fn test_hit_uses_stored_animacy() {
        let tx = translator();
        let result = tx.analyze_word("tekekulqan").unwrap();
        assert_eq!(result.animacy_guess, Some(Animacy::Inanimate));
        assert_eq!(result.word, "tekekulqan");
    }

    #[test]
    fn test_miss_segments_and_warns() {
        let tx = translator();
        let result = tx.analyze_word("lnu'jik").unwrap();
        assert!(result.matched_entry.is_none());
        let surfaces: Vec<&str> = result
            .guessed_morphemes
            .iter()
            .map(|m| m.surface.as_str())
            .collect();
        assert_eq!(surfaces, vec!["lnu'", "jik"]);
        assert!(result.guessed_morphemes[0].is_unknown_root());
        assert_eq!(result.animacy_guess, Some(Animacy::Animate));
        assert!(result.worldview_notes.contains(&NO_ENTRY_NOTE.to_string()));
        assert_eq!(result.worldview_notes.last().unwrap(), "Animacy guess: animate.");
    }

    #[test]
    fn test_blank_input_is_no_result() {
        let tx = translator();
        assert!(tx.analyze_word("").is_none());
        assert!(tx.analyze_word("   ").is_none());
    }

    #[test]
    fn test_lookup_directions() {
        let tx = translator();
        assert_eq!(tx.find_entry("Kwe'", InputType::Mikmaw).unwrap().headword, "kwe'");
        assert!(tx.find_entry("hello", InputType::Mikmaw).is_none());
        assert_eq!(tx.find_entry("hello", InputType::English).unwrap().headword, "kwe'");
        assert_eq!(tx.find_entry("fishes", InputType::Auto).unwrap().headword, "nme'jik");
        assert!(tx.find_entry("", InputType::Auto).is_none());
    }

    #[test]
    fn test_lookup_orthography() {
        let data = LanguageData::builder()
            .without_seed()
            .with_document(crate::DataDocument {
                entries: vec![LexiconEntry::new("kesalul", "I love you", "VTA")
                    .with_listuguj("gesalul")
                    .with_context("Said to family and close friends.")],
                ..Default::default()
            })
            .build()
            .unwrap();
        let tx = Translator::new(Arc::new(data));

        let sfo = tx.lookup("gesalul", InputType::Mikmaw, Orthography::Sfo).unwrap();
        assert_eq!(sfo.entry.headword, "kesalul");
        assert_eq!(sfo.sfo_spelling.as_deref(), Some("kesalul"));
        assert_eq!(sfo.lo_spelling, None);

        let lo = tx.lookup("I love you", InputType::English, Orthography::Lo).unwrap();
        assert_eq!(lo.sfo_spelling, None);
        assert_eq!(lo.lo_spelling.as_deref(), Some("gesalul"));
        assert_eq!(lo.entry.context.as_deref(), Some("Said to family and close friends."));

        let both = tx.lookup("KESALUL", InputType::Auto, Orthography::Both).unwrap();
        assert_eq!(both.sfo_spelling.as_deref(), Some("kesalul"));
        assert_eq!(both.lo_spelling.as_deref(), Some("gesalul"));

        assert!(tx.lookup("winter", InputType::Auto, Orthography::Both).is_none());
    }

    #[test]
    fn test_humorous_compound_default_suffix() {
        let tx = translator();
        let candidate = tx.humorous_compound("weenie", None);
        assert_eq!(candidate.word(), "weenieaqan");
        assert_eq!(candidate.breakdown()[1].gloss, "motion of arm/elbow, waving");

        let blank = tx.humorous_compound("  ", None);
        assert_eq!(blank.word(), "aqan");
        assert_eq!(blank.breakdown().len(), 1);

        let custom = tx.humorous_compound("selfie", Some("ultes"));
        assert_eq!(custom.word(), "selfieultes");
        assert_eq!(custom.breakdown()[1].role, MorphemeRole::Suffix);
    }
}
