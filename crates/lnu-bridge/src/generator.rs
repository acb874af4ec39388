//! Template-driven candidate words for new concepts.
//!
//! Templates are tried in registration order and the first one whose
//! predicate matches contributes a candidate. The generic helper template
//! is always appended last, so generation never returns an empty list.

use std::fmt;

use lnu_core::{GenerationCandidate, GenerationRequest, Morpheme, MorphemeRole};
use tracing::debug;

/// Unique identifier for a template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateId(&'static str);

impl TemplateId {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A hand-authored pattern for assembling a word from morphemes.
pub trait TermTemplate: Send + Sync {
    /// Unique identifier for this template.
    fn id(&self) -> TemplateId;

    /// Human-readable description of the concept class.
    fn description(&self) -> &str {
        ""
    }

    /// Whether this template applies to the request.
    fn matches(&self, request: &GenerationRequest) -> bool;

    /// Assemble the candidate.
    fn build(&self, request: &GenerationRequest) -> GenerationCandidate;
}

/// Case-insensitive substring test over concept and purpose.
fn mentions_any(request: &GenerationRequest, needles: &[&str]) -> bool {
    let concept = request.concept.to_lowercase();
    let purpose = request.purpose.to_lowercase();
    needles
        .iter()
        .any(|n| concept.contains(n) || purpose.contains(n))
}

// =============================================================================
// Templates
// =============================================================================

/// "cold + container + instrument": the thing that keeps the inside cold.
#[derive(Debug, Default)]
pub struct RefrigeratorTemplate;

impl TermTemplate for RefrigeratorTemplate {
    fn id(&self) -> TemplateId {
        TemplateId::new("cold_container_instrument")
    }

    fn description(&self) -> &str {
        "cold + container + instrument"
    }

    fn matches(&self, request: &GenerationRequest) -> bool {
        let purpose = request.purpose.to_lowercase();
        request.concept.to_lowercase().contains("refrigerator")
            || (purpose.contains("cold") && purpose.contains("food"))
    }

    fn build(&self, _request: &GenerationRequest) -> GenerationCandidate {
        GenerationCandidate::new(
            "Mesentaqtekekim",
            vec![
                Morpheme::new("mesen-", "to keep / maintain", MorphemeRole::Preverb),
                Morpheme::new("taq-", "inside / container / dwelling", MorphemeRole::Root)
                    .with_notes("root-ish"),
                Morpheme::new("tekek", "cold (inanimate state)", MorphemeRole::Root),
                Morpheme::new("-im", "instrument / thing that does this", MorphemeRole::Suffix),
            ],
            "Built from mesen- (to keep/maintain) + taq (inside) + tekek (cold) + -im \
             (instrument). Rough sense: 'the thing that keeps the inside cold'.",
            "Confirm phonology, stress and cultural fit; adjust spelling to the local dialect.",
        )
    }
}

/// "warm + cause + device": the thing that makes warm.
#[derive(Debug, Default)]
pub struct WarmthTemplate;

impl TermTemplate for WarmthTemplate {
    fn id(&self) -> TemplateId {
        TemplateId::new("warm_cause_device")
    }

    fn description(&self) -> &str {
        "warm + cause + device"
    }

    fn matches(&self, request: &GenerationRequest) -> bool {
        mentions_any(request, &["heater", "warm", "heat"])
    }

    fn build(&self, _request: &GenerationRequest) -> GenerationCandidate {
        GenerationCandidate::new(
            "Epsiulqan",
            vec![
                Morpheme::new("epsi", "I am warm / passionate", MorphemeRole::Root)
                    .with_notes("Pacifique/Prosper"),
                Morpheme::new("ul", "to make, to cause", MorphemeRole::Suffix),
                Morpheme::new("qan", "device / instrument", MorphemeRole::Suffix),
            ],
            "Built like Tekekulqan: epsi (warm) + ul (cause/make) + qan (device). \
             Rough sense: 'the device that makes warm'.",
            "epsi is first-person in everyday use; speakers may prefer a different warmth root.",
        )
    }
}

/// "house/storage + device": a place or thing for keeping things.
#[derive(Debug, Default)]
pub struct StorageTemplate;

impl TermTemplate for StorageTemplate {
    fn id(&self) -> TemplateId {
        TemplateId::new("storage_place_device")
    }

    fn description(&self) -> &str {
        "house/storage + device"
    }

    fn matches(&self, request: &GenerationRequest) -> bool {
        mentions_any(request, &["storage", "store things", "shed", "cupboard", "closet"])
    }

    fn build(&self, _request: &GenerationRequest) -> GenerationCandidate {
        GenerationCandidate::new(
            "Wikuomqan",
            vec![
                Morpheme::new("wikuom", "house, dwelling, storage place", MorphemeRole::Root),
                Morpheme::new("qan", "device / instrument", MorphemeRole::Suffix),
            ],
            "Built from wikuom (house / storage place) + qan (device). Rough sense: \
             'the thing that houses things'.",
            "wikuom usually means a dwelling; check it is not heard as 'house' alone.",
        )
    }
}

/// Placeholder helper root + instrument suffix. Always matches.
#[derive(Debug, Default)]
pub struct GenericHelperTemplate;

impl GenericHelperTemplate {
    const ROOT: &'static str = "apoqnmatultim";
}

impl TermTemplate for GenericHelperTemplate {
    fn id(&self) -> TemplateId {
        TemplateId::new("generic_helper")
    }

    fn description(&self) -> &str {
        "placeholder 'helps/supports' root + instrument"
    }

    fn matches(&self, _request: &GenerationRequest) -> bool {
        true
    }

    fn build(&self, request: &GenerationRequest) -> GenerationCandidate {
        let mut word = String::with_capacity(Self::ROOT.len() + 2);
        let mut chars = Self::ROOT.chars();
        if let Some(first) = chars.next() {
            word.extend(first.to_uppercase());
            word.push_str(chars.as_str());
        }
        word.push_str("ik");

        let mut explanation = String::from(
            "Generic helper pattern: root meaning 'to help/support' + -ik (instrument). \
             Use this only as a brainstorming starting point",
        );
        if !request.concept.trim().is_empty() {
            explanation.push_str(&format!(" for '{}'", request.concept.trim()));
        }
        explanation.push('.');

        GenerationCandidate::new(
            word,
            vec![
                Morpheme::new(Self::ROOT, "to help / support", MorphemeRole::Root)
                    .with_notes("placeholder root, not specific to this concept"),
                Morpheme::new("-ik", "thing which does this", MorphemeRole::Suffix),
            ],
            explanation,
            "Generic pattern: replace the placeholder root with a verb that reflects how the \
             object acts, chosen together with speakers.",
        )
    }
}

// =============================================================================
// Generator
// =============================================================================

/// Ordered template registry with a mandatory fallback.
pub struct Generator {
    templates: Vec<Box<dyn TermTemplate>>,
    fallback: Box<dyn TermTemplate>,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Generator with the built-in templates.
    pub fn new() -> Self {
        Self::empty()
            .register(Box::new(RefrigeratorTemplate))
            .register(Box::new(WarmthTemplate))
            .register(Box::new(StorageTemplate))
    }

    /// Generator with only the generic fallback.
    pub fn empty() -> Self {
        Self {
            templates: Vec::new(),
            fallback: Box::new(GenericHelperTemplate),
        }
    }

    /// Append a template after the existing ones.
    pub fn register(mut self, template: Box<dyn TermTemplate>) -> Self {
        self.templates.push(template);
        self
    }

    /// Registered template IDs in evaluation order (fallback excluded).
    pub fn template_ids(&self) -> Vec<TemplateId> {
        self.templates.iter().map(|t| t.id()).collect()
    }

    /// Candidates for a request: at most one specific, then the fallback.
    pub fn generate(&self, request: &GenerationRequest) -> Vec<GenerationCandidate> {
        let mut candidates = Vec::with_capacity(2);

        if let Some(template) = self.templates.iter().find(|t| t.matches(request)) {
            debug!(template = %template.id(), concept = %request.concept, "template matched");
            candidates.push(template.build(request));
        } else {
            debug!(concept = %request.concept, "no specific template matched");
        }

        candidates.push(self.fallback.build(request));
        candidates
    }

    /// English stub glued to a Mi'kmaw motion suffix, e.g. `weenie` + `aqan`.
    ///
    /// A teaching and humour tool; the result is not proper Mi'kmaw.
    pub fn humorous_compound(&self, stub: &str, suffix: &Morpheme) -> GenerationCandidate {
        let stub = stub.trim();
        let word = format!("{stub}{}", suffix.surface);
        let mut breakdown = Vec::with_capacity(2);
        if !stub.is_empty() {
            breakdown.push(
                Morpheme::new(stub, "English stub", MorphemeRole::Unknown)
                    .with_notes("roman letters, not a Mi'kmaw morpheme"),
            );
        }
        breakdown.push(suffix.clone());
        GenerationCandidate::new(
            word,
            breakdown,
            format!(
                "Playful compound: English '{stub}' + {} ({}).",
                suffix.surface, suffix.gloss
            ),
            "This is NOT proper Mi'kmaw; it is a teaching and humour tool only.",
        )
    }
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("templates", &self.template_ids())
            .field("fallback", &self.fallback.id())
            .finish()
    }
}
