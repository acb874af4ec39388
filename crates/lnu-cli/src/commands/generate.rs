//! Term generation commands.

use anyhow::Result;
use lnu_bridge::Translator;
use lnu_core::{GenerationCandidate, GenerationRequest};
use serde_json::json;

use super::analyze::print_morphemes;
use super::print_json;

/// Propose candidate words for a concept.
pub fn generate(
    translator: &Translator,
    concept: &str,
    purpose: &str,
    tags: &[String],
    json: bool,
) -> Result<()> {
    let request = GenerationRequest::new(concept, purpose).with_tags(tags.iter().cloned());
    let candidates = translator.generate_term(&request);

    if json {
        return print_json(&json!({
            "concept": request.concept,
            "candidates": candidates,
        }));
    }

    println!("Candidates for \"{}\"", request.concept);
    println!("{:-<40}", "");
    for (i, candidate) in candidates.iter().enumerate() {
        println!();
        println!("{}. {}", i + 1, candidate.word());
        print_candidate(candidate);
    }
    Ok(())
}

/// Playful English-stub + Mi'kmaw-suffix compound.
pub fn compound(
    translator: &Translator,
    stub: &str,
    suffix: Option<&str>,
    json: bool,
) -> Result<()> {
    let candidate = translator.humorous_compound(stub, suffix);
    if json {
        return print_json(&candidate);
    }
    println!("{}", candidate.word());
    print_candidate(&candidate);
    Ok(())
}

fn print_candidate(candidate: &GenerationCandidate) {
    print_morphemes(candidate.breakdown());
    println!("   {}", candidate.explanation());
    println!("   ⚠️  {}", candidate.caution());
}
