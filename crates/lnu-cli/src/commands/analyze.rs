//! Word and sentence analysis commands.

use anyhow::Result;
use lnu_bridge::Translator;
use lnu_core::{AnalysisResult, Morpheme};

use super::print_json;

/// Analyse a single word.
pub fn word(translator: &Translator, word: &str, json: bool) -> Result<()> {
    let result = translator.analyze_word(word);
    if json {
        return print_json(&result);
    }
    match result {
        Some(result) => print_analysis(&result),
        None => println!("Nothing to analyse."),
    }
    Ok(())
}

/// Analyse every token of a sentence.
pub fn sentence(translator: &Translator, sentence: &str, json: bool) -> Result<()> {
    let analysis = translator.analyze_sentence(sentence);
    if json {
        return print_json(&analysis);
    }
    if analysis.analyses.is_empty() {
        println!("Nothing to analyse.");
        return Ok(());
    }
    println!("Sentence: {}", analysis.sentence);
    for result in &analysis.analyses {
        println!();
        print_analysis(result);
    }
    Ok(())
}

fn print_analysis(result: &AnalysisResult) {
    println!("Word:    {}", result.word);
    match &result.matched_entry {
        Some(entry) => {
            println!("Source:  lexicon ({})", entry.headword);
            println!("Gloss:   {}", entry.english_gloss);
            println!("POS:     {}", entry.part_of_speech);
            print_animacy(result);
            if !entry.morphemes.is_empty() {
                println!("Morphemes:");
                print_morphemes(&entry.morphemes);
            }
            for example in &entry.examples {
                println!("Example: {example}");
            }
        }
        None => {
            println!("Source:  analysis (no lexicon entry)");
            print_animacy(result);
            println!("Guessed morphemes:");
            print_morphemes(&result.guessed_morphemes);
        }
    }
    if !result.worldview_notes.is_empty() {
        println!("Notes:");
        for note in &result.worldview_notes {
            println!("   • {note}");
        }
    }
}

fn print_animacy(result: &AnalysisResult) {
    match result.animacy_guess {
        Some(animacy) => println!("Animacy: {animacy}"),
        None => println!("Animacy: (unknown)"),
    }
}

pub(crate) fn print_morphemes(morphemes: &[Morpheme]) {
    for m in morphemes {
        match &m.notes {
            Some(notes) => println!("   {:<12} [{}] {} ({})", m.surface, m.role, m.gloss, notes),
            None => println!("   {:<12} [{}] {}", m.surface, m.role, m.gloss),
        }
    }
}
