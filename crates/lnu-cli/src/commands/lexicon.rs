//! Dictionary commands.

use anyhow::{anyhow, Result};
use lnu_bridge::{LexiconSource, Translator};
use lnu_core::{InputType, Orthography};

use super::print_json;

/// Look up an entry by Mi'kmaw form or English gloss.
pub fn lookup(
    translator: &Translator,
    query: &str,
    input_type: &str,
    orth: &str,
    json: bool,
) -> Result<()> {
    let input_type: InputType = input_type.parse().map_err(|e: String| anyhow!(e))?;
    let orthography: Orthography = orth.parse().map_err(|e: String| anyhow!(e))?;
    let result = translator.lookup(query, input_type, orthography);

    if json {
        return print_json(&result);
    }

    let Some(result) = result else {
        println!("No entry found for \"{}\".", query.trim());
        return Ok(());
    };
    let entry = &result.entry;

    let spelling = match (&result.sfo_spelling, &result.lo_spelling) {
        (Some(sfo), Some(lo)) => format!("{sfo} (Listuguj: {lo})"),
        (Some(sfo), None) => sfo.clone(),
        (None, Some(lo)) => lo.clone(),
        (None, None) => format!("{} (no Listuguj spelling recorded)", entry.headword),
    };
    println!("{} – {}", spelling, entry.english_gloss);
    println!("POS:       {}", entry.part_of_speech);
    if let Some(animacy) = entry.animacy {
        println!("Animacy:   {animacy}");
    }
    if let Some(register) = &entry.register {
        println!("Register:  {register}");
    }
    if !entry.worldview_tags.is_empty() {
        println!("Worldview: {}", entry.worldview_tags.join(", "));
    }
    if !entry.alternate_forms.is_empty() {
        println!("Also:      {}", entry.alternate_forms.join(", "));
    }
    for example in &entry.examples {
        println!("Example:   {example}");
    }
    if let Some(context) = &entry.context {
        println!("Context:   {context}");
    }
    if let Some(two_eyed) = &entry.two_eyed_seeing {
        println!("Two-Eyed:  {two_eyed}");
    }
    for note in &entry.notes {
        println!("Note:      {note}");
    }
    if let Some(source) = &entry.source {
        println!("Source:    {source}");
    }
    if entry.needs_review {
        println!("(needs review by a fluent speaker)");
    }
    Ok(())
}

/// List all headwords in insertion order.
pub fn entries(translator: &Translator, json: bool) -> Result<()> {
    let lexicon = translator.data().lexicon();
    if json {
        let headwords: Vec<&str> = lexicon.headwords().collect();
        return print_json(&headwords);
    }
    for entry in lexicon.entries() {
        println!("{:<20} {}", entry.headword, entry.english_gloss);
    }
    println!();
    println!("{} entries", lexicon.len());
    Ok(())
}
