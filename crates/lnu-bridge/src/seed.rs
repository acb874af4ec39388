//! Built-in seed data.
//!
//! A small starter set. Real collections (Prosper lexicon, L'nui'suti app,
//! UINR story books) are layered on top through data documents.

use lnu_core::{Animacy, LexiconEntry, Morpheme, MorphemeRole};

use crate::heuristics::HintTables;
use crate::morpheme_table::MorphemeTable;

use lnu_core::MorphemeRole::{Final, Noun, Prefix, Preverb, Quantifier, Root, Suffix};

fn m(surface: &str, gloss: &str, role: MorphemeRole) -> Morpheme {
    Morpheme::new(surface, gloss, role)
}

/// Known morphemes. Suffix order matters for equal-length ties.
pub fn morphemes() -> MorphemeTable {
    MorphemeTable::new(vec![
        m("tekek", "cold (it is cold)", Root).with_notes("SFO; often pronounced with 'g' quality"),
        m("wikuom", "house, dwelling, storage place", Root),
        m("aqan", "motion of arm/elbow, waving", Suffix).with_notes("used in weenieraqn joke"),
        m("ketlami", "care, concern, love-like care", Root),
        m("welo't", "good, well, in good state", Root),
        m("epsi", "I am warm / passionate", Root).with_notes("Pacifique/Prosper"),
        m("ul", "to make, to cause", Suffix).with_notes("device/action builder"),
        m("qan", "device / instrument / 'thing that does it'", Suffix),
        m("si", "I am (stative in some forms)", Suffix),
        m("tasi", "in state/condition of", Suffix),
        m("jik", "animate plural", Suffix),
        m("isi", "1st person 'I am called' (approx.)", Suffix),
        m("a'lin", "to be thus / let it be so (approx.)", Suffix),
        m("kelu'", "beautiful, good, nice-looking", Root),
        m("nme'", "fish", Root),
        m("kataq", "eel", Root),
        m("msit", "all, everything", Root),
        m("kwe'", "greeting / hello", Root),
        m("telu", "to be called / named (approx.)", Root),
        m("wel", "good, well", Root),
        m("sal", "love / precious", Root),
        m("sa'", "hurt / pain", Root),
    ])
}

/// Animacy and worldview hint tables.
pub fn hints() -> HintTables {
    HintTables::default()
        .with_animacy("nme'", Animacy::Animate)
        .with_animacy("kataq", Animacy::Animate)
        .with_animacy("waisik", Animacy::Animate)
        .with_animacy("weskaq", Animacy::Inanimate)
        .with_worldview("msit", "Msit No'kmaq – all is related.")
        .with_worldview("no'kmaq", "Relational kinship, not just biological family.")
        .with_worldview("nipugt", "In the woods / territory context.")
        .with_worldview("samqwan", "Water context – river, lake, ocean.")
        .with_worldview("e's", "Process / becoming; states often verbs, not nouns.")
        .with_worldview(
            "netukulimk",
            "Netukulimk – take only what you need, caring for land and future generations.",
        )
}

/// Curated lexicon entries in display order.
pub fn entries() -> Vec<LexiconEntry> {
    vec![
        LexiconEntry::new("kwe'", "Hello", "interjection")
            .with_morphemes(vec![m("kwe'", "greeting / hello", Root)])
            .with_example("Kwe', teluisi Katew. – Hello, my name is Katew.")
            .with_note("Used as a friendly greeting; often the first word children learn.")
            .with_note("Opening a story with Kwe' sets the tone of respect and relationship.")
            .with_source("Kataq: The Story of Our Eels"),
        LexiconEntry::new("teluisi", "My name is …", "expression")
            .with_morphemes(vec![
                m("telu", "to be called / named (approx.)", Root),
                m("isi", "1st person 'I am called' (approx.)", Suffix),
            ])
            .with_example("Teluisi Katew. – My name is Katew.")
            .with_note("Introductions often come with place and kin, not just personal name.")
            .with_source("Kataq: The Story of Our Eels")
            .needing_review(),
        LexiconEntry::new("kesalul", "I love you", "VTA-1sg>2")
            .with_listuguj("gesalul")
            .with_animacy(Animacy::Animate)
            .with_morphemes(vec![
                m("ke-", "1st person acting (I)", Prefix),
                m("sal", "love / precious", Root),
                m("-ul", "1→2 object (you)", Final),
            ])
            .with_worldview_tags(["kinship", "emotion"])
            .with_example("Kesalul nikmaq. – I love you, my relations.")
            .with_note("Tiny shifts in glottal stop position change meaning.")
            .with_source("Rebecca Thomas – I Place You Into the Fire; community usage"),
        LexiconEntry::new("kesa'lul", "I hurt you", "VTA-1sg>2")
            .with_animacy(Animacy::Animate)
            .with_morphemes(vec![
                m("ke-", "1st person acting (I)", Prefix),
                m("sa'", "hurt / pain", Root),
                m("-ul", "1→2 object (you)", Final),
            ])
            .with_worldview_tags(["emotion", "harm"]),
        LexiconEntry::new("ke'sa'lul", "I place you into the fire (as offering/prayer)", "VTA-1sg>2")
            .with_animacy(Animacy::Animate)
            .with_morphemes(vec![
                m("ke'-", "into / into the fire", Preverb),
                m("sa'", "put / place", Root),
                m("-lul", "1→2 object", Final),
            ])
            .with_worldview_tags(["ceremony", "offering", "fire"]),
        LexiconEntry::new("tekek", "it is cold", "VII")
            .with_animacy(Animacy::Inanimate)
            .with_morphemes(vec![m("tekek", "cold (inanimate state)", Root)])
            .with_worldview_tags(["weather", "state", "sensation"])
            .with_note(
                "Describes environmental condition; ties into survival, readiness, and TEK about seasons.",
            ),
        LexiconEntry::new("Tekekulqan", "refrigerator; the thing that makes things cold", "N-INAN")
            .with_animacy(Animacy::Inanimate)
            .with_morphemes(vec![
                m("tekek", "cold (it is cold)", Root),
                m("ul", "to make, to cause", Suffix),
                m("qan", "device / instrument / 'thing that does it'", Suffix),
            ])
            .with_worldview_tags(["modern", "household", "humour"])
            .with_note("Modern coinage: tekek (cold) + ul (cause/make) + qan (device).")
            .needing_review(),
        LexiconEntry::new("Kelu'si", "I am beautiful", "VAI-1S")
            .with_animacy(Animacy::Animate)
            .with_morphemes(vec![
                m("kelu'", "beautiful, good, nice-looking", Root),
                m("si", "I am (stative)", Suffix),
            ])
            .with_worldview_tags(["identity", "humour"])
            .with_note("Used seriously and jokingly; fits rez humour and teasing about looks and confidence."),
        LexiconEntry::new("epsi", "I am warm; I am passionate", "VAI-1S")
            .with_animacy(Animacy::Animate)
            .with_morphemes(vec![m("epsi", "I am warm / passionate", Root)])
            .with_worldview_tags(["emotion", "temperature", "spirit"])
            .with_alternate_form("êpsi")
            .with_note("Physical and emotional warmth; passion, fire inside. Prosper/Pacifique style."),
        LexiconEntry::new("welo'tasi", "it is well taken care of; in a good state", "VII")
            .with_animacy(Animacy::Inanimate)
            .with_morphemes(vec![
                m("welo'", "good, well", Root),
                m("tasi", "in state/condition of", Suffix),
            ])
            .with_worldview_tags(["care", "netukulimk"])
            .with_note("Implies ongoing good relationship, not just a one-time fix."),
        LexiconEntry::new("nme'jik", "fishes", "NA-pl")
            .with_animacy(Animacy::Animate)
            .with_morphemes(vec![m("nme'", "fish", Root), m("-jik", "animate plural", Suffix)])
            .with_worldview_tags(["animals", "water"]),
        LexiconEntry::new("msit no'kmaq", "all my relations", "expression")
            .with_morphemes(vec![
                m("msit", "all", Quantifier),
                m("no'kmaq", "my relations / all my kin", Noun),
            ])
            .with_listuguj("msit no'gmaq")
            .with_register("ceremonial")
            .with_context("Closing words of prayers, speeches and stories.")
            .with_two_eyed_seeing(
                "Mi'kmaw: kinship with people, land, water and animals alike. \
                 Western: closest to ecological interdependence.",
            )
            .with_worldview_tags(["msit_nokmaq", "philosophy", "relation"])
            .with_example("Msit No'kmaq, wela'liek. – All my relations, I thank you.")
            .with_note("Names the full web of kin – people, animals, plants, waters, winds, ancestors."),
        LexiconEntry::new("wela'lin", "Thank you", "expression")
            .with_morphemes(vec![
                m("wel", "good, well", Root),
                m("a'lin", "to be thus / let it be so (approx.)", Suffix),
            ])
            .with_example("Wela'lin Msit No'kmaq. – Thank you, all my relations.")
            .with_note("Often deeper than 'thanks' – about the state you're brought into.")
            .with_source("LD manual; everyday speech")
            .needing_review(),
        LexiconEntry::new(
            "netukulimk",
            "Taking only what you need while caring for land and future generations",
            "noun-abstract",
        )
        .with_worldview_tags(["netukulimk"])
        .with_note("Key law of balance between harvest and responsibility.")
        .with_source("Mi'kmaw ethics / LD resource manual"),
        LexiconEntry::new("kataq", "American eel", "noun-animate")
            .with_animacy(Animacy::Animate)
            .with_morphemes(vec![m("kataq", "eel", Root)])
            .with_worldview_tags(["animals", "water"])
            .with_example("Kataq wjit apoqnmulti'juin lnu'k. – The eel helps Mi'kmaq people live.")
            .with_note("Eel is a teacher and relative in the story, not just food.")
            .with_source("Kataq: The Story of Our Eels")
            .needing_review(),
        LexiconEntry::new("apoqnmulti'juin", "helps us live / we are helped to live (approx.)", "verb/phrase")
            .with_note("Shows mutual support between people and more-than-human kin.")
            .with_source("Kataq: The Story of Our Eels")
            .needing_review(),
    ]
}
