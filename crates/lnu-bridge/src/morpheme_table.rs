//! Table of known morpheme forms.

use std::cmp::Reverse;

use lnu_core::{Morpheme, MorphemeRole};
use serde::{Deserialize, Serialize};

/// Ordered list of known morphemes.
///
/// Definition order is significant: it breaks ties between suffixes of equal
/// length and decides which duplicate surface form wins a lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MorphemeTable {
    morphemes: Vec<Morpheme>,
}

impl MorphemeTable {
    pub fn new(morphemes: Vec<Morpheme>) -> Self {
        Self { morphemes }
    }

    /// Append a morpheme after all existing ones.
    pub fn push(&mut self, morpheme: Morpheme) {
        self.morphemes.push(morpheme);
    }

    pub fn len(&self) -> usize {
        self.morphemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.morphemes.is_empty()
    }

    /// Iterate in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Morpheme> {
        self.morphemes.iter()
    }

    /// First morpheme with this exact surface form, any role.
    pub fn get(&self, surface: &str) -> Option<&Morpheme> {
        self.morphemes.iter().find(|m| m.surface == surface)
    }

    /// First root with this exact surface form.
    pub fn root(&self, surface: &str) -> Option<&Morpheme> {
        self.with_role(MorphemeRole::Root)
            .find(|m| m.surface == surface)
    }

    /// All morphemes with the given role, in definition order.
    pub fn with_role(&self, role: MorphemeRole) -> impl Iterator<Item = &Morpheme> {
        self.morphemes.iter().filter(move |m| m.role == role)
    }

    /// Suffixes sorted by descending surface length (in characters).
    ///
    /// The sort is stable, so equal lengths keep definition order.
    pub fn suffixes_longest_first(&self) -> Vec<&Morpheme> {
        let mut suffixes: Vec<&Morpheme> = self.with_role(MorphemeRole::Suffix).collect();
        suffixes.sort_by_key(|m| Reverse(m.surface.chars().count()));
        suffixes
    }
}

impl FromIterator<Morpheme> for MorphemeTable {
    fn from_iter<I: IntoIterator<Item = Morpheme>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Extend<Morpheme> for MorphemeTable {
    fn extend<I: IntoIterator<Item = Morpheme>>(&mut self, iter: I) {
        self.morphemes.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> MorphemeTable {
        MorphemeTable::new(vec![
            Morpheme::new("si", "I am", MorphemeRole::Suffix),
            Morpheme::new("welo't", "good", MorphemeRole::Root),
            Morpheme::new("aqan", "waving motion", MorphemeRole::Suffix),
            Morpheme::new("ul", "make", MorphemeRole::Suffix),
            Morpheme::new("tasi", "in state of", MorphemeRole::Suffix),
            Morpheme::new("si", "duplicate root form", MorphemeRole::Root),
        ])
    }

    #[test]
    fn test_suffix_order_is_length_then_definition() {
        let table = table();
        let order: Vec<&str> = table
            .suffixes_longest_first()
            .iter()
            .map(|m| m.surface.as_str())
            .collect();
        assert_eq!(order, vec!["aqan", "tasi", "si", "ul"]);
    }

    #[test]
    fn test_root_lookup_ignores_other_roles() {
        let table = table();
        assert_eq!(table.get("si").unwrap().role, MorphemeRole::Suffix);
        assert_eq!(table.root("si").unwrap().gloss, "duplicate root form");
        assert!(table.root("aqan").is_none());
        assert!(table.root("welo't").is_some());
    }

    #[test]
    fn test_length_counts_characters() {
        let table = MorphemeTable::new(vec![
            Morpheme::new("ab", "two ascii", MorphemeRole::Suffix),
            Morpheme::new("ê", "one char, two bytes", MorphemeRole::Suffix),
        ]);
        let order: Vec<&str> = table
            .suffixes_longest_first()
            .iter()
            .map(|m| m.surface.as_str())
            .collect();
        assert_eq!(order, vec!["ab", "ê"]);
    }
}
