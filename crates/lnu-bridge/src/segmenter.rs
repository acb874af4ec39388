//! Greedy suffix-peeling segmentation.
//!
//! ```text
//! tekekulqan ──peel "qan"──▶ tekekul ──peel "ul"──▶ tekek ──▶ [tekek (root), ul, qan]
//! ```
//!
//! Suffixes are tried longest first. After every successful peel the scan
//! restarts from the longest suffix, until a full pass strips nothing. A
//! suffix is never peeled when it is the whole remaining residual, so a
//! root is always left behind.

use lnu_core::{Morpheme, MorphemeRole};
use tracing::debug;

use crate::morpheme_table::MorphemeTable;

/// Segments surface words against a snapshot of a [`MorphemeTable`].
#[derive(Debug, Clone)]
pub struct Segmenter {
    /// Suffixes, longest first, ties in table order. Computed once.
    suffixes: Vec<Morpheme>,
    roots: Vec<Morpheme>,
}

impl Segmenter {
    /// Build a segmenter from the table's suffixes and roots.
    pub fn new(table: &MorphemeTable) -> Self {
        let suffixes = table
            .suffixes_longest_first()
            .into_iter()
            .filter(|m| !m.surface.is_empty())
            .cloned()
            .collect();
        let roots = table.with_role(MorphemeRole::Root).cloned().collect();
        Self { suffixes, roots }
    }

    /// Candidate suffixes in the order they are tried.
    pub fn suffixes(&self) -> &[Morpheme] {
        &self.suffixes
    }

    /// Split `word` into a root followed by the peeled suffixes.
    ///
    /// Concatenating the returned surface forms gives back `word`. An empty
    /// word yields an empty breakdown.
    pub fn segment(&self, word: &str) -> Vec<Morpheme> {
        let mut residual = word;
        // Outermost suffix first; reversed at the end.
        let mut peeled: Vec<&Morpheme> = Vec::new();

        'scan: loop {
            for suffix in &self.suffixes {
                let form = suffix.surface.as_str();
                if residual.len() > form.len() && residual.ends_with(form) {
                    residual = &residual[..residual.len() - form.len()];
                    debug!(suffix = form, residual, "peeled suffix");
                    peeled.push(suffix);
                    continue 'scan;
                }
            }
            break;
        }

        let mut morphemes = Vec::with_capacity(peeled.len() + 1);
        if !residual.is_empty() {
            let root = self
                .roots
                .iter()
                .find(|m| m.surface == residual)
                .cloned()
                .unwrap_or_else(|| Morpheme::unknown_root(residual));
            morphemes.push(root);
        }
        morphemes.extend(peeled.into_iter().rev().cloned());
        morphemes
    }
}
