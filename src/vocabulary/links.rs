//! Link inference across a vocabulary collection.
//!
//! Two-pass batch design, deliberately not streamable: pass 1 must see the
//! entire collection before pass 2 can resolve cross-references, since a
//! term's hint may come from an entry later in iteration order.
//!
//! The inference hypothesis comes from spotting that "die Reise" and
//! "der Reis" share large portions of their declension tables; linking such
//! pairs helps memorize vocabulary.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::vocabulary::attributes::entry_attributes;
use crate::vocabulary::declension::DECLENSION_KEY_PREFIX;
use crate::vocabulary::types::{InferredLink, VocabularyEntry};

/// Declension cell values that never count as link evidence: the empty cell,
/// the N/A placeholder, and the grammatical category words that appear in
/// every table's header row and column.
pub const EXCLUDED_DECLENSION_VALUES: [&str; 11] = [
    "",
    "singular",
    "plural",
    "masculine",
    "feminine",
    "neuter",
    "nominative",
    "genitive",
    "dative",
    "accusative",
    "N/A",
];

/// Pass 1: map each non-generic declension cell value to the term that owns
/// it. A later entry sharing an identical value overwrites the earlier
/// owner (last-write-wins), so the index is deterministic for a given
/// collection order.
pub fn build_link_hints(
    entries: &[VocabularyEntry],
    language: &str,
    label_key: &str,
) -> HashMap<String, String> {
    let mut hints = HashMap::new();

    for entry in entries {
        let attributes = entry_attributes(entry, language, label_key);
        for (key, value) in &attributes {
            if key.starts_with(DECLENSION_KEY_PREFIX)
                && !EXCLUDED_DECLENSION_VALUES.contains(&value.as_str())
            {
                hints.insert(value.clone(), entry.term.clone());
            }
        }
    }

    debug!(language, hints = hints.len(), "Built link hint index");
    hints
}

/// Pass 2: emit a directed link from each entry to the hinted owner of every
/// attribute value found in the hint index, skipping self-references.
///
/// Matching covers *all* attribute values, not only declension-prefixed
/// ones, so a term or language value that collides with an indexed
/// declension cell also links. Multiple attribute keys holding the same
/// hinted value emit one link each; no deduplication happens here.
pub fn infer_links(
    entries: &[VocabularyEntry],
    language: &str,
    label_key: &str,
) -> Vec<InferredLink> {
    let hints = build_link_hints(entries, language, label_key);

    let mut links = Vec::new();
    for entry in entries {
        let attributes = entry_attributes(entry, language, label_key);

        for value in attributes.values() {
            let Some(owner) = hints.get(value) else {
                continue;
            };
            if owner == &entry.term {
                continue;
            }

            let mut link_attributes = BTreeMap::new();
            link_attributes.insert(
                label_key.to_string(),
                format!("sharing declensions: {owner}"),
            );
            links.push(InferredLink {
                source_label: entry.term.clone(),
                target_label: owner.clone(),
                attributes: link_attributes,
            });
        }
    }

    debug!(language, links = links.len(), "Inferred links");
    links
}
