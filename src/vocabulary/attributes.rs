//! Per-entry attribute map construction.

use std::collections::BTreeMap;

use crate::vocabulary::declension::flatten_declension;
use crate::vocabulary::types::VocabularyEntry;

/// Build the full node property map of an entry.
///
/// Always contains the identity key (mapped to the term) and a fixed
/// `language` key. When the entry carries a declension, its flattened
/// attributes are merged in; the `declension-` prefix keeps them disjoint
/// from the identity and language keys. Pure function of its inputs.
pub fn entry_attributes(
    entry: &VocabularyEntry,
    language: &str,
    label_key: &str,
) -> BTreeMap<String, String> {
    let mut attributes = BTreeMap::new();
    attributes.insert(label_key.to_string(), entry.term.clone());
    attributes.insert("language".to_string(), language.to_string());

    if let Some(declension) = &entry.declension {
        attributes.extend(flatten_declension(declension));
    }

    attributes
}
