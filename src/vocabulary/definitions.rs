//! Definition extraction.
//!
//! Splits an entry's `definition` field into ordered (predicate, gloss)
//! pairs. A leading parenthesized segment such as "(adj.)" becomes the
//! predicate, in which case every parenthesized segment is stripped from the
//! gloss. Without a leading segment the gloss is the trimmed text unchanged.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{Result, VocabularyError};
use crate::vocabulary::types::{DefinitionPair, VocabularyEntry};

static LEADING_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\((.*?)\)").expect("Invalid regex"));

static ANY_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(.*?\)").expect("Invalid regex"));

/// Extract the ordered definition pairs of an entry.
///
/// Fails with [`VocabularyError::MissingField`] when the entry has no
/// `definition` field; the caller must treat that as fatal for the entry,
/// not silently skip it. An element that is only a parenthesized tag yields
/// an empty gloss, which is valid output.
pub fn extract_definitions(entry: &VocabularyEntry) -> Result<Vec<DefinitionPair>> {
    debug!(term = %entry.term, "Extracting definitions");

    let definition = entry
        .definition
        .as_ref()
        .ok_or_else(|| VocabularyError::MissingField {
            term: entry.term.clone(),
            field: "definition",
        })?;

    let mut pairs = Vec::new();
    for raw in definition.items() {
        let text = raw.trim();

        if let Some(captures) = LEADING_TAG.captures(text) {
            pairs.push(DefinitionPair {
                predicate: Some(captures[1].to_string()),
                gloss: ANY_TAG.replace_all(text, "").trim().to_string(),
            });
        } else {
            pairs.push(DefinitionPair {
                predicate: None,
                gloss: text.to_string(),
            });
        }
    }

    Ok(pairs)
}
