//! Core types for the vocabulary data model.
//!
//! A vocabulary collection is an ordered sequence of [`VocabularyEntry`]
//! records authored by hand in YAML. Entries are immutable once loaded; all
//! derived values (attribute maps, definition pairs, inferred links) are
//! keyed by string value, never by object identity.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::VocabularyError;

/// The literal sentinel marking an entry whose declension is not known.
///
/// Distinct from an absent `declension` field: the sentinel means "has
/// declension data but the author found nothing", absence means "no
/// declension data at all".
pub const UNKNOWN_DECLENSION: &str = "Unknown";

/// One authored vocabulary record.
#[derive(Debug, Clone, Deserialize)]
pub struct VocabularyEntry {
    /// The headword, unique within a language (e.g. "die Reise").
    pub term: String,
    /// One or more glosses, each optionally tagged with a part-of-speech
    /// predicate. Required by contract, but kept optional here so a missing
    /// field surfaces as a per-entry extraction error rather than a parse
    /// failure of the whole document.
    #[serde(default)]
    pub definition: Option<Definition>,
    /// Optional declension table or the "Unknown" sentinel.
    #[serde(default)]
    pub declension: Option<Declension>,
}

/// The `definition` field of an entry: a single scalar or an ordered list of
/// scalars. Non-string scalars (numbers, booleans) are coerced to their
/// string form during deserialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Definition {
    One(String),
    Many(Vec<String>),
}

impl Definition {
    /// View the definition as an ordered slice of raw strings.
    pub fn items(&self) -> &[String] {
        match self {
            Definition::One(text) => std::slice::from_ref(text),
            Definition::Many(texts) => texts.as_slice(),
        }
    }
}

impl<'de> Deserialize<'de> for Definition {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_yaml::Value::deserialize(deserializer)?;
        match value {
            serde_yaml::Value::Sequence(items) => {
                let mut texts = Vec::with_capacity(items.len());
                for item in &items {
                    texts.push(scalar_to_string(item).map_err(serde::de::Error::custom)?);
                }
                Ok(Definition::Many(texts))
            }
            other => Ok(Definition::One(
                scalar_to_string(&other).map_err(serde::de::Error::custom)?,
            )),
        }
    }
}

/// The `declension` field of an entry.
///
/// Either the literal [`UNKNOWN_DECLENSION`] sentinel or a 2-D table of
/// strings (row = grammatical case, column = number/gender). Rows may be
/// ragged. Any other YAML shape is malformed input and is rejected at
/// deserialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declension {
    Unknown,
    Table(Vec<Vec<String>>),
}

impl Declension {
    /// Build a declension from a raw YAML value, rejecting anything that is
    /// neither the sentinel nor a table of scalar rows.
    pub fn from_value(value: &serde_yaml::Value) -> std::result::Result<Self, VocabularyError> {
        match value {
            serde_yaml::Value::String(text) if text == UNKNOWN_DECLENSION => {
                Ok(Declension::Unknown)
            }
            serde_yaml::Value::Sequence(rows) => {
                let mut table = Vec::with_capacity(rows.len());
                for row in rows {
                    let serde_yaml::Value::Sequence(cells) = row else {
                        return Err(VocabularyError::MalformedDeclension(
                            "each row must be a sequence of cells".to_string(),
                        ));
                    };
                    let mut cols = Vec::with_capacity(cells.len());
                    for cell in cells {
                        cols.push(
                            scalar_to_string(cell).map_err(VocabularyError::MalformedDeclension)?,
                        );
                    }
                    table.push(cols);
                }
                Ok(Declension::Table(table))
            }
            other => Err(VocabularyError::MalformedDeclension(format!(
                "expected the \"{UNKNOWN_DECLENSION}\" sentinel or a table of rows, got {other:?}"
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for Declension {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_yaml::Value::deserialize(deserializer)?;
        Declension::from_value(&value).map_err(serde::de::Error::custom)
    }
}

/// Coerce a scalar YAML value to its string form.
fn scalar_to_string(value: &serde_yaml::Value) -> std::result::Result<String, String> {
    match value {
        serde_yaml::Value::String(text) => Ok(text.clone()),
        serde_yaml::Value::Number(number) => Ok(number.to_string()),
        serde_yaml::Value::Bool(flag) => Ok(flag.to_string()),
        serde_yaml::Value::Null => Ok(String::new()),
        other => Err(format!("expected a scalar value, got {other:?}")),
    }
}

/// One extracted definition: an optional part-of-speech predicate and the
/// gloss text. Order within an entry matches the authored order; the first
/// gloss is the primary sense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefinitionPair {
    /// Part-of-speech tag from a leading parenthesized segment, e.g. "adj.".
    pub predicate: Option<String>,
    /// The remaining definition text.
    pub gloss: String,
}

/// A directed relationship inferred between two terms that share a
/// declension cell value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InferredLink {
    /// Term the link points from.
    pub source_label: String,
    /// Term the link points to (the hint-index owner of the shared value).
    pub target_label: String,
    /// Human-readable relationship attributes, keyed by the identity key.
    pub attributes: BTreeMap<String, String>,
}
