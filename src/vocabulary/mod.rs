//! Vocabulary normalization and link inference.
//!
//! This is the algorithmic core: it turns hand-authored vocabulary entries
//! into flat string attribute maps and infers "related" links between entries
//! that share declension cell values. Everything here is a pure function over
//! in-memory data; persistence lives in [`crate::graph`].

mod attributes;
mod declension;
mod definitions;
mod links;
pub mod types;

pub use attributes::entry_attributes;
pub use declension::{flatten_declension, DECLENSION_KEY_PREFIX};
pub use definitions::extract_definitions;
pub use links::{build_link_hints, infer_links, EXCLUDED_DECLENSION_VALUES};
pub use types::{
    Declension, Definition, DefinitionPair, InferredLink, VocabularyEntry, UNKNOWN_DECLENSION,
};
