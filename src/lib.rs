//! Wortschatz: vocabulary normalization and link inference.
//!
//! Hand-authored vocabulary entries (term, definitions, optional declension
//! tables) are loaded from YAML, normalized into flat attribute maps, and
//! scanned for implicit relationships between entries sharing declension
//! cell values. The output feeds a graph-shaped store: nodes are terms and
//! definitions, edges are "defines" and "related" relationships.

pub mod config;
pub mod error;
pub mod graph;
pub mod loader;
pub mod vocabulary;

pub use config::Config;
pub use error::{ConfigError, GraphError, Result, VocabularyError, WortschatzError};
pub use graph::{GraphLink, GraphNode, GraphStats, GraphStore, LinkKind, MemoryGraphStore, NodeKind};
pub use loader::{load_all, load_language, load_vocabulary, parse_vocabulary, LanguageJob, LoadSummary};
pub use vocabulary::{
    build_link_hints, entry_attributes, extract_definitions, flatten_declension, infer_links,
    Declension, Definition, DefinitionPair, InferredLink, VocabularyEntry,
    DECLENSION_KEY_PREFIX, EXCLUDED_DECLENSION_VALUES, UNKNOWN_DECLENSION,
};
