//! Value types crossing the graph store boundary.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of node in the vocabulary graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// A headword node carrying the full attribute map of an entry.
    Term,
    /// A gloss node identified by its text.
    Definition,
}

/// A stored node: flat string attributes plus bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    pub kind: NodeKind,
    /// Flat string properties; must contain the store's identity key.
    pub attributes: BTreeMap<String, String>,
    /// When the node was first stored.
    pub created_at: DateTime<Utc>,
}

/// Kind of edge in the vocabulary graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    /// Term → definition edge.
    Defines,
    /// Term → term edge inferred from shared declensions.
    Related,
}

/// A stored directed edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphLink {
    pub kind: LinkKind,
    pub language: String,
    pub source_label: String,
    pub target_label: String,
    pub attributes: BTreeMap<String, String>,
}

/// Store statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphStats {
    pub term_count: usize,
    pub definition_count: usize,
    pub link_count: usize,
}
