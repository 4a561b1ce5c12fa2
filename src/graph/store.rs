//! Graph store trait and the embedded in-memory implementation.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::types::{GraphLink, GraphNode, GraphStats, LinkKind, NodeKind};

/// Trait for graph persistence backends.
///
/// Implementations own existence checks, deduplication policy, and
/// connection lifecycle; callers hand over attribute maps and labels and
/// issue no retries.
#[async_trait]
pub trait GraphStore: Send + Sync {
    /// Store a node unless one of the same kind already holds the same
    /// identity attribute value (idempotent upsert by identity key).
    ///
    /// Returns `true` when a node was created.
    async fn upsert_node(
        &self,
        kind: NodeKind,
        attributes: BTreeMap<String, String>,
    ) -> Result<bool>;

    /// Store a directed edge from a term.
    ///
    /// When the target label names an existing term node the edge is
    /// [`LinkKind::Related`]; otherwise the target is treated as a
    /// definition node and the edge is [`LinkKind::Defines`]. Edges are not
    /// deduplicated. Returns the kind that was stored.
    async fn upsert_link(
        &self,
        language: &str,
        source_label: &str,
        target_label: &str,
        attributes: BTreeMap<String, String>,
    ) -> Result<LinkKind>;

    /// Get store statistics.
    async fn stats(&self) -> Result<GraphStats>;

    /// Remove all nodes and links.
    async fn clear(&self) -> Result<()>;
}

/// Internal data storage structure.
#[derive(Debug, Default)]
struct GraphData {
    nodes: Vec<GraphNode>,
    links: Vec<GraphLink>,
    /// Index: (kind, identity value) -> position in `nodes`.
    node_by_identity: HashMap<(NodeKind, String), usize>,
}

/// Embedded graph store holding everything behind a `RwLock`.
pub struct MemoryGraphStore {
    /// Attribute name treated as the unique node identity property.
    identity_key: String,
    data: RwLock<GraphData>,
}

impl MemoryGraphStore {
    pub fn new(identity_key: impl Into<String>) -> Self {
        Self {
            identity_key: identity_key.into(),
            data: RwLock::new(GraphData::default()),
        }
    }

    /// The configured identity property name.
    pub fn identity_key(&self) -> &str {
        &self.identity_key
    }

    /// Snapshot of all stored nodes.
    pub async fn nodes(&self) -> Vec<GraphNode> {
        self.data.read().await.nodes.clone()
    }

    /// Snapshot of all stored links.
    pub async fn links(&self) -> Vec<GraphLink> {
        self.data.read().await.links.clone()
    }
}

#[async_trait]
impl GraphStore for MemoryGraphStore {
    async fn upsert_node(
        &self,
        kind: NodeKind,
        attributes: BTreeMap<String, String>,
    ) -> Result<bool> {
        let identity = attributes
            .get(&self.identity_key)
            .ok_or_else(|| GraphError::MissingIdentity(self.identity_key.clone()))?
            .clone();

        let mut data = self.data.write().await;
        if data.node_by_identity.contains_key(&(kind, identity.clone())) {
            debug!(?kind, %identity, "Node already exists, skipping");
            return Ok(false);
        }

        debug!(?kind, %identity, "Creating node");
        let index = data.nodes.len();
        data.nodes.push(GraphNode {
            kind,
            attributes,
            created_at: Utc::now(),
        });
        data.node_by_identity.insert((kind, identity), index);
        Ok(true)
    }

    async fn upsert_link(
        &self,
        language: &str,
        source_label: &str,
        target_label: &str,
        attributes: BTreeMap<String, String>,
    ) -> Result<LinkKind> {
        let mut data = self.data.write().await;

        if !data
            .node_by_identity
            .contains_key(&(NodeKind::Term, source_label.to_string()))
        {
            return Err(GraphError::NodeNotFound(source_label.to_string()).into());
        }

        // A target that names an existing term gets a related edge; anything
        // else is read as a definition label.
        let kind = if data
            .node_by_identity
            .contains_key(&(NodeKind::Term, target_label.to_string()))
        {
            LinkKind::Related
        } else {
            LinkKind::Defines
        };

        data.links.push(GraphLink {
            kind,
            language: language.to_string(),
            source_label: source_label.to_string(),
            target_label: target_label.to_string(),
            attributes,
        });
        Ok(kind)
    }

    async fn stats(&self) -> Result<GraphStats> {
        let data = self.data.read().await;
        Ok(GraphStats {
            term_count: data
                .nodes
                .iter()
                .filter(|n| n.kind == NodeKind::Term)
                .count(),
            definition_count: data
                .nodes
                .iter()
                .filter(|n| n.kind == NodeKind::Definition)
                .count(),
            link_count: data.links.len(),
        })
    }

    async fn clear(&self) -> Result<()> {
        let mut data = self.data.write().await;
        *data = GraphData::default();
        Ok(())
    }
}
