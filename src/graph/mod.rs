//! Graph-shaped persistence collaborator.
//!
//! The core never talks to a database directly; it hands attribute maps and
//! inferred links to a [`GraphStore`]. The embedded [`MemoryGraphStore`] is
//! the reference implementation used by the CLI and tests.

mod store;
mod types;

pub use store::{GraphStore, MemoryGraphStore};
pub use types::{GraphLink, GraphNode, GraphStats, LinkKind, NodeKind};
