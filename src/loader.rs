//! Loading pipeline: YAML vocabulary files into a graph store.
//!
//! Thin plumbing around the core in [`crate::vocabulary`]:
//! parse a collection, upsert one term node per entry, one definition node
//! and defines-edge per extracted gloss, then run link inference over the
//! whole collection and store the related-edges. Fail-fast: the first core
//! error aborts the language load; the input is static hand-authored data,
//! so retrying would not change the outcome.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::graph::{GraphStore, NodeKind};
use crate::vocabulary::{entry_attributes, extract_definitions, infer_links, VocabularyEntry};

/// One language to load: its name and the vocabulary file path.
#[derive(Debug, Clone)]
pub struct LanguageJob {
    pub name: String,
    pub path: PathBuf,
}

/// Counts reported after loading one language.
#[derive(Debug, Clone, Serialize)]
pub struct LoadSummary {
    pub language: String,
    /// Term nodes created (existing ones are skipped by the store).
    pub terms: usize,
    /// Definition nodes created.
    pub definitions: usize,
    /// Edges stored, defines and related combined.
    pub links: usize,
}

/// Parse a vocabulary document: a YAML mapping with a top-level
/// `vocabulary:` sequence, in declaration order.
pub fn parse_vocabulary(content: &str) -> Result<Vec<VocabularyEntry>> {
    #[derive(Deserialize)]
    struct VocabularyFile {
        vocabulary: Vec<VocabularyEntry>,
    }

    let file: VocabularyFile = serde_yaml::from_str(content)?;
    Ok(file.vocabulary)
}

/// Read and parse a vocabulary file.
pub fn load_vocabulary(path: impl AsRef<Path>) -> Result<Vec<VocabularyEntry>> {
    let content = std::fs::read_to_string(path.as_ref())?;
    parse_vocabulary(&content)
}

/// Load one language's collection into the store.
pub async fn load_language(
    store: &dyn GraphStore,
    entries: &[VocabularyEntry],
    language: &str,
    label_key: &str,
) -> Result<LoadSummary> {
    info!(language, entries = entries.len(), "Loading vocabulary");

    let mut summary = LoadSummary {
        language: language.to_string(),
        terms: 0,
        definitions: 0,
        links: 0,
    };

    for entry in entries {
        let attributes = entry_attributes(entry, language, label_key);
        if store.upsert_node(NodeKind::Term, attributes).await? {
            summary.terms += 1;
        }

        for pair in extract_definitions(entry)? {
            let mut node_attributes = BTreeMap::new();
            node_attributes.insert(label_key.to_string(), pair.gloss.clone());
            if store.upsert_node(NodeKind::Definition, node_attributes).await? {
                summary.definitions += 1;
            }

            let mut link_attributes = BTreeMap::new();
            if let Some(predicate) = &pair.predicate {
                link_attributes.insert(label_key.to_string(), predicate.clone());
            }
            store
                .upsert_link(language, &entry.term, &pair.gloss, link_attributes)
                .await?;
            summary.links += 1;
        }
    }

    for link in infer_links(entries, language, label_key) {
        debug!(source = %link.source_label, target = %link.target_label, "Storing inferred link");
        store
            .upsert_link(language, &link.source_label, &link.target_label, link.attributes)
            .await?;
        summary.links += 1;
    }

    info!(
        language,
        terms = summary.terms,
        definitions = summary.definitions,
        links = summary.links,
        "Language loaded"
    );
    Ok(summary)
}

/// Load several languages concurrently.
///
/// Each job is an independent pass over a disjoint collection with its own
/// hint index; the shared store serializes writes. Summaries come back in
/// job order.
pub async fn load_all(
    store: Arc<dyn GraphStore>,
    jobs: Vec<LanguageJob>,
    label_key: &str,
) -> Result<Vec<LoadSummary>> {
    let mut handles = Vec::with_capacity(jobs.len());
    for job in jobs {
        let store = Arc::clone(&store);
        let label_key = label_key.to_string();
        handles.push(tokio::spawn(async move {
            let entries = load_vocabulary(&job.path)?;
            load_language(store.as_ref(), &entries, &job.name, &label_key).await
        }));
    }

    let mut summaries = Vec::with_capacity(handles.len());
    for handle in handles {
        summaries.push(handle.await??);
    }
    Ok(summaries)
}
