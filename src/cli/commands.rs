//! Command implementations.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;

use wortschatz::{
    entry_attributes, extract_definitions, infer_links, load_all, load_language, load_vocabulary,
    Config, DefinitionPair, GraphStore, InferredLink, LanguageJob, MemoryGraphStore,
};

use crate::cli::output;

/// Load one language from a YAML file into a fresh store.
pub async fn run_load(
    config: Config,
    language: String,
    path: String,
    json: bool,
) -> anyhow::Result<()> {
    let store = MemoryGraphStore::new(config.graph.identity_key.clone());
    let entries = load_vocabulary(&path)?;
    let summary = load_language(&store, &entries, &language, &config.graph.identity_key).await?;
    let stats = store.stats().await?;

    output::print_summaries(&[summary], &stats, json);
    Ok(())
}

/// Load every configured language concurrently into a shared store.
pub async fn run_load_all(config: Config, json: bool) -> anyhow::Result<()> {
    if config.loader.languages.is_empty() {
        anyhow::bail!("no languages configured; add [[loader.languages]] entries");
    }

    let jobs: Vec<LanguageJob> = config
        .loader
        .languages
        .iter()
        .map(|l| LanguageJob {
            name: l.name.clone(),
            path: PathBuf::from(&l.path),
        })
        .collect();

    let store: Arc<MemoryGraphStore> =
        Arc::new(MemoryGraphStore::new(config.graph.identity_key.clone()));
    let summaries = load_all(store.clone(), jobs, &config.graph.identity_key).await?;
    let stats = store.stats().await?;

    output::print_summaries(&summaries, &stats, json);
    Ok(())
}

/// What `inspect` reports for one entry.
#[derive(Debug, Serialize)]
pub struct TermReport {
    pub term: String,
    pub attributes: BTreeMap<String, String>,
    pub definitions: Vec<DefinitionPair>,
}

/// Full `inspect` report: normalized entries plus inferred links.
#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub language: String,
    pub terms: Vec<TermReport>,
    pub links: Vec<InferredLink>,
}

/// Parse a vocabulary file and print its normalized form without storing.
pub fn run_inspect(
    config: Config,
    path: String,
    language: String,
    json: bool,
) -> anyhow::Result<()> {
    let label_key = &config.graph.identity_key;
    let entries = load_vocabulary(&path)?;

    let mut terms = Vec::with_capacity(entries.len());
    for entry in &entries {
        terms.push(TermReport {
            term: entry.term.clone(),
            attributes: entry_attributes(entry, &language, label_key),
            definitions: extract_definitions(entry)?,
        });
    }

    let report = InspectReport {
        links: infer_links(&entries, &language, label_key),
        language,
        terms,
    };

    output::print_inspect_report(&report, json);
    Ok(())
}
