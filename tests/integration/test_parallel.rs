//! Tests for concurrent multi-language loading.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

use wortschatz::{load_all, GraphStore, LanguageJob, LinkKind, MemoryGraphStore, WortschatzError};

const GERMAN_YAML: &str = r#"
vocabulary:
  - term: die Reise
    definition: (n.) trip
    declension:
      - [nominative, Reise, Reisen]
  - term: der Reis
    definition: (n.) rice
    declension:
      - [nominative, Reis, Reisen]
"#;

const LATIN_YAML: &str = r#"
vocabulary:
  - term: aqua
    definition: water
    declension:
      - [nominative, aqua, aquae]
  - term: terra
    definition: earth
    declension:
      - [nominative, terra, terrae]
"#;

fn write_vocabulary(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut f = File::create(&path).unwrap();
    write!(f, "{}", content).unwrap();
    path
}

#[tokio::test]
async fn test_load_all_languages() {
    let dir = TempDir::new().unwrap();
    let jobs = vec![
        LanguageJob {
            name: "German".to_string(),
            path: write_vocabulary(&dir, "german.yaml", GERMAN_YAML),
        },
        LanguageJob {
            name: "Latin".to_string(),
            path: write_vocabulary(&dir, "latin.yaml", LATIN_YAML),
        },
    ];

    let store = Arc::new(MemoryGraphStore::new("name"));
    let summaries = load_all(store.clone(), jobs, "name").await.unwrap();

    // Summaries come back in job order.
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].language, "German");
    assert_eq!(summaries[1].language, "Latin");
    assert_eq!(summaries[0].terms, 2);
    assert_eq!(summaries[1].terms, 2);

    let stats = store.stats().await.unwrap();
    assert_eq!(stats.term_count, 4);
    assert_eq!(stats.definition_count, 4);

    // Each language gets its own hint index: the shared "Reisen" cell links
    // the German pair, while the Latin collection shares nothing.
    let related: Vec<_> = store
        .links()
        .await
        .into_iter()
        .filter(|l| l.kind == LinkKind::Related)
        .collect();
    assert_eq!(related.len(), 1);
    assert_eq!(related[0].language, "German");
    assert_eq!(related[0].source_label, "die Reise");
}

#[tokio::test]
async fn test_load_all_propagates_errors() {
    let dir = TempDir::new().unwrap();
    let jobs = vec![
        LanguageJob {
            name: "German".to_string(),
            path: write_vocabulary(&dir, "german.yaml", GERMAN_YAML),
        },
        LanguageJob {
            name: "Latin".to_string(),
            path: dir.path().join("missing.yaml"),
        },
    ];

    let store = Arc::new(MemoryGraphStore::new("name"));
    let err = load_all(store, jobs, "name").await.unwrap_err();
    assert!(matches!(err, WortschatzError::Io(_)));
}
