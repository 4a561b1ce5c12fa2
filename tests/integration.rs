//! Integration tests for wortschatz.
//!
//! These tests drive the complete pipeline, from YAML vocabulary files to
//! nodes and links in the embedded graph store.

#[path = "integration/test_pipeline.rs"]
mod test_pipeline;

#[path = "integration/test_parallel.rs"]
mod test_parallel;
