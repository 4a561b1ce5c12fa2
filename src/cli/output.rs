//! Output formatting for CLI commands.
//!
//! Everything prints as either JSON or human-readable text.

use wortschatz::{GraphStats, LoadSummary};

use crate::cli::commands::InspectReport;

/// Print per-language load summaries and overall store statistics.
pub fn print_summaries(summaries: &[LoadSummary], stats: &GraphStats, json: bool) {
    if json {
        let report = serde_json::json!({
            "languages": summaries,
            "stats": stats,
        });
        println!("{}", serde_json::to_string_pretty(&report).unwrap());
    } else {
        for summary in summaries {
            println!(
                "{}: {} terms, {} definitions, {} links",
                summary.language, summary.terms, summary.definitions, summary.links
            );
        }
        println!(
            "Store: {} term nodes, {} definition nodes, {} links",
            stats.term_count, stats.definition_count, stats.link_count
        );
    }
}

/// Print an inspection report.
pub fn print_inspect_report(report: &InspectReport, json: bool) {
    if json {
        println!("{}", serde_json::to_string_pretty(report).unwrap());
        return;
    }

    println!("{} entries ({})\n", report.terms.len(), report.language);
    for term in &report.terms {
        println!("{}", term.term);
        for pair in &term.definitions {
            match &pair.predicate {
                Some(predicate) => println!("  ({}) {}", predicate, pair.gloss),
                None => println!("  {}", pair.gloss),
            }
        }
        for (key, value) in &term.attributes {
            println!("  {key} = {value}");
        }
        println!();
    }

    if report.links.is_empty() {
        println!("No inferred links.");
    } else {
        println!("Inferred links:");
        for link in &report.links {
            println!("  {} -> {}", link.source_label, link.target_label);
        }
    }
}
