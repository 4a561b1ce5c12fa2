//! CLI command handlers for the wortschatz binary.

mod commands;
mod output;

pub use commands::*;
