//! chatsonar
//!
//! Classifies every line of a chat log for hate speech and offensive
//! language and writes the per-line results as CSV or JSON.

pub mod cli;
pub mod config;
pub mod extract;
pub mod output;
pub mod runner;

pub use config::{Config, RunConfig};
pub use output::OutputFormat;
pub use runner::{classify_all, run, RunSummary};
