//! Read → classify → write
//!
//! Messages are classified strictly in order, one awaited call at a time. The
//! first classifier failure aborts the run before anything is written.

use crate::config::RunConfig;
use crate::extract::read_messages;
use crate::output::{resolve_output_path, write_results};
use chatsonar_classifiers::Classifier;
use chatsonar_core::{Classification, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, error, info};

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Where the results were written
    pub output_path: PathBuf,

    /// Number of classified messages
    pub count: usize,
}

/// Classify every message in order
pub async fn classify_all(
    classifier: &dyn Classifier,
    messages: &[String],
    progress: bool,
) -> Result<Vec<Classification>> {
    let bar = progress_bar(messages.len(), progress);
    let mut results = Vec::with_capacity(messages.len());

    for (index, message) in messages.iter().enumerate() {
        let result = match classifier.classify(message).await {
            Ok(result) => result,
            Err(e) => {
                bar.abandon();
                error!("Classification failed at line {}: {}", index + 1, e);
                return Err(e);
            }
        };

        debug!(line = index + 1, top_class = %result.top_class, "Classified message");
        results.push(result);
        bar.inc(1);
    }

    bar.finish();
    Ok(results)
}

/// Run the full pipeline for one input file
pub async fn run(config: &RunConfig, classifier: &dyn Classifier) -> Result<RunSummary> {
    let start = Instant::now();

    let messages = read_messages(&config.dataset_path, &config.delimiter)?;
    info!(
        "Read {} lines from {}",
        messages.len(),
        config.dataset_path.display()
    );

    let results = classify_all(classifier, &messages, config.progress).await?;

    let output_path = resolve_output_path(&config.dataset_path, config.out.as_deref(), config.format);
    write_results(&output_path, config.format, &results)?;

    info!(
        "Wrote {} results to {} in {:?}",
        results.len(),
        output_path.display(),
        start.elapsed()
    );

    Ok(RunSummary {
        output_path,
        count: results.len(),
    })
}

fn progress_bar(total: usize, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(total as u64);
    let style = ProgressStyle::with_template(
        "Processing {len} rows: {percent:>3}%|{bar:40}| {pos}/{len} [{elapsed_precise}<{eta_precise}]",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar());
    bar.set_style(style);
    bar
}
