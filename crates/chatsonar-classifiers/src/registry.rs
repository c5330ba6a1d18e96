//! Classifier construction from configuration

use crate::config::{ClassifierConfig, ClassifierKind};
use crate::lexicon::LexiconClassifier;
use crate::remote::RemoteClassifier;
use crate::Classifier;
use chatsonar_core::{Error, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Build the configured classifier backend
pub fn build_classifier(config: &ClassifierConfig) -> Result<Arc<dyn Classifier>> {
    let classifier: Arc<dyn Classifier> = match config.kind {
        ClassifierKind::Lexicon => {
            Arc::new(LexiconClassifier::with_extra_terms(&config.lexicon)?)
        }
        ClassifierKind::Remote => {
            let endpoint = config.endpoint.as_deref().ok_or_else(|| {
                Error::config("remote classifier requires an endpoint")
            })?;
            let timeout = config.timeout_secs.map(Duration::from_secs);
            let remote = RemoteClassifier::new(endpoint, timeout)?;
            info!("Using remote classifier at {}", remote.endpoint());
            Arc::new(remote)
        }
    };

    info!("Initialized '{}' classifier", classifier.name());
    Ok(classifier)
}
