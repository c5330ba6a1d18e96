//! Classifier trait

use async_trait::async_trait;
use chatsonar_core::{Classification, Result};

/// Trait for all hate speech classifiers.
///
/// Implementations are constructed once per run and handed to whatever drives
/// classification; nothing holds a process-wide instance.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Classify the given text
    async fn classify(&self, text: &str) -> Result<Classification>;

    /// Get the classifier name
    fn name(&self) -> &str;
}
