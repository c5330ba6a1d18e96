//! chatsonar Classifiers
//!
//! Hate speech / offensive language classifiers for chat messages.
//!
//! Every backend implements [`Classifier`] and returns a
//! [`chatsonar_core::Classification`] with confidences for `hate_speech`,
//! `offensive_language` and `neither`:
//! - [`LexiconClassifier`]: built-in, deterministic, no model files
//! - [`RemoteClassifier`]: delegates to a classifier served over HTTP

pub mod classifier;
pub mod config;
pub mod lexicon;
pub mod registry;
pub mod remote;

pub use classifier::Classifier;
pub use config::{ClassifierConfig, ClassifierKind, LexiconConfig};
pub use lexicon::LexiconClassifier;
pub use registry::build_classifier;
pub use remote::RemoteClassifier;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::classifier::Classifier;
    pub use crate::lexicon::LexiconClassifier;
    pub use crate::remote::RemoteClassifier;
    pub use chatsonar_core::{Classification, SonarClass};
}
