//! Mock classifiers for testing
//!
//! Configurable implementations of the Classifier trait for exercising the
//! read → classify → write pipeline and its error paths.

#![allow(dead_code)]

use async_trait::async_trait;
use chatsonar_classifiers::Classifier;
use chatsonar_core::{ClassScores, Classification, Error, Result};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

/// A classifier returning fixed scores and recording every input
pub struct MockClassifier {
    name: String,
    scores: ClassScores,
    call_count: AtomicU32,
    seen: Mutex<Vec<String>>,
}

impl MockClassifier {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            scores: ClassScores {
                hate_speech: 0.1,
                offensive_language: 0.2,
                neither: 0.7,
            },
            call_count: AtomicU32::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Set the scores this classifier will return
    pub fn with_scores(mut self, hate_speech: f64, offensive_language: f64, neither: f64) -> Self {
        self.scores = ClassScores {
            hate_speech,
            offensive_language,
            neither,
        };
        self
    }

    /// Number of times classify was called
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Texts received, in call order
    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Classifier for MockClassifier {
    async fn classify(&self, text: &str) -> Result<Classification> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.seen.lock().unwrap().push(text.to_string());

        Ok(Classification::from_scores(text, self.scores))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A classifier that fails on a given call (1-based), succeeding before it
pub struct FailingClassifier {
    name: String,
    fail_on_call: u32,
    call_count: AtomicU32,
}

impl FailingClassifier {
    pub fn new(name: &str, fail_on_call: u32) -> Self {
        Self {
            name: name.to_string(),
            fail_on_call,
            call_count: AtomicU32::new(0),
        }
    }

    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl Classifier for FailingClassifier {
    async fn classify(&self, text: &str) -> Result<Classification> {
        let call = self.call_count.fetch_add(1, Ordering::Relaxed) + 1;
        if call >= self.fail_on_call {
            return Err(Error::classifier("Simulated classifier failure"));
        }

        Ok(Classification::from_scores(text, ClassScores::default()))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
