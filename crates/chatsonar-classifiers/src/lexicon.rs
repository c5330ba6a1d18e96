//! Lexicon-based hate speech classifier
//!
//! Deterministic fallback used when no external model is configured. Counts
//! whole-word hits against a hate speech lexicon and an offensive language
//! lexicon and turns the counts into normalized confidences.

use crate::classifier::Classifier;
use crate::config::LexiconConfig;
use aho_corasick::{AhoCorasick, MatchKind};
use chatsonar_core::{ClassScores, Classification, Error, Result};

const HATE_SPEECH_TERMS: &[&str] = &[
    "subhuman",
    "vermin",
    "exterminate",
    "inferior race",
    "go back to your country",
    "kill all",
    "gas them",
    "wipe them out",
    "deport them all",
    "don't belong here",
];

const OFFENSIVE_TERMS: &[&str] = &[
    "idiot", "stupid", "moron", "dumb", "loser", "trash", "garbage", "shit", "crap", "fuck",
    "fucking", "bitch", "asshole", "bastard", "damn", "stfu", "kys",
];

// Base weights. With no hits these already sum to 1.0.
const HATE_BASE: f64 = 0.05;
const OFFENSIVE_BASE: f64 = 0.10;
const NEITHER_BASE: f64 = 0.85;

const HATE_WEIGHT: f64 = 1.5;
const OFFENSIVE_WEIGHT: f64 = 0.8;
// Hateful text is nearly always offensive too.
const HATE_SPILLOVER: f64 = 0.3;

/// Hate speech classifier backed by two Aho-Corasick automata
pub struct LexiconClassifier {
    name: String,
    hate: AhoCorasick,
    offensive: AhoCorasick,
}

impl LexiconClassifier {
    /// Create a classifier with the built-in lexicons
    pub fn new() -> Result<Self> {
        Self::with_extra_terms(&LexiconConfig::default())
    }

    /// Create a classifier with the built-in lexicons plus configured terms
    pub fn with_extra_terms(extra: &LexiconConfig) -> Result<Self> {
        let hate = build_matcher(HATE_SPEECH_TERMS, &extra.hate_speech, "hate speech")?;
        let offensive = build_matcher(OFFENSIVE_TERMS, &extra.offensive_language, "offensive")?;

        tracing::debug!(
            extra_hate = extra.hate_speech.len(),
            extra_offensive = extra.offensive_language.len(),
            "Built lexicon classifier"
        );

        Ok(Self {
            name: "lexicon".to_string(),
            hate,
            offensive,
        })
    }

    fn score(&self, text: &str) -> ClassScores {
        let hate_hits = count_word_hits(&self.hate, text) as f64;
        let offensive_hits = count_word_hits(&self.offensive, text) as f64;

        let hate = HATE_BASE + HATE_WEIGHT * hate_hits;
        let offensive = OFFENSIVE_BASE + OFFENSIVE_WEIGHT * offensive_hits + HATE_SPILLOVER * hate_hits;
        let neither = NEITHER_BASE;
        let total = hate + offensive + neither;

        ClassScores {
            hate_speech: hate / total,
            offensive_language: offensive / total,
            neither: neither / total,
        }
    }
}

#[async_trait::async_trait]
impl Classifier for LexiconClassifier {
    async fn classify(&self, text: &str) -> Result<Classification> {
        Ok(Classification::from_scores(text, self.score(text)))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn build_matcher(builtin: &[&str], extra: &[String], kind: &str) -> Result<AhoCorasick> {
    let terms = builtin
        .iter()
        .copied()
        .chain(extra.iter().map(String::as_str).filter(|t| !t.trim().is_empty()));

    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .match_kind(MatchKind::LeftmostLongest)
        .build(terms)
        .map_err(|e| Error::classifier(format!("Failed to build {} matcher: {}", kind, e)))
}

/// Count matches that sit on word boundaries, so "hell" never fires inside
/// "hello". Any Unicode letter or digit counts as part of a word.
fn count_word_hits(matcher: &AhoCorasick, text: &str) -> usize {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';

    matcher
        .find_iter(text)
        .filter(|m| {
            // Terms are UTF-8 and only ASCII-folded, so match edges are char boundaries.
            let before = text[..m.start()].chars().next_back().map_or(true, |c| !is_word(c));
            let after = text[m.end()..].chars().next().map_or(true, |c| !is_word(c));
            before && after
        })
        .count()
}
