//! Classification result types shared by classifiers and output writers

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Class labels produced by a hate speech classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SonarClass {
    HateSpeech,
    OffensiveLanguage,
    Neither,
}

impl SonarClass {
    /// All classes in canonical order
    pub const ALL: [SonarClass; 3] = [Self::HateSpeech, Self::OffensiveLanguage, Self::Neither];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HateSpeech => "hate_speech",
            Self::OffensiveLanguage => "offensive_language",
            Self::Neither => "neither",
        }
    }
}

impl fmt::Display for SonarClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SonarClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|class| class.as_str() == s)
            .ok_or_else(|| Error::classifier(format!("unknown class label '{}'", s)))
    }
}

/// Confidence for a single class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassScore {
    pub class_name: SonarClass,
    pub confidence: f64,
}

/// Per-class confidences addressed by name rather than by position
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClassScores {
    pub hate_speech: f64,
    pub offensive_language: f64,
    pub neither: f64,
}

impl ClassScores {
    pub fn get(&self, class: SonarClass) -> f64 {
        match class {
            SonarClass::HateSpeech => self.hate_speech,
            SonarClass::OffensiveLanguage => self.offensive_language,
            SonarClass::Neither => self.neither,
        }
    }

    /// Class with the highest confidence. Ties go to the earlier class in
    /// canonical order.
    pub fn top_class(&self) -> SonarClass {
        SonarClass::ALL
            .into_iter()
            .fold(SonarClass::HateSpeech, |best, class| {
                if self.get(class) > self.get(best) {
                    class
                } else {
                    best
                }
            })
    }
}

/// Result of classifying one chat message.
///
/// Serializes to the classifier's native shape:
/// `{"text": .., "top_class": .., "classes": [{"class_name": .., "confidence": ..}]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Message text that was classified
    pub text: String,

    /// Highest scoring class
    pub top_class: SonarClass,

    /// Confidence for every class
    pub classes: Vec<ClassScore>,
}

impl Classification {
    /// Build a result from named scores, listing classes in canonical order
    pub fn from_scores(text: impl Into<String>, scores: ClassScores) -> Self {
        Self {
            text: text.into(),
            top_class: scores.top_class(),
            classes: SonarClass::ALL
                .into_iter()
                .map(|class_name| ClassScore {
                    class_name,
                    confidence: scores.get(class_name),
                })
                .collect(),
        }
    }

    /// Confidence reported for `class`, if present
    pub fn confidence(&self, class: SonarClass) -> Option<f64> {
        self.classes
            .iter()
            .find(|score| score.class_name == class)
            .map(|score| score.confidence)
    }

    /// Named view over `classes`. Fails if any class is missing.
    pub fn scores(&self) -> Result<ClassScores> {
        let lookup = |class: SonarClass| {
            self.confidence(class).ok_or_else(|| {
                Error::classifier(format!(
                    "result for '{}' has no '{}' confidence",
                    self.text, class
                ))
            })
        };

        Ok(ClassScores {
            hate_speech: lookup(SonarClass::HateSpeech)?,
            offensive_language: lookup(SonarClass::OffensiveLanguage)?,
            neither: lookup(SonarClass::Neither)?,
        })
    }
}
