//! Configuration for classifier backends

use serde::{Deserialize, Serialize};

/// Which classifier backend to construct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierKind {
    /// Built-in lexicon classifier
    #[default]
    Lexicon,
    /// Classifier served over HTTP
    Remote,
}

impl std::str::FromStr for ClassifierKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lexicon" => Ok(Self::Lexicon),
            "remote" => Ok(Self::Remote),
            other => Err(format!(
                "unknown classifier '{}', expected 'lexicon' or 'remote'",
                other
            )),
        }
    }
}

/// Classifier configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Backend kind
    #[serde(default)]
    pub kind: ClassifierKind,

    /// Endpoint URL (remote backend only)
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds (remote backend only). No timeout when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Extra lexicon terms
    #[serde(default)]
    pub lexicon: LexiconConfig,
}

/// Additional terms appended to the built-in lexicons
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexiconConfig {
    #[serde(default)]
    pub hate_speech: Vec<String>,

    #[serde(default)]
    pub offensive_language: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_yaml() {
        let config: ClassifierConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.kind, ClassifierKind::Lexicon);
        assert!(config.endpoint.is_none());
        assert!(config.lexicon.hate_speech.is_empty());
    }

    #[test]
    fn test_remote_from_yaml() {
        let yaml = r#"
kind: remote
endpoint: "http://localhost:5000/ping"
timeout_secs: 30
lexicon:
  offensive_language: ["noob"]
"#;
        let config: ClassifierConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.kind, ClassifierKind::Remote);
        assert_eq!(config.endpoint.as_deref(), Some("http://localhost:5000/ping"));
        assert_eq!(config.timeout_secs, Some(30));
        assert_eq!(config.lexicon.offensive_language, vec!["noob".to_string()]);
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("Remote".parse::<ClassifierKind>().unwrap(), ClassifierKind::Remote);
        assert!("bert".parse::<ClassifierKind>().is_err());
    }
}
