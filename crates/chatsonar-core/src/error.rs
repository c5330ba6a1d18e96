//! Error types for chatsonar

/// Result type alias using chatsonar's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for chatsonar operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input file could not be opened, read or decoded
    #[error("input error: {0}")]
    Input(String),

    /// Classifier execution errors
    #[error("classifier error: {0}")]
    Classifier(String),

    /// Output could not be produced
    #[error("output error: {0}")]
    Output(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// CSV writer errors
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Create a new input error
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    /// Create a new classifier error
    pub fn classifier(msg: impl Into<String>) -> Self {
        Self::Classifier(msg.into())
    }

    /// Create a new output error
    pub fn output(msg: impl Into<String>) -> Self {
        Self::Output(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
