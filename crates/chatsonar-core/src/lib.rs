//! chatsonar Core
//!
//! Types and error handling shared across chatsonar components:
//! - Classification results and the closed set of class labels
//! - Error types and result handling

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{ClassScore, ClassScores, Classification, SonarClass};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{ClassScore, ClassScores, Classification, SonarClass};
}
