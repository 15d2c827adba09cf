//! Error types for the dialect generator contract.

use thiserror::Error;

/// Failures a dialect generator may report.
///
/// The CockroachDB generator never produces these while rendering; the
/// variants exist so that every dialect shares one fallible contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// No generator is registered under the requested identifier
    #[error("Unknown dialect '{dialect}' (available: {})", .available.join(", "))]
    UnknownDialect {
        dialect: String,
        available: Vec<String>,
    },

    /// The dialect cannot express the described object
    #[error("{dialect} cannot render {object}: {reason}")]
    Unsupported {
        dialect: String,
        object: String,
        reason: String,
    },
}

impl GenerateError {
    pub fn unsupported(
        dialect: impl Into<String>,
        object: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        GenerateError::Unsupported {
            dialect: dialect.into(),
            object: object.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GenerateError>;
