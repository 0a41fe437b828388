/// Convenience result type used across Visage.
pub type VisageResult<T> = Result<T, VisageError>;

/// Top-level error taxonomy used by configuration APIs.
///
/// The draw path itself never fails: missing palette entries and degenerate
/// geometry degrade visually instead of returning errors. Only configuration
/// surfaces (palette loading, validation) are fallible.
#[derive(thiserror::Error, Debug)]
pub enum VisageError {
    /// Invalid user-provided configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VisageError {
    /// Build a [`VisageError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`VisageError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
