/// Convenience result type used across the compiler.
pub type StoryResult<T> = Result<T, StoryError>;

/// Top-level error taxonomy used by compiler APIs.
#[derive(thiserror::Error, Debug)]
pub enum StoryError {
    /// Invalid story data (geometry, durations, references, fonts, content).
    #[error("validation error: {0}")]
    Validation(String),

    /// The output would break a structural rule of the target markup.
    #[error("invariant violation: {0}")]
    Invariant(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StoryError {
    /// Build a [`StoryError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StoryError::Invariant`] value.
    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::Invariant(msg.into())
    }

    /// Build a [`StoryError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for StoryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
