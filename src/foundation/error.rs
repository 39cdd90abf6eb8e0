/// Convenience result type used across navfx.
pub type NavFxResult<T> = Result<T, NavFxError>;

/// Top-level error taxonomy used by navfx APIs.
#[derive(thiserror::Error, Debug)]
pub enum NavFxError {
    /// Invalid user-provided screen or effect configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// A render call referenced a screen id that was never registered.
    #[error("unknown screen id '{0}'")]
    UnknownScreenId(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Catch-all wrapper for lower-level errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl NavFxError {
    /// Build a [`NavFxError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`NavFxError::UnknownScreenId`] value.
    pub fn unknown_screen(id: impl Into<String>) -> Self {
        Self::UnknownScreenId(id.into())
    }

    /// Build a [`NavFxError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
