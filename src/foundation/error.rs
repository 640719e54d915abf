/// Result alias used across the layer model.
pub type LayerResult<T> = Result<T, LayerError>;

/// Errors surfaced by the layer tree, the document codec and the component library.
#[derive(thiserror::Error, Debug)]
pub enum LayerError {
    /// A document could not be turned into layers (bad shape, unknown built-in type).
    #[error("decode error: {0}")]
    Decode(String),

    /// A tree mutation was rejected (stale id, out-of-range index, cycle).
    #[error("structure error: {0}")]
    Structure(String),

    /// A component document or workspace could not be resolved.
    #[error("component error: {0}")]
    Component(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Filesystem access failed.
    #[error("io error: {0}")]
    Io(String),

    /// Any other failure.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LayerError {
    /// Build a [`LayerError::Decode`].
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`LayerError::Structure`].
    pub fn structure(msg: impl Into<String>) -> Self {
        Self::Structure(msg.into())
    }

    /// Build a [`LayerError::Component`].
    pub fn component(msg: impl Into<String>) -> Self {
        Self::Component(msg.into())
    }

    /// Build a [`LayerError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`LayerError::Io`].
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
