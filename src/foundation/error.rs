/// Convenience result type used across brandreel.
pub type ReelResult<T> = Result<T, ReelError>;

/// Top-level error taxonomy used by composition APIs.
///
/// None of these are recovered from inside the crate; they propagate to the render host,
/// which decides whether to abort or substitute a placeholder.
#[derive(thiserror::Error, Debug)]
pub enum ReelError {
    /// Invalid timeline tiling, configuration, or content.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Brand id has no registry entry.
    #[error("unknown brand '{0}'")]
    UnknownBrand(String),

    /// Image or audio source does not resolve to a file.
    #[error("asset missing: {path}")]
    AssetMissing {
        /// The source path as referenced by content.
        path: String,
    },

    /// Errors while evaluating a frame (e.g. frame past the composition end).
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReelError {
    /// Build a [`ReelError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`ReelError::UnknownBrand`] value.
    pub fn unknown_brand(id: impl Into<String>) -> Self {
        Self::UnknownBrand(id.into())
    }

    /// Build a [`ReelError::AssetMissing`] value.
    pub fn asset_missing(path: impl Into<String>) -> Self {
        Self::AssetMissing { path: path.into() }
    }

    /// Build a [`ReelError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`ReelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
