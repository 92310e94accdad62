/// Convenience result alias used across the engine.
pub type EngineResult<T> = Result<T, EngineError>;

/// Top-level error type for snapshot construction, configuration and export.
///
/// The per-tick blend path never produces one of these; degenerate inputs there are absorbed
/// into fallback geometry instead.
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    /// Invalid configuration or manifest input.
    #[error("validation error: {0}")]
    Validation(String),

    /// No usable font face could be resolved or loaded.
    #[error("font error: {0}")]
    Font(String),

    /// Text layout or rasterization failed.
    #[error("raster error: {0}")]
    Raster(String),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EngineError {
    /// Build [`EngineError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build [`EngineError::Font`].
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build [`EngineError::Raster`].
    pub fn raster(msg: impl Into<String>) -> Self {
        Self::Raster(msg.into())
    }

    /// Build [`EngineError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
