/// Convenience result type used across starglyph.
pub type GlyphResult<T> = Result<T, GlyphError>;

/// Top-level error taxonomy used by the layout, geometry and render APIs.
#[derive(thiserror::Error, Debug)]
pub enum GlyphError {
    /// Invalid rows, viewport or configuration reaching a layout/geometry boundary.
    #[error("validation error: {0}")]
    Validation(String),

    /// Failures while loading or parsing a dataset.
    #[error("data error: {0}")]
    Data(String),

    /// Raster surface problems (size limits, buffer mismatches).
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlyphError {
    /// Build a [`GlyphError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GlyphError::Data`] value.
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }

    /// Build a [`GlyphError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
