use thiserror::Error;

/// Top-level error type for the mapshape editor.
#[derive(Debug, Error)]
pub enum MapshapeError {
    #[error(transparent)]
    Style(#[from] StyleError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while validating a [`ShapeStyle`](crate::render::ShapeStyle).
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("{field} = {value} must be finite and non-negative")]
    InvalidMeasure { field: &'static str, value: f64 },
}

/// Errors raised while validating an [`EditorConfig`](crate::interaction::EditorConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("minimum polygon vertex count {0} is below 3")]
    PolygonMinimumTooSmall(usize),
}

/// Convenience type alias for results using [`MapshapeError`].
pub type Result<T> = std::result::Result<T, MapshapeError>;
