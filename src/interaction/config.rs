use std::time::Duration;

use crate::error::{ConfigError, Result};
use crate::render::ShapeStyle;

/// Parameters controlling an editing session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorConfig {
    /// Minimum interval between frames pushed during a drag. Zero disables coalescing.
    pub throttle: Duration,
    /// Style applied to the shape primitive and default markers.
    pub style: ShapeStyle,
    /// Vertex count needed to close a polygon; removal never goes below it.
    pub min_polygon_vertices: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            throttle: Duration::from_millis(16),
            style: ShapeStyle::default(),
            min_polygon_vertices: 3,
        }
    }
}

impl EditorConfig {
    /// Returns the configuration unchanged if it is usable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::PolygonMinimumTooSmall` if `min_polygon_vertices < 3`,
    /// or a style error if the style is invalid.
    pub fn validated(self) -> Result<Self> {
        if self.min_polygon_vertices < 3 {
            return Err(ConfigError::PolygonMinimumTooSmall(self.min_polygon_vertices).into());
        }
        self.style.validated()?;
        Ok(self)
    }
}
