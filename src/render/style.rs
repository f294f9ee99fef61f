use crate::error::{Result, StyleError};

/// An RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLUE: Self = Self::rgb(33, 150, 243);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Returns the same colour with a different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// Visual parameters for the edited shape and its handles.
///
/// Plain value: derive variants with the `with_*` methods.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    pub border_width: f64,
    pub border_color: Color,
    pub fill_color: Color,
    pub point_size: f64,
    pub midpoint_size: f64,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            border_width: 2.0,
            border_color: Color::BLUE,
            fill_color: Color::BLUE.with_alpha(64),
            point_size: 12.0,
            midpoint_size: 8.0,
        }
    }
}

impl ShapeStyle {
    #[must_use]
    pub fn with_border_width(self, border_width: f64) -> Self {
        Self {
            border_width,
            ..self
        }
    }

    #[must_use]
    pub fn with_border_color(self, border_color: Color) -> Self {
        Self {
            border_color,
            ..self
        }
    }

    #[must_use]
    pub fn with_fill_color(self, fill_color: Color) -> Self {
        Self { fill_color, ..self }
    }

    #[must_use]
    pub fn with_point_size(self, point_size: f64) -> Self {
        Self { point_size, ..self }
    }

    #[must_use]
    pub fn with_midpoint_size(self, midpoint_size: f64) -> Self {
        Self {
            midpoint_size,
            ..self
        }
    }

    /// Returns the style unchanged if every measure is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns `StyleError::InvalidMeasure` naming the first offending field.
    pub fn validated(self) -> Result<Self> {
        for (field, value) in [
            ("border_width", self.border_width),
            ("point_size", self.point_size),
            ("midpoint_size", self.midpoint_size),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(StyleError::InvalidMeasure { field, value }.into());
            }
        }
        Ok(self)
    }
}
