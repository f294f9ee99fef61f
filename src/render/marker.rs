use super::style::{Color, ShapeStyle};
use crate::math::LatLng;

/// What a draggable marker stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerRole {
    /// A stored vertex. `is_start` marks vertex 0, the closing target.
    Vertex { index: usize, is_start: bool },
    /// The insertion handle on edge `edge`.
    Midpoint { edge: usize },
}

/// Input to a [`MarkerBuilder`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerDescriptor {
    pub position: LatLng,
    pub role: MarkerRole,
    pub dragging: bool,
}

/// Host-facing visual description of one marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerVisual {
    pub position: LatLng,
    pub size: f64,
    pub color: Color,
    pub border_color: Color,
    pub draggable: bool,
}

/// Strategy turning a marker descriptor into its visual.
pub trait MarkerBuilder {
    fn build(&self, marker: &MarkerDescriptor) -> MarkerVisual;
}

impl<F> MarkerBuilder for F
where
    F: Fn(&MarkerDescriptor) -> MarkerVisual,
{
    fn build(&self, marker: &MarkerDescriptor) -> MarkerVisual {
        self(marker)
    }
}

/// Default markers: filled vertex dots, hollow midpoint dots.
///
/// A marker being dragged is drawn one and a half times larger.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMarkers {
    style: ShapeStyle,
}

impl DefaultMarkers {
    #[must_use]
    pub fn new(style: ShapeStyle) -> Self {
        Self { style }
    }
}

impl MarkerBuilder for DefaultMarkers {
    fn build(&self, marker: &MarkerDescriptor) -> MarkerVisual {
        let (size, color) = match marker.role {
            MarkerRole::Vertex { .. } => (self.style.point_size, self.style.border_color),
            MarkerRole::Midpoint { .. } => (self.style.midpoint_size, Color::WHITE),
        };
        let size = if marker.dragging { size * 1.5 } else { size };
        MarkerVisual {
            position: marker.position,
            size,
            color,
            border_color: self.style.border_color,
            draggable: true,
        }
    }
}
