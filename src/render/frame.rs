use super::marker::{MarkerDescriptor, MarkerVisual};
use super::style::ShapeStyle;
use crate::math::LatLng;

/// Shape geometry handed to the host surface.
///
/// `path` is the interleaved render sequence, not the raw vertex list.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapePrimitive {
    ClosedFill { path: Vec<LatLng>, style: ShapeStyle },
    OpenStroke { path: Vec<LatLng>, style: ShapeStyle },
}

impl ShapePrimitive {
    #[must_use]
    pub fn path(&self) -> &[LatLng] {
        match self {
            Self::ClosedFill { path, .. } | Self::OpenStroke { path, .. } => path,
        }
    }
}

/// One full redraw: optional shape plus every visible handle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderFrame {
    pub shape: Option<ShapePrimitive>,
    pub markers: Vec<(MarkerDescriptor, MarkerVisual)>,
}

impl RenderFrame {
    /// Returns the descriptors of all markers in the frame.
    pub fn descriptors(&self) -> impl Iterator<Item = &MarkerDescriptor> {
        self.markers.iter().map(|(d, _)| d)
    }
}

/// The host map surface that draws frames.
pub trait RenderSurface {
    fn render(&mut self, frame: &RenderFrame);
}
