//! Render-side data: style record, shape primitives, marker strategy and the
//! host surface seam.

mod frame;
mod marker;
mod style;

pub use frame::{RenderFrame, RenderSurface, ShapePrimitive};
pub use marker::{DefaultMarkers, MarkerBuilder, MarkerDescriptor, MarkerRole, MarkerVisual};
pub use style::{Color, ShapeStyle};
