pub mod error;
pub mod geometry;
pub mod interaction;
pub mod math;
pub mod mode;
pub mod render;
pub mod store;

pub use error::{MapshapeError, Result};
pub use interaction::{Editor, EditorConfig, PointerEvent, Target};
pub use math::LatLng;
pub use mode::{EditMode, Phase, ShapeKind};
pub use store::VertexStore;
