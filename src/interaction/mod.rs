//! Pointer-event routing, drag gestures and throttled frame output.

mod config;
mod editor;
mod event;
mod routing;
mod throttle;

pub use config::EditorConfig;
pub use editor::Editor;
pub use event::{Gesture, PointerEvent, PointerKind, ScreenPoint, Target};
pub use routing::Routing;
pub use throttle::{Clock, MonotonicClock, Throttle};
