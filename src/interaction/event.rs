use crate::math::LatLng;

/// Kind of pointer input delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Tap,
    LongPress,
    DragStart,
    DragUpdate,
    DragEnd,
    Hover,
}

/// What the host's hit test found under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Target {
    #[default]
    Map,
    Vertex(usize),
    Midpoint(usize),
}

/// Screen position in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

/// A single pointer event from the host surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub screen: ScreenPoint,
    pub coord: LatLng,
    pub target: Target,
}

impl PointerEvent {
    #[must_use]
    pub fn new(kind: PointerKind, target: Target, coord: LatLng) -> Self {
        Self {
            kind,
            screen: ScreenPoint::default(),
            coord,
            target,
        }
    }

    /// Sets the screen position.
    #[must_use]
    pub fn at_screen(self, x: f32, y: f32) -> Self {
        Self {
            screen: ScreenPoint { x, y },
            ..self
        }
    }

    #[must_use]
    pub fn tap(target: Target, coord: LatLng) -> Self {
        Self::new(PointerKind::Tap, target, coord)
    }

    #[must_use]
    pub fn long_press(target: Target, coord: LatLng) -> Self {
        Self::new(PointerKind::LongPress, target, coord)
    }

    #[must_use]
    pub fn drag_start(target: Target, coord: LatLng) -> Self {
        Self::new(PointerKind::DragStart, target, coord)
    }

    /// Drag updates and ends carry no target; the active gesture decides.
    #[must_use]
    pub fn drag_update(coord: LatLng) -> Self {
        Self::new(PointerKind::DragUpdate, Target::Map, coord)
    }

    #[must_use]
    pub fn drag_end(coord: LatLng) -> Self {
        Self::new(PointerKind::DragEnd, Target::Map, coord)
    }
}

/// Gesture currently in progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    /// Dragging stored vertex `index`; the store follows the pointer.
    VertexDrag { index: usize },
    /// Dragging the handle on `edge`; only `position` moves until release.
    MidpointDrag { edge: usize, position: LatLng },
    /// Translating the whole shape; `last` is the previous pointer coordinate.
    ShapeDrag { last: LatLng },
}

impl Gesture {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Whether midpoint handles are hidden while this gesture runs.
    #[must_use]
    pub fn hides_midpoints(&self) -> bool {
        matches!(self, Self::VertexDrag { .. } | Self::ShapeDrag { .. })
    }
}
