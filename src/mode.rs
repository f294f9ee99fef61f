use std::fmt::Debug;

/// A control scheme governing edge wrap-around and which handles are offered.
///
/// Two schemes exist, [`Phase`] and [`ShapeKind`]. A store is parameterized by
/// exactly one of them and the two never interoperate.
pub trait EditMode: Copy + Eq + Debug + 'static {
    /// Whether the last vertex connects back to the first.
    fn is_closed(self) -> bool;

    /// Whether midpoint insertion handles are offered in this mode.
    fn shows_midpoints(self) -> bool;
}

/// Polygon-only workflow split into a creation phase and an editing phase.
///
/// While `Creating`, the outline is open and taps append vertices. Tapping the
/// start vertex closes the polygon and moves to `Editing`, where midpoint
/// handles appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Creating,
    Editing,
}

impl EditMode for Phase {
    fn is_closed(self) -> bool {
        self == Self::Editing
    }

    fn shows_midpoints(self) -> bool {
        self == Self::Editing
    }
}

/// Shape-kind toggle with no phase distinction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeKind {
    #[default]
    Polygon,
    Line,
}

impl ShapeKind {
    /// Returns the other kind.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Polygon => Self::Line,
            Self::Line => Self::Polygon,
        }
    }
}

impl EditMode for ShapeKind {
    fn is_closed(self) -> bool {
        self == Self::Polygon
    }

    fn shows_midpoints(self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_closes_only_when_editing() {
        assert!(!Phase::Creating.is_closed());
        assert!(!Phase::Creating.shows_midpoints());
        assert!(Phase::Editing.is_closed());
        assert!(Phase::Editing.shows_midpoints());
    }

    #[test]
    fn shape_kind_toggle() {
        assert_eq!(ShapeKind::Polygon.toggled(), ShapeKind::Line);
        assert_eq!(ShapeKind::Line.toggled(), ShapeKind::Polygon);
        assert!(ShapeKind::Polygon.is_closed());
        assert!(!ShapeKind::Line.is_closed());
        assert!(ShapeKind::Line.shows_midpoints());
    }
}
