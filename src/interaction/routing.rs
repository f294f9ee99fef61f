use tracing::debug;

use super::editor::Editor;
use super::event::Target;
use crate::math::LatLng;
use crate::mode::{EditMode, Phase, ShapeKind};

/// Tap and long-press policy of a control scheme.
pub trait Routing: EditMode {
    fn tap(editor: &mut Editor<Self>, target: Target, coord: LatLng);
    fn long_press(editor: &mut Editor<Self>, target: Target, coord: LatLng);
}

impl Routing for Phase {
    fn tap(editor: &mut Editor<Self>, target: Target, coord: LatLng) {
        if editor.store().mode() != Phase::Creating {
            return;
        }
        // Only the start vertex can close; every other tap appends.
        if target == Target::Vertex(0) && editor.try_close() {
            return;
        }
        editor.store_mut().add_point(coord);
    }

    fn long_press(editor: &mut Editor<Self>, target: Target, coord: LatLng) {
        match (editor.store().mode(), target) {
            (Phase::Editing, Target::Vertex(index)) => {
                if editor.store().len() > editor.config().min_polygon_vertices {
                    editor.store_mut().remove_point(index);
                } else {
                    debug!(index, "removal refused at polygon minimum");
                }
            }
            (Phase::Editing, Target::Map) => {
                editor.try_begin_shape_drag(coord);
            }
            (Phase::Creating, Target::Map) => editor.store_mut().add_point(coord),
            _ => {}
        }
    }
}

impl Editor<Phase> {
    /// Closes the outline and enters the editing phase.
    ///
    /// Returns `false` while creating with fewer than the configured minimum
    /// number of vertices, or when already editing.
    pub fn try_close(&mut self) -> bool {
        let ready = self.store().mode() == Phase::Creating
            && self.store().len() >= self.config().min_polygon_vertices;
        if ready {
            debug!(vertices = self.store().len(), "polygon closed");
            self.set_mode(Phase::Editing);
        }
        ready
    }
}

impl Routing for ShapeKind {
    fn tap(editor: &mut Editor<Self>, target: Target, coord: LatLng) {
        if target == Target::Map {
            editor.store_mut().add_point(coord);
        }
    }

    fn long_press(editor: &mut Editor<Self>, target: Target, coord: LatLng) {
        match target {
            Target::Vertex(index) => editor.store_mut().remove_point(index),
            Target::Map => {
                if !editor.try_begin_shape_drag(coord) {
                    editor.store_mut().add_point(coord);
                }
            }
            Target::Midpoint(_) => {}
        }
    }
}

impl Editor<ShapeKind> {
    /// Switches between polygon and line.
    pub fn toggle_kind(&mut self) {
        let kind = self.store().mode().toggled();
        self.set_mode(kind);
    }
}
