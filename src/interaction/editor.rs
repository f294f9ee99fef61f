use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use tracing::{debug, trace};

use super::config::EditorConfig;
use super::event::{Gesture, PointerEvent, PointerKind, Target};
use super::routing::Routing;
use super::throttle::{Clock, MonotonicClock, Throttle};
use crate::error::Result;
use crate::geometry::{compute_midpoints, interleave, point_in_shape};
use crate::math::LatLng;
use crate::mode::EditMode;
use crate::render::{
    DefaultMarkers, MarkerBuilder, MarkerDescriptor, MarkerRole, RenderFrame, RenderSurface,
    ShapePrimitive,
};
use crate::store::{ListenerId, VertexStore};

/// Interactive editing session for one shape.
///
/// Owns the [`VertexStore`], routes host pointer events into store mutations
/// and pushes throttled [`RenderFrame`]s to the host surface.
pub struct Editor<M: EditMode> {
    store: VertexStore<M>,
    config: EditorConfig,
    surface: Box<dyn RenderSurface>,
    markers: Box<dyn MarkerBuilder>,
    clock: Box<dyn Clock>,
    throttle: Throttle,
    gesture: Gesture,
    /// Set by the store listener; cleared when midpoints are recomputed.
    dirty: Rc<Cell<bool>>,
    listener: ListenerId,
    midpoints: Vec<LatLng>,
    render_sequence: Vec<LatLng>,
}

impl<M: EditMode> fmt::Debug for Editor<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Editor")
            .field("store", &self.store)
            .field("config", &self.config)
            .field("gesture", &self.gesture)
            .field("throttle", &self.throttle)
            .finish_non_exhaustive()
    }
}

impl<M: EditMode> Editor<M> {
    /// Creates an editor with an empty shape in `mode`.
    ///
    /// Markers default to [`DefaultMarkers`] and time to [`MonotonicClock`].
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails validation.
    pub fn new<S>(mode: M, config: EditorConfig, surface: S) -> Result<Self>
    where
        S: RenderSurface + 'static,
    {
        let config = config.validated()?;
        let mut store = VertexStore::new(mode);
        let dirty = Rc::new(Cell::new(true));
        let flag = Rc::clone(&dirty);
        let listener = store.subscribe(move |_| flag.set(true));
        Ok(Self {
            store,
            config,
            surface: Box::new(surface),
            markers: Box::new(DefaultMarkers::new(config.style)),
            clock: Box::new(MonotonicClock),
            throttle: Throttle::new(config.throttle),
            gesture: Gesture::Idle,
            dirty,
            listener,
            midpoints: Vec::new(),
            render_sequence: Vec::new(),
        })
    }

    /// Replaces the marker strategy.
    #[must_use]
    pub fn with_markers<B: MarkerBuilder + 'static>(mut self, markers: B) -> Self {
        self.markers = Box::new(markers);
        self
    }

    /// Replaces the time source used by drag throttling.
    #[must_use]
    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Box::new(clock);
        self
    }

    // --- Read access ---

    #[must_use]
    pub fn store(&self) -> &VertexStore<M> {
        &self.store
    }

    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    #[must_use]
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Midpoints as of the last pushed frame.
    #[must_use]
    pub fn midpoints(&self) -> &[LatLng] {
        &self.midpoints
    }

    /// Render sequence as of the last pushed frame.
    #[must_use]
    pub fn render_sequence(&self) -> &[LatLng] {
        &self.render_sequence
    }

    /// Whether the shape is drawn closed: the mode wraps and a fill is possible.
    ///
    /// A wrapping mode with two vertices is drawn open, so it shows one
    /// midpoint here. [`compute_midpoints`] called with `closed = true` still
    /// yields one midpoint per vertex.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.store.is_closed() && self.store.len() >= 3
    }

    /// Whether midpoint handles are currently offered.
    #[must_use]
    pub fn midpoints_visible(&self) -> bool {
        self.store.mode().shows_midpoints() && !self.gesture.hides_midpoints()
    }

    // --- Session operations ---

    /// Removes the most recently added vertex.
    pub fn undo_last_point(&mut self) -> Option<LatLng> {
        self.gesture = Gesture::Idle;
        let removed = self.store.remove_last();
        self.present(true);
        removed
    }

    /// Empties the shape.
    pub fn clear(&mut self) {
        self.gesture = Gesture::Idle;
        self.store.clear();
        self.present(true);
    }

    /// Replaces the shape with a copy of `points`.
    pub fn load(&mut self, points: &[LatLng]) {
        self.gesture = Gesture::Idle;
        self.store.set_points(points);
        self.present(true);
    }

    /// Switches the edit mode.
    pub fn set_mode(&mut self, mode: M) {
        if mode != self.store.mode() {
            debug!(from = ?self.store.mode(), to = ?mode, "mode change");
        }
        self.store.set_mode(mode);
        self.present(true);
    }

    /// Pushes a frame immediately.
    pub fn refresh(&mut self) {
        self.present(true);
    }

    /// Ends the session, detaching the editor from its store.
    #[must_use]
    pub fn into_store(mut self) -> VertexStore<M> {
        self.store.unsubscribe(self.listener);
        self.store
    }

    // --- Drag state machine ---

    fn drag_start(&mut self, target: Target, coord: LatLng) {
        // Grabbing a handle drops a shape drag that was armed but never dragged.
        let disarmed =
            matches!(self.gesture, Gesture::ShapeDrag { .. }) && target != Target::Map;
        if disarmed {
            debug!(?target, "armed shape drag dropped");
            self.gesture = Gesture::Idle;
        }
        match (self.gesture, target) {
            (Gesture::Idle, Target::Vertex(index)) if index < self.store.len() => {
                trace!(index, "vertex drag start");
                self.gesture = Gesture::VertexDrag { index };
            }
            (Gesture::Idle, Target::Midpoint(edge)) if self.midpoints_visible() => {
                self.refresh_midpoints();
                if let Some(&position) = self.midpoints.get(edge) {
                    trace!(edge, "midpoint drag start");
                    self.gesture = Gesture::MidpointDrag { edge, position };
                } else if !disarmed {
                    return;
                }
            }
            (Gesture::ShapeDrag { .. }, Target::Map) => {
                self.gesture = Gesture::ShapeDrag { last: coord };
            }
            _ if disarmed => {}
            _ => return,
        }
        self.present(true);
    }

    fn drag_update(&mut self, coord: LatLng) {
        match &mut self.gesture {
            Gesture::Idle => return,
            Gesture::VertexDrag { index } => self.store.update_point(*index, coord),
            Gesture::MidpointDrag { position, .. } => *position = coord,
            Gesture::ShapeDrag { last } => {
                let delta = last.delta_to(coord);
                *last = coord;
                self.store.translate(delta.x, delta.y);
            }
        }
        self.present(false);
    }

    fn drag_end(&mut self, coord: LatLng) {
        match std::mem::take(&mut self.gesture) {
            Gesture::Idle => return,
            Gesture::VertexDrag { index } => self.store.update_point(index, coord),
            Gesture::MidpointDrag { edge, .. } => {
                debug!(edge, "midpoint promoted to vertex");
                self.store.insert_point(edge + 1, coord);
            }
            Gesture::ShapeDrag { last } => {
                let delta = last.delta_to(coord);
                self.store.translate(delta.x, delta.y);
            }
        }
        self.present(true);
    }

    /// Arms a whole-shape drag if `coord` lies inside the closed shape.
    pub(super) fn try_begin_shape_drag(&mut self, coord: LatLng) -> bool {
        if !self.is_closed() || !point_in_shape(coord, self.store.points()) {
            return false;
        }
        debug!("shape drag armed");
        self.gesture = Gesture::ShapeDrag { last: coord };
        true
    }

    pub(super) fn store_mut(&mut self) -> &mut VertexStore<M> {
        &mut self.store
    }

    // --- Frame output ---

    /// Recomputes derived geometry and pushes a frame, unless a non-forced
    /// update falls inside the throttle window.
    fn present(&mut self, force: bool) {
        let now = self.clock.now();
        if force {
            self.throttle.force(now);
        } else if !self.throttle.ready(now) {
            trace!("drag update coalesced");
            return;
        }
        self.refresh_midpoints();
        self.render_sequence = self.compose_sequence();
        let frame = self.build_frame();
        self.surface.render(&frame);
    }

    fn refresh_midpoints(&mut self) {
        if self.dirty.replace(false) {
            self.midpoints = compute_midpoints(self.store.points(), self.is_closed());
        }
    }

    fn compose_sequence(&self) -> Vec<LatLng> {
        match self.gesture {
            Gesture::MidpointDrag { edge, position } => {
                let mut mids = self.midpoints.clone();
                if let Some(m) = mids.get_mut(edge) {
                    *m = position;
                }
                interleave(self.store.points(), &mids)
            }
            _ => interleave(self.store.points(), &self.midpoints),
        }
    }

    fn build_frame(&self) -> RenderFrame {
        let path = self.render_sequence.clone();
        let style = self.config.style;
        let shape = if self.is_closed() {
            Some(ShapePrimitive::ClosedFill { path, style })
        } else if self.store.len() >= 2 {
            Some(ShapePrimitive::OpenStroke { path, style })
        } else {
            None
        };

        let mut descriptors: Vec<MarkerDescriptor> = self
            .store
            .points()
            .iter()
            .enumerate()
            .map(|(index, &position)| MarkerDescriptor {
                position,
                role: MarkerRole::Vertex {
                    index,
                    is_start: index == 0,
                },
                dragging: self.gesture == Gesture::VertexDrag { index },
            })
            .collect();

        if self.midpoints_visible() {
            descriptors.extend(self.midpoints.iter().enumerate().map(|(edge, &mid)| {
                let (position, dragging) = match self.gesture {
                    Gesture::MidpointDrag { edge: e, position } if e == edge => (position, true),
                    _ => (mid, false),
                };
                MarkerDescriptor {
                    position,
                    role: MarkerRole::Midpoint { edge },
                    dragging,
                }
            }));
        }

        let markers = descriptors
            .into_iter()
            .map(|d| (d, self.markers.build(&d)))
            .collect();
        RenderFrame { shape, markers }
    }
}

impl<M: Routing> Editor<M> {
    /// Routes one host pointer event.
    pub fn handle(&mut self, event: &PointerEvent) {
        trace!(kind = ?event.kind, target = ?event.target, "pointer event");
        match event.kind {
            PointerKind::DragStart => self.drag_start(event.target, event.coord),
            PointerKind::DragUpdate => self.drag_update(event.coord),
            PointerKind::DragEnd => self.drag_end(event.coord),
            PointerKind::Tap | PointerKind::LongPress => {
                match self.gesture {
                    Gesture::VertexDrag { .. } | Gesture::MidpointDrag { .. } => return,
                    // A press that never turned into a drag disarms it.
                    Gesture::ShapeDrag { .. } => self.gesture = Gesture::Idle,
                    Gesture::Idle => {}
                }
                if event.kind == PointerKind::Tap {
                    M::tap(self, event.target, event.coord);
                } else {
                    M::long_press(self, event.target, event.coord);
                }
                self.present(true);
            }
            PointerKind::Hover => {}
        }
    }
}
