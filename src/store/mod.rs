mod event;

pub use event::{Change, Listener, ListenerId, StoreEvent};

use std::fmt;

use slotmap::SlotMap;
use tracing::trace;

use crate::math::{LatLng, Vector2};
use crate::mode::EditMode;

/// Owner of the ordered vertex sequence and the active edit mode.
///
/// Every successful mutation notifies all subscribed listeners synchronously,
/// before the mutating call returns. Index-based operations with an index out
/// of range are silent no-ops and notify nobody.
pub struct VertexStore<M: EditMode> {
    points: Vec<LatLng>,
    mode: M,
    listeners: SlotMap<ListenerId, Listener<M>>,
}

impl<M: EditMode + Default> Default for VertexStore<M> {
    fn default() -> Self {
        Self::new(M::default())
    }
}

impl<M: EditMode> fmt::Debug for VertexStore<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VertexStore")
            .field("points", &self.points)
            .field("mode", &self.mode)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<M: EditMode> VertexStore<M> {
    /// Creates an empty store in the given mode.
    #[must_use]
    pub fn new(mode: M) -> Self {
        Self {
            points: Vec::new(),
            mode,
            listeners: SlotMap::with_key(),
        }
    }

    // --- Read access ---

    /// Returns the vertex sequence.
    #[must_use]
    pub fn points(&self) -> &[LatLng] {
        &self.points
    }

    /// Returns the vertex at `index`, if any.
    #[must_use]
    pub fn point(&self, index: usize) -> Option<LatLng> {
        self.points.get(index).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn mode(&self) -> M {
        self.mode
    }

    /// Whether edges wrap from the last vertex back to the first.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.mode.is_closed()
    }

    // --- Subscriptions ---

    /// Registers a listener and returns its handle.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&StoreEvent<'_, M>) + 'static,
    {
        self.listeners.insert(Box::new(listener))
    }

    /// Removes a listener. Returns `false` if the handle was unknown or stale.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id).is_some()
    }

    // --- Mutations ---

    /// Appends a vertex.
    pub fn add_point(&mut self, p: LatLng) {
        self.points.push(p);
        self.notify(Change::Added {
            index: self.points.len() - 1,
        });
    }

    /// Inserts a vertex before `index`; `index == len` appends.
    pub fn insert_point(&mut self, index: usize, p: LatLng) {
        if index > self.points.len() {
            trace!(index, len = self.points.len(), "insert out of range");
            return;
        }
        self.points.insert(index, p);
        self.notify(Change::Inserted { index });
    }

    /// Replaces the vertex at `index`.
    pub fn update_point(&mut self, index: usize, p: LatLng) {
        let Some(slot) = self.points.get_mut(index) else {
            trace!(index, len = self.points.len(), "update out of range");
            return;
        };
        *slot = p;
        self.notify(Change::Updated { index });
    }

    /// Removes the vertex at `index`.
    pub fn remove_point(&mut self, index: usize) {
        if index >= self.points.len() {
            trace!(index, len = self.points.len(), "remove out of range");
            return;
        }
        self.points.remove(index);
        self.notify(Change::Removed { index });
    }

    /// Removes and returns the last vertex, or `None` if the store is empty.
    pub fn remove_last(&mut self) -> Option<LatLng> {
        let last = self.points.pop()?;
        self.notify(Change::Removed {
            index: self.points.len(),
        });
        Some(last)
    }

    /// Removes every vertex.
    pub fn clear(&mut self) {
        self.points.clear();
        self.notify(Change::Cleared);
    }

    /// Replaces the sequence with a copy of `points`.
    pub fn set_points(&mut self, points: &[LatLng]) {
        self.points = points.to_vec();
        self.notify(Change::Replaced);
    }

    /// Switches the active mode. Setting the current mode again is a no-op.
    pub fn set_mode(&mut self, mode: M) {
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        self.notify(Change::ModeChanged);
    }

    /// Shifts every vertex by the given latitude and longitude offsets.
    pub fn translate(&mut self, lat_offset: f64, lng_offset: f64) {
        let offset = Vector2::new(lat_offset, lng_offset);
        for p in &mut self.points {
            *p = p.offset(&offset);
        }
        self.notify(Change::Translated);
    }

    fn notify(&mut self, change: Change) {
        let event = StoreEvent {
            change,
            points: &self.points,
            mode: self.mode,
        };
        for listener in self.listeners.values_mut() {
            listener(&event);
        }
    }
}
