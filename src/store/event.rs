use crate::math::LatLng;

slotmap::new_key_type! {
    /// Handle returned by [`VertexStore::subscribe`](super::VertexStore::subscribe).
    pub struct ListenerId;
}

/// The mutation that produced a [`StoreEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Added { index: usize },
    Inserted { index: usize },
    Updated { index: usize },
    Removed { index: usize },
    Cleared,
    Replaced,
    Translated,
    ModeChanged,
}

/// Notification delivered to listeners after a successful mutation.
///
/// `points` and `mode` already reflect the mutation.
#[derive(Debug, Clone, Copy)]
pub struct StoreEvent<'a, M> {
    pub change: Change,
    pub points: &'a [LatLng],
    pub mode: M,
}

/// Boxed listener callback.
pub type Listener<M> = Box<dyn FnMut(&StoreEvent<'_, M>)>;
