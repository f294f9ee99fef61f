//! Pure derivations from a vertex sequence: midpoints, the interleaved render
//! sequence and point containment.

mod containment;
mod midpoints;
mod render_sequence;

pub use containment::point_in_shape;
pub use midpoints::{compute_midpoints, midpoint, segment_count};
pub use render_sequence::interleave;
