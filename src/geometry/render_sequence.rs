use crate::math::LatLng;

/// Interleaves vertices with midpoints as `[v0, m0, v1, m1, ...]`.
///
/// Vertices without a matching midpoint are emitted alone, so an open shape
/// yields `2n - 1` entries and a closed one `2n`. Fewer than 2 vertices yield
/// an empty sequence.
#[must_use]
pub fn interleave(vertices: &[LatLng], midpoints: &[LatLng]) -> Vec<LatLng> {
    if vertices.len() < 2 {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(vertices.len() + midpoints.len());
    for (i, v) in vertices.iter().enumerate() {
        out.push(*v);
        if let Some(m) = midpoints.get(i) {
            out.push(*m);
        }
    }
    out
}
