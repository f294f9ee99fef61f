use crate::math::LatLng;

/// Returns the number of edges of a shape with `len` vertices.
///
/// Closed shapes wrap from the last vertex back to the first.
#[must_use]
pub fn segment_count(len: usize, closed: bool) -> usize {
    if len < 2 {
        return 0;
    }
    if closed {
        len
    } else {
        len - 1
    }
}

/// Returns the arithmetic mean of two coordinates.
#[must_use]
pub fn midpoint(a: LatLng, b: LatLng) -> LatLng {
    LatLng::from_point(&nalgebra::center(&a.to_point(), &b.to_point()))
}

/// Computes one midpoint per edge.
///
/// Midpoint `i` lies on the edge from vertex `i` to vertex `(i + 1) % len`.
/// Returns an empty list for fewer than 2 vertices.
#[must_use]
pub fn compute_midpoints(points: &[LatLng], closed: bool) -> Vec<LatLng> {
    let n = points.len();
    (0..segment_count(n, closed))
        .map(|i| midpoint(points[i], points[(i + 1) % n]))
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn ll(lat: f64, lng: f64) -> LatLng {
        LatLng::new(lat, lng)
    }

    #[test]
    fn segment_count_small_shapes() {
        assert_eq!(segment_count(0, true), 0);
        assert_eq!(segment_count(1, true), 0);
        assert_eq!(segment_count(1, false), 0);
        assert_eq!(segment_count(2, false), 1);
        assert_eq!(segment_count(2, true), 2);
    }

    #[test]
    fn counts_follow_closure() {
        let pts: Vec<_> = (0..5).map(|i| ll(f64::from(i), 0.0)).collect();
        for n in 0..=5 {
            let closed = compute_midpoints(&pts[..n], true).len();
            let open = compute_midpoints(&pts[..n], false).len();
            if n < 2 {
                assert_eq!((closed, open), (0, 0));
            } else {
                assert_eq!((closed, open), (n, n - 1));
            }
        }
    }

    #[test]
    fn closing_edge_midpoint() {
        let pts = [ll(0.0, 0.0), ll(0.0, 1.0), ll(1.0, 1.0)];
        let mids = compute_midpoints(&pts, true);
        assert_eq!(mids.len(), 3);
        assert_relative_eq!(mids[0].lat, 0.0);
        assert_relative_eq!(mids[0].lng, 0.5);
        assert_relative_eq!(mids[1].lat, 0.5);
        assert_relative_eq!(mids[1].lng, 1.0);
        assert_relative_eq!(mids[2].lat, 0.5);
        assert_relative_eq!(mids[2].lng, 0.5);
    }

    #[test]
    fn degenerate_edge_collapses() {
        let p = ll(3.0, -2.0);
        let mids = compute_midpoints(&[p, p], false);
        assert_eq!(mids, vec![p]);
    }
}
