use crate::math::LatLng;

/// Even-odd ray casting test of `point` against the closed outline `shape`.
///
/// Latitude is treated as the first coordinate and longitude as the second.
/// Shapes with fewer than 3 vertices contain nothing. Points lying exactly on
/// the boundary get a deterministic but unspecified answer.
#[must_use]
pub fn point_in_shape(point: LatLng, shape: &[LatLng]) -> bool {
    let n = shape.len();
    if n < 3 {
        return false;
    }
    let (x, y) = (point.lat, point.lng);
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = (shape[i].lat, shape[i].lng);
        let (xj, yj) = (shape[j].lat, shape[j].lng);
        // The straddle check guarantees yj != yi, so the division is finite.
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<LatLng> {
        vec![
            LatLng::new(0.0, 0.0),
            LatLng::new(1.0, 0.0),
            LatLng::new(1.0, 1.0),
            LatLng::new(0.0, 1.0),
        ]
    }

    #[test]
    fn center_is_inside() {
        assert!(point_in_shape(LatLng::new(0.5, 0.5), &unit_square()));
    }

    #[test]
    fn far_point_is_outside() {
        assert!(!point_in_shape(LatLng::new(2.0, 2.0), &unit_square()));
        assert!(!point_in_shape(LatLng::new(-0.5, 0.5), &unit_square()));
    }

    #[test]
    fn vertex_answer_is_deterministic() {
        let sq = unit_square();
        let first = point_in_shape(LatLng::new(0.0, 0.0), &sq);
        for _ in 0..10 {
            assert_eq!(point_in_shape(LatLng::new(0.0, 0.0), &sq), first);
        }
    }

    #[test]
    fn concave_notch_is_outside() {
        // U-shape open towards +lng.
        let u = vec![
            LatLng::new(0.0, 0.0),
            LatLng::new(3.0, 0.0),
            LatLng::new(3.0, 3.0),
            LatLng::new(2.0, 3.0),
            LatLng::new(2.0, 1.0),
            LatLng::new(1.0, 1.0),
            LatLng::new(1.0, 3.0),
            LatLng::new(0.0, 3.0),
        ];
        assert!(!point_in_shape(LatLng::new(1.5, 2.0), &u));
        assert!(point_in_shape(LatLng::new(0.5, 2.0), &u));
        assert!(point_in_shape(LatLng::new(1.5, 0.5), &u));
    }

    #[test]
    fn too_few_vertices() {
        let line = [LatLng::new(0.0, 0.0), LatLng::new(1.0, 1.0)];
        assert!(!point_in_shape(LatLng::new(0.5, 0.5), &line));
        assert!(!point_in_shape(LatLng::new(0.5, 0.5), &[]));
    }
}
