use super::{Point2, Vector2};

/// A geographic coordinate in degrees.
///
/// Latitude is the first coordinate and longitude the second; conversions to
/// `nalgebra` types map them to `x` and `y` respectively.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a coordinate from latitude and longitude.
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns this coordinate as a planar point (`x = lat`, `y = lng`).
    #[must_use]
    pub fn to_point(self) -> Point2 {
        Point2::new(self.lat, self.lng)
    }

    /// Builds a coordinate from a planar point (`x = lat`, `y = lng`).
    #[must_use]
    pub fn from_point(p: &Point2) -> Self {
        Self::new(p.x, p.y)
    }

    /// Returns the coordinate shifted by `offset` (`x` in latitude, `y` in longitude).
    #[must_use]
    pub fn offset(self, offset: &Vector2) -> Self {
        Self::from_point(&(self.to_point() + offset))
    }

    /// Returns the offset that carries `self` onto `other`.
    #[must_use]
    pub fn delta_to(self, other: Self) -> Vector2 {
        other.to_point() - self.to_point()
    }
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}
