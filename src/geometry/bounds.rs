use crate::geojson::{Coordinates, Position};

/// Axis-aligned bounding box in lng/lat degrees.
///
/// Starts in the empty state (infinite mins, negative-infinite maxes) so a
/// plain min/max fold works without a seen-first-point flag. Callers framing
/// a camera must check [`Bounds::is_empty`] before using the values.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    pub min_lng: f64,
    pub min_lat: f64,
    pub max_lng: f64,
    pub max_lat: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new()
    }
}

impl Bounds {
    /// Create an empty box.
    pub fn new() -> Self {
        Self {
            min_lng: f64::INFINITY,
            min_lat: f64::INFINITY,
            max_lng: f64::NEG_INFINITY,
            max_lat: f64::NEG_INFINITY,
        }
    }

    /// Grow the box to include a position.
    pub fn extend(&mut self, position: Position) {
        let [lng, lat] = position;
        self.min_lng = self.min_lng.min(lng);
        self.min_lat = self.min_lat.min(lat);
        self.max_lng = self.max_lng.max(lng);
        self.max_lat = self.max_lat.max(lat);
    }

    /// True if no coordinates have been seen yet.
    pub fn is_empty(&self) -> bool {
        self.min_lng > self.max_lng
    }

    /// Midpoint of the box; meaningless for an empty box.
    pub fn center(&self) -> Position {
        [
            (self.min_lng + self.max_lng) / 2.0,
            (self.min_lat + self.max_lat) / 2.0,
        ]
    }

    pub fn width(&self) -> f64 {
        self.max_lng - self.min_lng
    }

    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Bounding-box area in square degrees, used as a cheap proxy for
    /// polygon area when ranking sub-polygons.
    pub fn area(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.width() * self.height()
        }
    }
}

/// Compute the bounding box of a geometry by walking every coordinate of
/// every ring. Holes cannot expand the box (they are nested within the
/// exterior), so including them is harmless.
pub fn compute_bounds(coordinates: &Coordinates) -> Bounds {
    let mut bounds = Bounds::new();
    for ring in coordinates.rings() {
        for &position in ring {
            bounds.extend(position);
        }
    }
    bounds
}

/// Bounding box of a single polygon's rings, used by the label placer.
pub fn ring_bounds(rings: &[Vec<Position>]) -> Bounds {
    let mut bounds = Bounds::new();
    for ring in rings {
        for &position in ring {
            bounds.extend(position);
        }
    }
    bounds
}
