use geo::{Coord, InteriorPoint, LineString, MultiPolygon, Polygon};

use crate::geojson::{Coordinates, Position, Ring};

use super::bounds::ring_bounds;

/// Default label anchor for a polygon or multipolygon.
///
/// For a MultiPolygon the sub-polygon with the largest bounding-box area is
/// selected (a cheap proxy for largest true area), then the anchor is the
/// midpoint of that polygon's bounding box. Not a true centroid and not a
/// pole of inaccessibility: the midpoint can fall outside concave shapes.
/// That is the accepted default; see [`interior_label_position`] for the
/// opt-in upgrade. Always finite for well-formed non-empty input.
pub fn default_label_position(coordinates: &Coordinates) -> Position {
    match coordinates {
        Coordinates::Polygon(rings) => ring_bounds(rings).center(),
        Coordinates::MultiPolygon(polygons) => {
            let mut best = ring_bounds(&[]);
            let mut best_area = f64::NEG_INFINITY;
            for polygon in polygons {
                let bounds = ring_bounds(polygon);
                if bounds.area() > best_area {
                    best_area = bounds.area();
                    best = bounds;
                }
            }
            best.center()
        }
    }
}

/// Apply the stored-override precedence rule: a user-dragged position
/// persisted as `label_lng`/`label_lat` wins over the computed default.
pub fn resolve_label_position(stored: Option<Position>, coordinates: &Coordinates) -> Position {
    stored.unwrap_or_else(|| default_label_position(coordinates))
}

/// Opt-in alternative anchor guaranteed to lie inside the geometry, using the
/// `geo` interior-point algorithm. Falls back to the bounding-box midpoint
/// when the algorithm yields nothing (degenerate rings). Never the default:
/// callers relying on midpoint positions must not be silently moved.
pub fn interior_label_position(coordinates: &Coordinates) -> Position {
    to_geo(coordinates)
        .interior_point()
        .map(|p| [p.x(), p.y()])
        .unwrap_or_else(|| default_label_position(coordinates))
}

fn ring_to_line_string(ring: &Ring) -> LineString<f64> {
    ring.iter().map(|&[x, y]| Coord { x, y }).collect()
}

fn polygon_to_geo(rings: &[Ring]) -> Polygon<f64> {
    let exterior = rings
        .first()
        .map(ring_to_line_string)
        .unwrap_or_else(|| LineString::new(Vec::new()));
    let interiors = rings.iter().skip(1).map(ring_to_line_string).collect();
    Polygon::new(exterior, interiors)
}

fn to_geo(coordinates: &Coordinates) -> MultiPolygon<f64> {
    match coordinates {
        Coordinates::Polygon(rings) => MultiPolygon::new(vec![polygon_to_geo(rings)]),
        Coordinates::MultiPolygon(polygons) => {
            MultiPolygon::new(polygons.iter().map(|p| polygon_to_geo(p)).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rectangle(min: [f64; 2], max: [f64; 2]) -> Ring {
        vec![
            [min[0], min[1]],
            [max[0], min[1]],
            [max[0], max[1]],
            [min[0], max[1]],
            [min[0], min[1]],
        ]
    }

    #[test]
    fn test_rectangle_labels_at_midpoint() {
        let coords = Coordinates::Polygon(vec![vec![
            [0.0, 0.0],
            [2.0, 0.0],
            [2.0, 2.0],
            [0.0, 2.0],
            [0.0, 0.0],
        ]]);
        assert_eq!(default_label_position(&coords), [1.0, 1.0]);
    }

    #[test]
    fn test_multipolygon_prefers_largest_bbox() {
        let small = rectangle([0.0, 0.0], [1.0, 1.0]);
        let large = rectangle([10.0, 10.0], [14.0, 14.0]);
        let coords = Coordinates::MultiPolygon(vec![vec![small], vec![large]]);

        let [lng, lat] = default_label_position(&coords);
        assert!((10.0..=14.0).contains(&lng));
        assert!((10.0..=14.0).contains(&lat));
        assert_eq!([lng, lat], [12.0, 12.0]);
    }

    #[test]
    fn test_label_is_finite() {
        let coords = Coordinates::Polygon(vec![rectangle([-82.5, 27.0], [-80.0, 29.5])]);
        let [lng, lat] = default_label_position(&coords);
        assert!(lng.is_finite());
        assert!(lat.is_finite());
    }

    #[test]
    fn test_stored_position_wins() {
        let coords = Coordinates::Polygon(vec![rectangle([0.0, 0.0], [2.0, 2.0])]);
        assert_eq!(
            resolve_label_position(Some([-81.3, 28.4]), &coords),
            [-81.3, 28.4]
        );
        assert_eq!(resolve_label_position(None, &coords), [1.0, 1.0]);
    }

    #[test]
    fn test_interior_point_lies_inside_bbox() {
        let coords = Coordinates::Polygon(vec![rectangle([0.0, 0.0], [4.0, 2.0])]);
        let [lng, lat] = interior_label_position(&coords);
        assert!((0.0..=4.0).contains(&lng));
        assert!((0.0..=2.0).contains(&lat));
    }

    #[test]
    fn test_interior_point_inside_concave_shape() {
        // U-shape whose bbox midpoint (2, 1.5) falls in the notch.
        let coords = Coordinates::Polygon(vec![vec![
            [0.0, 0.0],
            [4.0, 0.0],
            [4.0, 3.0],
            [3.0, 3.0],
            [3.0, 1.0],
            [1.0, 1.0],
            [1.0, 3.0],
            [0.0, 3.0],
            [0.0, 0.0],
        ]]);

        let [lng, lat] = interior_label_position(&coords);
        // Inside the solid part, not the notch between x=1 and x=3 above y=1.
        let in_notch = (1.0..3.0).contains(&lng) && lat > 1.0;
        assert!(!in_notch, "interior point ({lng}, {lat}) fell in the notch");
    }
}
