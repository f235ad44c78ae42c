use crate::geojson::{Coordinates, Feature, GeoJson, Geometry, Ring};

use super::rings::{WORLD_RING, reverse_rings};

/// Build the ring list of a world-minus-region mask: the fixed world ring
/// first, then every target ring reversed into hole orientation.
///
/// MultiPolygon input is flattened so exterior rings and pre-existing holes
/// are treated uniformly. A hole inside a target polygon ends up
/// double-reversed in the mask, where it acts as fill again, which is the
/// right visual result for the cookie-cutter effect.
pub fn mask_rings(target: &Coordinates) -> Vec<Ring> {
    let flattened: Vec<Ring> = target.rings().cloned().collect();

    let mut rings = Vec::with_capacity(1 + flattened.len());
    rings.push(WORLD_RING.to_vec());
    rings.extend(reverse_rings(&flattened));
    rings
}

/// Build the mask as a renderable GeoJSON Polygon Feature.
///
/// The ring winding of the output is the contract: consumers render it as an
/// opaque or semi-opaque fill and must not re-orient the rings.
pub fn world_mask_feature(target: &Coordinates) -> GeoJson {
    GeoJson::Feature(Feature {
        geometry: Some(Geometry::Polygon {
            coordinates: mask_rings(target),
        }),
        properties: Some(serde_json::json!({})),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_ring() -> Ring {
        vec![[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0], [0.0, 0.0]]
    }

    #[test]
    fn test_polygon_mask_ring_count() {
        let hole = vec![[0.5, 0.5], [1.0, 0.5], [1.0, 1.0], [0.5, 0.5]];
        let coords = Coordinates::Polygon(vec![square_ring(), hole]);

        let rings = mask_rings(&coords);
        assert_eq!(rings.len(), 1 + coords.ring_count());
    }

    #[test]
    fn test_multipolygon_mask_ring_count() {
        let coords = Coordinates::MultiPolygon(vec![
            vec![square_ring()],
            vec![
                vec![[5.0, 5.0], [6.0, 5.0], [6.0, 6.0], [5.0, 5.0]],
                vec![[5.2, 5.2], [5.4, 5.2], [5.4, 5.4], [5.2, 5.2]],
            ],
        ]);

        let rings = mask_rings(&coords);
        assert_eq!(rings.len(), 1 + 3);
    }

    #[test]
    fn test_mask_layout() {
        let coords = Coordinates::Polygon(vec![square_ring()]);
        let rings = mask_rings(&coords);

        assert_eq!(rings.len(), 2);
        assert_eq!(rings[0], WORLD_RING.to_vec());

        let expected: Ring = square_ring().into_iter().rev().collect();
        assert_eq!(rings[1], expected);
    }

    #[test]
    fn test_mask_feature_is_polygon() {
        let coords = Coordinates::Polygon(vec![square_ring()]);
        let feature = world_mask_feature(&coords);

        let json = serde_json::to_value(&feature).unwrap();
        assert_eq!(json["type"], "Feature");
        assert_eq!(json["geometry"]["type"], "Polygon");
        assert_eq!(json["geometry"]["coordinates"].as_array().unwrap().len(), 2);
    }
}
