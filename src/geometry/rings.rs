use crate::geojson::Ring;

/// The fixed five-point ring covering the whole world, wound counter-clockwise.
pub const WORLD_RING: [[f64; 2]; 5] = [
    [-180.0, -90.0],
    [180.0, -90.0],
    [180.0, 90.0],
    [-180.0, 90.0],
    [-180.0, -90.0],
];

/// Reverse the point order of every ring, producing new rings.
///
/// This converts an exterior-wound boundary into a hole-compatible ring for
/// embedding inside an enclosing polygon. Winding is never inspected: source
/// rings are assumed counter-clockwise by GeoJSON convention, so reversing
/// yields the clockwise orientation a hole needs.
pub fn reverse_rings(rings: &[Ring]) -> Vec<Ring> {
    rings
        .iter()
        .map(|ring| ring.iter().rev().copied().collect())
        .collect()
}
