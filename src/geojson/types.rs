use serde::{Deserialize, Serialize};

/// A single `[longitude, latitude]` pair in EPSG:4326.
pub type Position = [f64; 2];

/// Closed loop of positions; first and last point are expected to coincide.
pub type Ring = Vec<Position>;

/// Top-level GeoJSON document, discriminated once on the `type` tag.
///
/// Only the shapes this tool consumes are modeled: boundary files arrive as a
/// FeatureCollection, a single Feature, or a bare Polygon/MultiPolygon
/// geometry. Anything else is rejected at deserialization time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJson {
    FeatureCollection { features: Vec<Feature> },
    Feature(Feature),
    Polygon { coordinates: Vec<Ring> },
    MultiPolygon { coordinates: Vec<Vec<Ring>> },
}

/// A GeoJSON feature. Properties are passed through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    pub geometry: Option<Geometry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<serde_json::Value>,
}

/// Geometry of a feature, restricted to the polygonal kinds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Polygon { coordinates: Vec<Ring> },
    MultiPolygon { coordinates: Vec<Vec<Ring>> },
}

/// Canonical coordinate tree after extraction: the one internal shape every
/// downstream component (mask builder, bounds, label placer) consumes.
#[derive(Debug, Clone, PartialEq)]
pub enum Coordinates {
    /// `rings[0]` is the exterior boundary, `rings[1..]` are holes.
    Polygon(Vec<Ring>),
    /// Disjoint or multi-part regions, e.g. a county with islands.
    MultiPolygon(Vec<Vec<Ring>>),
}

impl Coordinates {
    /// Total number of rings across all constituent polygons.
    pub fn ring_count(&self) -> usize {
        match self {
            Coordinates::Polygon(rings) => rings.len(),
            Coordinates::MultiPolygon(polygons) => polygons.iter().map(|p| p.len()).sum(),
        }
    }

    /// Iterate over every ring, exterior and holes alike, in document order.
    pub fn rings(&self) -> Box<dyn Iterator<Item = &Ring> + '_> {
        match self {
            Coordinates::Polygon(rings) => Box::new(rings.iter()),
            Coordinates::MultiPolygon(polygons) => Box::new(polygons.iter().flatten()),
        }
    }
}
