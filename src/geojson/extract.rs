use thiserror::Error;

use super::types::{Coordinates, GeoJson, Geometry};

/// Errors raised while normalizing raw GeoJSON into [`Coordinates`].
///
/// All of these are fatal to the calling operation: malformed input will not
/// become valid on retry, so callers decide whether to surface a message,
/// fall back to an unmasked map, or skip the layer entirely.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("missing data")]
    MissingData,
    #[error("empty collection")]
    EmptyCollection,
    #[error("missing geometry")]
    MissingGeometry,
}

/// Normalize any supported GeoJSON shape into the canonical coordinate tree.
///
/// Accepts a FeatureCollection, a single Feature, or a bare geometry. When
/// given a FeatureCollection only the first feature is used; any remaining
/// features are dropped. Multi-feature boundary files therefore lose all but
/// their lead geometry.
///
/// Pure extraction: ring closure and winding are not validated here.
pub fn extract_coordinates(input: Option<&GeoJson>) -> Result<Coordinates, GeometryError> {
    let doc = input.ok_or(GeometryError::MissingData)?;

    match doc {
        GeoJson::FeatureCollection { features } => {
            let first = features.first().ok_or(GeometryError::EmptyCollection)?;
            geometry_coordinates(first.geometry.as_ref())
        }
        GeoJson::Feature(feature) => geometry_coordinates(feature.geometry.as_ref()),
        GeoJson::Polygon { coordinates } => Ok(Coordinates::Polygon(coordinates.clone())),
        GeoJson::MultiPolygon { coordinates } => {
            Ok(Coordinates::MultiPolygon(coordinates.clone()))
        }
    }
}

fn geometry_coordinates(geometry: Option<&Geometry>) -> Result<Coordinates, GeometryError> {
    match geometry.ok_or(GeometryError::MissingGeometry)? {
        Geometry::Polygon { coordinates } => Ok(Coordinates::Polygon(coordinates.clone())),
        Geometry::MultiPolygon { coordinates } => {
            Ok(Coordinates::MultiPolygon(coordinates.clone()))
        }
    }
}
