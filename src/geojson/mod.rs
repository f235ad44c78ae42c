pub mod extract;
pub mod io;
pub mod types;

pub use extract::{GeometryError, extract_coordinates};
pub use io::{read_geojson, write_geojson};
pub use types::{Coordinates, Feature, GeoJson, Geometry, Position, Ring};
