//! mapmask - Build cookie-cutter map masks, bounds, and label anchors from GeoJSON regions

pub mod config;
pub mod geojson;
pub mod geometry;
pub mod slug;
