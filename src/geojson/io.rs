use anyhow::{Context, Result, ensure};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use super::types::GeoJson;

/// Read and parse a GeoJSON document from disk.
pub fn read_geojson(path: &Path) -> Result<GeoJson> {
    ensure!(path.exists(), "GeoJSON file not found: {}", path.display());

    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse GeoJSON from {}", path.display()))
}

/// Write a GeoJSON document to disk, compact by default.
pub fn write_geojson(path: &Path, doc: &GeoJson, pretty: bool) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let writer = BufWriter::new(file);

    if pretty {
        serde_json::to_writer_pretty(writer, doc)
    } else {
        serde_json::to_writer(writer, doc)
    }
    .with_context(|| format!("Failed to write GeoJSON to {}", path.display()))
}
