use serde::Deserialize;
use std::path::PathBuf;

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Tool configuration, loaded from TOML.
///
/// Holds output defaults plus the `[[regions]]` batch list. Each region entry
/// may carry a persisted `label_lng`/`label_lat` pair (a user-dragged anchor);
/// when present it takes precedence over the computed default position.
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default)]
    pub pretty: bool,
    #[serde(default)]
    pub regions: Vec<RegionEntry>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RegionEntry {
    /// Display name; the slug derived from it names the output file.
    pub name: String,
    /// Path to the region's boundary GeoJSON.
    pub boundary: PathBuf,
    #[serde(default)]
    pub label_lng: Option<f64>,
    #[serde(default)]
    pub label_lat: Option<f64>,
}

impl RegionEntry {
    /// Stored label override, present only when both axes were persisted.
    pub fn stored_label(&self) -> Option<[f64; 2]> {
        match (self.label_lng, self.label_lat) {
            (Some(lng), Some(lat)) => Some([lng, lat]),
            _ => None,
        }
    }
}

impl FileConfig {
    /// Search the standard locations for a config file and load the first
    /// one that parses. Returns None when no config exists anywhere.
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("mapmask.toml"));
    paths.push(PathBuf::from(".mapmask.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("mapmask").join("config.toml"));
        paths.push(config_dir.join("mapmask.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".mapmask.toml"));
        paths.push(home.join(".config").join("mapmask").join("config.toml"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            output_dir = "out/masks"
            pretty = true

            [[regions]]
            name = "Tampa Bay"
            boundary = "boundaries/tampa-bay.geojson"
            label_lng = -82.46
            label_lat = 27.95

            [[regions]]
            name = "Space Coast"
            boundary = "boundaries/space-coast.geojson"
        "#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("out/masks"));
        assert!(config.pretty);
        assert_eq!(config.regions.len(), 2);
        assert_eq!(config.regions[0].stored_label(), Some([-82.46, 27.95]));
        assert_eq!(config.regions[1].stored_label(), None);
    }

    #[test]
    fn test_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert!(!config.pretty);
        assert!(config.regions.is_empty());
    }

    #[test]
    fn test_partial_label_override_is_ignored() {
        let toml_str = r#"
            [[regions]]
            name = "Gold Coast"
            boundary = "gold-coast.geojson"
            label_lng = -80.1
        "#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.regions[0].stored_label(), None);
    }
}
