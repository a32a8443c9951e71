use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::warn;

const DEFAULT_WORLD_PATH: &str = "config/world.toml";

/// World build settings loaded from `config/world.toml`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Grayscale heightmap image driving terrain elevation.
    pub heightmap_path: PathBuf,
    /// Grid width in chunks.
    pub grid_width: usize,
    /// Grid depth in chunks.
    pub grid_depth: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            heightmap_path: PathBuf::from("assets/heightmap.png"),
            grid_width: 3,
            grid_depth: 3,
        }
    }
}

impl WorldConfig {
    /// Load world configuration from the default path.
    pub fn load() -> Self {
        Self::load_from_path(Path::new(DEFAULT_WORLD_PATH))
    }

    /// Load configuration from an explicit path, falling back to defaults on errors.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<WorldConfig>(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    WorldConfig::default()
                }
            },
            Err(err) => {
                if path != Path::new(DEFAULT_WORLD_PATH)
                    || err.kind() != std::io::ErrorKind::NotFound
                {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                } else {
                    warn!(
                        "World config not found at {}. Using defaults",
                        path.display()
                    );
                }
                WorldConfig::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let cfg = WorldConfig::load_from_path(Path::new("config/does_not_exist.toml"));
        assert_eq!(cfg.grid_width, 3);
        assert_eq!(cfg.grid_depth, 3);
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let cfg: WorldConfig = toml::from_str("grid_width = 5").unwrap();
        assert_eq!(cfg.grid_width, 5);
        assert_eq!(cfg.grid_depth, 3);
        assert_eq!(cfg.heightmap_path, PathBuf::from("assets/heightmap.png"));
    }

    #[test]
    fn malformed_config_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("pennyvox_world_bad.toml");
        fs::write(&path, "grid_width = \"many\"").unwrap();
        let cfg = WorldConfig::load_from_path(&path);
        assert_eq!(cfg.grid_width, 3);
        let _ = fs::remove_file(&path);
    }
}
