use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::catalog::PoiCatalog;
use crate::error::{PoiMapError, Result};
use crate::tiles::{TileProvider, OSM_ATTRIBUTION, OSM_SUBDOMAINS, OSM_TILE_URL};

pub const CONFIG_FILE_NAME: &str = "poi_map.toml";
pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_PLACE: &str = "kurukshetra";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub default_place: String,
    pub open_browser: bool,
    pub tile_url: String,
    pub tile_attribution: String,
    /// Values substituted for `{s}` in `tile_url`
    pub tile_subdomains: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub places_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            default_place: DEFAULT_PLACE.to_string(),
            open_browser: false,
            tile_url: OSM_TILE_URL.to_string(),
            tile_attribution: OSM_ATTRIBUTION.to_string(),
            tile_subdomains: OSM_SUBDOMAINS.iter().map(|s| s.to_string()).collect(),
            places_file: None,
        }
    }
}

impl Settings {
    /// Missing file means defaults; a file that does not parse is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Settings::default());
        }

        let content = std::fs::read_to_string(path)?;
        let mut settings: Settings = toml::from_str(&content).map_err(|e| PoiMapError::Config {
            message: format!("{}: {}", path.display(), e),
        })?;

        // A relative places file is resolved against the config file's folder
        if let (Some(places), Some(dir)) = (settings.places_file.as_mut(), path.parent()) {
            if places.is_relative() {
                *places = dir.join(&*places);
            }
        }

        debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| PoiMapError::Config {
            message: e.to_string(),
        })?;
        std::fs::write(path, format!("# PoiMap configuration\n{}", content))?;
        Ok(())
    }

    /// Checks the settings against the places that will be served.
    pub fn validate(&self, catalog: &PoiCatalog) -> Result<()> {
        if !catalog.contains(&self.default_place) {
            return Err(PoiMapError::UnknownPlace(self.default_place.clone()));
        }
        self.tile_provider()?;
        Ok(())
    }

    pub fn tile_provider(&self) -> Result<TileProvider> {
        Ok(TileProvider::new(&self.tile_url, &self.tile_attribution)?
            .with_subdomains(self.tile_subdomains.iter().cloned()))
    }

    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn config_path() -> PathBuf {
        let mut path = std::env::current_exe()
            .unwrap_or_default()
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();

        if path.ends_with("target/debug") || path.ends_with("target/release") {
            path.pop();
            path.pop();
        }
        path.push(CONFIG_FILE_NAME);
        path
    }
}
