use serde::Serialize;

use crate::error::{PoiMapError, Result};

pub const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str =
    r#"&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors"#;
pub const OSM_SUBDOMAINS: &[&str] = &["a", "b", "c"];

/// Raster tile source passed to the map widget as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileProvider {
    url_template: String,
    attribution: String,
    subdomains: Vec<String>,
}

impl TileProvider {
    pub fn new(url_template: impl Into<String>, attribution: impl Into<String>) -> Result<Self> {
        let url_template = url_template.into();
        let has_placeholders = ["{z}", "{x}", "{y}"]
            .iter()
            .all(|p| url_template.contains(p));
        if !has_placeholders {
            return Err(PoiMapError::InvalidTileTemplate(url_template));
        }

        Ok(Self {
            url_template,
            attribution: attribution.into(),
            subdomains: OSM_SUBDOMAINS.iter().map(|s| s.to_string()).collect(),
        })
    }

    /// Replaces the values `{s}` rotates through. An empty list keeps the
    /// current ones.
    pub fn with_subdomains<I, S>(mut self, subdomains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let subdomains: Vec<String> = subdomains.into_iter().map(Into::into).collect();
        if !subdomains.is_empty() {
            self.subdomains = subdomains;
        }
        self
    }

    pub fn subdomains(&self) -> &[String] {
        &self.subdomains
    }

    pub fn openstreetmap() -> Self {
        Self {
            url_template: OSM_TILE_URL.to_string(),
            attribution: OSM_ATTRIBUTION.to_string(),
            subdomains: OSM_SUBDOMAINS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn url_template(&self) -> &str {
        &self.url_template
    }

    pub fn attribution(&self) -> &str {
        &self.attribution
    }

    /// Expands the template for one tile. `{s}` takes the first subdomain.
    pub fn tile_url(&self, z: u8, x: u32, y: u32) -> String {
        let subdomain = self.subdomains.first().map(String::as_str).unwrap_or("");
        self.url_template
            .replace("{s}", subdomain)
            .replace("{z}", &z.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
    }
}

impl Default for TileProvider {
    fn default() -> Self {
        Self::openstreetmap()
    }
}
