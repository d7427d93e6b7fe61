use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{PoiMapError, Result};
use crate::poi::{Coordinate, PointOfInterest};

pub const DEFAULT_ZOOM: u8 = 13;

// Ordered table from location id to its point of interest
#[derive(Debug, Clone, Default)]
pub struct PoiCatalog {
    places: Vec<(String, PointOfInterest)>,
}

// One `[[place]]` table in a places file
#[derive(Debug, Deserialize)]
struct PlaceEntry {
    id: String,
    lat: f64,
    lng: f64,
    #[serde(default = "default_zoom")]
    zoom: u8,
    title: String,
    description: String,
    reference_url: String,
}

#[derive(Debug, Deserialize)]
struct PlacesFile {
    #[serde(default, rename = "place")]
    places: Vec<PlaceEntry>,
}

fn default_zoom() -> u8 {
    DEFAULT_ZOOM
}

impl PoiCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The places shipped with the binary.
    pub fn builtin() -> Result<Self> {
        let mut catalog = Self::new();

        catalog.insert(
            "kurukshetra",
            PointOfInterest::new(
                Coordinate::new(29.9695, 76.8783)?,
                DEFAULT_ZOOM,
                "Kurukshetra - The Battlefield of Mahabharata",
                "Kurukshetra is the legendary battlefield where the epic war of \
                 Mahabharata took place between the Pandavas and Kauravas. It is \
                 considered a sacred land in Hinduism and a place of deep \
                 historical importance.",
                "https://en.wikipedia.org/wiki/Mahabharata",
            )?,
        )?;

        catalog.insert(
            "krishna-janmabhoomi",
            PointOfInterest::new(
                Coordinate::new(27.4924, 77.6737)?,
                DEFAULT_ZOOM,
                "Shree Krishna Janmabhoom",
                "Shree Krishna Janmabhoomi in Mathura is revered as the birthplace \
                 of Lord Krishna. The temple complex stands at the site where, \
                 according to tradition, Krishna was born to Devaki and Vasudeva, \
                 and it draws pilgrims from across India throughout the year.",
                "https://en.wikipedia.org/wiki/Krishna",
            )?,
        )?;

        Ok(catalog)
    }

    /// Adds a place, replacing any existing entry with the same id in place.
    pub fn insert(&mut self, id: &str, poi: PointOfInterest) -> Result<()> {
        if !is_valid_id(id) {
            return Err(PoiMapError::InvalidPlaceId(id.to_string()));
        }

        if let Some(existing) = self.places.iter_mut().find(|(key, _)| key == id) {
            debug!(id, "Replacing place");
            existing.1 = poi;
        } else {
            self.places.push((id.to_string(), poi));
        }
        Ok(())
    }

    /// Merges the `[[place]]` tables of a TOML file into the catalog.
    /// Returns how many entries the file contained.
    ///
    /// Every entry is checked before any is inserted; on error the catalog
    /// is left unchanged.
    pub fn load_extra(&mut self, path: &Path) -> Result<usize> {
        let content = std::fs::read_to_string(path)?;
        let file: PlacesFile = toml::from_str(&content)?;

        let parsed = file
            .places
            .into_iter()
            .map(|entry| {
                if !is_valid_id(&entry.id) {
                    return Err(PoiMapError::InvalidPlaceId(entry.id));
                }
                let poi = PointOfInterest::new(
                    Coordinate::new(entry.lat, entry.lng)?,
                    entry.zoom,
                    entry.title,
                    entry.description,
                    entry.reference_url,
                )?;
                Ok((entry.id, poi))
            })
            .collect::<Result<Vec<_>>>()?;

        let count = parsed.len();
        for (id, poi) in parsed {
            self.insert(&id, poi)?;
        }

        info!("Loaded {} place(s) from {}", count, path.display());
        Ok(count)
    }

    pub fn get(&self, id: &str) -> Option<&PointOfInterest> {
        self.places
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, poi)| poi)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.places.iter().map(|(id, _)| id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PointOfInterest)> {
        self.places.iter().map(|(id, poi)| (id.as_str(), poi))
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

// Ids appear in URLs, so keep them to lowercase slugs
fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && !id.starts_with('-')
        && !id.ends_with('-')
        && id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
