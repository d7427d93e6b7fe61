use serde::{Deserialize, Serialize};

use crate::error::{PoiMapError, Result};

pub const MIN_ZOOM: u8 = 1;
pub const MAX_ZOOM: u8 = 18;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(PoiMapError::InvalidLatitude(lat));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(PoiMapError::InvalidLongitude(lng));
        }
        Ok(Self { lat, lng })
    }
}

/// A named location together with everything its map view displays.
///
/// Fields are private so a value cannot be repositioned once it has been
/// handed to a view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointOfInterest {
    coordinate: Coordinate,
    zoom_level: u8,
    title: String,
    description: String,
    reference_url: String,
}

impl PointOfInterest {
    pub fn new(
        coordinate: Coordinate,
        zoom_level: u8,
        title: impl Into<String>,
        description: impl Into<String>,
        reference_url: impl Into<String>,
    ) -> Result<Self> {
        if !(MIN_ZOOM..=MAX_ZOOM).contains(&zoom_level) {
            return Err(PoiMapError::InvalidZoom(zoom_level));
        }

        let reference_url = reference_url.into();
        if !is_absolute_http_url(&reference_url) {
            return Err(PoiMapError::InvalidReferenceUrl(reference_url));
        }

        Ok(Self {
            coordinate,
            zoom_level,
            title: title.into(),
            description: description.into(),
            reference_url,
        })
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn zoom_level(&self) -> u8 {
        self.zoom_level
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn reference_url(&self) -> &str {
        &self.reference_url
    }
}

fn is_absolute_http_url(url: &str) -> bool {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));

    match rest {
        Some(rest) => {
            let host = rest.split(['/', '?', '#']).next().unwrap_or("");
            !host.is_empty() && !url.chars().any(char::is_whitespace)
        }
        None => false,
    }
}
