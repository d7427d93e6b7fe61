use thiserror::Error;

#[derive(Error, Debug)]
pub enum PoiMapError {
    #[error("Unknown place: {0}")]
    UnknownPlace(String),

    #[error("Invalid place id '{0}': use lowercase letters, digits and '-'")]
    InvalidPlaceId(String),

    #[error("Latitude {0} is outside [-90, 90]")]
    InvalidLatitude(f64),

    #[error("Longitude {0} is outside [-180, 180]")]
    InvalidLongitude(f64),

    #[error("Zoom level {0} is outside 1..=18")]
    InvalidZoom(u8),

    #[error("Reference URL must be an absolute http(s) URL: {0}")]
    InvalidReferenceUrl(String),

    #[error("Tile URL template is missing {{z}}, {{x}} or {{y}}: {0}")]
    InvalidTileTemplate(String),

    #[error("Embedded asset not found: {0}")]
    MissingAsset(&'static str),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PoiMapError>;
