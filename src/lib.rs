pub mod catalog;
pub mod error;
pub mod html_template;
pub mod poi;
pub mod server;
pub mod settings;
pub mod tiles;
pub mod utils;

pub use catalog::PoiCatalog;
pub use error::{PoiMapError, Result};
pub use poi::{Coordinate, PointOfInterest};
pub use tiles::TileProvider;
