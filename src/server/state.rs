use std::sync::Arc;

use crate::catalog::PoiCatalog;
use crate::tiles::TileProvider;

// Application state shared by every handler; read-only after start-up
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<PoiCatalog>,
    pub tiles: Arc<TileProvider>,
    pub default_place: String,
}

impl AppState {
    pub fn new(catalog: PoiCatalog, tiles: TileProvider, default_place: impl Into<String>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            tiles: Arc::new(tiles),
            default_place: default_place.into(),
        }
    }
}
