use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

mod cli;

use cli::Cli;
use poi_map::catalog::PoiCatalog;
use poi_map::server::{start_server, AppState};
use poi_map::settings::Settings;
use poi_map::utils::{init_logger, open_in_browser};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config_path = cli.config_path();
    let mut settings = Settings::load_from(&config_path)
        .with_context(|| format!("Failed to load settings from {}", config_path.display()))?;
    cli.apply(&mut settings);

    if cli.write_config {
        settings.save_to(&config_path)?;
        info!("Settings written to {}", config_path.display());
        return Ok(());
    }

    let mut catalog = PoiCatalog::builtin().context("Built-in places are invalid")?;
    if let Some(ref places_file) = settings.places_file {
        catalog
            .load_extra(places_file)
            .with_context(|| format!("Failed to load places from {}", places_file.display()))?;
    }

    if cli.list {
        for (id, poi) in catalog.iter() {
            let c = poi.coordinate();
            println!("{:<24} {:>9.4} {:>9.4}  z{:<2} {}", id, c.lat, c.lng, poi.zoom_level(), poi.title());
        }
        return Ok(());
    }

    settings.validate(&catalog)?;

    let tiles = settings.tile_provider()?;
    if let Some(poi) = catalog.get(&settings.default_place) {
        let c = poi.coordinate();
        info!("Default place: {} ({}, {})", settings.default_place, c.lat, c.lng);
    }
    info!("Tiles from {} (e.g. {})", tiles.url_template(), tiles.tile_url(0, 0, 0));
    info!("{} place(s) available", catalog.len());

    if settings.open_browser {
        let url = settings.base_url();
        // Give the listener a moment to come up
        tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(300)).await;
            open_in_browser(&url);
        });
    }
    if settings.host != "127.0.0.1" && settings.host != "localhost" {
        warn!("Listening on {}, reachable beyond this machine", settings.host);
    }

    let state = AppState::new(catalog, tiles, settings.default_place.clone());
    start_server(state, &settings.host, settings.port).await
}
