use anyhow::{Context, Result};
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub mod handlers;
pub mod state;

pub use self::state::AppState;
use handlers::{
    default_map_html, get_place, list_places, map_html, map_js, places_html, style_css,
};

// Create the main application router
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(default_map_html))
        .route("/places", get(places_html))
        .route("/map/:id", get(map_html))
        .route("/api/places", get(list_places))
        .route("/api/places/:id", get(get_place))
        .route("/style.css", get(style_css))
        .route("/map.js", get(map_js))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Binds `host:port` and serves until Ctrl-C.
pub async fn start_server(state: AppState, host: &str, port: u16) -> Result<()> {
    let base_url = format!("http://{}:{}", host, port);
    let places: Vec<String> = state.catalog.ids().map(str::to_string).collect();

    let app = create_app(state);
    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", host, port))?;

    info!("Server running at {}", base_url);
    info!("Place list at {}/places", base_url);
    for id in &places {
        info!("  - {}/map/{}", base_url, id);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        // Without a signal handler, keep serving
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
