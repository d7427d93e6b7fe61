use axum::{
    extract::{Path as AxumPath, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Json, Response},
};
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::html_template::{load_asset, render_index, render_map_view};
use crate::poi::PointOfInterest;

use super::state::AppState;

// Structure for API responses
#[derive(Serialize, Debug)]
pub struct PlaceResponse {
    pub id: String,
    #[serde(flatten)]
    pub poi: PointOfInterest,
}

fn render_place(state: &AppState, id: &str) -> Result<Html<String>, StatusCode> {
    let poi = state.catalog.get(id).ok_or_else(|| {
        debug!("Unknown place requested: {}", id);
        StatusCode::NOT_FOUND
    })?;

    let html = render_map_view(id, poi, &state.tiles).map_err(|e| {
        error!("Failed to render map for {}: {}", id, e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(Html(html))
}

pub async fn default_map_html(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    render_place(&state, &state.default_place)
}

pub async fn map_html(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<Html<String>, StatusCode> {
    render_place(&state, &id)
}

pub async fn places_html(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let html = render_index(&state.catalog).map_err(|e| {
        error!("Failed to render place list: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(Html(html))
}

pub async fn list_places(State(state): State<AppState>) -> Json<Vec<PlaceResponse>> {
    let places = state
        .catalog
        .iter()
        .map(|(id, poi)| PlaceResponse {
            id: id.to_string(),
            poi: poi.clone(),
        })
        .collect();

    Json(places)
}

pub async fn get_place(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<PlaceResponse>, StatusCode> {
    let poi = state.catalog.get(&id).ok_or(StatusCode::NOT_FOUND)?.clone();
    Ok(Json(PlaceResponse { id, poi }))
}

fn serve_asset(name: &'static str, content_type: &'static str) -> Response {
    match load_asset(name) {
        Ok(content) => (
            [
                (header::CONTENT_TYPE, content_type),
                (header::CACHE_CONTROL, "public, max-age=3600"),
            ],
            content,
        )
            .into_response(),
        Err(e) => {
            warn!("{}", e);
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

pub async fn style_css() -> Response {
    serve_asset("style.css", "text/css; charset=utf-8")
}

pub async fn map_js() -> Response {
    serve_asset("map.js", "application/javascript; charset=utf-8")
}
