use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use poi_map::catalog::PoiCatalog;
use poi_map::server::{create_app, AppState};
use poi_map::tiles::TileProvider;
use tower::ServiceExt;

fn app() -> Router {
    let catalog = PoiCatalog::builtin().unwrap();
    create_app(AppState::new(catalog, TileProvider::default(), "kurukshetra"))
}

async fn get(uri: &str) -> (StatusCode, Option<String>, String) {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

fn embedded_view(html: &str) -> serde_json::Value {
    let start = html.find("window.POI_VIEW = ").unwrap() + "window.POI_VIEW = ".len();
    let end = start + html[start..].find("</script>").unwrap();
    let json = html[start..end].trim_end().trim_end_matches(';');
    serde_json::from_str(json).unwrap()
}

#[tokio::test]
async fn root_shows_default_place() {
    let (status, content_type, body) = get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));
    assert_eq!(embedded_view(&body)["id"], "kurukshetra");
}

#[tokio::test]
async fn kurukshetra_map_view() {
    let (status, _, body) = get("/map/kurukshetra").await;
    assert_eq!(status, StatusCode::OK);

    let view = embedded_view(&body);
    assert_eq!(view["poi"]["coordinate"]["lat"], 29.9695);
    assert_eq!(view["poi"]["coordinate"]["lng"], 76.8783);
    assert_eq!(view["poi"]["zoom_level"], 13);
    assert_eq!(view["poi"]["title"], "Kurukshetra - The Battlefield of Mahabharata");
    assert_eq!(view["poi"]["reference_url"], "https://en.wikipedia.org/wiki/Mahabharata");
}

#[tokio::test]
async fn krishna_janmabhoomi_map_view() {
    let (status, _, body) = get("/map/krishna-janmabhoomi").await;
    assert_eq!(status, StatusCode::OK);

    let view = embedded_view(&body);
    assert_eq!(view["poi"]["coordinate"]["lat"], 27.4924);
    assert_eq!(view["poi"]["coordinate"]["lng"], 77.6737);
    assert_eq!(view["poi"]["zoom_level"], 13);
    assert_eq!(view["poi"]["title"], "Shree Krishna Janmabhoom");
    assert_eq!(view["poi"]["reference_url"], "https://en.wikipedia.org/wiki/Krishna");
}

#[tokio::test]
async fn repeated_requests_render_identically() {
    let (_, _, first) = get("/map/krishna-janmabhoomi").await;
    let (_, _, second) = get("/map/krishna-janmabhoomi").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn unknown_place_is_not_found() {
    assert_eq!(get("/map/atlantis").await.0, StatusCode::NOT_FOUND);
    assert_eq!(get("/api/places/atlantis").await.0, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_default_place_is_not_found() {
    let catalog = PoiCatalog::builtin().unwrap();
    let app = create_app(AppState::new(catalog, TileProvider::default(), "atlantis"));
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn api_lists_places_in_order() {
    let (status, content_type, body) = get("/api/places").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));

    let places: serde_json::Value = serde_json::from_str(&body).unwrap();
    let places = places.as_array().unwrap();
    assert_eq!(places.len(), 2);
    assert_eq!(places[0]["id"], "kurukshetra");
    assert_eq!(places[1]["id"], "krishna-janmabhoomi");
    assert_eq!(places[1]["coordinate"]["lat"], 27.4924);
}

#[tokio::test]
async fn api_returns_single_place() {
    let (status, _, body) = get("/api/places/kurukshetra").await;
    assert_eq!(status, StatusCode::OK);

    let place: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(place["id"], "kurukshetra");
    assert_eq!(place["reference_url"], "https://en.wikipedia.org/wiki/Mahabharata");
}

#[tokio::test]
async fn place_list_page_links_maps() {
    let (status, _, body) = get("/places").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("href=\"/map/kurukshetra\""));
    assert!(body.contains("href=\"/map/krishna-janmabhoomi\""));
}

#[tokio::test]
async fn static_assets_have_content_types() {
    let (status, content_type, body) = get("/map.js").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("application/javascript"));
    assert_eq!(body.matches("L.marker(").count(), 1);

    let (status, content_type, body) = get("/style.css").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/css"));
    assert!(body.contains(".map-panel"));
}
