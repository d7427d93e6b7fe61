use rust_embed::RustEmbed;
use serde::Serialize;

use crate::catalog::PoiCatalog;
use crate::error::{PoiMapError, Result};
use crate::poi::PointOfInterest;
use crate::tiles::TileProvider;

#[derive(RustEmbed)]
#[folder = "frontend/"]
pub struct Asset;

const MAP_TEMPLATE: &str = "map.html";
const INDEX_TEMPLATE: &str = "index.html";

// Data handed to map.js through `window.POI_VIEW`
#[derive(Serialize)]
struct MapViewData<'a> {
    id: &'a str,
    poi: &'a PointOfInterest,
    tiles: &'a TileProvider,
}

pub fn load_asset(name: &'static str) -> Result<String> {
    let file = Asset::get(name).ok_or(PoiMapError::MissingAsset(name))?;
    Ok(String::from_utf8_lossy(&file.data).into_owned())
}

/// Renders the full-page map view for one place.
///
/// The output depends only on the arguments, so rendering the same place
/// twice gives byte-identical pages.
pub fn render_map_view(id: &str, poi: &PointOfInterest, tiles: &TileProvider) -> Result<String> {
    let template = load_asset(MAP_TEMPLATE)?;
    let view = MapViewData { id, poi, tiles };
    let json = script_safe_json(&serde_json::to_string(&view)?);

    let html = template
        .replace("<!-- TITLE_PLACEHOLDER -->", &escape_html(poi.title()))
        .replace("<!-- DESCRIPTION_PLACEHOLDER -->", &escape_html(poi.description()))
        .replace("<!-- PLACE_ID_PLACEHOLDER -->", &escape_html(id))
        .replace("<!-- POI_JSON_PLACEHOLDER -->", &json);
    Ok(html)
}

/// Renders the list page linking every place in catalog order.
pub fn render_index(catalog: &PoiCatalog) -> Result<String> {
    let template = load_asset(INDEX_TEMPLATE)?;
    Ok(fill_index(&template, catalog))
}

// The template's own line ending follows the placeholder, so items are
// joined without a trailing newline and either LF or CRLF files work.
fn fill_index(template: &str, catalog: &PoiCatalog) -> String {
    let items = catalog
        .iter()
        .map(|(id, poi)| {
            format!(
                "                <li><a href=\"/map/{}\">{}</a></li>",
                escape_html(id),
                escape_html(poi.title())
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    template.replace("<!-- PLACES_PLACEHOLDER -->", &items)
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

// JSON inside <script> must not be able to close the element. These
// characters only occur inside string literals, where \u escapes are
// equivalent.
fn script_safe_json(json: &str) -> String {
    json.replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}
