use serde::Deserialize;

/// Nominatim `/reverse` payload.
///
/// Nominatim reports "nothing at these coordinates" in-band as
/// `{"error": "..."}` with HTTP 200; that shape decodes here with every
/// field absent.
#[derive(Debug, Deserialize)]
pub struct ReverseGeocodeResponse {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
}

#[derive(Debug, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state_district: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// Rijksmuseum collection search payload.
#[derive(Debug, Deserialize)]
pub struct CollectionResponse {
    #[serde(default)]
    pub count: u64,
    #[serde(rename = "artObjects", default)]
    pub art_objects: Vec<ArtObject>,
}

#[derive(Debug, Deserialize)]
pub struct ArtObject {
    #[serde(rename = "objectNumber")]
    pub object_number: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "longTitle", default)]
    pub long_title: Option<String>,
    #[serde(rename = "principalOrFirstMaker", default)]
    pub principal_or_first_maker: Option<String>,
    #[serde(rename = "webImage", default)]
    pub web_image: Option<WebImage>,
}

#[derive(Debug, Deserialize)]
pub struct WebImage {
    // The API serves `"webImage": {..., "url": null}` for withdrawn images.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub width: Option<u64>,
    #[serde(default)]
    pub height: Option<u64>,
}
