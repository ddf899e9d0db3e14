use std::fmt;

use crate::{
    decode::{decode_art_search, decode_place},
    fetch::{fetch_with_retry, FetchResponse, RequestSpec},
    wire, ArtQuery, ArtSearch, ClientOptions, GeoArtError, LocalArt, Place, Result,
};

/// Public Nominatim reverse geocoding endpoint.
pub const DEFAULT_GEOCODE_URL: &str = "https://nominatim.openstreetmap.org/reverse";
/// Public Rijksmuseum English collection search endpoint.
pub const DEFAULT_COLLECTION_URL: &str = "https://www.rijksmuseum.nl/api/en/collection";

/// Search term used when reverse geocoding fails entirely.
const FALLBACK_QUERY: &str = "painting";

/// Zoom level that resolves coordinates to city granularity.
const GEOCODE_ZOOM: &str = "10";

// Nominatim's usage policy requires an identifying User-Agent.
const USER_AGENT: &str = concat!("geoart-http/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
/// HTTP client for location-aware artwork discovery.
pub struct GeoArtClient {
    http: reqwest::Client,
    geocode_url: String,
    collection_url: String,
    api_key: String,
    options: ClientOptions,
}

impl fmt::Debug for GeoArtClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeoArtClient")
            .field("geocode_url", &self.geocode_url)
            .field("collection_url", &self.collection_url)
            .field("api_key", &"<redacted>")
            .field("options", &self.options)
            .finish()
    }
}

impl GeoArtClient {
    /// Creates a client for the public endpoints with default options.
    ///
    /// `api_key` is the Rijksmuseum API key; Nominatim needs no key.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use geoart_http::GeoArtClient;
    ///
    /// let client = GeoArtClient::new("my-api-key");
    /// ```
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: default_http_client(),
            geocode_url: DEFAULT_GEOCODE_URL.to_owned(),
            collection_url: DEFAULT_COLLECTION_URL.to_owned(),
            api_key: api_key.into(),
            options: ClientOptions::default(),
        }
    }

    /// Creates a client from environment variables.
    ///
    /// Reads:
    /// - `GEOART_API_KEY` — Rijksmuseum API key
    ///
    /// Returns an error if the variable is missing or empty.
    ///
    /// **Not available on `wasm32` targets** — environment variables do not
    /// exist in browser runtimes. Use [`GeoArtClient::new`] and receive the
    /// key from the embedding page instead.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use geoart_http::GeoArtClient;
    ///
    /// let client = GeoArtClient::from_env().expect("missing GEOART_API_KEY");
    /// ```
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> std::result::Result<Self, String> {
        let api_key = std::env::var("GEOART_API_KEY")
            .map_err(|_| "missing GEOART_API_KEY environment variable".to_owned())?;
        if api_key.trim().is_empty() {
            return Err("GEOART_API_KEY is set but empty".to_owned());
        }
        Ok(Self::new(api_key))
    }

    /// Applies client options such as timeout and retry behavior.
    pub fn with_options(mut self, opts: ClientOptions) -> Self {
        self.options = opts;
        self
    }

    /// Overrides both API endpoints, e.g. for a self-hosted Nominatim mirror
    /// or a test server.
    pub fn with_endpoints(
        mut self,
        geocode_url: impl Into<String>,
        collection_url: impl Into<String>,
    ) -> Self {
        self.geocode_url = geocode_url.into();
        self.collection_url = collection_url.into();
        self
    }

    /// Resolves coordinates into a search-ready place name.
    ///
    /// A payload with no usable address (including Nominatim's in-band
    /// "unable to geocode" shape) resolves to the place name `"world"`
    /// rather than erroring.
    pub async fn reverse_geocode(&self, lat: f64, lon: f64) -> Result<Place> {
        let url = reverse_geocode_url(&self.geocode_url, lat, lon)?;
        let response = self.fetch(url).await?;
        let payload: wire::ReverseGeocodeResponse = response.json()?;
        Ok(decode_place(payload))
    }

    /// Searches the collection for artworks matching `query`.
    ///
    /// An empty result set is a success with an empty artwork list, not an
    /// error.
    pub async fn search_art<Q: Into<ArtQuery>>(&self, query: Q) -> Result<ArtSearch> {
        let query = query.into();
        let url = collection_search_url(&self.collection_url, &self.api_key, &query)?;
        let response = self.fetch(url).await?;
        let payload: wire::CollectionResponse = response.json()?;
        Ok(decode_art_search(payload))
    }

    /// Finds artworks related to the place at the given coordinates.
    ///
    /// Reverse geocoding is treated as a hint: when it fails, the search
    /// falls back to the query `"painting"` instead of propagating the
    /// error. Only the search step's errors surface.
    pub async fn art_near(&self, lat: f64, lon: f64) -> Result<LocalArt> {
        let place = match self.reverse_geocode(lat, lon).await {
            Ok(place) => place,
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("reverse geocoding failed, searching '{FALLBACK_QUERY}': {_err}");

                Place {
                    name: FALLBACK_QUERY.to_owned(),
                    display_name: None,
                }
            }
        };

        let search = self.search_art(place.name.as_str()).await?;
        Ok(LocalArt { place, search })
    }

    async fn fetch(&self, url: String) -> Result<FetchResponse> {
        let spec = RequestSpec::new(url, self.options.timeout_ms);
        fetch_with_retry(&self.http, &spec, &self.options.retry).await
    }
}

fn default_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

/// Formats a reverse geocoding URL for the given coordinates.
fn reverse_geocode_url(base: &str, lat: f64, lon: f64) -> Result<String> {
    let url = reqwest::Url::parse_with_params(
        base,
        [
            ("lat", lat.to_string()),
            ("lon", lon.to_string()),
            ("format", "json".to_owned()),
            ("zoom", GEOCODE_ZOOM.to_owned()),
            ("addressdetails", "1".to_owned()),
        ],
    )
    .map_err(|err| GeoArtError::InvalidUrl {
        url: base.to_owned(),
        message: err.to_string(),
    })?;
    Ok(url.into())
}

/// Formats a collection search URL for the given query.
fn collection_search_url(base: &str, api_key: &str, query: &ArtQuery) -> Result<String> {
    let url = reqwest::Url::parse_with_params(
        base,
        [
            ("key", api_key.to_owned()),
            ("q", query.term.clone()),
            ("imgonly", query.image_only.to_string()),
            ("ps", query.page_size.to_string()),
            ("format", "json".to_owned()),
        ],
    )
    .map_err(|err| GeoArtError::InvalidUrl {
        url: base.to_owned(),
        message: err.to_string(),
    })?;
    Ok(url.into())
}
