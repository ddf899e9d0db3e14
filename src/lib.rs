//! `geoart-http` is an async HTTP client for location-aware artwork
//! discovery. Coordinates go in, artworks come out:
//!
//! - [`GeoArtClient::reverse_geocode`] — coordinates → place name (Nominatim)
//! - [`GeoArtClient::search_art`] — free-text query → artworks (Rijksmuseum)
//! - [`GeoArtClient::art_near`] — both steps chained
//!
//! Every outbound request runs through [`fetch_with_retry`], a bounded
//! retry loop with exponential backoff.

mod client;
mod decode;
mod error;
mod fetch;
mod options;
mod policy;
mod query;
mod types;
mod wire;

pub use client::{GeoArtClient, DEFAULT_COLLECTION_URL, DEFAULT_GEOCODE_URL};
pub use error::GeoArtError;
pub use fetch::{fetch_with_retry, FetchResponse, RequestSpec};
pub use options::ClientOptions;
pub use policy::RetryPolicy;
pub use query::ArtQuery;
pub use types::{ArtImage, ArtSearch, Artwork, LocalArt, Place};

pub type Result<T> = std::result::Result<T, GeoArtError>;
