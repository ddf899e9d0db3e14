//! Tests against the real public APIs.
//!
//! These run only when `GEOART_API_KEY` is set; otherwise they skip so the
//! suite stays green offline.

use geoart_http::{ArtQuery, GeoArtClient};

fn load_live_client() -> Result<GeoArtClient, String> {
    GeoArtClient::from_env()
}

#[tokio::test]
async fn live_reverse_geocode_resolves_museum_square() {
    let client = match load_live_client() {
        Ok(client) => client,
        Err(_) => {
            eprintln!("skipping live test: GEOART_API_KEY not set");
            return;
        }
    };

    // Museumplein, Amsterdam.
    let place = client
        .reverse_geocode(52.358, 4.881)
        .await
        .expect("reverse geocoding must succeed");

    assert!(!place.name.is_empty());
    assert!(place.display_name.is_some());
}

#[tokio::test]
async fn live_search_returns_artworks_with_images() {
    let client = match load_live_client() {
        Ok(client) => client,
        Err(_) => {
            eprintln!("skipping live test: GEOART_API_KEY not set");
            return;
        }
    };

    let search = client
        .search_art(ArtQuery::new("Amsterdam").page_size(3))
        .await
        .expect("search must succeed");

    assert!(search.count > 0);
    assert!(!search.artworks.is_empty());
    // imgonly is on by default, so every result carries an image.
    assert!(search.artworks.iter().all(|artwork| artwork.image.is_some()));
}
