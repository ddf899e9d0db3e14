use geoart_http::{ArtQuery, GeoArtClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let api_key = std::env::var("GEOART_API_KEY")?;
    let client = GeoArtClient::new(api_key);

    let query = std::env::args().nth(1).unwrap_or_else(|| "Amsterdam".to_owned());
    let search = client
        .search_art(ArtQuery::new(query).page_size(10))
        .await?;

    println!("{} total matches, showing {}:", search.count, search.artworks.len());
    for artwork in search.artworks {
        println!(
            "  {} [{}]",
            artwork.title.as_deref().unwrap_or("(untitled)"),
            artwork.object_number
        );
    }

    Ok(())
}
