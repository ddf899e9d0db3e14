use geoart_http::GeoArtClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let api_key = std::env::var("GEOART_API_KEY")?;
    let client = GeoArtClient::new(api_key);

    // Museumplein, Amsterdam.
    let local = client.art_near(52.358, 4.881).await?;

    println!("artworks related to {}:", local.place.name);
    for artwork in local.search.artworks {
        let title = artwork.title.as_deref().unwrap_or("(untitled)");
        let artist = artwork.artist.as_deref().unwrap_or("unknown artist");
        println!("  {title} by {artist} [{}]", artwork.object_number);
        if let Some(image) = artwork.image {
            println!("    {}", image.url);
        }
    }

    Ok(())
}
