#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Place {
    /// Search-ready place name resolved from the address fallback chain.
    pub name: String,
    /// Full human-readable address line, when the geocoder provided one.
    pub display_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtImage {
    pub url: String,
    pub width: Option<u64>,
    pub height: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artwork {
    pub object_number: String,
    pub title: Option<String>,
    pub long_title: Option<String>,
    pub artist: Option<String>,
    pub image: Option<ArtImage>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtSearch {
    /// Total matches reported by the API, not the page length.
    pub count: u64,
    pub artworks: Vec<Artwork>,
}

/// Result of the chained coordinates → place → artworks lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalArt {
    pub place: Place,
    pub search: ArtSearch,
}
