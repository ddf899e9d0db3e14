/// Collection search request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtQuery {
    /// Free-text search term, usually a place name.
    pub term: String,
    /// Number of results per page.
    pub page_size: u32,
    /// Restrict results to artworks that have an image.
    pub image_only: bool,
}

impl ArtQuery {
    /// Creates a query with the default page size (6) and image filter (on).
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            page_size: 6,
            image_only: true,
        }
    }

    /// Sets the number of results per page.
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets whether results without an image are filtered out.
    pub fn image_only(mut self, image_only: bool) -> Self {
        self.image_only = image_only;
        self
    }
}

impl From<&str> for ArtQuery {
    fn from(term: &str) -> Self {
        Self::new(term)
    }
}

impl From<String> for ArtQuery {
    fn from(term: String) -> Self {
        Self::new(term)
    }
}
