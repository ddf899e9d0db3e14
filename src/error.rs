/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum GeoArtError {
    /// Network or request execution error from `reqwest`.
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
    /// Non-success HTTP status code with raw response body.
    #[error("http error {status}: {body}")]
    Http { status: u16, body: String },
    /// Terminal failure after the retry budget was consumed.
    #[error("retries exhausted after {attempts} attempts: {cause}")]
    Exhausted {
        /// Number of physical requests issued.
        attempts: u32,
        /// Failure reported by the final attempt.
        cause: Box<GeoArtError>,
    },
    /// Response decoding or payload-shape validation error.
    #[error("decode error: {0}")]
    Decode(String),
    /// Endpoint and query parameters did not form a valid URL.
    #[error("invalid url '{url}': {message}")]
    InvalidUrl { url: String, message: String },
}
