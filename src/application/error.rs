// Fetch failures surfaced by the dashboard API
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not complete at the network level.
    #[error("transport error requesting {url}: {reason}")]
    Transport { url: String, reason: String },

    /// The server answered with a non-success status.
    #[error("{url} responded with HTTP {status}")]
    Response { url: String, status: u16 },

    /// The body was not JSON at all.
    #[error("malformed payload from {url}: {reason}")]
    Payload { url: String, reason: String },
}
