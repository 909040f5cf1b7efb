use thiserror::Error;

/// Why an asset could not be turned into a texture. Callers log it and fall
/// back to a solid colour; nothing is surfaced to the user.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("fetch {url} failed: {reason}")]
    Fetch { url: String, reason: String },
    #[error("fetch {url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("decode {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: image::ImageError,
    },
}
