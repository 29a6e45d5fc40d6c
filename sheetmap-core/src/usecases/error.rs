use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Malformed row #{index}: {reason}")]
    MalformedRow { index: usize, reason: String },
    #[error("Unable to resolve address: {address}")]
    GeocodingExhausted { address: String },
}
