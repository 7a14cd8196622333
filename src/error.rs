use crate::decoder::DecodeError;

/// Errors surfaced by the call building and transport boundaries.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The address argument was not exactly 20 bytes long.
    #[error("invalid address: expected 20 bytes, got {0}")]
    InvalidAddress(usize),
    /// The call result could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// The http transport failed before a json-rpc envelope was received.
    #[error("transport error: {0}")]
    Rpc(#[from] reqwest::Error),
}
