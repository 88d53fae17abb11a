use thiserror::Error;

/// Malformed input met by one of the decoders.
///
/// Decoders are plain [`std::io::Read`] adapters, so this value travels inside
/// an [`std::io::Error`] of kind [`std::io::ErrorKind::InvalidData`]. Use
/// [`DecodeError::from_io`] to get it back out.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid hex byte {byte:#04x} at offset {offset}")]
    InvalidHexByte { byte: u8, offset: u64 },
    #[error("odd length hex string")]
    OddLength,
    #[error("invalid base64 input: {0}")]
    Base64(#[from] base64::DecodeError),
}

impl DecodeError {
    /// Borrows the decode error carried by `err`, if any.
    pub fn from_io(err: &std::io::Error) -> Option<&DecodeError> {
        err.get_ref().and_then(|inner| inner.downcast_ref::<DecodeError>())
    }
}

impl From<DecodeError> for std::io::Error {
    fn from(err: DecodeError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, err)
    }
}

/// A format name with no registry entry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown format: {0}")]
pub struct UnknownFormat(pub String);
