use std::fmt;
use std::io;

use binrecode_codecs::DecodeError;
use thiserror::Error;

/// Which end of the pipeline a format name was given for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Source,
    Target,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Source => f.write_str("source"),
            Side::Target => f.write_str("target"),
        }
    }
}

#[derive(Debug, Error)]
pub enum RecodeError {
    #[error("unknown {side} format: {name}")]
    FormatNotFound { side: Side, name: String },
    #[error(transparent)]
    Decode(DecodeError),
    #[error(transparent)]
    Io(io::Error),
}

/// Decoders report malformed input as `InvalidData` I/O errors carrying a
/// [`DecodeError`]; those become [`RecodeError::Decode`].
impl From<io::Error> for RecodeError {
    fn from(err: io::Error) -> Self {
        if DecodeError::from_io(&err).is_none() {
            return RecodeError::Io(err);
        }
        let kind = err.kind();
        match err.into_inner().map(|inner| inner.downcast::<DecodeError>()) {
            Some(Ok(decode)) => RecodeError::Decode(*decode),
            Some(Err(inner)) => RecodeError::Io(io::Error::new(kind, inner)),
            None => RecodeError::Io(io::Error::from(kind)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_not_found_message() {
        let err = RecodeError::FormatNotFound {
            side: Side::Target,
            name: "bson".to_string(),
        };
        assert_eq!(err.to_string(), "unknown target format: bson");
    }

    #[test]
    fn io_error_carrying_decode_error_becomes_decode() {
        let io_err: io::Error = DecodeError::OddLength.into();
        let err = RecodeError::from(io_err);
        assert!(matches!(err, RecodeError::Decode(DecodeError::OddLength)));
    }

    #[test]
    fn plain_io_error_stays_io() {
        let err = RecodeError::from(io::Error::new(io::ErrorKind::InvalidData, "not ours"));
        match err {
            RecodeError::Io(e) => {
                assert_eq!(e.kind(), io::ErrorKind::InvalidData);
                assert_eq!(e.to_string(), "not ours");
            }
            other => panic!("expected Io, got {other:?}"),
        }
        let err = RecodeError::from(io::Error::from(io::ErrorKind::BrokenPipe));
        assert!(matches!(err, RecodeError::Io(e) if e.kind() == io::ErrorKind::BrokenPipe));
    }
}
