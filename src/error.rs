//! Error types.

use thiserror::Error;

/// Error parsing an invalid 8-4-4-4-12 string representation of UUID.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The input is not exactly 36 bytes long.
    #[error("incorrect UUID length: expected 36 characters, got {0}")]
    InvalidLength(usize),

    /// One of the positions 8, 13, 18 and 23 does not hold a hyphen.
    #[error("incorrect UUID format: expected '-' at position {0}")]
    MissingHyphen(usize),

    /// A hexadecimal group contains a non-hex character.
    #[error("incorrect UUID format: invalid hex digit {byte:#04x} at position {index}")]
    InvalidHexDigit {
        /// Offset of the offending byte in the input.
        index: usize,
        /// The offending byte.
        byte: u8,
    },
}

/// Error returned by the fallible operations of this crate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Malformed canonical text.
    #[error(transparent)]
    Format(#[from] ParseError),

    /// Binary input that is not exactly 16 bytes long.
    #[error("UUID must be exactly 16 bytes long, got {0} bytes")]
    InvalidLength(usize),

    /// Storage boundary input of a kind that cannot hold a UUID.
    #[error("cannot convert {0} to UUID")]
    UnsupportedType(&'static str),

    /// The random source could not supply all the bytes requested.
    #[error("random source failed to supply 16 bytes: {0}")]
    SourceExhausted(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    pub(crate) fn source_exhausted(
        err: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::SourceExhausted(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, ParseError};

    /// Names the failing stage in messages
    #[test]
    fn names_the_failing_stage_in_messages() {
        assert_eq!(
            ParseError::InvalidLength(35).to_string(),
            "incorrect UUID length: expected 36 characters, got 35"
        );
        assert_eq!(
            ParseError::MissingHyphen(8).to_string(),
            "incorrect UUID format: expected '-' at position 8"
        );
        assert_eq!(
            ParseError::InvalidHexDigit {
                index: 0,
                byte: b'z'
            }
            .to_string(),
            "incorrect UUID format: invalid hex digit 0x7a at position 0"
        );
        assert_eq!(
            Error::from(ParseError::MissingHyphen(13)).to_string(),
            "incorrect UUID format: expected '-' at position 13"
        );
        assert_eq!(
            Error::InvalidLength(15).to_string(),
            "UUID must be exactly 16 bytes long, got 15 bytes"
        );
        assert_eq!(
            Error::UnsupportedType("bool").to_string(),
            "cannot convert bool to UUID"
        );
    }
}
