//! Error types for building and running a Huffman engine.

use thiserror::Error;

/// Result type alias for engine operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Engine error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The constructing text was absent or not valid text.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// A symbol outside the engine's alphabet was given to `encode`.
    #[error("unknown symbol {symbol:?} at position {position}")]
    UnknownSymbol { symbol: char, position: usize },

    /// The digit stream cannot be decoded against this tree.
    #[error("decode error at digit {position}: {message}")]
    Decode { message: String, position: usize },

    /// The digit stream ended part-way down a root-to-leaf path.
    #[error("truncated stream: {pending} trailing digit(s) after {consumed} decoded")]
    TruncatedStream { consumed: usize, pending: usize },
}

impl Error {
    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Error::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a decode error at the given digit index.
    pub fn decode(message: impl Into<String>, position: usize) -> Self {
        Error::Decode {
            message: message.into(),
            position,
        }
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(e: std::str::Utf8Error) -> Self {
        Error::invalid_input(format!("text is not UTF-8: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::UnknownSymbol {
            symbol: 'Z',
            position: 3,
        };
        assert_eq!(err.to_string(), "unknown symbol 'Z' at position 3");

        let err = Error::TruncatedStream {
            consumed: 10,
            pending: 2,
        };
        assert_eq!(
            err.to_string(),
            "truncated stream: 2 trailing digit(s) after 10 decoded"
        );
    }

    #[test]
    fn test_utf8_maps_to_invalid_input() {
        let bytes = [0x66, 0xff, 0x6f];
        let err: Error = std::str::from_utf8(&bytes).unwrap_err().into();
        assert!(matches!(err, Error::InvalidInput { .. }));
    }
}
