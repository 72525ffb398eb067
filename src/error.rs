//! Error types for token decoding

use thiserror::Error;

/// Errors that can occur while decoding a share token.
///
/// All of these are recoverable: callers fall back to a default empty
/// layout rather than failing the page load (see
/// [`crate::codec::decode_fragment_or_default`]).
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Empty token string.
    #[error("token is empty")]
    Empty,

    /// Token contains characters outside the URL-safe alphabet.
    #[error("token is not valid base64: {0}")]
    Alphabet(#[from] base64::DecodeError),

    /// Payload too short to carry version and dimensions.
    #[error("token header is truncated")]
    TruncatedHeader,

    /// The token was produced by a format this build does not know.
    #[error("unsupported token version {0}")]
    UnknownVersion(u8),

    /// Declared plan size outside the supported range.
    #[error("plan dimensions {width}x{height} outside supported range {min}..={max}")]
    DimensionsOutOfRange {
        width: usize,
        height: usize,
        min: usize,
        max: usize,
    },

    /// Payload length disagrees with the declared dimensions.
    #[error("token carries {actual} cells but {width}x{height} needs {expected}")]
    LengthMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    /// A cell code that maps to no catalog entry.
    #[error("unknown cell code {code} at cell {index}")]
    UnknownCellCode { code: u8, index: usize },
}
