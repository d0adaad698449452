use thiserror::Error;

/// Rendering failed while serializing an otherwise well-formed value tree.
#[derive(Debug, Error)]
pub enum FormatError {
    /// NaN and infinities have no JSON text representation.
    #[error("number is not representable in JSON")]
    NonFiniteNumber,
    /// The serialized buffer was not valid UTF-8.
    #[error("serialized output is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Error returned by the canonicalization entry points.
#[derive(Debug, Error)]
pub enum CanonicalJsonError {
    /// The input text is not valid JSON.
    #[error("invalid json input")]
    Parse(#[from] serde_json::Error),
    /// An invariant was violated while rendering the value tree.
    #[error("failed to render canonical json")]
    Format(#[from] FormatError),
}
