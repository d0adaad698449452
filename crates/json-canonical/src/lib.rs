//! Canonical JSON serialization.
//!
//! Converts any valid JSON document into a single canonical byte-exact
//! representation, so that two independent producers of logically-equivalent
//! JSON (for hashing, signing, or diffing) arrive at identical output bytes:
//!
//! - Object member names sorted by byte-wise lexicographic order, at every
//!   depth
//! - Array element order preserved
//! - Compact output with no insignificant whitespace
//! - Non-ASCII characters emitted as raw UTF-8, never `\uXXXX`
//!
//! Parsing is delegated to [`serde_json`]; this crate owns the recursive
//! key ordering and the re-serialization policy.
//!
//! # Example
//!
//! ```
//! use json_canonical::canonical_json;
//!
//! let out = canonical_json(r#"{"z": {"y": 1, "x": 2}, "a": 0}"#).unwrap();
//! assert_eq!(out, r#"{"a":0,"z":{"x":2,"y":1}}"#);
//! ```

mod encoder;
mod error;
mod sort;
mod value;
mod writer;

pub use encoder::CanonicalJsonEncoder;
pub use error::{CanonicalJsonError, FormatError};
pub use sort::canonicalize;
pub use value::JsonValue;
pub use writer::Writer;

/// Canonicalizes a JSON text.
///
/// Fails with [`CanonicalJsonError::Parse`] when the input is not valid
/// JSON. Any of the six JSON value kinds is accepted at the top level.
///
/// # Example
///
/// ```
/// use json_canonical::canonical_json;
///
/// assert_eq!(canonical_json(r#"{"b":1,"a":2}"#).unwrap(), r#"{"a":2,"b":1}"#);
/// assert!(canonical_json(r#"{"a":}"#).is_err());
/// ```
pub fn canonical_json(json: &str) -> Result<String, CanonicalJsonError> {
    let parsed: serde_json::Value = serde_json::from_str(json)?;
    Ok(canonical_json_from_value(parsed)?)
}

/// Canonicalizes a JSON text given as raw UTF-8 bytes, returning canonical
/// bytes. Suited to hashing and signing call sites.
///
/// # Example
///
/// ```
/// use json_canonical::canonical_json_bytes;
///
/// let out = canonical_json_bytes(b"{\"b\" : 1, \"a\" : 2}").unwrap();
/// assert_eq!(out, b"{\"a\":2,\"b\":1}");
/// ```
pub fn canonical_json_bytes(json: &[u8]) -> Result<Vec<u8>, CanonicalJsonError> {
    let parsed: serde_json::Value = serde_json::from_slice(json)?;
    let sorted = canonicalize(JsonValue::from(parsed));
    let mut encoder = CanonicalJsonEncoder::new();
    Ok(encoder.encode(&sorted)?)
}

/// Canonicalizes an already-parsed [`serde_json::Value`], skipping the
/// parse step.
pub fn canonical_json_from_value(value: serde_json::Value) -> Result<String, FormatError> {
    let sorted = canonicalize(JsonValue::from(value));
    let mut encoder = CanonicalJsonEncoder::new();
    let bytes = encoder.encode(&sorted)?;
    Ok(String::from_utf8(bytes)?)
}
