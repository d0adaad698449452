//! `CanonicalJsonEncoder` — compact JSON encoder (writes UTF-8 JSON to a
//! Writer buffer).
//!
//! Renders a value tree with no whitespace anywhere outside string content.
//! Object members are written in the order given; run the tree through
//! [`canonicalize`](crate::canonicalize) first to obtain canonical output.
//!
//! Escaping policy is fixed: only `"`, `\` and control characters below
//! 0x20 are escaped. Non-ASCII characters are emitted as raw UTF-8 bytes,
//! never as `\uXXXX`, and `/` is never escaped.

use crate::error::FormatError;
use crate::writer::Writer;
use crate::JsonValue;

pub struct CanonicalJsonEncoder {
    pub writer: Writer,
}

impl Default for CanonicalJsonEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl CanonicalJsonEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    pub fn encode(&mut self, value: &JsonValue) -> Result<Vec<u8>, FormatError> {
        self.writer.reset();
        self.write_any(value)?;
        Ok(self.writer.flush())
    }

    pub fn write_any(&mut self, value: &JsonValue) -> Result<(), FormatError> {
        match value {
            JsonValue::Null => self.write_null(),
            JsonValue::Bool(b) => self.write_boolean(*b),
            JsonValue::Integer(i) => self.write_integer(*i),
            JsonValue::UInteger(u) => self.write_u_integer(*u),
            JsonValue::Float(f) => self.write_float(*f)?,
            JsonValue::Str(s) => self.write_str(s),
            JsonValue::Array(arr) => self.write_arr(arr)?,
            JsonValue::Object(obj) => self.write_obj(obj)?,
        }
        Ok(())
    }

    pub fn write_null(&mut self) {
        self.writer.u32(0x6e75_6c6c); // "null"
    }

    pub fn write_boolean(&mut self, b: bool) {
        if b {
            self.writer.u32(0x7472_7565); // "true"
        } else {
            // "false" = 0x66 0x61 0x6c 0x73 0x65
            self.writer.u8(0x66);
            self.writer.u32(0x616c_7365);
        }
    }

    pub fn write_integer(&mut self, int: i64) {
        self.writer.ascii(&int.to_string());
    }

    pub fn write_u_integer(&mut self, uint: u64) {
        self.writer.ascii(&uint.to_string());
    }

    pub fn write_float(&mut self, float: f64) -> Result<(), FormatError> {
        self.writer.ascii(&format_float(float)?);
        Ok(())
    }

    /// Write a JSON-encoded string (with escaping).
    pub fn write_str(&mut self, s: &str) {
        let bytes = s.as_bytes();
        let len = bytes.len();

        // Fast path: pure ASCII printable, no quotes or backslash
        if len < 256 {
            let mut has_special = false;
            for &b in bytes {
                if b < 32 || b > 126 || b == b'"' || b == b'\\' {
                    has_special = true;
                    break;
                }
            }
            if !has_special {
                self.writer.ensure_capacity(len + 2);
                let x = self.writer.x;
                self.writer.uint8[x] = b'"';
                self.writer.uint8[x + 1..x + 1 + len].copy_from_slice(bytes);
                self.writer.uint8[x + 1 + len] = b'"';
                self.writer.x = x + 2 + len;
                return;
            }
        }

        // Fall back to serde_json, whose escaping matches the policy above.
        let json_str = serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string());
        self.writer.buf(json_str.as_bytes());
    }

    pub fn write_arr(&mut self, arr: &[JsonValue]) -> Result<(), FormatError> {
        self.writer.u8(b'[');
        let last = arr.len().saturating_sub(1);
        for (i, item) in arr.iter().enumerate() {
            self.write_any(item)?;
            if i < last {
                self.writer.u8(b',');
            }
        }
        self.writer.u8(b']');
        Ok(())
    }

    pub fn write_obj(&mut self, obj: &[(String, JsonValue)]) -> Result<(), FormatError> {
        if obj.is_empty() {
            self.writer.u8(b'{');
            self.writer.u8(b'}');
            return Ok(());
        }
        self.writer.u8(b'{');
        let last = obj.len() - 1;
        for (i, (key, val)) in obj.iter().enumerate() {
            self.write_str(key);
            self.writer.u8(b':');
            self.write_any(val)?;
            if i < last {
                self.writer.u8(b',');
            }
        }
        self.writer.u8(b'}');
        Ok(())
    }
}

/// Shortest value-preserving decimal form. Floats with zero fractional part
/// and magnitude below 1e15 render as plain integers.
fn format_float(f: f64) -> Result<String, FormatError> {
    if !f.is_finite() {
        return Err(FormatError::NonFiniteNumber);
    }
    if f.fract() == 0.0 && f.abs() < 1e15 {
        Ok(format!("{}", f as i64))
    } else {
        // Rust's default float repr is the shortest round-trip representation
        Ok(format!("{}", f))
    }
}
