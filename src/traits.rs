//! Traits for format-agnostic serialization in langmarshal.

use std::io::Write;

use serde::Serialize;

use crate::error::EncodeError;

/// A trait for rendering any serializable value in one output format.
///
/// # Example
///
/// ```rust
/// use langmarshal::formats::JsonEncoder;
/// use langmarshal::traits::Encoder;
/// use std::collections::BTreeMap;
///
/// let value: BTreeMap<&str, &str> = [("greeting", "Hello")].into_iter().collect();
/// let bytes = JsonEncoder::to_bytes(&value)?;
/// assert_eq!(String::from_utf8(bytes).unwrap(), "{\n  \"greeting\": \"Hello\"\n}\n");
/// # Ok::<(), langmarshal::error::EncodeError>(())
/// ```
pub trait Encoder {
    /// Write `value` to any writer (file, memory, etc.).
    fn to_writer<T, W>(value: &T, writer: W) -> Result<(), EncodeError>
    where
        T: Serialize + ?Sized,
        W: Write;

    /// Render `value` into a fresh buffer.
    fn to_bytes<T>(value: &T) -> Result<Vec<u8>, EncodeError>
    where
        T: Serialize + ?Sized,
    {
        let mut buf = Vec::new();
        Self::to_writer(value, &mut buf)?;
        Ok(buf)
    }
}
