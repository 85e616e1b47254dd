//! TOML output.
//!
//! Nested tables are written under their own headers with no indentation.

use std::io::Write;

use serde::Serialize;

use crate::{error::EncodeError, traits::Encoder};

#[derive(Debug, Clone, Copy, Default)]
pub struct TomlEncoder;

impl Encoder for TomlEncoder {
    fn to_writer<T, W>(value: &T, mut writer: W) -> Result<(), EncodeError>
    where
        T: Serialize + ?Sized,
        W: Write,
    {
        let text = toml::to_string(value)?;
        writer.write_all(text.as_bytes())?;
        Ok(())
    }
}
