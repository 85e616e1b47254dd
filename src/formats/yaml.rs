//! YAML output using `serde_yaml` defaults.

use std::io::Write;

use serde::Serialize;

use crate::{error::EncodeError, traits::Encoder};

#[derive(Debug, Clone, Copy, Default)]
pub struct YamlEncoder;

impl Encoder for YamlEncoder {
    fn to_writer<T, W>(value: &T, writer: W) -> Result<(), EncodeError>
    where
        T: Serialize + ?Sized,
        W: Write,
    {
        serde_yaml::to_writer(writer, value)?;
        Ok(())
    }
}
