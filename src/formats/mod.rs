//! All supported output formats for langmarshal.
//!
//! This module re-exports the encoder for each format and provides the
//! [`FormatType`] enum used to dispatch between them.

pub mod json;
pub mod toml;
pub mod yaml;

use std::{
    fmt::{Display, Formatter},
    path::Path,
    str::FromStr,
};

use serde::Serialize;

// Reexporting the encoders for easier access
pub use self::json::JsonEncoder;
pub use self::toml::TomlEncoder;
pub use self::yaml::YamlEncoder;

use crate::{
    error::{EncodeError, Error},
    traits::Encoder,
};

/// Represents all supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatType {
    /// Pretty-printed JSON.
    Json,
    /// TOML with unindented tables.
    Toml,
    /// YAML; the only format with a crowdin-compatible layout.
    Yaml,
}

/// Implements [`std::fmt::Display`] for [`FormatType`].
///
/// The display string doubles as the file extension.
///
/// # Example
/// ```rust
/// use langmarshal::formats::FormatType;
/// assert_eq!(FormatType::Json.to_string(), "json");
/// assert_eq!(FormatType::Toml.to_string(), "toml");
/// assert_eq!(FormatType::Yaml.to_string(), "yaml");
/// ```
impl Display for FormatType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Implements [`std::str::FromStr`] for [`FormatType`].
///
/// Accepts `json`, `toml`, `yaml` and `yml`, case-insensitively.
/// Anything else is an [`Error::UnsupportedFormat`] carrying the input as given.
///
/// # Example
/// ```rust
/// use langmarshal::formats::FormatType;
/// assert_eq!("json".parse::<FormatType>().unwrap(), FormatType::Json);
/// assert_eq!("YML".parse::<FormatType>().unwrap(), FormatType::Yaml);
/// assert!("xml".parse::<FormatType>().is_err());
/// ```
impl FromStr for FormatType {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(FormatType::Json),
            "toml" => Ok(FormatType::Toml),
            "yaml" | "yml" => Ok(FormatType::Yaml),
            _ => Err(Error::UnsupportedFormat(s.to_string())),
        }
    }
}

impl FormatType {
    pub const ALL: [FormatType; 3] = [FormatType::Json, FormatType::Toml, FormatType::Yaml];

    /// Returns the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            FormatType::Json => "json",
            FormatType::Toml => "toml",
            FormatType::Yaml => "yaml",
        }
    }

    /// Whether a crowdin layout changes the output of this format.
    pub fn supports_crowdin(&self) -> bool {
        matches!(self, FormatType::Yaml)
    }

    /// Serializes `value` with this format's encoder.
    pub fn encode<T>(&self, value: &T) -> Result<Vec<u8>, EncodeError>
    where
        T: Serialize + ?Sized,
    {
        match self {
            FormatType::Json => JsonEncoder::to_bytes(value),
            FormatType::Toml => TomlEncoder::to_bytes(value),
            FormatType::Yaml => YamlEncoder::to_bytes(value),
        }
    }
}

/// Infers a [`FormatType`] from a path's extension.
pub fn infer_format_from_extension<P: AsRef<Path>>(path: P) -> Option<FormatType> {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| ext.parse().ok())
}
