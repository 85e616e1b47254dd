//! All error types for the langmarshal crate.
//!
//! Shaping is infallible; these are returned from format selection, encoding,
//! and the optional disk-writing helper.

use thiserror::Error;

use crate::formats::FormatType;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("failed to marshal {language} strings to {format}: {source}")]
    Encoding {
        language: String,
        format: FormatType,
        #[source]
        source: EncodeError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Wraps an encoder failure with the language and format it was rendering.
    pub fn encoding(language: impl Into<String>, format: FormatType, source: EncodeError) -> Self {
        Error::Encoding {
            language: language.into(),
            format,
            source,
        }
    }
}

/// Failure reported by one of the underlying serializers.
#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_unsupported_format_error() {
        let error = Error::UnsupportedFormat("xml".to_string());
        assert_eq!(error.to_string(), "unsupported format: xml");
    }

    #[test]
    fn test_encoding_error_carries_context() {
        let json_error = serde_json::from_str::<serde_json::Value>("{ invalid json }").unwrap_err();
        let error = Error::encoding("fr-CA", FormatType::Json, EncodeError::Json(json_error));

        let message = error.to_string();
        assert!(message.starts_with("failed to marshal fr-CA strings to json: JSON error:"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_io_error() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "read-only");
        let error = Error::from(io_error);
        assert_eq!(error.to_string(), "I/O error: read-only");
    }

    #[test]
    fn test_error_debug() {
        let error = Error::UnsupportedFormat("ini".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("UnsupportedFormat"));
        assert!(debug.contains("ini"));
    }
}
