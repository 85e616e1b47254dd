#![forbid(unsafe_code)]
//! Serialize localization message templates into translation files.
//!
//! A [`TemplateSet`] is shaped into a value tree (collapsing simple
//! source-language strings, adding hashes for translations) and encoded as
//! JSON, TOML, or YAML. The writer pairs the encoded bytes with the output path
//! `<outdir>/<label>.<language>.<format>`.
//!
//! # Quick Start
//!
//! ```rust
//! use langmarshal::{LanguageTag, MessageTemplate, PluralCategory, TemplateSet, WriteOptions};
//! use langmarshal::writer::render_file;
//!
//! let mut templates = TemplateSet::new();
//! templates.insert("greeting".into(), MessageTemplate::singular("greeting", "Hello"));
//! templates.insert(
//!     "items".into(),
//!     MessageTemplate::new("items")
//!         .with_form(PluralCategory::One, "1 item")
//!         .with_form(PluralCategory::Other, "{{.N}} items"),
//! );
//!
//! let language: LanguageTag = "en".parse()?;
//! let file = render_file("out", "active", &language, "yaml", &templates, WriteOptions::source_language())?;
//! assert!(file.path.ends_with("active.en.yaml"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Supported Formats
//!
//! - **JSON**: two-space pretty printing, HTML characters left unescaped
//! - **TOML**: unindented tables
//! - **YAML**: optionally nested under the language tag for crowdin
//!
//! Keys are always emitted in lexicographic order.

pub mod error;
pub mod formats;
pub mod shaper;
pub mod traits;
pub mod types;
pub mod write_options;
pub mod writer;

// Re-export most used types for easy consumption
pub use crate::{
    error::{EncodeError, Error},
    formats::{FormatType, infer_format_from_extension},
    shaper::{ShapedMessage, ShapedSet, ShapedValue, shape, shape_crowdin, shape_message},
    types::{LanguageTag, MessageTemplate, PluralCategory, TemplateSet},
    write_options::WriteOptions,
    writer::{OutputFile, render_file, render_file_as, render_files},
};
