//! Composes shaping and encoding into ready-to-write translation files.
//!
//! Rendering never touches the filesystem: it returns the target path and the
//! complete file content, or an error and no content. [`OutputFile::write_to_disk`]
//! is the only place that performs I/O.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::{
    error::Error,
    formats::FormatType,
    shaper::{ShapedValue, shape, shape_crowdin},
    types::{LanguageTag, TemplateSet},
    write_options::WriteOptions,
};

/// A rendered translation file that has not been written yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    /// `<outdir>/<label>.<language>.<extension>`
    pub path: PathBuf,
    /// The complete encoded file content.
    pub content: Vec<u8>,
}

impl OutputFile {
    /// Creates the parent directory if needed and writes the content.
    pub fn write_to_disk(&self) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, &self.content)?;
        tracing::debug!(
            path = %self.path.display(),
            bytes = self.content.len(),
            "wrote translation file"
        );
        Ok(())
    }
}

/// Builds `<outdir>/<label>.<language>.<extension>`.
pub fn output_path<P: AsRef<Path>>(
    outdir: P,
    label: &str,
    language: &LanguageTag,
    format: FormatType,
) -> PathBuf {
    outdir
        .as_ref()
        .join(format!("{}.{}.{}", label, language, format.extension()))
}

/// Shapes `templates` the way `format` expects.
///
/// Only YAML honors the crowdin layout; JSON and TOML always get message ids
/// at the top level.
pub fn shape_for_format(
    format: FormatType,
    language: &LanguageTag,
    templates: &TemplateSet,
    options: WriteOptions,
) -> ShapedValue {
    if options.crowdin && format.supports_crowdin() {
        shape_crowdin(language, templates, options.source_language)
    } else {
        ShapedValue::Plain(shape(templates, options.source_language))
    }
}

/// Renders one translation file for a format given by name.
///
/// Fails with [`Error::UnsupportedFormat`] for names other than `json`,
/// `toml` and `yaml`.
///
/// # Example
///
/// ```rust
/// use langmarshal::{LanguageTag, MessageTemplate, TemplateSet, WriteOptions, writer::render_file};
///
/// let language: LanguageTag = "en-US".parse()?;
/// let mut templates = TemplateSet::new();
/// templates.insert("greeting".into(), MessageTemplate::singular("greeting", "Hello"));
///
/// let file = render_file(
///     "out",
///     "active",
///     &language,
///     "json",
///     &templates,
///     WriteOptions::source_language(),
/// )?;
/// assert!(file.path.ends_with("active.en-US.json"));
/// assert_eq!(file.content, b"{\n  \"greeting\": \"Hello\"\n}\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_file<P: AsRef<Path>>(
    outdir: P,
    label: &str,
    language: &LanguageTag,
    format: &str,
    templates: &TemplateSet,
    options: WriteOptions,
) -> Result<OutputFile, Error> {
    let format: FormatType = format.parse()?;
    render_file_as(outdir, label, language, format, templates, options)
}

/// Renders one translation file for an already-resolved format.
pub fn render_file_as<P: AsRef<Path>>(
    outdir: P,
    label: &str,
    language: &LanguageTag,
    format: FormatType,
    templates: &TemplateSet,
    options: WriteOptions,
) -> Result<OutputFile, Error> {
    let value = shape_for_format(format, language, templates, options);
    let content = encode_for(language, format, &value)?;

    Ok(OutputFile {
        path: output_path(outdir, label, language, format),
        content,
    })
}

// Encoder failures are reported against the language being rendered.
fn encode_for<T>(language: &LanguageTag, format: FormatType, value: &T) -> Result<Vec<u8>, Error>
where
    T: Serialize + ?Sized,
{
    format
        .encode(value)
        .map_err(|e| Error::encoding(language.to_string(), format, e))
}

/// Renders the same template set in several formats, stopping at the first error.
pub fn render_files<P: AsRef<Path>>(
    outdir: P,
    label: &str,
    language: &LanguageTag,
    formats: &[FormatType],
    templates: &TemplateSet,
    options: WriteOptions,
) -> Result<Vec<OutputFile>, Error> {
    formats
        .iter()
        .map(|format| {
            render_file_as(outdir.as_ref(), label, language, *format, templates, options)
        })
        .collect()
}
