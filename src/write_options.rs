//! Options controlling how a template set is shaped for output.

/// Write behavior options for [`crate::writer`] APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WriteOptions {
    /// The set is the authoritative source language: collapse undecorated
    /// singular messages and omit hashes.
    pub source_language: bool,
    /// Nest YAML output under the language tag for crowdin.
    pub crowdin: bool,
}

impl WriteOptions {
    /// Creates default write options (a translation file, no crowdin layout).
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for options describing the source-language file.
    pub fn source_language() -> Self {
        Self::new().with_source_language(true)
    }

    /// Enables/disables source-language shaping.
    pub fn with_source_language(mut self, source_language: bool) -> Self {
        self.source_language = source_language;
        self
    }

    /// Enables/disables the crowdin-compatible YAML layout.
    pub fn with_crowdin(mut self, crowdin: bool) -> Self {
        self.crowdin = crowdin;
        self
    }
}
