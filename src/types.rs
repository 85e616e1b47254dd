//! Core, format-agnostic types for langmarshal.
//! Bundle loaders produce these; the shaper consumes them.

use std::{
    collections::{BTreeMap, HashMap},
    fmt::Display,
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

/// A normalized locale identifier such as `en-US`.
///
/// Its `Display` form is the canonical string used in file names and as the
/// crowdin grouping key.
pub type LanguageTag = LanguageIdentifier;

/// Every message template of one translation set, keyed by message id.
pub type TemplateSet = HashMap<String, MessageTemplate>;

/// Standard CLDR plural forms.
#[derive(Ord, PartialOrd, Eq, PartialEq, Debug, Clone, Copy, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    /// The lowercase CLDR name, used as the field key in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }
}

impl Display for PluralCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PluralCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ZERO" => Ok(PluralCategory::Zero),
            "ONE" => Ok(PluralCategory::One),
            "TWO" => Ok(PluralCategory::Two),
            "FEW" => Ok(PluralCategory::Few),
            "MANY" => Ok(PluralCategory::Many),
            "OTHER" => Ok(PluralCategory::Other),
            _ => Err(format!("Unknown plural category: {}", s)),
        }
    }
}

/// A single message with its metadata and one source text per plural form.
///
/// Empty strings mean "absent" for `description`, the delimiters, and `hash`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct MessageTemplate {
    /// Unique message identifier within a translation set.
    pub id: String,

    /// Optional comment for translators.
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(default)]
    pub description: String,

    /// Custom left placeholder delimiter.
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(default)]
    pub left_delim: String,

    /// Custom right placeholder delimiter.
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(default)]
    pub right_delim: String,

    /// Hash of the source text this translation was derived from.
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(default)]
    pub hash: String,

    /// Map from category → template source text.
    #[serde(default)]
    pub plural_templates: BTreeMap<PluralCategory, String>,
}

impl MessageTemplate {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Shorthand for a non-pluralized message with a single `other` form.
    pub fn singular(id: impl Into<String>, src: impl Into<String>) -> Self {
        Self::new(id).with_form(PluralCategory::Other, src)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_delimiters(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.left_delim = left.into();
        self.right_delim = right.into();
        self
    }

    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = hash.into();
        self
    }

    /// Sets the source text for one plural form, replacing any previous text.
    pub fn with_form(mut self, category: PluralCategory, src: impl Into<String>) -> Self {
        self.plural_templates.insert(category, src.into());
        self
    }

    pub fn has_custom_delimiters(&self) -> bool {
        !self.left_delim.is_empty() || !self.right_delim.is_empty()
    }

    /// Returns the `other` source text when the template may be written as a
    /// bare string: exactly one form, that form is `other`, no description,
    /// and no custom delimiters.
    pub fn collapsed_source(&self) -> Option<&str> {
        if self.plural_templates.len() != 1
            || !self.description.is_empty()
            || self.has_custom_delimiters()
        {
            return None;
        }
        self.plural_templates
            .get(&PluralCategory::Other)
            .map(String::as_str)
    }

    pub fn is_collapsible(&self) -> bool {
        self.collapsed_source().is_some()
    }
}

impl Display for MessageTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let forms = self
            .plural_templates
            .keys()
            .map(PluralCategory::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "MessageTemplate {{ id: {}, forms: [{}] }}", self.id, forms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_category_from_str() {
        assert_eq!(
            PluralCategory::from_str("zero").unwrap(),
            PluralCategory::Zero
        );
        assert_eq!(
            PluralCategory::from_str("ONE").unwrap(),
            PluralCategory::One
        );
        assert_eq!(
            PluralCategory::from_str("two").unwrap(),
            PluralCategory::Two
        );
        assert_eq!(
            PluralCategory::from_str("Few").unwrap(),
            PluralCategory::Few
        );
        assert_eq!(
            PluralCategory::from_str("many").unwrap(),
            PluralCategory::Many
        );
        assert_eq!(
            PluralCategory::from_str("other").unwrap(),
            PluralCategory::Other
        );
        assert!(PluralCategory::from_str("several").is_err());
    }

    #[test]
    fn test_plural_category_display_matches_serde() {
        for category in [
            PluralCategory::Zero,
            PluralCategory::One,
            PluralCategory::Two,
            PluralCategory::Few,
            PluralCategory::Many,
            PluralCategory::Other,
        ] {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category));
        }
    }

    #[test]
    fn test_singular_template_is_collapsible() {
        let template = MessageTemplate::singular("greeting", "Hello");
        assert_eq!(template.collapsed_source(), Some("Hello"));
        assert!(template.is_collapsible());
    }

    #[test]
    fn test_description_prevents_collapse() {
        let template = MessageTemplate::singular("greeting", "Hello").with_description("Home page");
        assert!(!template.is_collapsible());
    }

    #[test]
    fn test_either_delimiter_prevents_collapse() {
        let left_only = MessageTemplate::singular("greeting", "Hello <<.Name>>").with_delimiters("<<", "");
        let right_only = MessageTemplate::singular("greeting", "Hello").with_delimiters("", ">>");
        assert!(left_only.has_custom_delimiters());
        assert!(!left_only.is_collapsible());
        assert!(!right_only.is_collapsible());
    }

    #[test]
    fn test_single_non_other_form_is_not_collapsible() {
        let template = MessageTemplate::new("items").with_form(PluralCategory::One, "1 item");
        assert!(!template.is_collapsible());
    }

    #[test]
    fn test_hash_does_not_affect_collapse() {
        let template = MessageTemplate::singular("greeting", "Hello").with_hash("sha1-abc");
        assert!(template.is_collapsible());
    }

    #[test]
    fn test_message_template_display() {
        let template = MessageTemplate::new("items")
            .with_form(PluralCategory::Other, "{{.N}} items")
            .with_form(PluralCategory::One, "1 item");
        assert_eq!(
            template.to_string(),
            "MessageTemplate { id: items, forms: [one, other] }"
        );
    }

    #[test]
    fn test_message_template_deserialize_defaults() {
        let template: MessageTemplate =
            serde_json::from_str(r#"{"id":"bye","plural_templates":{"other":"Bye"}}"#).unwrap();
        assert_eq!(template, MessageTemplate::singular("bye", "Bye"));
    }

    #[test]
    fn test_language_tag_canonical_form() {
        let tag: LanguageTag = "en-us".parse().unwrap();
        assert_eq!(tag.to_string(), "en-US");
    }
}
