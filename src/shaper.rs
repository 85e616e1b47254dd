//! Turns message templates into the value tree handed to a serializer.
//!
//! Source-language files collapse undecorated singular messages to a bare
//! string; everything else becomes an object with `description`, `hash`, and
//! one field per plural form. Maps are `BTreeMap`s and object fields are
//! emitted in lexicographic key order, so every format sees the same ordering.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::types::{LanguageTag, MessageTemplate, PluralCategory, TemplateSet};

/// The serialized shape of a single message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapedMessage {
    /// A bare source string (`"greeting": "Hello"`).
    Scalar(String),

    /// The expanded form. `hash` is `Some` exactly when rendering a translation.
    Object {
        description: Option<String>,
        hash: Option<String>,
        forms: BTreeMap<PluralCategory, String>,
    },
}

impl ShapedMessage {
    pub fn is_scalar(&self) -> bool {
        matches!(self, ShapedMessage::Scalar(_))
    }

    /// Looks up a field of the expanded form by its serialized key.
    pub fn field(&self, key: &str) -> Option<&str> {
        let ShapedMessage::Object {
            description,
            hash,
            forms,
        } = self
        else {
            return None;
        };
        match key {
            "description" => description.as_deref(),
            "hash" => hash.as_deref(),
            other => forms
                .iter()
                .find(|(category, _)| category.as_str() == other)
                .map(|(_, src)| src.as_str()),
        }
    }
}

impl Serialize for ShapedMessage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ShapedMessage::Scalar(src) => serializer.serialize_str(src),
            ShapedMessage::Object {
                description,
                hash,
                forms,
            } => {
                let mut fields: BTreeMap<&str, &str> = forms
                    .iter()
                    .map(|(category, src)| (category.as_str(), src.as_str()))
                    .collect();
                if let Some(description) = description {
                    fields.insert("description", description.as_str());
                }
                if let Some(hash) = hash {
                    fields.insert("hash", hash.as_str());
                }
                serializer.collect_map(fields)
            }
        }
    }
}

/// Message id → shaped message.
pub type ShapedSet = BTreeMap<String, ShapedMessage>;

/// The value handed to a format encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapedValue {
    /// Message ids at the top level.
    Plain(ShapedSet),

    /// A single language tag at the top level wrapping the message ids.
    Crowdin { language: String, messages: ShapedSet },
}

impl ShapedValue {
    /// Keys of the outermost mapping, in serialization order.
    pub fn top_level_keys(&self) -> Vec<&str> {
        match self {
            ShapedValue::Plain(set) => set.keys().map(String::as_str).collect(),
            ShapedValue::Crowdin { language, .. } => vec![language.as_str()],
        }
    }

    /// The message-id mapping, unwrapping the crowdin layer if present.
    pub fn messages(&self) -> &ShapedSet {
        match self {
            ShapedValue::Plain(set) => set,
            ShapedValue::Crowdin { messages, .. } => messages,
        }
    }
}

impl Serialize for ShapedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ShapedValue::Plain(set) => set.serialize(serializer),
            ShapedValue::Crowdin { language, messages } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(language, messages)?;
                map.end()
            }
        }
    }
}

/// Shapes one template.
pub fn shape_message(template: &MessageTemplate, source_language: bool) -> ShapedMessage {
    if source_language {
        if let Some(src) = template.collapsed_source() {
            return ShapedMessage::Scalar(src.to_string());
        }
    }

    ShapedMessage::Object {
        description: (!template.description.is_empty()).then(|| template.description.clone()),
        hash: (!source_language).then(|| template.hash.clone()),
        forms: template.plural_templates.clone(),
    }
}

/// Shapes every template of a set, keyed by the set's message ids.
pub fn shape(templates: &TemplateSet, source_language: bool) -> ShapedSet {
    templates
        .iter()
        .map(|(id, template)| (id.clone(), shape_message(template, source_language)))
        .collect()
}

/// Shapes a set and nests it under the canonical form of `language`.
pub fn shape_crowdin(
    language: &LanguageTag,
    templates: &TemplateSet,
    source_language: bool,
) -> ShapedValue {
    ShapedValue::Crowdin {
        language: language.to_string(),
        messages: shape(templates, source_language),
    }
}
