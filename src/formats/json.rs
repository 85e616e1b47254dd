//! JSON output.
//!
//! Two-space pretty printing with a trailing newline. `<`, `>` and `&` are
//! written as-is since the files are never embedded in markup.

use std::io::Write;

use serde::Serialize;

use crate::{error::EncodeError, traits::Encoder};

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEncoder;

impl Encoder for JsonEncoder {
    fn to_writer<T, W>(value: &T, mut writer: W) -> Result<(), EncodeError>
    where
        T: Serialize + ?Sized,
        W: Write,
    {
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shaper::{ShapedValue, shape};
    use crate::types::{MessageTemplate, PluralCategory, TemplateSet};
    use indoc::indoc;

    fn templates() -> TemplateSet {
        let mut set = TemplateSet::new();
        set.insert(
            "greeting".to_string(),
            MessageTemplate::singular("greeting", "Hello <b>{{.Name}}</b> & welcome")
                .with_description("Home page")
                .with_hash("sha1-0a"),
        );
        set.insert(
            "farewell".to_string(),
            MessageTemplate::singular("farewell", "Bye").with_hash("sha1-0b"),
        );
        set
    }

    #[test]
    fn test_source_language_output() {
        let value = ShapedValue::Plain(shape(&templates(), true));
        let bytes = JsonEncoder::to_bytes(&value).unwrap();

        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            indoc! {r#"
                {
                  "farewell": "Bye",
                  "greeting": {
                    "description": "Home page",
                    "other": "Hello <b>{{.Name}}</b> & welcome"
                  }
                }
            "#}
        );
    }

    #[test]
    fn test_translation_output_includes_hash() {
        let value = ShapedValue::Plain(shape(&templates(), false));
        let text = String::from_utf8(JsonEncoder::to_bytes(&value).unwrap()).unwrap();

        assert!(text.contains(r#""hash": "sha1-0b""#));
        assert!(text.contains(r#""hash": "sha1-0a""#));
        assert!(!text.contains("\\u003c"));
    }

    #[test]
    fn test_round_trip_through_serde_json() {
        let mut set = templates();
        set.insert(
            "items".to_string(),
            MessageTemplate::new("items")
                .with_form(PluralCategory::One, "1 item")
                .with_form(PluralCategory::Other, "{{.N}} items"),
        );
        let value = ShapedValue::Plain(shape(&set, true));
        let bytes = JsonEncoder::to_bytes(&value).unwrap();

        let decoded: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoded, serde_json::to_value(&value).unwrap());
        assert_eq!(decoded["farewell"], "Bye");
        assert_eq!(decoded["items"]["one"], "1 item");
        assert_eq!(decoded["items"]["other"], "{{.N}} items");
    }
}
