//! Token values and the token document.
//!
//! Design tools export tokens in two shapes: a bare value (`"#112233"`) or an
//! object carrying the value under `value` or `$value` alongside metadata.
//! [`Token`] names both shapes and [`Token::extract`] is the one conversion
//! every caller goes through.
//!
//! ```rust
//! use design_tokens::extract_value;
//! use serde_json::json;
//!
//! assert_eq!(extract_value(&json!("#112233")), "#112233");
//! assert_eq!(extract_value(&json!({ "$value": "#112233" })), "#112233");
//! assert_eq!(extract_value(&json!({})), "");
//! ```

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Primary field holding a structured token's value.
pub const VALUE_KEY: &str = "value";

/// Secondary field used by W3C-style exports.
pub const ALIAS_VALUE_KEY: &str = "$value";

/// A single token entry, viewed by shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token<'a> {
    /// An object that may carry its value under [`VALUE_KEY`] or [`ALIAS_VALUE_KEY`].
    Structured {
        value: Option<&'a Value>,
        alias_value: Option<&'a Value>,
    },
    /// Anything else: strings, numbers, booleans, null, arrays.
    Literal(&'a Value),
}

impl<'a> From<&'a Value> for Token<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Object(map) => Token::Structured {
                value: map.get(VALUE_KEY),
                alias_value: map.get(ALIAS_VALUE_KEY),
            },
            other => Token::Literal(other),
        }
    }
}

impl Token<'_> {
    /// Converts the token to its string value.
    ///
    /// Structured tokens prefer `value` over `$value`; with neither present
    /// the result is empty. Literals are rendered as text, with `null`
    /// becoming the empty string and booleans as `True`/`False`.
    pub fn extract(&self) -> String {
        match *self {
            Token::Structured { value, alias_value } => value
                .or(alias_value)
                .map(literal_text)
                .unwrap_or_default(),
            Token::Literal(value) => literal_text(value),
        }
    }

    /// Returns `true` when the token carries no usable value.
    ///
    /// For structured tokens the selected value itself is tested: `null`,
    /// `false`, `0`, `""`, `[]` and `{}` are all empty, even though some of
    /// them would extract to non-empty text. A literal is empty only when it
    /// extracts to an empty string.
    pub fn is_falsy(&self) -> bool {
        match *self {
            Token::Structured { value, alias_value } => {
                value.or(alias_value).map_or(true, value_is_falsy)
            }
            Token::Literal(value) => literal_text(value).is_empty(),
        }
    }

    /// Extracts the value, or `None` when the token [is falsy](Self::is_falsy).
    pub fn truthy_value(&self) -> Option<String> {
        (!self.is_falsy()).then(|| self.extract())
    }
}

fn value_is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

fn literal_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        other => other.to_string(),
    }
}

/// Extracts the string value of any token entry.
pub fn extract_value(value: &Value) -> String {
    Token::from(value).extract()
}

/// A parsed token export: category name to nested groups.
///
/// Key order from the source file is preserved. No key is required; every
/// lookup returns `None` (or an empty value) for missing or mis-shaped data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenDocument {
    root: Map<String, Value>,
}

impl TokenDocument {
    /// Wraps an already-parsed top-level mapping.
    pub fn from_map(root: Map<String, Value>) -> Self {
        Self { root }
    }

    /// Parses a document from JSON text.
    ///
    /// The top level must be a JSON object.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let root: Map<String, Value> = serde_json::from_str(json)?;
        Ok(Self::from_map(root))
    }

    /// Loads a document from a file.
    ///
    /// # Errors
    ///
    /// - [`Error::InputNotFound`] if `path` is not an existing file
    /// - [`Error::Read`] if the file cannot be read
    /// - [`Error::Parse`] if the content is not a JSON object
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::InputNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let document = Self::from_json(&content).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(
            path = %path.display(),
            categories = document.root.len(),
            "loaded token document"
        );
        Ok(document)
    }

    /// Returns a top-level category such as `colors` or `typography`.
    pub fn category(&self, name: &str) -> Option<&Map<String, Value>> {
        self.root.get(name).and_then(Value::as_object)
    }

    /// Returns a named group inside a category, e.g. `colors.scenarios`.
    pub fn group(&self, category: &str, name: &str) -> Option<&Map<String, Value>> {
        self.category(category)
            .and_then(|c| c.get(name))
            .and_then(Value::as_object)
    }

    /// Returns `typography.fontFamily.<role>` as a string, empty if absent
    /// or [falsy](Token::is_falsy).
    pub fn font_family(&self, role: &str) -> String {
        self.group("typography", "fontFamily")
            .and_then(|families| families.get(role))
            .and_then(|token| Token::from(token).truthy_value())
            .unwrap_or_default()
    }

    /// Returns `true` if the document has no categories at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_structured_value() {
        assert_eq!(extract_value(&json!({ "value": "#112233" })), "#112233");
    }

    #[test]
    fn test_extract_structured_alias_value() {
        assert_eq!(extract_value(&json!({ "$value": "#112233" })), "#112233");
    }

    #[test]
    fn test_extract_prefers_value_over_alias() {
        let token = json!({ "$value": "#000000", "value": "#ffffff" });
        assert_eq!(extract_value(&token), "#ffffff");
    }

    #[test]
    fn test_extract_empty_object() {
        assert_eq!(extract_value(&json!({})), "");
        assert_eq!(
            extract_value(&json!({ "type": "color", "description": "unused" })),
            ""
        );
    }

    #[test]
    fn test_extract_plain_string_unchanged() {
        assert_eq!(extract_value(&json!("#112233")), "#112233");
        assert_eq!(extract_value(&json!("")), "");
    }

    #[test]
    fn test_extract_coerces_scalars() {
        assert_eq!(extract_value(&json!(12)), "12");
        assert_eq!(extract_value(&json!(1.5)), "1.5");
        assert_eq!(extract_value(&json!(true)), "True");
        assert_eq!(extract_value(&json!({ "value": false })), "False");
        assert_eq!(extract_value(&Value::Null), "");
        assert_eq!(extract_value(&json!({ "value": null })), "");
        assert_eq!(extract_value(&json!({ "value": 400 })), "400");
    }

    #[test]
    fn test_structured_falsy_values() {
        for token in [
            json!({ "value": 0 }),
            json!({ "value": 0.0 }),
            json!({ "value": false }),
            json!({ "value": "" }),
            json!({ "value": [] }),
            json!({ "$value": {} }),
            json!({ "value": null }),
            json!({}),
        ] {
            assert!(Token::from(&token).is_falsy(), "{token} should be falsy");
            assert_eq!(Token::from(&token).truthy_value(), None);
        }
    }

    #[test]
    fn test_structured_truthy_values() {
        assert_eq!(
            Token::from(&json!({ "value": 500 })).truthy_value(),
            Some("500".to_string())
        );
        assert_eq!(
            Token::from(&json!({ "$value": true })).truthy_value(),
            Some("True".to_string())
        );
    }

    #[test]
    fn test_literal_falsy_only_when_empty_text() {
        assert!(Token::from(&json!("")).is_falsy());
        assert!(Token::from(&Value::Null).is_falsy());
        assert!(!Token::from(&json!(0)).is_falsy());
        assert!(!Token::from(&json!(false)).is_falsy());
        assert!(!Token::from(&json!("#fff")).is_falsy());
    }

    #[test]
    fn test_extract_nested_collections_as_json() {
        assert_eq!(extract_value(&json!(["a", 1])), r#"["a",1]"#);
        assert_eq!(
            extract_value(&json!({ "value": { "r": 1 } })),
            r#"{"r":1}"#
        );
    }

    #[test]
    fn test_token_shapes() {
        let object = json!({ "value": "#fff" });
        assert!(matches!(Token::from(&object), Token::Structured { .. }));

        let string = json!("#fff");
        assert_eq!(Token::from(&string), Token::Literal(&string));
    }

    #[test]
    fn test_document_lookups_tolerate_absence() {
        let doc = TokenDocument::from_json(r#"{ "colors": "not a map" }"#).unwrap();
        assert!(doc.category("colors").is_none());
        assert!(doc.category("typography").is_none());
        assert!(doc.group("colors", "brand").is_none());
        assert_eq!(doc.font_family("heading"), "");
    }

    #[test]
    fn test_document_font_family() {
        let doc = TokenDocument::from_json(
            r#"{ "typography": { "fontFamily": {
                "heading": { "value": "Manrope" },
                "body": "Inter"
            } } }"#,
        )
        .unwrap();
        assert_eq!(doc.font_family("heading"), "Manrope");
        assert_eq!(doc.font_family("body"), "Inter");
        assert_eq!(doc.font_family("mono"), "");
    }

    #[test]
    fn test_document_font_family_falsy_is_empty() {
        let doc = TokenDocument::from_json(
            r#"{ "typography": { "fontFamily": {
                "heading": { "value": 0 },
                "body": { "$value": false }
            } } }"#,
        )
        .unwrap();
        assert_eq!(doc.font_family("heading"), "");
        assert_eq!(doc.font_family("body"), "");
    }

    #[test]
    fn test_document_rejects_non_object_root() {
        assert!(TokenDocument::from_json("[1, 2, 3]").is_err());
        assert!(TokenDocument::from_json("{ not json").is_err());
        assert!(TokenDocument::from_json("{}").unwrap().is_empty());
    }

    #[test]
    fn test_document_from_file() {
        use std::fs;
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("design-tokens.json");
        fs::write(&path, r##"{ "colors": { "brand": { "500": "#ff0000" } } }"##).unwrap();

        let doc = TokenDocument::from_file(&path).unwrap();
        assert!(doc.group("colors", "brand").is_some());
    }

    #[test]
    fn test_document_from_file_not_found() {
        let result = TokenDocument::from_file("/nonexistent/path/design-tokens.json");
        assert!(matches!(result, Err(Error::InputNotFound { .. })));
    }

    #[test]
    fn test_document_from_directory_is_not_found() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let result = TokenDocument::from_file(temp_dir.path());
        assert!(matches!(result, Err(Error::InputNotFound { .. })));
    }

    #[test]
    fn test_document_from_file_malformed() {
        use std::fs;
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{ \"colors\": ").unwrap();

        let result = TokenDocument::from_file(&path);
        assert!(matches!(result, Err(Error::Parse { .. })));
    }
}
