//! Serde helper functions for lenient content deserialization.
//!
//! Site content is authored by hand and arrives as loosely-typed JSON. These
//! helpers make a wrong-typed field degrade to "absent" instead of failing the
//! whole section, mirroring how the renderer treats missing fields.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize an optional string, treating empty strings as None.
///
/// Non-string values are also treated as None. Used for theme fields where a
/// blank value must fall through to the next precedence level.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        _ => None,
    })
}

/// Deserialize an optional string, keeping blanks as they are.
///
/// Numbers are rendered to their string form (`500` becomes `"500"`), any
/// other type becomes None. Blank strings are kept so that an author can clear
/// a default and have the render gate hide the block.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Deserialize any value, falling back to `T::default()` when the shape is wrong.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default())
}

/// Deserialize a list, dropping elements that do not fit `T`.
///
/// A non-array value yields an empty list. Array-typed section fields are
/// already replaced by their defaults during the merge, so this only guards
/// individual malformed elements.
pub fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

/// Deserialize a list of strings, rendering numbers and dropping anything else.
pub fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Inner {
        #[serde(default, deserialize_with = "lenient_string")]
        label: Option<String>,
    }

    /// Test struct that uses the deserializer functions
    #[derive(Debug, Deserialize, PartialEq)]
    struct TestStruct {
        #[serde(default, deserialize_with = "deserialize_optional_string")]
        theme_field: Option<String>,
        #[serde(default, deserialize_with = "lenient_string")]
        content_field: Option<String>,
        #[serde(default, deserialize_with = "lenient")]
        inner: Inner,
        #[serde(default, deserialize_with = "lenient_vec")]
        items: Vec<Inner>,
        #[serde(default, deserialize_with = "lenient_strings")]
        tags: Vec<String>,
    }

    #[test]
    fn test_deserialize_optional_string_whitespace() {
        let json = r#"{"theme_field": "   "}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.theme_field, None);
    }

    #[test]
    fn test_deserialize_optional_string_wrong_type() {
        let json = r#"{"theme_field": 12}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.theme_field, None);
    }

    #[test]
    fn test_deserialize_optional_string_value() {
        let json = r##"{"theme_field": "#D2691E"}"##;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.theme_field, Some("#D2691E".to_string()));
    }

    #[test]
    fn test_lenient_string_keeps_blank() {
        let json = r#"{"content_field": "  "}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.content_field, Some("  ".to_string()));
    }

    #[test]
    fn test_lenient_string_number() {
        let json = r#"{"content_field": 500}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.content_field, Some("500".to_string()));
    }

    #[test]
    fn test_lenient_string_object_is_none() {
        let json = r#"{"content_field": {"a": 1}}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.content_field, None);
    }

    #[test]
    fn test_lenient_struct_wrong_shape() {
        let json = r#"{"inner": "not an object"}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.inner, Inner::default());
    }

    #[test]
    fn test_lenient_vec_drops_bad_elements() {
        let json = r#"{"items": [{"label": "a"}, "oops", {"label": "b"}]}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.items[1].label.as_deref(), Some("b"));
    }

    #[test]
    fn test_lenient_vec_non_array() {
        let json = r#"{"items": {}}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert!(result.items.is_empty());
    }

    #[test]
    fn test_lenient_strings() {
        let json = r#"{"tags": ["FOB", 42, null, "CIF"]}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.tags, vec!["FOB", "42", "CIF"]);
    }

    #[test]
    fn test_missing_fields_default() {
        let result: TestStruct = serde_json::from_str("{}").unwrap();
        assert_eq!(result.theme_field, None);
        assert_eq!(result.content_field, None);
        assert!(result.items.is_empty());
    }
}
