//! Section content merging.
//!
//! Content arrives as raw JSON at three levels (page instance, theme, built-in
//! defaults). Merging is shallow and key-by-key, with the higher level winning.
//! Array-typed fields get extra care: a non-array value is replaced wholesale
//! by the default array, and bare strings inside some arrays are coerced into
//! their structured shape.

use serde_json::{json, Map, Value};
use uuid::Uuid;

/// How bare string elements of an array field are coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    /// Elements are kept as they are.
    None,
    /// `"Alice"` becomes a testimonial named Alice with a fresh id.
    Testimonial,
    /// `"500+"` becomes a stat whose number is 500+.
    Stat,
    /// `"Organic"` becomes a benefit with that text and no icon.
    Benefit,
}

impl Coercion {
    fn apply(self, element: Value) -> Value {
        let Value::String(text) = element else {
            return element;
        };
        match self {
            Coercion::None => Value::String(text),
            Coercion::Testimonial => json!({
                "id": Uuid::new_v4().to_string(),
                "name": text,
                "title": "",
                "company": "",
                "content": "",
                "rating": 5,
                "image": "",
            }),
            Coercion::Stat => json!({
                "number": text,
                "label": "",
                "sublabel": "",
            }),
            Coercion::Benefit => json!({
                "icon": "",
                "text": text,
            }),
        }
    }
}

/// An array-typed field of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayField {
    pub key: &'static str,
    pub coerce: Coercion,
}

impl ArrayField {
    pub const fn plain(key: &'static str) -> Self {
        Self {
            key,
            coerce: Coercion::None,
        }
    }

    pub const fn coerced(key: &'static str, coerce: Coercion) -> Self {
        Self { key, coerce }
    }
}

/// The array fields of one section. Every other field merges as a scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSchema {
    pub arrays: &'static [ArrayField],
}

impl SectionSchema {
    pub const fn new(arrays: &'static [ArrayField]) -> Self {
        Self { arrays }
    }
}

/// Merges provided section content over its defaults.
///
/// Never fails. A provided value that is not an object is ignored, explicit
/// nulls count as absent, and a non-array in an array field yields the default
/// array (or no field at all when there is no default).
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use vitrine_core::content::{merge_section, ArrayField, SectionSchema};
///
/// const SCHEMA: SectionSchema = SectionSchema::new(&[ArrayField::plain("items")]);
/// let defaults = json!({ "title": "Default", "items": ["a", "b"] });
///
/// let merged = merge_section(Some(&json!({ "title": "Mine", "items": "oops" })), &defaults, SCHEMA);
/// assert_eq!(merged, json!({ "title": "Mine", "items": ["a", "b"] }));
/// ```
pub fn merge_section(provided: Option<&Value>, defaults: &Value, schema: SectionSchema) -> Value {
    let mut merged: Map<String, Value> = defaults.as_object().cloned().unwrap_or_default();

    if let Some(Value::Object(provided)) = provided {
        for (key, value) in provided {
            if !value.is_null() {
                merged.insert(key.clone(), value.clone());
            }
        }
    }

    for field in schema.arrays {
        match merged.remove(field.key) {
            Some(Value::Array(items)) => {
                merged.insert(field.key.to_string(), coerce_all(items, field.coerce));
            }
            _ => {
                if let Some(Value::Array(items)) = defaults.get(field.key) {
                    merged.insert(field.key.to_string(), coerce_all(items.clone(), field.coerce));
                }
            }
        }
    }

    Value::Object(merged)
}

/// Three-tier cascade: instance content over theme-level content over defaults.
///
/// Each tier is a full [`merge_section`], so an invalid array at the instance
/// level falls back to the theme-level array, not straight to the default.
pub fn cascade(
    instance: Option<&Value>,
    theme_level: Option<&Value>,
    defaults: &Value,
    schema: SectionSchema,
) -> Value {
    let base = merge_section(theme_level, defaults, schema);
    merge_section(instance, &base, schema)
}

fn coerce_all(items: Vec<Value>, coerce: Coercion) -> Value {
    Value::Array(items.into_iter().map(|item| coerce.apply(item)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TESTIMONIALS: SectionSchema = SectionSchema::new(&[
        ArrayField::coerced("testimonials", Coercion::Testimonial),
        ArrayField::plain("partners"),
        ArrayField::coerced("stats", Coercion::Stat),
    ]);

    fn defaults() -> Value {
        json!({
            "title": "What Our Customers Say",
            "testimonials": [{ "id": "1", "name": "Sarah", "rating": 5 }],
            "partners": ["Starbucks Reserve"],
            "stats": [{ "number": "500+", "label": "Shipments" }]
        })
    }

    #[test]
    fn test_absent_content_yields_defaults() {
        assert_eq!(merge_section(None, &defaults(), TESTIMONIALS), defaults());
    }

    #[test]
    fn test_provided_scalar_wins() {
        let merged = merge_section(Some(&json!({ "title": "Reviews" })), &defaults(), TESTIMONIALS);
        assert_eq!(merged["title"], "Reviews");
        assert_eq!(merged["partners"], json!(["Starbucks Reserve"]));
    }

    #[test]
    fn test_null_does_not_override() {
        let merged = merge_section(Some(&json!({ "title": null })), &defaults(), TESTIMONIALS);
        assert_eq!(merged["title"], "What Our Customers Say");
    }

    #[test]
    fn test_blank_string_is_kept() {
        // Blank text survives the merge so the render gate can hide the block.
        let merged = merge_section(Some(&json!({ "title": "  " })), &defaults(), TESTIMONIALS);
        assert_eq!(merged["title"], "  ");
    }

    #[test]
    fn test_non_array_replaced_by_default_array() {
        for bad in [json!({}), json!("oops"), json!(3), json!(true)] {
            let merged = merge_section(Some(&json!({ "partners": bad })), &defaults(), TESTIMONIALS);
            assert_eq!(merged["partners"], defaults()["partners"]);
        }
    }

    #[test]
    fn test_non_array_without_default_is_dropped() {
        let merged = merge_section(
            Some(&json!({ "partners": "oops" })),
            &json!({ "title": "x" }),
            TESTIMONIALS,
        );
        assert!(merged.get("partners").is_none());
    }

    #[test]
    fn test_empty_array_is_valid() {
        let merged = merge_section(Some(&json!({ "partners": [] })), &defaults(), TESTIMONIALS);
        assert_eq!(merged["partners"], json!([]));
    }

    #[test]
    fn test_bare_testimonials_are_coerced() {
        let merged = merge_section(
            Some(&json!({ "testimonials": ["Alice", "Bob"] })),
            &defaults(),
            TESTIMONIALS,
        );
        let items = merged["testimonials"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["name"], "Alice");
        assert_eq!(items[1]["name"], "Bob");
        for item in items {
            assert_eq!(item["content"], "");
            assert_eq!(item["title"], "");
            assert_eq!(item["company"], "");
            assert_eq!(item["rating"], 5);
            assert!(Uuid::parse_str(item["id"].as_str().unwrap()).is_ok());
        }
        assert_ne!(items[0]["id"], items[1]["id"]);
    }

    #[test]
    fn test_bare_stats_are_coerced() {
        let merged = merge_section(Some(&json!({ "stats": ["99%", { "number": "15" }] })), &defaults(), TESTIMONIALS);
        assert_eq!(merged["stats"][0], json!({ "number": "99%", "label": "", "sublabel": "" }));
        assert_eq!(merged["stats"][1], json!({ "number": "15" }));
    }

    #[test]
    fn test_bare_benefits_are_coerced() {
        const HERO: SectionSchema = SectionSchema::new(&[ArrayField::coerced("benefits", Coercion::Benefit)]);
        let merged = merge_section(
            Some(&json!({ "benefits": ["Organic", { "icon": "🌱", "text": "Fair trade" }] })),
            &json!({}),
            HERO,
        );
        assert_eq!(merged["benefits"][0], json!({ "icon": "", "text": "Organic" }));
        assert_eq!(merged["benefits"][1]["icon"], "🌱");
    }

    #[test]
    fn test_merge_is_idempotent() {
        let provided = json!({
            "title": "Mine",
            "testimonials": ["Alice", { "name": "Bob" }],
            "partners": {},
            "stats": ["1"]
        });
        let once = merge_section(Some(&provided), &defaults(), TESTIMONIALS);
        let twice = merge_section(Some(&once), &defaults(), TESTIMONIALS);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_non_object_provided_is_ignored() {
        let merged = merge_section(Some(&json!(["not", "a", "section"])), &defaults(), TESTIMONIALS);
        assert_eq!(merged, defaults());
    }

    #[test]
    fn test_cascade_precedence() {
        let theme_level = json!({ "title": "Theme title", "partners": ["Theme partner"] });
        let instance = json!({ "title": "Page title", "partners": "oops" });
        let merged = cascade(Some(&instance), Some(&theme_level), &defaults(), TESTIMONIALS);
        assert_eq!(merged["title"], "Page title");
        assert_eq!(merged["partners"], json!(["Theme partner"]));
    }

    #[test]
    fn test_cascade_without_instance() {
        let theme_level = json!({ "title": "Theme title" });
        let merged = cascade(None, Some(&theme_level), &defaults(), TESTIMONIALS);
        assert_eq!(merged["title"], "Theme title");
        assert_eq!(merged["stats"], defaults()["stats"]);
    }
}
