use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use super::{cascade, merge_section, ProductSection, Section};
use crate::error::{ConfigError, Result, DEFAULTS_VERSION};
use crate::i18n::Language;

const VIETNAMESE: &str = include_str!("../../defaults/vietnamese.json");
const ENGLISH: &str = include_str!("../../defaults/english.json");
const PRODUCT: &str = include_str!("../../defaults/product.json");

#[derive(Deserialize)]
struct RegistryFile {
    version: u32,
    sections: Map<String, Value>,
}

impl RegistryFile {
    fn parse(json: &str) -> Result<Self> {
        let file: RegistryFile =
            serde_json::from_str(json).map_err(|e| ConfigError::InvalidDefaults(e.to_string()))?;
        if file.version != DEFAULTS_VERSION {
            return Err(ConfigError::UnsupportedDefaultsVersion {
                found: file.version,
                expected: DEFAULTS_VERSION,
            });
        }
        Ok(file)
    }
}

/// Built-in default content for every section, in one language.
///
/// Loaded once at startup and shared read-only. Landing defaults are authored
/// in Vietnamese and English; the other languages use the English set.
/// Product section defaults are shared by all languages.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultsRegistry {
    language: Language,
    landing: HashMap<Section, Value>,
    product: HashMap<ProductSection, Value>,
}

impl DefaultsRegistry {
    /// Loads the compiled-in registry for a language.
    pub fn load(language: Language) -> Result<Self> {
        let landing = match language {
            Language::Vietnamese => VIETNAMESE,
            Language::English | Language::Chinese | Language::Japanese => ENGLISH,
        };
        Self::from_json(language, landing, PRODUCT)
    }

    /// Builds a registry from landing and product defaults JSON.
    ///
    /// Sections missing from the files default to an empty object; unknown
    /// section keys are ignored.
    pub fn from_json(language: Language, landing: &str, product: &str) -> Result<Self> {
        let mut landing_file = RegistryFile::parse(landing)?;
        let mut product_file = RegistryFile::parse(product)?;

        let landing = Section::ALL
            .iter()
            .map(|section| (*section, take_section(&mut landing_file.sections, section.key())))
            .collect();
        let product = ProductSection::ALL
            .iter()
            .map(|section| (*section, take_section(&mut product_file.sections, section.key())))
            .collect();

        Ok(Self {
            language,
            landing,
            product,
        })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// The raw defaults of a landing section.
    pub fn defaults(&self, section: Section) -> &Value {
        self.landing.get(&section).unwrap_or(&Value::Null)
    }

    pub fn product_defaults(&self, section: ProductSection) -> &Value {
        self.product.get(&section).unwrap_or(&Value::Null)
    }

    /// Fully resolved content of a landing section.
    ///
    /// `instance` is the page's own content, `theme_level` the theme's content
    /// for the same section. Both may be absent or malformed.
    pub fn resolve(
        &self,
        section: Section,
        instance: Option<&Value>,
        theme_level: Option<&Value>,
    ) -> Value {
        cascade(instance, theme_level, self.defaults(section), section.schema())
    }

    /// Fully resolved content of a product page section.
    pub fn resolve_product(&self, section: ProductSection, provided: Option<&Value>) -> Value {
        merge_section(provided, self.product_defaults(section), section.schema())
    }
}

fn take_section(sections: &mut Map<String, Value>, key: &str) -> Value {
    match sections.remove(key) {
        Some(Value::Object(map)) => Value::Object(map),
        _ => Value::Object(Map::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vietnamese() -> DefaultsRegistry {
        DefaultsRegistry::load(Language::Vietnamese).unwrap()
    }

    #[test]
    fn test_builtin_registries_load() {
        for language in Language::ALL {
            let registry = DefaultsRegistry::load(*language).unwrap();
            assert_eq!(registry.language(), *language);
            for section in Section::ALL {
                assert!(registry.defaults(*section).is_object(), "{:?}", section);
            }
        }
    }

    #[test]
    fn test_builtin_array_fields_are_arrays() {
        for language in [Language::Vietnamese, Language::English] {
            let registry = DefaultsRegistry::load(language).unwrap();
            for section in Section::ALL {
                let defaults = registry.defaults(*section);
                for field in section.schema().arrays {
                    assert!(
                        defaults[field.key].is_array(),
                        "{:?} {:?}.{} is not an array",
                        language,
                        section,
                        field.key
                    );
                }
            }
            for section in ProductSection::ALL {
                let defaults = registry.product_defaults(*section);
                for field in section.schema().arrays {
                    assert!(defaults[field.key].is_array(), "{:?}.{}", section, field.key);
                }
            }
        }
    }

    #[test]
    fn test_problems_object_items_yield_default_four() {
        let registry = vietnamese();
        let problems = registry.resolve(Section::Problems, Some(&json!({ "items": {} })), None);
        assert_eq!(problems["items"].as_array().unwrap().len(), 4);
        assert_eq!(problems["items"], registry.defaults(Section::Problems)["items"]);
    }

    #[test]
    fn test_resolve_is_idempotent_for_every_section() {
        let registry = vietnamese();
        let provided = json!({ "title": "Custom", "items": "bad", "stats": ["1", "2"] });
        for section in Section::ALL {
            let once = registry.resolve(*section, Some(&provided), None);
            let twice = registry.resolve(*section, Some(&once), None);
            assert_eq!(once, twice, "{:?}", section);
        }
    }

    #[test]
    fn test_theme_level_content_sits_between() {
        let registry = vietnamese();
        let theme_level = json!({ "title": "Theme hero", "subtitle": "Theme subtitle" });
        let instance = json!({ "title": "Page hero" });
        let hero = registry.resolve(Section::Hero, Some(&instance), Some(&theme_level));
        assert_eq!(hero["title"], "Page hero");
        assert_eq!(hero["subtitle"], "Theme subtitle");
        assert_eq!(hero["benefits"], registry.defaults(Section::Hero)["benefits"]);
    }

    #[test]
    fn test_resolve_product_section() {
        let registry = vietnamese();
        let packaging = registry.resolve_product(
            ProductSection::Packaging,
            Some(&json!({ "incoterms": "FOB" })),
        );
        assert_eq!(
            packaging["incoterms"],
            json!(["EXW", "FOB", "CIF", "CFR", "DDP", "DAP"])
        );
    }

    #[test]
    fn test_language_selects_landing_flavor() {
        let english = DefaultsRegistry::load(Language::English).unwrap();
        let japanese = DefaultsRegistry::load(Language::Japanese).unwrap();
        assert_eq!(english.defaults(Section::Footer), japanese.defaults(Section::Footer));
        assert_ne!(english.defaults(Section::Footer), vietnamese().defaults(Section::Footer));
    }

    #[test]
    fn test_version_mismatch() {
        let err = DefaultsRegistry::from_json(
            Language::English,
            r#"{ "version": 2, "sections": {} }"#,
            PRODUCT,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnsupportedDefaultsVersion {
                found: 2,
                expected: DEFAULTS_VERSION
            }
        );
    }

    #[test]
    fn test_malformed_registry() {
        let err = DefaultsRegistry::from_json(Language::English, "[]", PRODUCT).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDefaults(_)));
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let registry = DefaultsRegistry::from_json(
            Language::English,
            r#"{ "version": 1, "sections": { "hero": "nope" } }"#,
            r#"{ "version": 1, "sections": {} }"#,
        )
        .unwrap();
        assert_eq!(registry.defaults(Section::Hero), &json!({}));
        let hero = registry.resolve(Section::Hero, Some(&json!({ "benefits": "x" })), None);
        assert!(hero.get("benefits").is_none());
    }
}
