//! Pure site logic - no I/O, no async, no side effects.
//!
//! This crate provides:
//! - Theme configuration types and the closed typography/layout enums
//! - Style attribute resolution (override, theme section, theme global, default)
//! - Section content merging against a versioned defaults registry
//! - Render gating, localization bundles and icon lookup
//! - Form validation, product records and image-proxy response interpretation
//!
//! # Example
//!
//! ```
//! use vitrine_core::content::{DefaultsRegistry, Section};
//! use vitrine_core::i18n::Language;
//!
//! let registry = DefaultsRegistry::load(Language::from_tag("klingon")).unwrap();
//! let problems = registry.resolve(Section::Problems, Some(&serde_json::json!({ "items": {} })), None);
//!
//! assert_eq!(problems["items"].as_array().unwrap().len(), 4);
//! ```

#[macro_use]
mod macros;

pub mod content;
pub mod error;
pub mod forms;
pub mod gate;
pub mod i18n;
pub mod icons;
pub mod image;
pub mod product;
pub mod resolve;
pub mod serde;
pub mod style;
pub mod theme;

pub use error::{ConfigError, Result};
