//! Shared application state.
//!
//! Everything here is loaded once at startup and read-only afterwards. A
//! render takes the snapshot it needs through the `Arc`s; only image slots
//! hold mutable state, and that lives inside the slot.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;
use thiserror::Error;
use vitrine_core::{
    content::DefaultsRegistry, i18n::Language, product::ProductCatalog, theme::SiteConfig,
    ConfigError,
};

use crate::{config::Config, images::ImageClient};

const DEMO_SITE: &str = include_str!("../data/site.json");
const DEMO_PRODUCTS: &str = include_str!("../data/products.json");

/// Failure to load a site or product document at startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

fn read(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the site document from `path`, or the compiled-in demo site.
pub fn load_site(path: Option<&Path>) -> Result<SiteConfig, LoadError> {
    let json = match path {
        Some(path) => read(path)?,
        None => DEMO_SITE.to_string(),
    };
    Ok(SiteConfig::from_json(&json)?)
}

/// Loads the product records from `path`, or the compiled-in demo catalog.
pub fn load_products(path: Option<&Path>) -> Result<ProductCatalog, LoadError> {
    let json = match path {
        Some(path) => read(path)?,
        None => DEMO_PRODUCTS.to_string(),
    };
    Ok(ProductCatalog::from_json(&json)?)
}

#[derive(Clone)]
pub struct AppState {
    pub site: Arc<SiteConfig>,
    pub catalog: Arc<ProductCatalog>,
    pub images: ImageClient,
    pub config: Arc<Config>,
    registries: Arc<HashMap<Language, DefaultsRegistry>>,
}

impl AppState {
    /// Builds the state, loading a defaults registry for every language.
    pub fn new(site: SiteConfig, catalog: ProductCatalog, config: Config) -> anyhow::Result<Self> {
        let registries = Language::ALL
            .iter()
            .map(|language| DefaultsRegistry::load(*language).map(|registry| (*language, registry)))
            .collect::<Result<HashMap<_, _>, ConfigError>>()
            .context("failed to load the defaults registry")?;
        let images = ImageClient::new(&config).context("failed to build the image client")?;

        Ok(Self {
            site: Arc::new(site),
            catalog: Arc::new(catalog),
            images,
            config: Arc::new(config),
            registries: Arc::new(registries),
        })
    }

    /// State backed by the compiled-in demo site and catalog.
    pub fn with_demo_data(config: Config) -> anyhow::Result<Self> {
        Self::new(load_site(None)?, load_products(None)?, config)
    }

    /// The page language: the `?lang=` tag when given, else the theme's.
    pub fn language(&self, requested: Option<&str>) -> Language {
        match requested {
            Some(tag) => Language::from_tag(tag),
            None => self.site.theme.language(),
        }
    }

    pub fn registry(&self, language: Language) -> anyhow::Result<&DefaultsRegistry> {
        self.registries
            .get(&language)
            .with_context(|| format!("no defaults registry for {}", language.key()))
    }
}
