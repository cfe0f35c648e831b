pub mod forms;
pub mod health;
pub mod pages;
pub mod products;

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use vitrine_core::i18n::{Bundle, Language};

use crate::{error::AppError, state::AppState, views::PageMeta};

/// `?lang=<tag>`: overrides the theme's language for one render.
#[derive(Debug, Default, Deserialize)]
pub struct LangQuery {
    pub lang: Option<String>,
}

impl LangQuery {
    pub fn requested(&self) -> Option<&str> {
        self.lang.as_deref().filter(|tag| !tag.trim().is_empty())
    }
}

/// Language, bundle and page meta for one render.
pub(crate) struct RenderContext {
    pub language: Language,
    pub bundle: Bundle,
    requested: Option<String>,
}

impl RenderContext {
    pub fn new(state: &AppState, query: &LangQuery) -> Self {
        let language = state.language(query.requested());
        Self {
            language,
            bundle: language.bundle(),
            requested: query.requested().map(str::to_string),
        }
    }

    pub fn meta(&self, state: &AppState, title: &str) -> PageMeta {
        PageMeta::new(self.language, self.requested.as_deref(), title, &state.site.theme)
    }
}

/// Renders an Askama template into an HTML response with `status`.
pub(crate) fn render<T: Template>(status: StatusCode, template: &T) -> Result<Response, AppError> {
    Ok((status, Html(render_html(template)?)).into_response())
}

pub(crate) fn render_html<T: Template>(template: &T) -> Result<String, AppError> {
    let html = template
        .render()
        .map_err(|e| anyhow::anyhow!("Template error: {e}"))?;
    Ok(html)
}
