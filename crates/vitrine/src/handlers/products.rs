use askama::Template;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
};

use super::{render, render_html, LangQuery, RenderContext};
use crate::{
    error::AppError,
    state::AppState,
    views::{NotFoundView, ProductForms, ProductIndexView, ProductView, SectionSource},
};

#[derive(Template)]
#[template(path = "products.html")]
pub(crate) struct ProductIndexTemplate {
    pub view: ProductIndexView,
}

#[derive(Template)]
#[template(path = "product.html")]
pub(crate) struct ProductTemplate {
    pub view: ProductView,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub(crate) struct NotFoundTemplate {
    pub view: NotFoundView,
}

/// Builds and renders a product page. An unknown slug is an
/// [`AppError::NotFound`] carrying the themed 404 page.
pub(crate) async fn product_page(
    state: &AppState,
    ctx: &RenderContext,
    slug: &str,
    status: StatusCode,
    forms: ProductForms,
) -> Result<Response, AppError> {
    let registry = state.registry(ctx.language)?;
    let source = SectionSource::new(&state.site, registry);

    let Some(record) = state.catalog.get(slug) else {
        let meta = ctx.meta(state, &source.site_title());
        let view = NotFoundView::build(source, meta, &ctx.bundle);
        return Err(AppError::not_found(slug, render_html(&NotFoundTemplate { view })?));
    };

    let page_title = record
        .resolve(registry)
        .hero
        .title
        .unwrap_or_else(|| slug.to_string());
    let meta = ctx.meta(state, &format!("{} | {}", page_title, source.site_title()));
    let view = ProductView::build(slug, record, source, meta, &ctx.bundle, &state.images, forms).await;

    render(status, &ProductTemplate { view })
}

/// Handler for the product index (GET /products).
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
) -> Result<Response, AppError> {
    let ctx = RenderContext::new(&state, &query);
    let registry = state.registry(ctx.language)?;
    let source = SectionSource::new(&state.site, registry);
    let meta = ctx.meta(&state, &source.site_title());

    let view = ProductIndexView::build(state.catalog.iter(), source, meta, &ctx.bundle, &state.images).await;

    render(StatusCode::OK, &ProductIndexTemplate { view })
}

/// Handler for a product page (GET /products/{slug}).
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<LangQuery>,
) -> Result<Response, AppError> {
    let ctx = RenderContext::new(&state, &query);
    product_page(&state, &ctx, &slug, StatusCode::OK, ProductForms::default()).await
}
