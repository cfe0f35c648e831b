use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Response,
};
use vitrine_core::forms::LeadForm;

use super::{render, LangQuery, RenderContext};
use crate::{
    error::AppError,
    state::AppState,
    views::{FormState, LandingView, SectionSource},
};

/// Landing page template.
#[derive(Template)]
#[template(path = "landing.html")]
pub(crate) struct LandingTemplate {
    pub view: LandingView,
}

/// Builds and renders the landing page with the lead form in `form`'s state.
pub(crate) async fn landing_page(
    state: &AppState,
    ctx: &RenderContext,
    status: StatusCode,
    form: FormState<LeadForm>,
) -> Result<Response, AppError> {
    let registry = state.registry(ctx.language)?;
    let source = SectionSource::new(&state.site, registry);
    let meta = ctx.meta(state, &source.site_title());

    let view = LandingView::build(source, meta, &ctx.bundle, &state.images, form).await;

    render(status, &LandingTemplate { view })
}

/// Handler for the landing page (GET /).
pub async fn landing(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
) -> Result<Response, AppError> {
    let ctx = RenderContext::new(&state, &query);
    landing_page(&state, &ctx, StatusCode::OK, FormState::default()).await
}
