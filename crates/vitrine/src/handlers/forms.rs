//! Form submissions.
//!
//! Submissions are validated and logged, never stored or forwarded. A
//! rejected form re-renders its page with HTTP 422 and an alert banner; an
//! accepted one re-renders with a confirmation and an emptied form.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
    Form,
};
use serde::Deserialize;
use uuid::Uuid;
use vitrine_core::{
    forms::{LeadForm, RfqForm},
    i18n::TextKey,
    resolve::non_blank,
};

use super::{pages::landing_page, products::product_page, LangQuery, RenderContext};
use crate::{
    error::AppError,
    state::AppState,
    views::{FormState, ProductForms},
};

/// Handler for a request for quotation (POST /products/{slug}/rfq).
pub async fn submit_rfq(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<LangQuery>,
    Form(form): Form<RfqForm>,
) -> Result<Response, AppError> {
    let ctx = RenderContext::new(&state, &query);

    if state.catalog.get(&slug).is_none() {
        return product_page(&state, &ctx, &slug, StatusCode::NOT_FOUND, ProductForms::default()).await;
    }

    let (status, rfq) = match form.validate() {
        Ok(()) => {
            tracing::info!(
                submission = %Uuid::new_v4(),
                slug = %slug,
                company = %form.company.trim(),
                quantity = %form.quantity.trim(),
                "RFQ received"
            );
            (StatusCode::OK, FormState::submitted(ctx.bundle.text(TextKey::RfqSuccess)))
        }
        Err(err) => {
            tracing::debug!(slug = %slug, error = %err, "RFQ rejected");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                FormState::rejected(form, &err, &ctx.bundle),
            )
        }
    };

    let forms = ProductForms {
        rfq,
        ..Default::default()
    };
    product_page(&state, &ctx, &slug, status, forms).await
}

/// A lead form post. `product` is set when it came from a product page.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    pub company: String,
    pub product: String,
}

impl LeadSubmission {
    fn into_parts(self) -> (LeadForm, Option<String>) {
        let product = non_blank(Some(self.product.as_str())).map(str::to_string);
        let form = LeadForm {
            name: self.name,
            email: self.email,
            company: self.company,
        };
        (form, product)
    }
}

/// Handler for a catalog or guide download request (POST /lead).
///
/// Re-renders the product page the form came from, or the landing page.
pub async fn submit_lead(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
    Form(submission): Form<LeadSubmission>,
) -> Result<Response, AppError> {
    let ctx = RenderContext::new(&state, &query);
    let (form, product) = submission.into_parts();

    let (status, lead) = match form.validate() {
        Ok(()) => {
            tracing::info!(
                submission = %Uuid::new_v4(),
                product = product.as_deref().unwrap_or("-"),
                company = %form.company.trim(),
                "Lead received"
            );
            (StatusCode::OK, FormState::submitted(ctx.bundle.text(TextKey::LeadSuccess)))
        }
        Err(err) => {
            tracing::debug!(error = %err, "Lead rejected");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                FormState::rejected(form, &err, &ctx.bundle),
            )
        }
    };

    match product {
        Some(slug) => {
            let forms = ProductForms {
                lead,
                ..Default::default()
            };
            product_page(&state, &ctx, &slug, status, forms).await
        }
        None => landing_page(&state, &ctx, status, lead).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_submission_split() {
        let submission = LeadSubmission {
            name: "Minh".to_string(),
            email: "minh@example.com".to_string(),
            company: String::new(),
            product: "  ".to_string(),
        };
        let (form, product) = submission.into_parts();
        assert_eq!(form.name, "Minh");
        assert_eq!(product, None);

        let submission = LeadSubmission {
            product: "robusta-beans".to_string(),
            ..Default::default()
        };
        assert_eq!(submission.into_parts().1.as_deref(), Some("robusta-beans"));
    }
}
