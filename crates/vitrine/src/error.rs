use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// Handler error.
///
/// Bad content never fails a render. What can fail is an unknown or disabled
/// product slug, which carries its already rendered 404 page, and the few
/// internal faults (template errors, a missing defaults registry).
#[derive(Debug)]
pub enum AppError {
    NotFound { slug: String, page: String },
    Internal(anyhow::Error),
}

impl AppError {
    pub fn not_found(slug: impl Into<String>, page: String) -> Self {
        Self::NotFound {
            slug: slug.into(),
            page,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound { slug, page } => {
                tracing::debug!(slug = %slug, "Product not found");
                (StatusCode::NOT_FOUND, Html(page)).into_response()
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Application error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong").into_response()
            }
        }
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Internal(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_serves_its_page() {
        let response = AppError::not_found("espresso", "<h1>Product not found</h1>".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body(response).await, "<h1>Product not found</h1>");
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let response = AppError::from(anyhow::anyhow!("registry for vi missing")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body(response).await, "Something went wrong");
    }
}
