use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    handlers::{
        forms::{submit_lead, submit_rfq},
        health::livez,
        pages::landing,
        products::{index, show},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let timeout = state.config.request_timeout();

    Router::new()
        .route("/", get(landing))
        .route("/products", get(index))
        .route("/products/{slug}", get(show))
        .route("/products/{slug}/rfq", post(submit_rfq))
        .route("/lead", post(submit_lead))
        .route("/livez", get(livez))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use vitrine_core::{product::ProductCatalog, theme::SiteConfig};

    use crate::config::Config;

    fn config() -> Config {
        Config {
            image_proxy_url: "http://127.0.0.1:9/random".to_string(),
            image_fetch_enabled: false,
            image_wait_ms: 100,
            request_timeout_secs: 10,
        }
    }

    fn demo_app() -> Router {
        create_app(AppState::with_demo_data(config()).unwrap())
    }

    async fn get_html(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    async fn post_form(app: Router, uri: &str, body: &'static str) -> (StatusCode, String) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/x-www-form-urlencoded")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_livez() {
        let response = demo_app()
            .oneshot(Request::builder().uri("/livez").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_landing_page() {
        let (status, html) = get_html(demo_app(), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains(r#"<html lang="en""#));
        assert!(html.contains("Highland Roasters"));
        // Sections the demo site leaves out come from the defaults.
        assert!(html.contains("Complex Import Regulations"));
        assert!(html.contains(r#"action="/lead""#));
    }

    #[tokio::test]
    async fn test_language_query_overrides_theme() {
        let (status, html) = get_html(demo_app(), "/?lang=vietnamese").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains(r#"<html lang="vi""#));
        assert!(html.contains(r#"action="/lead?lang=vietnamese""#));
    }

    #[tokio::test]
    async fn test_unknown_language_falls_back_to_vietnamese() {
        let (_, html) = get_html(demo_app(), "/?lang=klingon").await;
        assert!(html.contains(r#"<html lang="vi""#));
    }

    #[tokio::test]
    async fn test_blank_sections_are_not_rendered() {
        let site = SiteConfig::from_json(
            r#"{
                "theme": { "projectLanguage": "english" },
                "pageContent": { "about": { "title": "   ", "description": "" } }
            }"#,
        )
        .unwrap();
        let state = AppState::new(site, ProductCatalog::default(), config()).unwrap();

        let (status, html) = get_html(create_app(state), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(!html.contains(r#"id="about-title""#));
    }

    #[tokio::test]
    async fn test_product_index() {
        let (status, html) = get_html(demo_app(), "/products").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains(r#"href="/products/robusta-green-beans""#));
        assert!(!html.contains("/products/discontinued-blend"));
    }

    #[tokio::test]
    async fn test_product_page() {
        let (status, html) = get_html(demo_app(), "/products/robusta-green-beans").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Robusta Green Coffee Beans"));
        // Product sections merged against the defaults.
        assert!(html.contains("Technical Specifications"));
        assert!(html.contains("FOB"));
        assert!(html.contains(r#"action="/products/robusta-green-beans/rfq""#));
    }

    #[tokio::test]
    async fn test_unknown_product_is_404() {
        let (status, html) = get_html(demo_app(), "/products/does-not-exist").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(html.contains("Product not found"));
    }

    #[tokio::test]
    async fn test_disabled_product_is_404() {
        let (status, _) = get_html(demo_app(), "/products/discontinued-blend").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_rfq_missing_fields_shows_alert() {
        let (status, html) = post_form(
            demo_app(),
            "/products/robusta-green-beans/rfq",
            "name=Lan&company=&email=lan%40cafe.vn&quantity=2+containers",
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(html.contains(r#"role="alert""#));
        assert!(html.contains("Please fill in the required fields: Your Company"));
        // The visitor's input is kept.
        assert!(html.contains(r#"value="2 containers""#));
    }

    #[tokio::test]
    async fn test_rfq_invalid_email_shows_alert() {
        let (status, html) = post_form(
            demo_app(),
            "/products/robusta-green-beans/rfq",
            "name=Lan&company=Cafe+Co&email=lan%40cafe",
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(html.contains("Please enter a valid email address."));
    }

    #[tokio::test]
    async fn test_rfq_for_unknown_product_is_404() {
        let (status, html) = post_form(
            demo_app(),
            "/products/discontinued-blend/rfq",
            "name=Lan&company=Cafe+Co&email=lan%40cafe.vn",
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(html.contains("Product not found"));
        assert!(!html.contains("role=\"status\""));
    }

    #[tokio::test]
    async fn test_rfq_success_resets_form() {
        let (status, html) = post_form(
            demo_app(),
            "/products/robusta-green-beans/rfq",
            "name=Lan&company=Cafe+Co&email=lan%40cafe.vn&quantity=2+containers",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Thank you! Our sales team will contact you within 24 hours."));
        assert!(!html.contains(r#"role="alert""#));
        assert!(!html.contains(r#"value="2 containers""#));
    }

    #[tokio::test]
    async fn test_lead_on_landing_page() {
        let (status, html) = post_form(demo_app(), "/lead", "name=&email=").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(html.contains(r#"role="alert""#));

        let (status, html) = post_form(demo_app(), "/lead", "name=Minh&email=minh%40example.com").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Thank you! Your catalog is on its way to your inbox."));
    }

    #[tokio::test]
    async fn test_lead_from_product_page() {
        let (status, html) = post_form(
            demo_app(),
            "/lead",
            "name=Minh&email=minh%40example.com&product=robusta-green-beans",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Robusta Green Coffee Beans"));
        assert!(html.contains("Thank you! Your catalog is on its way to your inbox."));
    }
}
