//! Image proxy client and per-render image slots.
//!
//! A page starts one [`ImageSlot`] per image before it builds anything else,
//! so fetches run while the rest of the page is resolved. Each slot is waited
//! on against the same render deadline. A slot that is dropped or cancelled
//! aborts its fetch and never publishes a result.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};
use std::time::Duration;

use tokio::{sync::Notify, task::JoinHandle, time::Instant};
use vitrine_core::image::{interpret_response, ImageError, ImageOutcome, ImageRequest};

use crate::config::Config;

/// HTTP client for the image proxy.
#[derive(Clone, Debug)]
pub struct ImageClient {
    http: reqwest::Client,
    endpoint: String,
    enabled: bool,
    wait: Duration,
}

impl ImageClient {
    pub fn new(config: &Config) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            http,
            endpoint: config.image_proxy_url.clone(),
            enabled: config.image_fetch_enabled,
            wait: config.image_wait(),
        })
    }

    /// The deadline for a render starting now.
    pub fn deadline(&self) -> Instant {
        Instant::now() + self.wait
    }

    /// Asks the proxy for one photo.
    pub async fn fetch(&self, request: &ImageRequest) -> Result<String, ImageError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&request.body())
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(transport_error)?;

        interpret_response(status, &body)
    }

    /// Starts a slot for `request`. Requests that need no fetch, or any
    /// request while fetching is disabled, resolve without a task.
    pub fn slot(&self, request: ImageRequest) -> ImageSlot {
        if !self.enabled || !request.needs_fetch() {
            return ImageSlot::immediate(request);
        }

        let state = Arc::new(SlotState::default());
        let task = tokio::spawn({
            let client = self.clone();
            let request = request.clone();
            let state = Arc::clone(&state);
            async move {
                let result = client.fetch(&request).await;
                state.publish(result);
            }
        });

        ImageSlot {
            request,
            state: Some(state),
            task: Some(task),
        }
    }
}

fn transport_error(err: reqwest::Error) -> ImageError {
    if err.is_timeout() {
        ImageError::Timeout
    } else {
        ImageError::Transport(err.to_string())
    }
}

#[derive(Debug)]
struct SlotState {
    alive: AtomicBool,
    result: Mutex<Option<Result<String, ImageError>>>,
    ready: Notify,
}

impl Default for SlotState {
    fn default() -> Self {
        Self {
            alive: AtomicBool::new(true),
            result: Mutex::new(None),
            ready: Notify::new(),
        }
    }
}

impl SlotState {
    fn is_alive(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }

    /// Stores the fetch result. Dead slots drop it.
    fn publish(&self, result: Result<String, ImageError>) {
        if !self.is_alive() {
            return;
        }
        if let Ok(mut cell) = self.result.lock() {
            *cell = Some(result);
        }
        self.ready.notify_one();
    }

    fn take(&self) -> Option<Result<String, ImageError>> {
        self.result.lock().ok().and_then(|mut cell| cell.take())
    }
}

/// One image being resolved for one render.
#[derive(Debug)]
pub struct ImageSlot {
    request: ImageRequest,
    state: Option<Arc<SlotState>>,
    task: Option<JoinHandle<()>>,
}

impl ImageSlot {
    fn immediate(request: ImageRequest) -> Self {
        Self {
            request,
            state: None,
            task: None,
        }
    }

    /// False once the slot has been cancelled.
    pub fn is_alive(&self) -> bool {
        self.state.as_ref().map_or(true, |state| state.is_alive())
    }

    /// Marks the slot dead and aborts its fetch.
    pub fn cancel(&mut self) {
        if let Some(state) = &self.state {
            state.alive.store(false, Ordering::SeqCst);
        }
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// Waits for the fetch until `deadline`. Anything but a fetched URL
    /// falls back, and the reason is logged.
    pub async fn wait_until(self, deadline: Instant) -> ImageOutcome {
        let Some(state) = self.state.clone() else {
            return ImageOutcome::immediate(&self.request);
        };

        let result = if !state.is_alive() {
            Err(ImageError::Cancelled)
        } else if let Some(result) = state.take() {
            result
        } else {
            match tokio::time::timeout_at(deadline, state.ready.notified()).await {
                Ok(()) => state.take().unwrap_or(Err(ImageError::NoData)),
                Err(_) => Err(ImageError::Timeout),
            }
        };

        if let Err(err) = &result {
            tracing::warn!(query = %self.request.query, error = %err, "image fetch failed, using fallback");
        }

        ImageOutcome::from_fetch(&self.request, result)
    }

    /// The image URL, or None.
    pub async fn url(self, deadline: Instant) -> Option<String> {
        self.wait_until(deadline).await.url
    }
}

impl Drop for ImageSlot {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};
    use tokio::net::TcpListener;

    /// Serves `router` on an ephemeral port and returns the proxy endpoint.
    async fn serve(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/random")
    }

    fn client(endpoint: &str, wait_ms: u64) -> ImageClient {
        ImageClient::new(&Config {
            image_proxy_url: endpoint.to_string(),
            image_fetch_enabled: true,
            image_wait_ms: wait_ms,
            request_timeout_secs: 5,
        })
        .unwrap()
    }

    fn echo_router() -> Router {
        Router::new().route(
            "/random",
            post(|Json(body): Json<Value>| async move {
                let query = body["query"].as_str().unwrap_or_default().replace(' ', "-");
                Json(json!({
                    "success": true,
                    "photo": { "urls": { "regular": format!("https://img.test/{query}.jpg") } }
                }))
            }),
        )
    }

    fn slow_router() -> Router {
        Router::new().route(
            "/random",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({ "success": true, "photo": { "urls": { "regular": "https://img.test/slow.jpg" } } }))
            }),
        )
    }

    #[tokio::test]
    async fn test_fetch_sends_query() {
        let endpoint = serve(echo_router()).await;
        let client = client(&endpoint, 1_000);

        let url = client
            .fetch(&ImageRequest::product(None, Some("Robusta")))
            .await
            .unwrap();

        assert_eq!(url, "https://img.test/Robusta-coffee.jpg");
    }

    #[tokio::test]
    async fn test_slot_publishes_fetched_url() {
        let endpoint = serve(echo_router()).await;
        let client = client(&endpoint, 2_000);

        let slot = client.slot(ImageRequest::hero(None, Some("roastery")));
        let outcome = slot.wait_until(client.deadline()).await;

        assert_eq!(outcome.url.as_deref(), Some("https://img.test/roastery-interior.jpg"));
        assert!(outcome.fetched);
        assert_eq!(outcome.error, None);
    }

    #[tokio::test]
    async fn test_rate_limit_falls_back() {
        let router = Router::new().route("/random", post(|| async { StatusCode::TOO_MANY_REQUESTS }));
        let endpoint = serve(router).await;
        let client = client(&endpoint, 2_000);

        let request = ImageRequest::product(None, None).with_fallback(Some("/img/fallback.jpg"));
        let outcome = client.slot(request).wait_until(client.deadline()).await;

        assert_eq!(outcome.url.as_deref(), Some("/img/fallback.jpg"));
        assert_eq!(
            outcome.error.as_deref(),
            Some("Rate limit exceeded. Please try again later.")
        );
    }

    #[tokio::test]
    async fn test_rejected_payload_falls_back() {
        let router = Router::new().route(
            "/random",
            post(|| async { Json(json!({ "success": false, "error": "quota exhausted" })) }),
        );
        let endpoint = serve(router).await;
        let client = client(&endpoint, 2_000);

        let outcome = client
            .slot(ImageRequest::product(None, Some("Arabica")))
            .wait_until(client.deadline())
            .await;

        assert_eq!(outcome.url, None);
        assert_eq!(outcome.error.as_deref(), Some("quota exhausted"));
    }

    #[tokio::test]
    async fn test_wait_budget_bounds_render() {
        let endpoint = serve(slow_router()).await;
        let client = client(&endpoint, 50);

        let started = std::time::Instant::now();
        let outcome = client
            .slot(ImageRequest::product(None, None).with_fallback(Some("/img/f.jpg")))
            .wait_until(client.deadline())
            .await;

        assert!(started.elapsed() < Duration::from_secs(2));
        assert_eq!(outcome.url.as_deref(), Some("/img/f.jpg"));
        assert_eq!(outcome.error.as_deref(), Some("Request timed out"));
    }

    #[tokio::test]
    async fn test_cancelled_slot_is_dead() {
        let endpoint = serve(slow_router()).await;
        let client = client(&endpoint, 5_000);

        let mut slot = client.slot(ImageRequest::product(None, None));
        assert!(slot.is_alive());

        slot.cancel();
        assert!(!slot.is_alive());

        let outcome = slot.wait_until(client.deadline()).await;
        assert_eq!(outcome.error.as_deref(), Some("Request was cancelled"));
        assert!(!outcome.fetched);
    }

    #[tokio::test]
    async fn test_dead_slot_never_publishes() {
        let state = SlotState::default();
        state.alive.store(false, Ordering::SeqCst);
        state.publish(Ok("https://img.test/late.jpg".to_string()));
        assert_eq!(state.take(), None);
    }

    #[tokio::test]
    async fn test_disabled_client_never_fetches() {
        let mut config = Config {
            image_proxy_url: "http://127.0.0.1:9/random".to_string(),
            image_fetch_enabled: false,
            image_wait_ms: 1_000,
            request_timeout_secs: 1,
        };
        let client = ImageClient::new(&config).unwrap();

        let outcome = client
            .slot(ImageRequest::product(None, None).with_fallback(Some("/img/f.jpg")))
            .wait_until(client.deadline())
            .await;
        assert_eq!(outcome.url.as_deref(), Some("/img/f.jpg"));
        assert_eq!(outcome.error, None);

        config.image_fetch_enabled = true;
        let client = ImageClient::new(&config).unwrap();
        let logo = client.slot(ImageRequest::logo(Some("/logo.png")));
        assert_eq!(logo.url(client.deadline()).await.as_deref(), Some("/logo.png"));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client(&format!("http://{addr}/random"), 1_000);
        let result = client.fetch(&ImageRequest::product(None, None)).await;

        assert!(matches!(result, Err(ImageError::Transport(_))));
    }
}
