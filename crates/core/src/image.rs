//! Image proxy requests and response interpretation.
//!
//! The proxy is asked for a photo matching a search query. Every failure
//! degrades to a fallback image; the error only ever gets logged. The actual
//! HTTP call lives in the server crate.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::resolve::non_blank;

/// Query used when nothing more specific is known.
pub const DEFAULT_QUERY: &str = "coffee business";

/// Why an image could not be fetched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Image service temporarily unavailable.")]
    Unavailable,

    #[error("Image service authentication failed.")]
    Unauthorized,

    #[error("Failed to fetch image (HTTP {0})")]
    Status(u16),

    #[error("{0}")]
    Rejected(String),

    #[error("No image data received")]
    NoData,

    #[error("Request timed out")]
    Timeout,

    #[error("Network connection failed: {0}")]
    Transport(String),

    #[error("Request was cancelled")]
    Cancelled,
}

/// The JSON body sent to the proxy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageQuery {
    pub query: String,
}

/// What an image slot should do for one rendered image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    pub provided: Option<String>,
    pub fallback: Option<String>,
    pub query: String,
    pub skip_fetch: bool,
}

impl ImageRequest {
    pub fn new(provided: Option<&str>, query: impl Into<String>) -> Self {
        Self {
            provided: non_blank(provided).map(str::to_string),
            fallback: None,
            query: query.into(),
            skip_fetch: false,
        }
    }

    /// A product card image: `"<name> coffee"`, or `"coffee product"`.
    pub fn product(provided: Option<&str>, product_name: Option<&str>) -> Self {
        let query = match non_blank(product_name) {
            Some(name) => format!("{name} coffee"),
            None => "coffee product".to_string(),
        };
        Self::new(provided, query)
    }

    /// A hero background: `"<business> interior"`.
    pub fn hero(provided: Option<&str>, business_type: Option<&str>) -> Self {
        let business = non_blank(business_type).unwrap_or("coffee shop");
        Self::new(provided, format!("{business} interior"))
    }

    /// Logos are never fetched.
    pub fn logo(provided: Option<&str>) -> Self {
        Self {
            skip_fetch: true,
            ..Self::new(provided, DEFAULT_QUERY)
        }
    }

    pub fn with_fallback(mut self, fallback: Option<&str>) -> Self {
        self.fallback = non_blank(fallback).map(str::to_string);
        self
    }

    /// True when the proxy has to be asked.
    pub fn needs_fetch(&self) -> bool {
        self.provided.is_none() && !self.skip_fetch
    }

    /// The image shown without fetching: provided, else fallback.
    pub fn immediate(&self) -> Option<String> {
        self.provided.clone().or_else(|| self.fallback.clone())
    }

    pub fn body(&self) -> ImageQuery {
        ImageQuery {
            query: self.query.clone(),
        }
    }
}

/// Maps a non-success HTTP status to its error.
pub fn status_error(status: u16) -> ImageError {
    match status {
        429 => ImageError::RateLimited,
        503 => ImageError::Unavailable,
        401 => ImageError::Unauthorized,
        other => ImageError::Status(other),
    }
}

/// Interprets a proxy response: `{ success: true, photo: { urls: { regular } } }`.
///
/// # Examples
///
/// ```
/// use vitrine_core::image::{interpret_response, ImageError};
///
/// let body = br#"{ "success": true, "photo": { "urls": { "regular": "https://img/1.jpg" } } }"#;
/// assert_eq!(interpret_response(200, body), Ok("https://img/1.jpg".to_string()));
/// assert_eq!(interpret_response(429, b""), Err(ImageError::RateLimited));
/// ```
pub fn interpret_response(status: u16, body: &[u8]) -> Result<String, ImageError> {
    if !(200..300).contains(&status) {
        return Err(status_error(status));
    }

    let payload: Value = serde_json::from_slice(body).map_err(|_| ImageError::NoData)?;
    let success = payload.get("success").and_then(Value::as_bool).unwrap_or(false);
    let url = payload
        .pointer("/photo/urls/regular")
        .and_then(Value::as_str)
        .filter(|url| !url.trim().is_empty());

    match (success, url) {
        (true, Some(url)) => Ok(url.to_string()),
        _ => match payload.get("error").and_then(Value::as_str) {
            Some(message) if !message.trim().is_empty() => Err(ImageError::Rejected(message.to_string())),
            _ => Err(ImageError::NoData),
        },
    }
}

/// The final state of one image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageOutcome {
    pub url: Option<String>,
    pub error: Option<String>,
    /// True when the image came from the proxy rather than the content.
    pub fetched: bool,
}

impl ImageOutcome {
    /// Outcome for a request that needs no fetch.
    pub fn immediate(request: &ImageRequest) -> Self {
        Self {
            url: request.immediate(),
            error: None,
            fetched: false,
        }
    }

    /// Outcome for a finished fetch. Errors fall back.
    pub fn from_fetch(request: &ImageRequest, result: Result<String, ImageError>) -> Self {
        match result {
            Ok(url) => Self {
                url: Some(url),
                error: None,
                fetched: true,
            },
            Err(err) => Self {
                url: request.fallback.clone(),
                error: Some(err.to_string()),
                fetched: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_helpers() {
        assert_eq!(ImageRequest::product(None, Some("Robusta")).query, "Robusta coffee");
        assert_eq!(ImageRequest::product(None, Some("  ")).query, "coffee product");
        assert_eq!(ImageRequest::hero(None, None).query, "coffee shop interior");
        assert_eq!(ImageRequest::hero(None, Some("roastery")).query, "roastery interior");
    }

    #[test]
    fn test_provided_image_skips_fetch() {
        let request = ImageRequest::product(Some("/img/a.jpg"), Some("Arabica"));
        assert!(!request.needs_fetch());
        assert_eq!(request.immediate().as_deref(), Some("/img/a.jpg"));
    }

    #[test]
    fn test_blank_provided_image_fetches() {
        let request = ImageRequest::product(Some("   "), None);
        assert!(request.needs_fetch());
    }

    #[test]
    fn test_logo_never_fetches() {
        let request = ImageRequest::logo(None).with_fallback(Some("/logo.svg"));
        assert!(!request.needs_fetch());
        assert_eq!(ImageOutcome::immediate(&request).url.as_deref(), Some("/logo.svg"));
        assert_eq!(ImageOutcome::immediate(&ImageRequest::logo(None)).url, None);
    }

    #[test]
    fn test_status_errors() {
        assert_eq!(interpret_response(503, b"{}"), Err(ImageError::Unavailable));
        assert_eq!(interpret_response(401, b"{}"), Err(ImageError::Unauthorized));
        assert_eq!(interpret_response(500, b"{}"), Err(ImageError::Status(500)));
        assert_eq!(
            ImageError::Status(500).to_string(),
            "Failed to fetch image (HTTP 500)"
        );
    }

    #[test]
    fn test_rejected_payload() {
        let body = br#"{ "success": false, "error": "quota" }"#;
        assert_eq!(interpret_response(200, body), Err(ImageError::Rejected("quota".to_string())));
        let body = br#"{ "success": false }"#;
        assert_eq!(interpret_response(200, body), Err(ImageError::NoData));
    }

    #[test]
    fn test_malformed_payloads() {
        assert_eq!(interpret_response(200, b"<html>"), Err(ImageError::NoData));
        let body = br#"{ "success": true, "photo": { "urls": {} } }"#;
        assert_eq!(interpret_response(200, body), Err(ImageError::NoData));
    }

    #[test]
    fn test_outcome_falls_back() {
        let request = ImageRequest::product(None, None).with_fallback(Some("/fallback.jpg"));
        let outcome = ImageOutcome::from_fetch(&request, Err(ImageError::Timeout));
        assert_eq!(outcome.url.as_deref(), Some("/fallback.jpg"));
        assert_eq!(outcome.error.as_deref(), Some("Request timed out"));
        assert!(!outcome.fetched);

        let outcome = ImageOutcome::from_fetch(&request, Ok("https://img/2.jpg".to_string()));
        assert_eq!(outcome.url.as_deref(), Some("https://img/2.jpg"));
        assert!(outcome.fetched);
    }
}
