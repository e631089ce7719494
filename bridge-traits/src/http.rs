//! HTTP Client Abstraction
//!
//! Provides async HTTP operations with bearer authentication and TLS support.

use async_trait::async_trait;
use bytes::Bytes;
use serde::Serialize;
use std::collections::HashMap;
use std::time::Duration;

use crate::error::{BridgeError, Result};

/// HTTP method types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// HTTP request builder
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub body: Option<Bytes>,
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            body: None,
            timeout: None,
        }
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn bearer_token(self, token: impl Into<String>) -> Self {
        self.header("Authorization", format!("Bearer {}", token.into()))
    }

    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self> {
        let json = serde_json::to_vec(body).map_err(|e| {
            BridgeError::OperationFailed(format!("JSON serialization failed: {}", e))
        })?;
        self.body = Some(Bytes::from(json));
        self.headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        Ok(self)
    }

    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }
}

/// HTTP response
#[derive(Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: Bytes,
}

impl HttpResponse {
    /// Check if response status is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Async HTTP client trait
///
/// Abstracts HTTP transport so connectors can be tested against fakes and
/// platforms can supply their own stacks. Implementations handle:
/// - TLS certificate validation
/// - Connection pooling and keep-alive
/// - Per-request timeouts (via [`HttpRequest::timeout`])
///
/// Implementations must NOT retry requests. The write operations issued
/// through this trait are not idempotent (a replayed append duplicates
/// items), so retry policy belongs to the caller, which has the context to
/// retry safely.
///
/// # Example
///
/// ```ignore
/// use bridge_traits::http::{HttpClient, HttpRequest, HttpMethod, HttpResponse};
///
/// async fn fetch_data(client: &dyn HttpClient) -> Result<HttpResponse> {
///     let request = HttpRequest::new(HttpMethod::Get, "https://api.example.com/data")
///         .bearer_token("token");
///
///     client.execute(request).await
/// }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Execute an HTTP request exactly once
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Network connection fails
    /// - TLS validation fails
    /// - Request times out
    ///
    /// A response that arrives is returned whatever its status code;
    /// status classification is the caller's concern.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// Callback fired when the remote service rejects the bearer credential.
///
/// Injected into the component that needs it rather than registered in
/// process-wide state, so independent connectors can react differently.
/// Fired at most once per failing request, before the typed error
/// propagates; it must not block for long.
pub trait AuthFailureHook: Send + Sync {
    fn on_auth_failure(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_request_builder() {
        let request = HttpRequest::new(HttpMethod::Get, "https://example.com")
            .header("User-Agent", "test")
            .bearer_token("secret")
            .timeout(Duration::from_secs(30));

        assert_eq!(request.url, "https://example.com");
        assert_eq!(request.headers.get("User-Agent"), Some(&"test".to_string()));
        assert_eq!(
            request.headers.get("Authorization"),
            Some(&"Bearer secret".to_string())
        );
    }

    #[test]
    fn test_json_body_sets_content_type() {
        #[derive(Serialize)]
        struct Payload {
            uris: Vec<String>,
        }

        let request = HttpRequest::new(HttpMethod::Put, "https://example.com")
            .json(&Payload { uris: vec![] })
            .unwrap();

        assert_eq!(
            request.headers.get("Content-Type"),
            Some(&"application/json".to_string())
        );
        assert_eq!(request.body.as_deref(), Some(br#"{"uris":[]}"#.as_slice()));
    }

    #[test]
    fn test_http_response_status_checks() {
        let success = HttpResponse {
            status: 204,
            headers: HashMap::new(),
            body: Bytes::new(),
        };
        assert!(success.is_success());

        let rejected = HttpResponse {
            status: 401,
            headers: HashMap::new(),
            body: Bytes::new(),
        };
        assert!(!rejected.is_success());
    }
}
