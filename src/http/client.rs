//! HTTP transport for the Unstructured API
//!
//! Handles:
//! - URL building relative to the configured endpoint
//! - The `Unstructured-API-Key` header on every request
//! - Status classification into typed API errors (422 validation bodies)
//! - JSON, multipart and streaming response bodies
//!
//! Every call is a single attempt. Nothing here retries.

use crate::config::{ClientConfig, API_KEY_HEADER};
use crate::error::{Error, HttpValidationError, Result};
use crate::types::JsonValue;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::multipart::Form;
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Body of an outgoing request
#[derive(Debug)]
pub enum RequestBody {
    /// JSON document
    Json(JsonValue),
    /// `multipart/form-data` upload
    Multipart(Form),
}

/// Configuration for a single request
#[derive(Debug, Default)]
pub struct RequestConfig {
    /// Query parameters, in insertion order
    pub query: Vec<(String, String)>,
    /// Request body
    pub body: Option<RequestBody>,
}

impl RequestConfig {
    /// Create a new request config
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Add a query parameter when the value is present
    #[must_use]
    pub fn query_opt(self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Append several query parameters
    #[must_use]
    pub fn queries(mut self, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Set JSON body
    #[must_use]
    pub fn json(mut self, body: JsonValue) -> Self {
        self.body = Some(RequestBody::Json(body));
        self
    }

    /// Set multipart body
    #[must_use]
    pub fn multipart(mut self, form: Form) -> Self {
        self.body = Some(RequestBody::Multipart(form));
        self
    }
}

/// Authenticated HTTP client bound to one API endpoint
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client from config
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(key) = &config.api_key {
            let mut value = HeaderValue::from_str(key)
                .map_err(|e| Error::config(format!("Invalid API key header value: {e}")))?;
            value.set_sensitive(true);
            headers.insert(API_KEY_HEADER, value);
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    /// Client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build a URL by appending path segments to the endpoint.
    ///
    /// A trailing empty segment yields a trailing slash (`sources/`).
    pub fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.config.endpoint.clone();
        {
            let mut path = url.path_segments_mut().map_err(|()| {
                Error::config(format!(
                    "Endpoint {} cannot be a base URL",
                    self.config.endpoint
                ))
            })?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }

    /// Send a request and return the successful response.
    ///
    /// Non-2xx statuses become [`Error::Api`]; a 422 body is decoded into
    /// its field-level validation errors when it has the expected shape.
    pub async fn send(
        &self,
        method: Method,
        segments: &[&str],
        config: RequestConfig,
    ) -> Result<Response> {
        let url = self.url(segments)?;
        debug!("{} {}", method, url);

        let mut req = self.client.request(method.clone(), url.clone());

        if !config.query.is_empty() {
            req = req.query(&config.query);
        }

        match config.body {
            Some(RequestBody::Json(body)) => req = req.json(&body),
            Some(RequestBody::Multipart(form)) => req = req.multipart(form),
            None => {}
        }

        let response = req.send().await.map_err(|e| self.transport_error(e))?;
        let status = response.status();

        if status.is_success() {
            debug!("Request succeeded: {} {} ({})", method, url, status.as_u16());
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;
        warn!("Request failed: {} {} ({})", method, url, status.as_u16());
        Err(api_error(status, body))
    }

    /// Send a request and decode the JSON response body
    pub async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        config: RequestConfig,
        operation: &str,
    ) -> Result<T> {
        let response = self.send(method, segments, config).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;
        serde_json::from_slice(&bytes).map_err(|e| Error::decode(operation, e))
    }

    /// Send a request and decode the body as an untyped JSON value.
    ///
    /// An empty body decodes to `null`.
    pub async fn request_value(
        &self,
        method: Method,
        segments: &[&str],
        config: RequestConfig,
        operation: &str,
    ) -> Result<JsonValue> {
        let response = self.send(method, segments, config).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonValue::Null);
        }
        serde_json::from_slice(&bytes).map_err(|e| Error::decode(operation, e))
    }

    /// Send a request and discard the response body
    pub async fn request_empty(
        &self,
        method: Method,
        segments: &[&str],
        config: RequestConfig,
    ) -> Result<()> {
        let response = self.send(method, segments, config).await?;
        // Drain so the connection goes back to the pool in a clean state.
        response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;
        Ok(())
    }

    fn transport_error(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            return Error::Timeout {
                timeout_ms: duration_ms(self.config.timeout),
            };
        }
        Error::Http(e)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Map a non-2xx status and body to an API error
pub(crate) fn api_error(status: StatusCode, body: String) -> Error {
    if status == StatusCode::UNPROCESSABLE_ENTITY {
        if let Ok(errors) = serde_json::from_str::<HttpValidationError>(&body) {
            return Error::Api {
                status: status.as_u16(),
                body: crate::error::ApiErrorBody::Validation(errors),
            };
        }
    }
    Error::api(status.as_u16(), body)
}

#[allow(clippy::cast_possible_truncation)]
fn duration_ms(duration: Duration) -> u64 {
    duration.as_millis() as u64
}
