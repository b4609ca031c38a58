//! Error types for the Unstructured client
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::node::NodeOrderErrors;

/// The main error type for the Unstructured client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Request cancelled")]
    Cancelled,

    // ============================================================================
    // API Errors
    // ============================================================================
    #[error("API error occurred: status {status}: {body}")]
    Api { status: u16, body: ApiErrorBody },

    // ============================================================================
    // Decode Errors
    // ============================================================================
    #[error("Failed to decode {operation} response: {source}")]
    Decode {
        operation: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Unknown {registry} type: {discriminator}")]
    UnknownVariant {
        registry: &'static str,
        discriminator: String,
    },

    // ============================================================================
    // Local Validation Errors
    // ============================================================================
    #[error("Invalid workflow node order: {0}")]
    NodeOrder(#[from] NodeOrderErrors),

    #[error("Invalid model {model} for {provider} embedder")]
    InvalidModel { provider: String, model: String },

    #[error("Unknown embedder subtype: {subtype}")]
    UnknownEmbedderProvider { subtype: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a generic API error carrying the raw response body
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: ApiErrorBody::Message(body.into()),
        }
    }

    /// Create a decode error for the named operation
    pub fn decode(operation: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            operation: operation.into(),
            source,
        }
    }

    /// Create an unknown discriminator error
    pub fn unknown_variant(registry: &'static str, discriminator: impl Into<String>) -> Self {
        Self::UnknownVariant {
            registry,
            discriminator: discriminator.into(),
        }
    }

    /// HTTP status code of an API error, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Structured field-level errors of a 422 response
    pub fn validation_errors(&self) -> Option<&HttpValidationError> {
        match self {
            Error::Api {
                body: ApiErrorBody::Validation(errors),
                ..
            } => Some(errors),
            _ => None,
        }
    }

    /// Check if this error came from a non-2xx response
    pub fn is_api(&self) -> bool {
        matches!(self, Error::Api { .. })
    }

    /// Check if the request was cancelled by the caller
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }

    /// Check if the request timed out
    pub fn is_timeout(&self) -> bool {
        match self {
            Error::Timeout { .. } => true,
            Error::Http(e) => e.is_timeout(),
            _ => false,
        }
    }

    /// Check if this error is a local validation failure raised before any request
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::NodeOrder(_) | Error::InvalidModel { .. } | Error::UnknownEmbedderProvider { .. }
        )
    }
}

// ============================================================================
// API error bodies
// ============================================================================

/// Body of a non-2xx response
#[derive(Debug, Clone, PartialEq)]
pub enum ApiErrorBody {
    /// 422 response decoded into field-level errors
    Validation(HttpValidationError),
    /// Any other response, kept as raw text
    Message(String),
}

impl fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorBody::Validation(errors) => write!(f, "{errors}"),
            ApiErrorBody::Message(message) => f.write_str(message),
        }
    }
}

/// Validation error response returned with status 422
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HttpValidationError {
    #[serde(default)]
    pub detail: Vec<ValidationError>,
}

impl HttpValidationError {
    /// Number of field-level errors
    pub fn len(&self) -> usize {
        self.detail.len()
    }

    /// Whether the response carried no field-level errors
    pub fn is_empty(&self) -> bool {
        self.detail.is_empty()
    }

    /// Iterate the field-level errors
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.detail.iter()
    }
}

impl<'a> IntoIterator for &'a HttpValidationError {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.detail.iter()
    }
}

impl fmt::Display for HttpValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation errors: ", self.detail.len())?;
        for (i, error) in self.detail.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for HttpValidationError {}

/// A single field-level validation error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Path to the offending field; entries are field names or indices
    #[serde(rename = "loc", default)]
    pub location: Vec<serde_json::Value>,
    /// Human readable description
    #[serde(rename = "msg")]
    pub message: String,
    /// Machine readable error kind
    #[serde(rename = "type")]
    pub kind: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let location = self
            .location
            .iter()
            .map(|part| match part {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{} at [{}]: {}", self.kind, location, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Result type alias for the Unstructured client
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| wrap(message.into(), e.into()))
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| wrap(f(), e.into()))
    }
}

/// Prefix an error with operation context.
///
/// Errors callers match on (API status, cancellation, timeouts, local
/// validation) pass through untouched so they stay inspectable.
fn wrap(message: String, inner: Error) -> Error {
    match inner {
        Error::Api { .. }
        | Error::Cancelled
        | Error::Timeout { .. }
        | Error::Http(_)
        | Error::Decode { .. }
        | Error::UnknownVariant { .. }
        | Error::NodeOrder(_)
        | Error::InvalidModel { .. }
        | Error::UnknownEmbedderProvider { .. } => inner,
        Error::JsonParse(source) => Error::Decode {
            operation: message,
            source,
        },
        other => Error::Other(format!("{message}: {other}")),
    }
}
