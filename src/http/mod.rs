//! HTTP transport module
//!
//! Thin wrapper over `reqwest` bound to one API endpoint.
//!
//! # Features
//!
//! - **Authentication**: `Unstructured-API-Key` header on every request
//! - **Error Mapping**: Non-2xx statuses become typed API errors, 422 bodies
//!   keep their field-level detail
//! - **Bodies**: JSON, multipart uploads and streamed downloads

mod client;

pub use client::{HttpClient, RequestBody, RequestConfig};
