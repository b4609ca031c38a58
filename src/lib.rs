// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # Unstructured API client
//!
//! A typed async client for the Unstructured document-processing platform.
//!
//! ## Features
//!
//! - **Connectors**: Sources and destinations as tagged configs, decoded
//!   through a discriminator registry
//! - **Workflows**: Typed workflow nodes with local node-order and embedder
//!   model validation before any request is sent
//! - **Jobs**: Status, per-node details, failed files and streamed output
//! - **Errors**: One error type; 422 responses keep their field-level detail
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use unstructured_client::node::{ChunkerTitle, PartitionerFast, WorkflowNode};
//! use unstructured_client::workflow::{CreateWorkflowRequest, WorkflowType};
//! use unstructured_client::{Client, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Reads UNSTRUCTURED_API_URL and UNSTRUCTURED_API_KEY
//!     let client = Client::from_env()?;
//!
//!     let request = CreateWorkflowRequest::new("reports", WorkflowType::Custom)
//!         .source_id("source-id")
//!         .destination_id("destination-id")
//!         .nodes(vec![
//!             WorkflowNode::new("Partitioner", PartitionerFast::default()),
//!             WorkflowNode::new("Chunker", ChunkerTitle::default()),
//!         ]);
//!
//!     let workflow = client.create_workflow(&request).await?;
//!     println!("created {}", workflow.id);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          Client                             │
//! │   sources · destinations · workflows · jobs                 │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//! ┌────────────┬────────────────┼──────────────┬────────────────┐
//! │    HTTP    │   Connector    │     Node     │  Workflow/Job  │
//! ├────────────┼────────────────┼──────────────┼────────────────┤
//! │ API key    │ SourceConfig   │ Partitioner  │ Requests       │
//! │ 422 detail │ DestConfig     │ Chunker      │ Records        │
//! │ Multipart  │ Registry       │ Embedder     │ Download       │
//! │ Streaming  │ Envelope       │ Enricher     │                │
//! └────────────┴────────────────┴──────────────┴────────────────┘
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// HTTP transport
pub mod http;

/// Discriminator registries for tagged configs
pub mod registry;

/// Source and destination connector configs
pub mod connector;

/// Workflow nodes and node-order validation
pub mod node;

/// Workflow records and requests
pub mod workflow;

/// Job records, requests and downloads
pub mod job;

/// API client
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::Client;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, Result, ResultExt};
pub use types::*;

pub use tokio_util::sync::CancellationToken;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
