//! Unstructured API client
//!
//! [`Client`] exposes one `async fn` per API operation, grouped by resource:
//!
//! - **Sources / destinations**: create, list, get, update, delete and
//!   connection checks
//! - **Workflows**: create, list, get, update, delete, run
//! - **Jobs**: list, get, cancel, details, failed files, download
//!
//! Every operation is a single HTTP attempt. Dropping the returned future
//! aborts the request; [`Client::cancellable`] ties an operation to a
//! [`CancellationToken`] instead.
//!
//! # Example
//!
//! ```rust,no_run
//! use unstructured_client::{Client, ClientConfig};
//!
//! # async fn run() -> unstructured_client::Result<()> {
//! let config = ClientConfig::builder().api_key("my-key").build()?;
//! let client = Client::new(config)?;
//!
//! for source in client.list_sources(Some("s3")).await? {
//!     println!("{} {}", source.id, source.name);
//! }
//! # Ok(())
//! # }
//! ```

mod connectors;
mod jobs;
mod workflows;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::HttpClient;
use std::future::Future;
use tokio_util::sync::CancellationToken;

/// Client for the Unstructured platform API
#[derive(Debug, Clone)]
pub struct Client {
    http: HttpClient,
}

impl Client {
    /// Create a client from an explicit config
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(config)?,
        })
    }

    /// Create a client configured from `UNSTRUCTURED_API_URL` and
    /// `UNSTRUCTURED_API_KEY`
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env())
    }

    /// Configuration this client was built with
    pub fn config(&self) -> &ClientConfig {
        self.http.config()
    }

    /// Underlying transport
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Run `operation` until it finishes or `token` is cancelled.
    ///
    /// Cancellation drops the in-flight request and yields
    /// [`Error::Cancelled`].
    pub async fn cancellable<T, F>(token: &CancellationToken, operation: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        tokio::select! {
            biased;

            () = token.cancelled() => {
                tracing::debug!("Operation cancelled");
                Err(Error::Cancelled)
            }
            result = operation => result,
        }
    }
}
