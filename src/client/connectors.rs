//! Source and destination operations
//!
//! Both resources share one set of endpoints under different collection
//! paths, so each public method delegates to a generic helper.

use super::Client;
use crate::connector::{
    Connector, CreateConnectorRequest, CreateDestinationRequest, CreateSourceRequest, Destination,
    Source, TaggedConfig, UpdateConnectorRequest, UpdateDestinationRequest, UpdateSourceRequest,
};
use crate::error::{Result, ResultExt};
use crate::http::RequestConfig;
use crate::types::ConnectionCheck;
use reqwest::Method;

const CONNECTION_CHECK: &str = "connection-check";

/// Path and naming of one connector collection
struct Collection {
    path: &'static str,
    type_query: &'static str,
    noun: &'static str,
}

const SOURCES: Collection = Collection {
    path: "sources",
    type_query: "source_type",
    noun: "source",
};

const DESTINATIONS: Collection = Collection {
    path: "destinations",
    type_query: "destination_type",
    noun: "destination",
};

// ============================================================================
// Sources
// ============================================================================

impl Client {
    /// Create a source connector
    pub async fn create_source(&self, request: &CreateSourceRequest) -> Result<Source> {
        self.create_connector(&SOURCES, request).await
    }

    /// List source connectors, optionally filtered by connector type
    pub async fn list_sources(&self, source_type: Option<&str>) -> Result<Vec<Source>> {
        self.list_connectors(&SOURCES, source_type).await
    }

    /// Get a source connector by id
    pub async fn get_source(&self, id: &str) -> Result<Source> {
        self.get_connector(&SOURCES, id).await
    }

    /// Replace the config of a source connector.
    ///
    /// Fields left as `None` are reset by the server, not kept.
    pub async fn update_source(&self, request: &UpdateSourceRequest) -> Result<Source> {
        self.update_connector(&SOURCES, request).await
    }

    /// Delete a source connector
    pub async fn delete_source(&self, id: &str) -> Result<()> {
        self.delete_connector(&SOURCES, id).await
    }

    /// Schedule a connection check for a source
    pub async fn create_source_connection_check(&self, id: &str) -> Result<ConnectionCheck> {
        self.connection_check(&SOURCES, Method::POST, id).await
    }

    /// Fetch the latest connection check of a source
    pub async fn get_source_connection_check(&self, id: &str) -> Result<ConnectionCheck> {
        self.connection_check(&SOURCES, Method::GET, id).await
    }
}

// ============================================================================
// Destinations
// ============================================================================

impl Client {
    /// Create a destination connector
    pub async fn create_destination(
        &self,
        request: &CreateDestinationRequest,
    ) -> Result<Destination> {
        self.create_connector(&DESTINATIONS, request).await
    }

    /// List destination connectors, optionally filtered by connector type
    pub async fn list_destinations(
        &self,
        destination_type: Option<&str>,
    ) -> Result<Vec<Destination>> {
        self.list_connectors(&DESTINATIONS, destination_type).await
    }

    /// Get a destination connector by id
    pub async fn get_destination(&self, id: &str) -> Result<Destination> {
        self.get_connector(&DESTINATIONS, id).await
    }

    /// Replace the config of a destination connector.
    ///
    /// Fields left as `None` are reset by the server, not kept.
    pub async fn update_destination(
        &self,
        request: &UpdateDestinationRequest,
    ) -> Result<Destination> {
        self.update_connector(&DESTINATIONS, request).await
    }

    /// Delete a destination connector
    pub async fn delete_destination(&self, id: &str) -> Result<()> {
        self.delete_connector(&DESTINATIONS, id).await
    }

    /// Schedule a connection check for a destination
    pub async fn create_destination_connection_check(&self, id: &str) -> Result<ConnectionCheck> {
        self.connection_check(&DESTINATIONS, Method::POST, id).await
    }

    /// Fetch the latest connection check of a destination
    pub async fn get_destination_connection_check(&self, id: &str) -> Result<ConnectionCheck> {
        self.connection_check(&DESTINATIONS, Method::GET, id).await
    }
}

// ============================================================================
// Shared implementation
// ============================================================================

impl Client {
    async fn create_connector<C: TaggedConfig>(
        &self,
        collection: &Collection,
        request: &CreateConnectorRequest<C>,
    ) -> Result<Connector<C>> {
        let operation = format!("create {}", collection.noun);
        let body = serde_json::to_value(request)?;
        self.http
            .request_value(
                Method::POST,
                &[collection.path, ""],
                RequestConfig::new().json(body),
                &operation,
            )
            .await
            .and_then(Connector::from_value)
            .with_context(|| format!("failed to {operation}"))
    }

    async fn list_connectors<C: TaggedConfig>(
        &self,
        collection: &Collection,
        connector_type: Option<&str>,
    ) -> Result<Vec<Connector<C>>> {
        let operation = format!("list {}s", collection.noun);
        let config = RequestConfig::new().query_opt(collection.type_query, connector_type);
        self.http
            .request_value(Method::GET, &[collection.path, ""], config, &operation)
            .await
            .and_then(Connector::list_from_value)
            .with_context(|| format!("failed to {operation}"))
    }

    async fn get_connector<C: TaggedConfig>(
        &self,
        collection: &Collection,
        id: &str,
    ) -> Result<Connector<C>> {
        let operation = format!("get {}", collection.noun);
        self.http
            .request_value(Method::GET, &[collection.path, id], RequestConfig::new(), &operation)
            .await
            .and_then(Connector::from_value)
            .with_context(|| format!("failed to {operation}"))
    }

    async fn update_connector<C: TaggedConfig>(
        &self,
        collection: &Collection,
        request: &UpdateConnectorRequest<C>,
    ) -> Result<Connector<C>> {
        let operation = format!("update {}", collection.noun);
        let body = serde_json::to_value(request)?;
        self.http
            .request_value(
                Method::PUT,
                &[collection.path, &request.id],
                RequestConfig::new().json(body),
                &operation,
            )
            .await
            .and_then(Connector::from_value)
            .with_context(|| format!("failed to {operation}"))
    }

    async fn delete_connector(&self, collection: &Collection, id: &str) -> Result<()> {
        self.http
            .request_empty(Method::DELETE, &[collection.path, id], RequestConfig::new())
            .await
            .with_context(|| format!("failed to delete {}", collection.noun))
    }

    async fn connection_check(
        &self,
        collection: &Collection,
        method: Method,
        id: &str,
    ) -> Result<ConnectionCheck> {
        let verb = if method == Method::POST { "create" } else { "get" };
        let operation = format!("{verb} {} connection check", collection.noun);
        self.http
            .request_json(
                method,
                &[collection.path, id, CONNECTION_CHECK],
                RequestConfig::new(),
                &operation,
            )
            .await
            .with_context(|| format!("failed to {operation}"))
    }
}
