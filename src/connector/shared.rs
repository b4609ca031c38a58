//! Connectors usable as both a source and a destination
//!
//! Each struct is the superset of the fields either side accepts; fields
//! only one side requires are optional.

use super::ConnectorConfig;
use serde::{Deserialize, Serialize};

/// Amazon S3 or an S3-compatible object store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct S3ConnectorConfig {
    pub remote_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anonymous: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recursive: Option<bool>,
}

impl ConnectorConfig for S3ConnectorConfig {
    const CONNECTOR_TYPE: &'static str = "s3";
}

/// Google Cloud Storage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GcsConnectorConfig {
    pub remote_url: String,
    pub service_account_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recursive: Option<bool>,
}

impl ConnectorConfig for GcsConnectorConfig {
    const CONNECTOR_TYPE: &'static str = "gcs";
}

/// PostgreSQL table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostgresConnectorConfig {
    pub host: String,
    pub database: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub table_name: String,
    pub batch_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_column: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

impl ConnectorConfig for PostgresConnectorConfig {
    const CONNECTOR_TYPE: &'static str = "postgres";
}

/// Snowflake table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnowflakeConnectorConfig {
    pub account: String,
    pub role: String,
    pub user: String,
    pub password: String,
    pub host: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    pub database: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_column: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id_key: Option<String>,
}

impl ConnectorConfig for SnowflakeConnectorConfig {
    const CONNECTOR_TYPE: &'static str = "snowflake";
}

/// Couchbase collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CouchbaseConnectorConfig {
    pub bucket: String,
    pub connection_string: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
    pub batch_size: u32,
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
}

impl ConnectorConfig for CouchbaseConnectorConfig {
    const CONNECTOR_TYPE: &'static str = "couchbase";
}

/// Elasticsearch index
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElasticsearchConnectorConfig {
    pub hosts: Vec<String>,
    pub index_name: String,
    pub es_api_key: String,
}

impl ConnectorConfig for ElasticsearchConnectorConfig {
    const CONNECTOR_TYPE: &'static str = "elasticsearch";
}

/// MongoDB collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MongoDbConnectorConfig {
    pub database: String,
    pub collection: String,
    pub uri: String,
}

impl ConnectorConfig for MongoDbConnectorConfig {
    const CONNECTOR_TYPE: &'static str = "mongodb";
}

/// Microsoft OneDrive, authenticated through Microsoft Graph
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OneDriveConnectorConfig {
    pub client_id: String,
    pub user_pname: String,
    pub tenant: String,
    pub authority_url: String,
    pub client_cred: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recursive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_url: Option<String>,
}

impl ConnectorConfig for OneDriveConnectorConfig {
    const CONNECTOR_TYPE: &'static str = "onedrive";
}

/// Databricks Unity Catalog volume
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabricksVolumesConnectorConfig {
    pub host: String,
    pub catalog: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    pub volume: String,
    pub volume_path: String,
    pub client_secret: String,
    pub client_id: String,
}

impl ConnectorConfig for DatabricksVolumesConnectorConfig {
    const CONNECTOR_TYPE: &'static str = "databricks_volumes";
}

/// Confluent Cloud Kafka topic
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KafkaCloudConnectorConfig {
    pub bootstrap_servers: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    pub topic: String,
    pub kafka_api_key: String,
    pub secret: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_messages_to_consume: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<u32>,
}

impl ConnectorConfig for KafkaCloudConnectorConfig {
    const CONNECTOR_TYPE: &'static str = "kafka-cloud";
}
