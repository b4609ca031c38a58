//! Destination connector configs

use crate::registry::connector_configs;
use super::shared::*;
use super::ConnectorConfig;
use serde::{Deserialize, Serialize};

connector_configs! {
    /// Configuration of a destination connector, one variant per destination type
    pub enum DestinationConfig: "destination" {
        AstraDb(AstraDbConnectorConfig),
        AzureAiSearch(AzureAiSearchConnectorConfig),
        Couchbase(CouchbaseConnectorConfig),
        DatabricksVolumes(DatabricksVolumesConnectorConfig),
        DatabricksVolumeDeltaTables(DatabricksVolumeDeltaTablesConnectorConfig),
        DeltaTable(DeltaTableConnectorConfig),
        Elasticsearch(ElasticsearchConnectorConfig),
        Gcs(GcsConnectorConfig),
        KafkaCloud(KafkaCloudConnectorConfig),
        Milvus(MilvusConnectorConfig),
        MongoDb(MongoDbConnectorConfig),
        MotherDuck(MotherDuckConnectorConfig),
        Neo4j(Neo4jConnectorConfig),
        OneDrive(OneDriveConnectorConfig),
        Pinecone(PineconeConnectorConfig),
        Postgres(PostgresConnectorConfig),
        QdrantCloud(QdrantCloudConnectorConfig),
        Redis(RedisConnectorConfig),
        S3(S3ConnectorConfig),
        Snowflake(SnowflakeConnectorConfig),
        WeaviateCloud(WeaviateCloudConnectorConfig),
        IbmWatsonxS3(IbmWatsonxS3ConnectorConfig),
    }
}

/// DataStax Astra DB collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AstraDbConnectorConfig {
    pub collection_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyspace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<u32>,
    pub api_endpoint: String,
    pub token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flatten_metadata: Option<bool>,
}

impl ConnectorConfig for AstraDbConnectorConfig {
    const CONNECTOR_TYPE: &'static str = "astradb";
}

/// Azure AI Search index
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AzureAiSearchConnectorConfig {
    pub endpoint: String,
    pub index: String,
    pub key: String,
}

impl ConnectorConfig for AzureAiSearchConnectorConfig {
    const CONNECTOR_TYPE: &'static str = "azure_ai_search";
}

/// Databricks Delta table staged through a volume
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabricksVolumeDeltaTablesConnectorConfig {
    pub server_hostname: String,
    pub http_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    pub catalog: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    pub volume: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_path: Option<String>,
}

impl ConnectorConfig for DatabricksVolumeDeltaTablesConnectorConfig {
    const CONNECTOR_TYPE: &'static str = "databricks_volume_delta_tables";
}

/// Delta Lake table on S3
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeltaTableConnectorConfig {
    pub aws_access_key_id: String,
    pub aws_secret_access_key: String,
    pub aws_region: String,
    pub table_uri: String,
}

impl ConnectorConfig for DeltaTableConnectorConfig {
    const CONNECTOR_TYPE: &'static str = "delta_table";
}

/// Milvus collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MilvusConnectorConfig {
    pub uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_name: Option<String>,
    pub collection_name: String,
    pub record_id_key: String,
}

impl ConnectorConfig for MilvusConnectorConfig {
    const CONNECTOR_TYPE: &'static str = "milvus";
}

/// MotherDuck table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotherDuckConnectorConfig {
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
    pub record_id_key: Option<String>,
}

impl ConnectorConfig for MotherDuckConnectorConfig {
    const CONNECTOR_TYPE: &'static str = "motherduck";
}

/// Neo4j graph database
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Neo4jConnectorConfig {
    pub uri: String,
    pub database: String,
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<u32>,
}

impl ConnectorConfig for Neo4jConnectorConfig {
    const CONNECTOR_TYPE: &'static str = "neo4j";
}

/// Pinecone index
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PineconeConnectorConfig {
    pub index_name: String,
    pub api_key: String,
    pub namespace: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<u32>,
}

impl ConnectorConfig for PineconeConnectorConfig {
    const CONNECTOR_TYPE: &'static str = "pinecone";
}

/// Qdrant Cloud collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QdrantCloudConnectorConfig {
    pub url: String,
    pub api_key: String,
    pub collection_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<u32>,
}

impl ConnectorConfig for QdrantCloudConnectorConfig {
    const CONNECTOR_TYPE: &'static str = "qdrant-cloud";
}

/// Redis database, addressed by host or URI
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedisConnectorConfig {
    pub host: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<u32>,
}

impl ConnectorConfig for RedisConnectorConfig {
    const CONNECTOR_TYPE: &'static str = "redis";
}

/// Weaviate Cloud collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaviateCloudConnectorConfig {
    pub cluster_url: String,
    pub api_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
}

impl ConnectorConfig for WeaviateCloudConnectorConfig {
    const CONNECTOR_TYPE: &'static str = "weaviate-cloud";
}

/// IBM watsonx.data Iceberg table on object storage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IbmWatsonxS3ConnectorConfig {
    pub iam_api_key: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub iceberg_endpoint: String,
    pub object_storage_endpoint: String,
    pub object_storage_region: String,
    pub catalog: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_retries_connection: Option<u32>,
    pub namespace: String,
    pub table: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_retries: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id_key: Option<String>,
}

impl ConnectorConfig for IbmWatsonxS3ConnectorConfig {
    const CONNECTOR_TYPE: &'static str = "ibm_watsonx_s3";
}
