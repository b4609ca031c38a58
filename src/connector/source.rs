//! Source connector configs

use crate::registry::connector_configs;
use super::shared::*;
use super::ConnectorConfig;
use serde::{Deserialize, Serialize};

connector_configs! {
    /// Configuration of a source connector, one variant per source type
    pub enum SourceConfig: "source" {
        Azure(AzureSourceConnectorConfig),
        Box(BoxSourceConnectorConfig),
        Confluence(ConfluenceSourceConnectorConfig),
        Couchbase(CouchbaseConnectorConfig),
        DatabricksVolumes(DatabricksVolumesConnectorConfig),
        Dropbox(DropboxSourceConnectorConfig),
        Elasticsearch(ElasticsearchConnectorConfig),
        Gcs(GcsConnectorConfig),
        GoogleDrive(GoogleDriveSourceConnectorConfig),
        Jira(JiraSourceConnectorConfig),
        KafkaCloud(KafkaCloudConnectorConfig),
        MongoDb(MongoDbConnectorConfig),
        OneDrive(OneDriveConnectorConfig),
        Outlook(OutlookSourceConnectorConfig),
        Postgres(PostgresConnectorConfig),
        S3(S3ConnectorConfig),
        Salesforce(SalesforceSourceConnectorConfig),
        SharePoint(SharePointSourceConnectorConfig),
        Slack(SlackSourceConnectorConfig),
        Snowflake(SnowflakeConnectorConfig),
        Zendesk(ZendeskSourceConnectorConfig),
    }
}

/// Azure Blob Storage container
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AzureSourceConnectorConfig {
    pub remote_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sas_token: Option<String>,
    pub recursive: bool,
}

impl ConnectorConfig for AzureSourceConnectorConfig {
    const CONNECTOR_TYPE: &'static str = "azure";
}

/// Box folder, authenticated with a JWT app config
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxSourceConnectorConfig {
    pub box_app_config: String,
    pub recursive: bool,
}

impl ConnectorConfig for BoxSourceConnectorConfig {
    const CONNECTOR_TYPE: &'static str = "box";
}

/// Confluence spaces
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfluenceSourceConnectorConfig {
    pub url: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub cloud: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extract_images: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extract_files: Option<bool>,
    pub max_num_of_spaces: u32,
    pub max_num_of_docs_from_each_space: u32,
    pub spaces: Vec<String>,
}

impl ConnectorConfig for ConfluenceSourceConnectorConfig {
    const CONNECTOR_TYPE: &'static str = "confluence";
}

/// Dropbox folder
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropboxSourceConnectorConfig {
    pub token: String,
    pub remote_url: String,
    pub recursive: bool,
}

impl ConnectorConfig for DropboxSourceConnectorConfig {
    const CONNECTOR_TYPE: &'static str = "dropbox";
}

/// Google Drive folder, read with a service account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoogleDriveSourceConnectorConfig {
    pub drive_id: String,
    pub service_account_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,
    pub recursive: bool,
}

impl ConnectorConfig for GoogleDriveSourceConnectorConfig {
    const CONNECTOR_TYPE: &'static str = "google_drive";
}

/// Jira projects, boards or issues
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JiraSourceConnectorConfig {
    pub url: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boards: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_filters: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_attachments: Option<bool>,
}

impl ConnectorConfig for JiraSourceConnectorConfig {
    const CONNECTOR_TYPE: &'static str = "jira";
}

/// Outlook mailbox folders
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlookSourceConnectorConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authority_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant: Option<String>,
    pub client_id: String,
    pub client_cred: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outlook_folders: Option<Vec<String>>,
    pub recursive: bool,
    pub user_email: String,
}

impl ConnectorConfig for OutlookSourceConnectorConfig {
    const CONNECTOR_TYPE: &'static str = "outlook";
}

/// Salesforce records by category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalesforceSourceConnectorConfig {
    pub username: String,
    pub consumer_key: String,
    pub private_key: String,
    pub categories: Vec<String>,
}

impl ConnectorConfig for SalesforceSourceConnectorConfig {
    const CONNECTOR_TYPE: &'static str = "salesforce";
}

/// SharePoint site
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SharePointSourceConnectorConfig {
    pub site: String,
    pub tenant: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authority_url: Option<String>,
    pub user_pname: String,
    pub client_id: String,
    pub client_cred: String,
    pub recursive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ConnectorConfig for SharePointSourceConnectorConfig {
    const CONNECTOR_TYPE: &'static str = "sharepoint";
}

/// Slack channels within an optional date window
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlackSourceConnectorConfig {
    pub channels: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub token: String,
}

impl ConnectorConfig for SlackSourceConnectorConfig {
    const CONNECTOR_TYPE: &'static str = "slack";
}

/// Zendesk tickets or articles
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZendeskSourceConnectorConfig {
    pub subdomain: String,
    pub email: String,
    pub api_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<u32>,
}

impl ConnectorConfig for ZendeskSourceConnectorConfig {
    const CONNECTOR_TYPE: &'static str = "zendesk";
}
