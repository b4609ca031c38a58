//! CLI runner - executes commands

use crate::cli::commands::{
    Cli, Commands, ConnectorCommand, JobCommand, OutputFormat, WorkflowCommand,
};
use crate::client::Client;
use crate::config::ClientConfig;
use crate::error::{Result, ResultExt};
use crate::job::{DownloadJobRequest, JobStatus, ListJobsRequest};
use crate::node::{validate_workflow_nodes, WorkflowNode};
use crate::types::JsonValue;
use crate::workflow::{InputFile, ListWorkflowsRequest, RunWorkflowRequest, WorkflowState};
use serde::Serialize;
use serde_json::json;
use std::path::Path;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Sources { command } => self.sources(command).await,
            Commands::Destinations { command } => self.destinations(command).await,
            Commands::Workflows { command } => self.workflows(command).await,
            Commands::Jobs { command } => self.jobs(command).await,
        }
    }

    /// Build an API client from flags, falling back to the environment
    fn client(&self) -> Result<Client> {
        let mut builder = ClientConfig::builder();
        if let Some(endpoint) = &self.cli.endpoint {
            builder = builder.endpoint(endpoint);
        }
        if let Some(key) = &self.cli.api_key {
            builder = builder.api_key(key);
        }
        let config = builder.build()?;
        debug!("Using endpoint {}", config.endpoint);
        Client::new(config)
    }

    async fn sources(&self, command: &ConnectorCommand) -> Result<()> {
        let client = self.client()?;
        match command {
            ConnectorCommand::List { connector_type } => {
                self.output(&client.list_sources(connector_type.as_deref()).await?)
            }
            ConnectorCommand::Get { id } => self.output(&client.get_source(id).await?),
            ConnectorCommand::Delete { id } => {
                client.delete_source(id).await?;
                self.output(&json!({ "deleted": id }))
            }
            ConnectorCommand::Check { id, latest } => {
                let check = if *latest {
                    client.get_source_connection_check(id).await?
                } else {
                    client.create_source_connection_check(id).await?
                };
                self.output(&check)
            }
        }
    }

    async fn destinations(&self, command: &ConnectorCommand) -> Result<()> {
        let client = self.client()?;
        match command {
            ConnectorCommand::List { connector_type } => {
                self.output(&client.list_destinations(connector_type.as_deref()).await?)
            }
            ConnectorCommand::Get { id } => self.output(&client.get_destination(id).await?),
            ConnectorCommand::Delete { id } => {
                client.delete_destination(id).await?;
                self.output(&json!({ "deleted": id }))
            }
            ConnectorCommand::Check { id, latest } => {
                let check = if *latest {
                    client.get_destination_connection_check(id).await?
                } else {
                    client.create_destination_connection_check(id).await?
                };
                self.output(&check)
            }
        }
    }

    /// Workflow commands; `validate` runs locally without building a client
    async fn workflows(&self, command: &WorkflowCommand) -> Result<()> {
        match command {
            WorkflowCommand::List {
                status,
                page,
                page_size,
            } => {
                let request = ListWorkflowsRequest {
                    status: status
                        .as_deref()
                        .map(str::parse::<WorkflowState>)
                        .transpose()?,
                    page: *page,
                    page_size: *page_size,
                    ..Default::default()
                };
                self.output(&self.client()?.list_workflows(Some(&request)).await?)
            }
            WorkflowCommand::Get { id } => self.output(&self.client()?.get_workflow(id).await?),
            WorkflowCommand::Run { id, files } => {
                let mut request = RunWorkflowRequest::new(id);
                for path in files {
                    request = request.file(InputFile::from_path(path).await?);
                }
                self.output(&self.client()?.run_workflow(&request).await?)
            }
            WorkflowCommand::Validate { file } => self.validate(file),
        }
    }

    /// Check a node list file locally
    fn validate(&self, path: &Path) -> Result<()> {
        let nodes = load_workflow_nodes(path)?;
        validate_workflow_nodes(&nodes)?;
        info!("{} is a valid node sequence", path.display());
        self.output(&json!({
            "valid": true,
            "nodes": nodes
                .iter()
                .map(|node| format!("{}/{}", node.node_type(), node.subtype()))
                .collect::<Vec<_>>(),
        }))
    }

    async fn jobs(&self, command: &JobCommand) -> Result<()> {
        let client = self.client()?;
        match command {
            JobCommand::List {
                workflow_id,
                status,
            } => {
                let request = ListJobsRequest {
                    workflow_id: workflow_id.clone(),
                    status: status.as_deref().map(str::parse::<JobStatus>).transpose()?,
                };
                self.output(&client.list_jobs(Some(&request)).await?)
            }
            JobCommand::Get { id } => self.output(&client.get_job(id).await?),
            JobCommand::Cancel { id } => {
                client.cancel_job(id).await?;
                self.output(&json!({ "cancelled": id }))
            }
            JobCommand::Details { id } => self.output(&client.get_job_details(id).await?),
            JobCommand::FailedFiles { id } => {
                self.output(&client.get_job_failed_files(id).await?)
            }
            JobCommand::Download {
                id,
                node_id,
                file_id,
                output,
            } => {
                let request = DownloadJobRequest {
                    job_id: id.clone(),
                    node_id: node_id.clone(),
                    file_id: file_id.clone(),
                };
                let download = client.download_job(&request).await?;
                match output {
                    Some(path) => {
                        let mut file = tokio::fs::File::create(path)
                            .await
                            .with_context(|| format!("failed to create {}", path.display()))?;
                        let written = download.write_to(&mut file).await?;
                        self.output(&json!({ "path": path, "bytes": written }))
                    }
                    None => {
                        download.write_to(&mut tokio::io::stdout()).await?;
                        Ok(())
                    }
                }
            }
        }
    }

    /// Print a value in the selected format
    fn output<T: Serialize>(&self, value: &T) -> Result<()> {
        let text = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        println!("{text}");
        Ok(())
    }
}

/// Load a workflow node list from a YAML or JSON file.
///
/// The file holds either a bare list of nodes or a workflow document with
/// a `workflow_nodes` field. Nodes go through the same decoder as API
/// responses, so unknown types and subtypes are rejected here.
pub fn load_workflow_nodes(path: &Path) -> Result<Vec<WorkflowNode>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    // YAML is a superset of JSON, so one parser covers both.
    let document: JsonValue = serde_yaml::from_str(&text)?;
    let nodes = match document {
        JsonValue::Object(mut map) => map
            .remove("workflow_nodes")
            .unwrap_or(JsonValue::Object(map)),
        other => other,
    };
    WorkflowNode::list_from_value(nodes)
}
