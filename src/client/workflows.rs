//! Workflow operations

use super::Client;
use crate::error::{Result, ResultExt};
use crate::http::RequestConfig;
use crate::job::Job;
use crate::workflow::{
    CreateWorkflowRequest, ListWorkflowsRequest, RunWorkflowRequest, UpdateWorkflowRequest,
    Workflow,
};
use reqwest::Method;
use tracing::debug;

const WORKFLOWS: &str = "workflows";
const RUN: &str = "run";

impl Client {
    /// Create a workflow.
    ///
    /// A custom node list is validated locally first; an invalid one fails
    /// without sending a request.
    pub async fn create_workflow(&self, request: &CreateWorkflowRequest) -> Result<Workflow> {
        request.validate()?;
        let body = serde_json::to_value(request)?;
        self.http
            .request_value(
                Method::POST,
                &[WORKFLOWS],
                RequestConfig::new().json(body),
                "create workflow",
            )
            .await
            .and_then(Workflow::from_value)
            .context("failed to create workflow")
    }

    /// List workflows matching the given filters
    pub async fn list_workflows(
        &self,
        request: Option<&ListWorkflowsRequest>,
    ) -> Result<Vec<Workflow>> {
        let pairs = request.map(ListWorkflowsRequest::query_pairs).unwrap_or_default();
        self.http
            .request_value(
                Method::GET,
                &[WORKFLOWS],
                RequestConfig::new().queries(pairs),
                "list workflows",
            )
            .await
            .and_then(Workflow::list_from_value)
            .context("failed to list workflows")
    }

    /// Get a workflow by id
    pub async fn get_workflow(&self, id: &str) -> Result<Workflow> {
        self.http
            .request_value(Method::GET, &[WORKFLOWS, id], RequestConfig::new(), "get workflow")
            .await
            .and_then(Workflow::from_value)
            .context("failed to get workflow")
    }

    /// Update a workflow. Only the fields set on the request are sent.
    pub async fn update_workflow(&self, request: &UpdateWorkflowRequest) -> Result<Workflow> {
        request.validate()?;
        let body = serde_json::to_value(request)?;
        self.http
            .request_value(
                Method::PUT,
                &[WORKFLOWS, &request.id],
                RequestConfig::new().json(body),
                "update workflow",
            )
            .await
            .and_then(Workflow::from_value)
            .context("failed to update workflow")
    }

    /// Delete a workflow
    pub async fn delete_workflow(&self, id: &str) -> Result<()> {
        self.http
            .request_empty(Method::DELETE, &[WORKFLOWS, id], RequestConfig::new())
            .await
            .context("failed to delete workflow")
    }

    /// Start a job for a workflow, uploading any input files as multipart
    pub async fn run_workflow(&self, request: &RunWorkflowRequest) -> Result<Job> {
        let mut config = RequestConfig::new();
        if let Some(form) = request.form() {
            debug!(
                "Uploading {} input files to workflow {}",
                request.input_files.len(),
                request.id
            );
            config = config.multipart(form);
        }
        self.http
            .request_json(Method::POST, &[WORKFLOWS, &request.id, RUN], config, "run workflow")
            .await
            .context("failed to run workflow")
    }
}
