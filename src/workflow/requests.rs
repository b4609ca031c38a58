//! Workflow request types

use super::types::{SortDirection, WorkflowState, WorkflowType};
use crate::error::{Result, ResultExt};
use crate::node::{validate_workflow_nodes, WorkflowNode};
use bytes::Bytes;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use std::path::Path;

/// Multipart field carrying run input files
pub const INPUT_FILES_FIELD: &str = "input_files";

// ============================================================================
// Create / Update
// ============================================================================

/// Body of `POST /workflows`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateWorkflowRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_id: Option<String>,
    pub workflow_type: WorkflowType,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub workflow_nodes: Vec<WorkflowNode>,
    /// Named schedule such as `"weekly"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprocess_all: Option<bool>,
}

impl CreateWorkflowRequest {
    pub fn new(name: impl Into<String>, workflow_type: WorkflowType) -> Self {
        Self {
            name: name.into(),
            source_id: None,
            destination_id: None,
            workflow_type,
            workflow_nodes: Vec::new(),
            schedule: None,
            reprocess_all: None,
        }
    }

    #[must_use]
    pub fn source_id(mut self, id: impl Into<String>) -> Self {
        self.source_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn destination_id(mut self, id: impl Into<String>) -> Self {
        self.destination_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn nodes(mut self, nodes: Vec<WorkflowNode>) -> Self {
        self.workflow_nodes = nodes;
        self
    }

    #[must_use]
    pub fn schedule(mut self, schedule: impl Into<String>) -> Self {
        self.schedule = Some(schedule.into());
        self
    }

    #[must_use]
    pub fn reprocess_all(mut self, reprocess_all: bool) -> Self {
        self.reprocess_all = Some(reprocess_all);
        self
    }

    /// Check node order and embedder models, if nodes are given
    pub fn validate(&self) -> Result<()> {
        if self.workflow_nodes.is_empty() {
            return Ok(());
        }
        validate_workflow_nodes(&self.workflow_nodes)
    }
}

/// Body of `PUT /workflows/{id}`.
///
/// Only fields that are set are sent. `workflow_nodes: Some(vec![])`
/// sends an empty node list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateWorkflowRequest {
    #[serde(skip)]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_type: Option<WorkflowType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_nodes: Option<Vec<WorkflowNode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprocess_all: Option<bool>,
}

impl UpdateWorkflowRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Check node order and embedder models, if non-empty nodes are given
    pub fn validate(&self) -> Result<()> {
        match &self.workflow_nodes {
            Some(nodes) if !nodes.is_empty() => validate_workflow_nodes(nodes),
            _ => Ok(()),
        }
    }
}

// ============================================================================
// List
// ============================================================================

/// Filters for `GET /workflows`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListWorkflowsRequest {
    pub dag_node_configuration_id: Option<String>,
    pub source_id: Option<String>,
    pub destination_id: Option<String>,
    pub status: Option<WorkflowState>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub created_since: Option<DateTime<Utc>>,
    pub created_before: Option<DateTime<Utc>>,
    pub name: Option<String>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<SortDirection>,
    pub show_only_soft_deleted: Option<bool>,
    pub show_recommender_workflows: Option<bool>,
}

impl ListWorkflowsRequest {
    /// Query parameters for the set filters, in a stable order
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let rfc3339 = |dt: &DateTime<Utc>| dt.to_rfc3339_opts(SecondsFormat::Secs, true);

        let pairs = [
            ("dag_node_configuration_id", self.dag_node_configuration_id.clone()),
            ("source_id", self.source_id.clone()),
            ("destination_id", self.destination_id.clone()),
            ("status", self.status.map(|s| s.as_str().to_string())),
            ("page", self.page.map(|p| p.to_string())),
            ("page_size", self.page_size.map(|p| p.to_string())),
            ("created_since", self.created_since.as_ref().map(rfc3339)),
            ("created_before", self.created_before.as_ref().map(rfc3339)),
            ("name", self.name.clone()),
            ("sort_by", self.sort_by.clone()),
            ("sort_direction", self.sort_direction.map(|d| d.as_str().to_string())),
            ("show_only_soft_deleted", self.show_only_soft_deleted.map(|b| b.to_string())),
            (
                "show_recommender_workflows",
                self.show_recommender_workflows.map(|b| b.to_string()),
            ),
        ];

        pairs
            .into_iter()
            .filter_map(|(key, value)| value.map(|value| (key.to_string(), value)))
            .collect()
    }
}

// ============================================================================
// Run
// ============================================================================

/// A file uploaded with a workflow run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    pub filename: String,
    pub bytes: Bytes,
}

impl InputFile {
    /// Wrap in-memory content
    pub fn from_bytes(filename: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            filename: filename.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk; the upload name is the path's file name
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("failed to read input file {}", path.display()))?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::from_bytes(filename, bytes))
    }
}

/// `POST /workflows/{id}/run`, optionally with input files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunWorkflowRequest {
    pub id: String,
    pub input_files: Vec<InputFile>,
}

impl RunWorkflowRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            input_files: Vec::new(),
        }
    }

    /// Attach an input file
    #[must_use]
    pub fn file(mut self, file: InputFile) -> Self {
        self.input_files.push(file);
        self
    }

    /// Multipart body with every file under `input_files`, or `None` when
    /// there are no files and the run is sent without a body
    pub(crate) fn form(&self) -> Option<Form> {
        if self.input_files.is_empty() {
            return None;
        }
        let form = self.input_files.iter().fold(Form::new(), |form, file| {
            let part = Part::bytes(file.bytes.to_vec()).file_name(file.filename.clone());
            form.part(INPUT_FILES_FIELD, part)
        });
        Some(form)
    }
}
