//! Workflows
//!
//! A workflow binds sources and destinations to an ordered list of
//! [`WorkflowNode`]s. Node lists are decoded through the node codec so
//! unknown node types fail with a typed error instead of a generic parse
//! failure.

mod requests;
mod types;


pub use requests::{
    CreateWorkflowRequest, InputFile, ListWorkflowsRequest, RunWorkflowRequest,
    UpdateWorkflowRequest, INPUT_FILES_FIELD,
};
pub use types::{CronTabEntry, SortDirection, WorkflowSchedule, WorkflowState, WorkflowType};

use crate::error::{Error, Result};
use crate::node::WorkflowNode;
use crate::types::{null_as_default, timestamp, JsonValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A stored workflow
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Workflow {
    pub id: String,
    pub name: String,
    pub sources: Vec<String>,
    pub destinations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_type: Option<WorkflowType>,
    pub workflow_nodes: Vec<WorkflowNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<WorkflowSchedule>,
    pub status: WorkflowState,
    #[serde(with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprocess_all: Option<bool>,
}

/// Every field but the node list, which goes through the node codec
#[derive(Deserialize)]
struct RawWorkflow {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    sources: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    destinations: Vec<String>,
    #[serde(default)]
    workflow_type: Option<WorkflowType>,
    #[serde(default)]
    schedule: Option<WorkflowSchedule>,
    status: WorkflowState,
    #[serde(default, with = "timestamp::option")]
    created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::option")]
    updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    reprocess_all: Option<bool>,
}

impl Workflow {
    /// Decode a workflow body
    pub fn from_value(mut value: JsonValue) -> Result<Self> {
        let nodes = value
            .as_object_mut()
            .and_then(|object| object.remove("workflow_nodes"))
            .unwrap_or(JsonValue::Null);
        let raw: RawWorkflow =
            serde_json::from_value(value).map_err(|e| Error::decode("workflow", e))?;
        let workflow_nodes = WorkflowNode::list_from_value(nodes)?;

        Ok(Self {
            id: raw.id,
            name: raw.name,
            sources: raw.sources,
            destinations: raw.destinations,
            workflow_type: raw.workflow_type,
            workflow_nodes,
            schedule: raw.schedule,
            status: raw.status,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
            reprocess_all: raw.reprocess_all,
        })
    }

    /// Decode a list body; `null` yields an empty list
    pub fn list_from_value(value: JsonValue) -> Result<Vec<Self>> {
        match value {
            JsonValue::Null => Ok(Vec::new()),
            JsonValue::Array(items) => items.into_iter().map(Self::from_value).collect(),
            other => Err(Error::decode(
                "workflow list",
                serde::de::Error::custom(format!("expected an array, got {other}")),
            )),
        }
    }
}

impl<'de> Deserialize<'de> for Workflow {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = JsonValue::deserialize(deserializer)?;
        Workflow::from_value(value).map_err(serde::de::Error::custom)
    }
}
