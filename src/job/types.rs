//! Job records and request types

use crate::error::Error;
use crate::types::{null_as_default, timestamp};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Job
// ============================================================================

/// One execution of a workflow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    #[serde(default)]
    pub workflow_id: String,
    #[serde(default)]
    pub workflow_name: String,
    pub status: JobStatus,
    /// Job timestamps come without a zone and are read as UTC
    #[serde(
        default,
        with = "timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub input_file_ids: Vec<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub output_node_files: Vec<NodeFileMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<JobType>,
}

impl Job {
    /// Whether the job has stopped running
    pub fn is_finished(&self) -> bool {
        self.status.is_terminal()
    }
}

/// Lifecycle status of a job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Scheduled,
    InProgress,
    Completed,
    Stopped,
    Failed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Scheduled => "SCHEDULED",
            JobStatus::InProgress => "IN_PROGRESS",
            JobStatus::Completed => "COMPLETED",
            JobStatus::Stopped => "STOPPED",
            JobStatus::Failed => "FAILED",
        }
    }

    /// Completed, stopped or failed
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            JobStatus::Completed | JobStatus::Stopped | JobStatus::Failed
        )
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SCHEDULED" => Ok(JobStatus::Scheduled),
            "IN_PROGRESS" => Ok(JobStatus::InProgress),
            "COMPLETED" => Ok(JobStatus::Completed),
            "STOPPED" => Ok(JobStatus::Stopped),
            "FAILED" => Ok(JobStatus::Failed),
            _ => Err(Error::Other(format!("unknown job status: {s}"))),
        }
    }
}

/// How a job was started
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobType {
    Ephemeral,
    Persistent,
    Scheduled,
}

/// Output file produced by one node of a job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeFileMetadata {
    pub node_id: String,
    pub file_id: String,
}

// ============================================================================
// Details
// ============================================================================

/// Processing status reported by job details
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobProcessingStatus {
    Scheduled,
    InProgress,
    Success,
    CompletedWithErrors,
    Stopped,
    Failed,
}

/// Per-node progress of a job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDetails {
    pub id: String,
    pub processing_status: JobProcessingStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub node_stats: Vec<JobNodeDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// File counts for one node of a job
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobNodeDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_subtype: Option<String>,
    pub ready: u64,
    pub in_progress: u64,
    pub success: u64,
    pub failure: u64,
}

/// Files a job could not process
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobFailedFiles {
    #[serde(default, deserialize_with = "null_as_default")]
    pub failed_files: Vec<FailedFile>,
}

/// One file a job failed on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedFile {
    pub document: String,
    pub error: String,
}

// ============================================================================
// Requests
// ============================================================================

/// Filters for `GET /jobs/`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListJobsRequest {
    pub workflow_id: Option<String>,
    pub status: Option<JobStatus>,
}

impl ListJobsRequest {
    /// Query parameters for the set filters
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(id) = &self.workflow_id {
            pairs.push(("workflow_id".to_string(), id.clone()));
        }
        if let Some(status) = self.status {
            pairs.push(("status".to_string(), status.as_str().to_string()));
        }
        pairs
    }
}

/// `GET /jobs/{id}/download`, optionally narrowed to one node output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadJobRequest {
    pub job_id: String,
    pub node_id: Option<String>,
    pub file_id: Option<String>,
}

impl DownloadJobRequest {
    pub fn new(job_id: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            node_id: None,
            file_id: None,
        }
    }

    #[must_use]
    pub fn node_id(mut self, node_id: impl Into<String>) -> Self {
        self.node_id = Some(node_id.into());
        self
    }

    #[must_use]
    pub fn file_id(mut self, file_id: impl Into<String>) -> Self {
        self.file_id = Some(file_id.into());
        self
    }

    /// Query parameters for the set fields
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        [("node_id", &self.node_id), ("file_id", &self.file_id)]
            .into_iter()
            .filter_map(|(key, value)| value.clone().map(|value| (key.to_string(), value)))
            .collect()
    }
}
