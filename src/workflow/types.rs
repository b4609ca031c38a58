//! Workflow enums and schedule types

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tier of a workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowType {
    Basic,
    Advanced,
    Platinum,
    /// Nodes supplied by the caller
    Custom,
}

impl WorkflowType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowType::Basic => "basic",
            WorkflowType::Advanced => "advanced",
            WorkflowType::Platinum => "platinum",
            WorkflowType::Custom => "custom",
        }
    }
}

impl fmt::Display for WorkflowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkflowType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(WorkflowType::Basic),
            "advanced" => Ok(WorkflowType::Advanced),
            "platinum" => Ok(WorkflowType::Platinum),
            "custom" => Ok(WorkflowType::Custom),
            other => Err(Error::Other(format!("unknown workflow type: {other}"))),
        }
    }
}

/// Whether a workflow is enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowState {
    Active,
    Inactive,
}

impl WorkflowState {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowState::Active => "active",
            WorkflowState::Inactive => "inactive",
        }
    }
}

impl fmt::Display for WorkflowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkflowState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(WorkflowState::Active),
            "inactive" => Ok(WorkflowState::Inactive),
            other => Err(Error::Other(format!("unknown workflow state: {other}"))),
        }
    }
}

/// Sort order for workflow listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Cron schedule attached to a workflow
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowSchedule {
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    pub crontab_entries: Vec<CronTabEntry>,
}

/// One cron expression of a schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CronTabEntry {
    pub cron_expression: String,
}
