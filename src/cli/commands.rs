//! CLI commands and argument parsing

use crate::config::{ENV_API_KEY, ENV_API_URL};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Unstructured platform CLI
#[derive(Parser, Debug)]
#[command(name = "unstructured")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API endpoint
    #[arg(long, global = true, env = ENV_API_URL)]
    pub endpoint: Option<String>,

    /// API key
    #[arg(long, global = true, env = ENV_API_KEY, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage source connectors
    Sources {
        #[command(subcommand)]
        command: ConnectorCommand,
    },

    /// Manage destination connectors
    Destinations {
        #[command(subcommand)]
        command: ConnectorCommand,
    },

    /// Manage workflows
    Workflows {
        #[command(subcommand)]
        command: WorkflowCommand,
    },

    /// Inspect jobs
    Jobs {
        #[command(subcommand)]
        command: JobCommand,
    },
}

/// Source and destination subcommands
#[derive(Subcommand, Debug)]
pub enum ConnectorCommand {
    /// List connectors
    List {
        /// Only list connectors of this type (e.g. s3)
        #[arg(long = "type")]
        connector_type: Option<String>,
    },

    /// Show one connector
    Get { id: String },

    /// Delete a connector
    Delete { id: String },

    /// Schedule a connection check
    Check {
        id: String,

        /// Show the latest check instead of scheduling a new one
        #[arg(long)]
        latest: bool,
    },
}

/// Workflow subcommands
#[derive(Subcommand, Debug)]
pub enum WorkflowCommand {
    /// List workflows
    List {
        /// Filter by state (active, inactive)
        #[arg(long)]
        status: Option<String>,

        /// Page number
        #[arg(long)]
        page: Option<u32>,

        /// Page size
        #[arg(long)]
        page_size: Option<u32>,
    },

    /// Show one workflow
    Get { id: String },

    /// Start a job
    Run {
        id: String,

        /// Input file to upload (repeatable)
        #[arg(long = "file")]
        files: Vec<PathBuf>,
    },

    /// Validate a YAML or JSON node list without calling the API
    Validate { file: PathBuf },
}

/// Job subcommands
#[derive(Subcommand, Debug)]
pub enum JobCommand {
    /// List jobs
    List {
        /// Only jobs of this workflow
        #[arg(long)]
        workflow_id: Option<String>,

        /// Filter by status (e.g. COMPLETED)
        #[arg(long)]
        status: Option<String>,
    },

    /// Show one job
    Get { id: String },

    /// Stop a running job
    Cancel { id: String },

    /// Show per-node processing details
    Details { id: String },

    /// List files the job failed to process
    FailedFiles { id: String },

    /// Download job output
    Download {
        id: String,

        /// Output of this node only
        #[arg(long)]
        node_id: Option<String>,

        /// This output file only
        #[arg(long)]
        file_id: Option<String>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON
    Json,
    /// Indented JSON
    Pretty,
}
