//! CLI module
//!
//! Command-line interface over the API client.
//!
//! # Commands
//!
//! - `sources` / `destinations` - List, get, delete and check connectors
//! - `workflows` - List, get and run workflows; `validate` checks a node
//!   list locally without touching the network
//! - `jobs` - List, get, cancel, inspect and download jobs

mod commands;
mod runner;

pub use commands::{Cli, Commands, ConnectorCommand, JobCommand, OutputFormat, WorkflowCommand};
pub use runner::{load_workflow_nodes, Runner};
