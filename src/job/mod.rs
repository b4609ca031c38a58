//! Jobs
//!
//! A job is one run of a workflow. The client exposes no polling helper;
//! callers poll [`Client::get_job`](crate::Client::get_job) until
//! [`JobStatus::is_terminal`] holds.

mod download;
mod types;


pub use download::JobDownload;
pub use types::{
    DownloadJobRequest, FailedFile, Job, JobDetails, JobFailedFiles, JobNodeDetails,
    JobProcessingStatus, JobStatus, JobType, ListJobsRequest, NodeFileMetadata,
};
