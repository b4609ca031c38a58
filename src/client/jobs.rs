//! Job operations

use super::Client;
use crate::error::{Result, ResultExt};
use crate::http::RequestConfig;
use crate::job::{
    DownloadJobRequest, Job, JobDetails, JobDownload, JobFailedFiles, ListJobsRequest,
};
use reqwest::Method;

const JOBS: &str = "jobs";

impl Client {
    /// List jobs, optionally filtered by workflow and status
    pub async fn list_jobs(&self, request: Option<&ListJobsRequest>) -> Result<Vec<Job>> {
        let pairs = request.map(ListJobsRequest::query_pairs).unwrap_or_default();
        let value = self
            .http
            .request_value(
                Method::GET,
                &[JOBS, ""],
                RequestConfig::new().queries(pairs),
                "list jobs",
            )
            .await
            .context("failed to list jobs")?;
        if value.is_null() {
            return Ok(Vec::new());
        }
        serde_json::from_value::<Vec<Job>>(value).context("list jobs")
    }

    /// Get a job by id
    pub async fn get_job(&self, id: &str) -> Result<Job> {
        self.http
            .request_json(Method::GET, &[JOBS, id], RequestConfig::new(), "get job")
            .await
            .context("failed to get job")
    }

    /// Ask the server to stop a running job
    pub async fn cancel_job(&self, id: &str) -> Result<()> {
        self.http
            .request_empty(Method::POST, &[JOBS, id, "cancel"], RequestConfig::new())
            .await
            .context("failed to cancel job")
    }

    /// Per-node processing statistics of a job
    pub async fn get_job_details(&self, id: &str) -> Result<JobDetails> {
        self.http
            .request_json(
                Method::GET,
                &[JOBS, id, "details"],
                RequestConfig::new(),
                "get job details",
            )
            .await
            .context("failed to get job details")
    }

    /// Files a job failed to process
    pub async fn get_job_failed_files(&self, id: &str) -> Result<JobFailedFiles> {
        self.http
            .request_json(
                Method::GET,
                &[JOBS, id, "failed-files"],
                RequestConfig::new(),
                "get job failed files",
            )
            .await
            .context("failed to get job failed files")
    }

    /// Stream the output of a job.
    ///
    /// The response body is not buffered; read it through the returned
    /// [`JobDownload`].
    pub async fn download_job(&self, request: &DownloadJobRequest) -> Result<JobDownload> {
        let response = self
            .http
            .send(
                Method::GET,
                &[JOBS, &request.job_id, "download"],
                RequestConfig::new().queries(request.query_pairs()),
            )
            .await
            .context("failed to download job")?;
        Ok(JobDownload::from_response(response))
    }
}
