//! Remote job execution: `createJob` followed by `getJob` polling

use serde_json::{json, Value};

use super::agentrpc::AgentRpc;
use super::error::AgentRpcResult;
use crate::{log_debug, log_error};
use crate::types::{normalize, CreatedJob, JobDetails, JobOutcome, JobStatus};

/// Seconds the service may hold a `createJob`/`getJob` request open
const WAIT_TIME_SECS: u64 = 20;

/// Create a job for `tool` and wait until it reaches a terminal state
pub(crate) async fn create_and_poll_job(
    client: &AgentRpc,
    tool: &str,
    input: Value,
) -> AgentRpcResult<JobOutcome> {
    let created: CreatedJob = client
        .rpc()
        .request(
            "createJob",
            json!({
                "tool": tool,
                "input": input,
                "clusterId": client.cluster_id(),
                "waitTime": WAIT_TIME_SECS,
            }),
        )
        .await?;

    log_debug!(client.logger(), "Created job {} for {}", created.id, tool);

    let (result, result_type) = normalize(created.result, created.result_type);
    poll_for_job_completion(client, &created.id, created.status, result, result_type).await
}

/// Poll `getJob` until the job is `done` or `failure`
///
/// A job that is already terminal on creation is returned without polling.
pub(crate) async fn poll_for_job_completion(
    client: &AgentRpc,
    job_id: &str,
    initial_status: Option<JobStatus>,
    initial_result: Value,
    initial_result_type: String,
) -> AgentRpcResult<JobOutcome> {
    let mut status = initial_status;
    let mut result = initial_result;
    let mut result_type = initial_result_type;

    loop {
        if let Some(current) = status.as_ref().filter(|s| s.is_terminal()) {
            if *current == JobStatus::Failure {
                log_error!(client.logger(), "Job {} failed ({})", job_id, result_type);
            }
            return Ok(JobOutcome {
                status: current.clone(),
                result,
                result_type,
            });
        }

        let details: JobDetails = client
            .rpc()
            .request(
                "getJob",
                json!({
                    "clusterId": client.cluster_id(),
                    "jobId": job_id,
                    "waitTime": WAIT_TIME_SECS,
                }),
            )
            .await?;

        log_debug!(client.logger(), "Job {} status {:?}", job_id, details.status);

        status = details.status;
        (result, result_type) = normalize(details.result, details.result_type);

        tokio::time::sleep(client.poll_interval()).await;
    }
}
