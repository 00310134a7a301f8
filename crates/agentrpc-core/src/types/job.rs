//! Job types used when executing a tool remotely

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result type reported when the service leaves it out
pub const DEFAULT_RESULT_TYPE: &str = "rejection";

/// Lifecycle state of a job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Running,
    Done,
    Failure,
    Interrupted,
    #[serde(other)]
    Other,
}

impl JobStatus {
    /// `done` and `failure` end polling
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Done | JobStatus::Failure)
    }
}

/// Response of `createJob`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedJob {
    pub id: String,
    #[serde(default)]
    pub status: Option<JobStatus>,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub result_type: Option<String>,
}

/// Response of `getJob`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetails {
    #[serde(default)]
    pub status: Option<JobStatus>,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub result_type: Option<String>,
}

/// Final state of a job
#[derive(Debug, Clone, PartialEq)]
pub struct JobOutcome {
    pub status: JobStatus,
    pub result: Value,
    pub result_type: String,
}

impl JobOutcome {
    /// Render as `{"type": <resultType>, "content": <result>}`
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&serde_json::json!({
            "type": self.result_type,
            "content": self.result,
        }))
    }
}

/// Fill in the defaults the service may omit: `""` and `rejection`
pub(crate) fn normalize(result: Option<Value>, result_type: Option<String>) -> (Value, String) {
    let result = match result {
        None | Some(Value::Null) => Value::String(String::new()),
        Some(value) => value,
    };
    let result_type = result_type
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| DEFAULT_RESULT_TYPE.to_string());
    (result, result_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_parsing() {
        let status: JobStatus = serde_json::from_value(json!("done")).unwrap();
        assert_eq!(status, JobStatus::Done);
        let status: JobStatus = serde_json::from_value(json!("paused")).unwrap();
        assert_eq!(status, JobStatus::Other);
    }

    #[test]
    fn test_terminal_states() {
        assert!(JobStatus::Done.is_terminal());
        assert!(JobStatus::Failure.is_terminal());
        assert!(!JobStatus::Pending.is_terminal());
        assert!(!JobStatus::Running.is_terminal());
        assert!(!JobStatus::Interrupted.is_terminal());
    }

    #[test]
    fn test_normalize_defaults() {
        assert_eq!(normalize(None, None), (json!(""), "rejection".to_string()));
        assert_eq!(
            normalize(Some(json!({ "temp": 21 })), Some("resolution".to_string())),
            (json!({ "temp": 21 }), "resolution".to_string())
        );
    }

    #[test]
    fn test_outcome_json() {
        let outcome = JobOutcome {
            status: JobStatus::Done,
            result: json!("sunny"),
            result_type: "resolution".to_string(),
        };
        let rendered: Value = serde_json::from_str(&outcome.to_json_string().unwrap()).unwrap();
        assert_eq!(rendered, json!({ "type": "resolution", "content": "sunny" }));
    }

    #[test]
    fn test_created_job_minimal() {
        let job: CreatedJob = serde_json::from_value(json!({ "id": "job_1" })).unwrap();
        assert_eq!(job.id, "job_1");
        assert!(job.status.is_none());
    }
}
