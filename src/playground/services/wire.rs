//! JSON bodies exchanged with the backend.
//!
//! - `POST /api/v1/execute` with `{ code }` answers `{ output }` or `{ message }`
//! - `POST /api/v1/code` with `{ code }` answers `{ id }` or `{ message }`
//! - `GET /api/v1/code/{id}` answers `{ contents }` or `{ message }`
//!
//! Error answers may carry a non-2xx status, so bodies are parsed regardless
//! of status.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::ExecutionOutcome;

pub const EXECUTE_PATH: &str = "/api/v1/execute";
pub const CODE_PATH: &str = "/api/v1/code";

/// Body of both execute and save requests
#[derive(Debug, Serialize)]
pub struct CodeRequest<'a> {
    pub code: &'a str,
}

#[derive(Debug, Default, Deserialize)]
pub struct ExecuteResponse {
    pub output: Option<String>,
    pub message: Option<String>,
}

impl ExecuteResponse {
    /// Classify the response.
    ///
    /// A non-empty `output` wins even when `message` is also set; servers are
    /// expected to send exactly one of them.
    pub fn into_outcome(self) -> ExecutionOutcome {
        match (non_empty(self.output), non_empty(self.message)) {
            (Some(output), message) => {
                if let Some(message) = message {
                    tracing::warn!(
                        "Execute response carried both output and message, ignoring message: {}",
                        message
                    );
                }
                ExecutionOutcome::Success { output }
            }
            (None, Some(message)) => ExecutionOutcome::Failure { message },
            (None, None) => ExecutionOutcome::Failure {
                message: "execution service returned neither output nor message".to_string(),
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SaveCodeResponse {
    pub id: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GetCodeResponse {
    pub contents: Option<String>,
    pub message: Option<String>,
}

/// Parse the first JSON value in `body`, ignoring anything after it.
///
/// Some error paths of the backend write a second object after the first one.
pub(crate) fn parse_first<T: DeserializeOwned>(body: &str) -> serde_json::Result<T> {
    match serde_json::Deserializer::from_str(body).into_iter::<T>().next() {
        Some(value) => value,
        None => serde_json::from_str(body),
    }
}

pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
