//! # Remote Execution Client
//!
//! Sends a buffer to the execution service and classifies the single
//! response it gets back.

use async_trait::async_trait;

use super::wire::{parse_first, CodeRequest, ExecuteResponse, EXECUTE_PATH};
use super::{error_chain, ExecutionClient, ExecutionOutcome};

/// Execution client speaking JSON over HTTP
pub struct HttpExecutionClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpExecutionClient {
    pub fn new(client: reqwest::Client, server: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}{EXECUTE_PATH}", server.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn request(&self, code: &str) -> Result<ExecuteResponse, String> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&CodeRequest { code })
            .send()
            .await
            .map_err(|e| format!("execute request failed: {}", error_chain(&e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| format!("failed to read execute response: {}", error_chain(&e)))?;

        tracing::debug!("Execute response: status={}, length={}", status, body.len());

        parse_first(&body).map_err(|e| {
            format!(
                "unreadable execute response (HTTP {}): {e}",
                status.as_u16()
            )
        })
    }
}

#[async_trait]
impl ExecutionClient for HttpExecutionClient {
    async fn execute(&self, code: &str) -> ExecutionOutcome {
        tracing::debug!("Executing {} bytes against {}", code.len(), self.endpoint);
        match self.request(code).await {
            Ok(response) => response.into_outcome(),
            Err(message) => {
                tracing::error!("{message}");
                ExecutionOutcome::Failure { message }
            }
        }
    }
}
