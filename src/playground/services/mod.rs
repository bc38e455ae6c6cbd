//! # Services Layer
//!
//! Clients for the two remote collaborators of a session: the execution
//! service that evaluates a buffer and the snippet store that saves and loads
//! buffers by identifier. The controller only sees the traits below, so the
//! HTTP implementations can be swapped for the scripted ones in [`mock`].

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::config::PlaygroundProfile;
use crate::playground::errors::StoreError;
use crate::playground::models::Snippet;

pub mod execution;
pub mod mock;
pub mod snippets;
pub mod wire;

// Re-export service types
pub use execution::HttpExecutionClient;
pub use mock::{MemorySnippetStore, MockExecutionClient};
pub use snippets::{HttpSnippetStore, MAX_SNIPPET_LEN};

/// Result of a single run against the execution service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionOutcome {
    Success { output: String },
    Failure { message: String },
}

impl ExecutionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ExecutionOutcome::Success { .. })
    }
}

/// Evaluates code remotely.
///
/// Never fails: transport problems come back as [`ExecutionOutcome::Failure`].
/// No retries and no timeout beyond the transport's own defaults.
#[async_trait]
pub trait ExecutionClient: Send + Sync {
    async fn execute(&self, code: &str) -> ExecutionOutcome;
}

/// Saves and loads snippets by identifier
#[async_trait]
pub trait SnippetStore: Send + Sync {
    /// Store `code`, returning the identifier the store assigned
    async fn save(&self, code: &str) -> Result<String, StoreError>;

    /// Fetch the snippet stored under `identifier`
    async fn load(&self, identifier: &str) -> Result<Snippet, StoreError>;
}

/// Aggregates the remote clients a session needs
#[derive(Clone)]
pub struct Services {
    /// Client for the execution service
    pub execution: Arc<dyn ExecutionClient>,
    /// Client for the snippet store
    pub snippets: Arc<dyn SnippetStore>,
}

impl Services {
    pub fn new(execution: Arc<dyn ExecutionClient>, snippets: Arc<dyn SnippetStore>) -> Self {
        Self {
            execution,
            snippets,
        }
    }

    /// HTTP clients for the backend named by `profile`, sharing one connection pool
    pub fn from_profile(profile: &PlaygroundProfile) -> Result<Self> {
        tracing::debug!("Creating HTTP services for server {}", profile.server());
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        tracing::info!("HTTP client created successfully");

        Ok(Self::new(
            Arc::new(HttpExecutionClient::new(client.clone(), profile.server())),
            Arc::new(HttpSnippetStore::new(client, profile.server())),
        ))
    }
}

/// Render an error with its full source chain
pub(crate) fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(&format!("\n  Caused by: {cause}"));
        source = cause.source();
    }
    message
}
