//! # Scripted Service Implementations
//!
//! In-memory stand-ins for the remote collaborators so the session controller
//! can be driven without a network.
//!
//! ```text
//! Production:  SessionController ──▶ HttpExecutionClient ──▶ POST /api/v1/execute
//!                                ──▶ HttpSnippetStore    ──▶ /api/v1/code
//!
//! Testing:     SessionController ──▶ MockExecutionClient ──▶ scripted outcomes
//!                                ──▶ MemorySnippetStore  ──▶ HashMap<String, String>
//! ```

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use super::{ExecutionClient, ExecutionOutcome, SnippetStore};
use crate::playground::errors::StoreError;
use crate::playground::models::Snippet;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Debug, Clone)]
struct ScriptedOutcome {
    outcome: ExecutionOutcome,
    delay: Duration,
}

#[derive(Debug, Default)]
struct ExecutionScript {
    calls: Vec<String>,
    by_code: HashMap<String, ScriptedOutcome>,
}

/// Execution client answering from a script.
///
/// Code without a scripted answer evaluates to itself followed by a newline.
/// Clones share the script and the call log.
#[derive(Debug, Clone, Default)]
pub struct MockExecutionClient {
    script: Arc<Mutex<ExecutionScript>>,
}

impl MockExecutionClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `code` with `outcome` immediately
    pub fn respond_to(&self, code: &str, outcome: ExecutionOutcome) {
        self.respond_after(code, outcome, Duration::ZERO);
    }

    /// Answer `code` with `outcome` after `delay`
    pub fn respond_after(&self, code: &str, outcome: ExecutionOutcome, delay: Duration) {
        lock(&self.script)
            .by_code
            .insert(code.to_string(), ScriptedOutcome { outcome, delay });
    }

    /// Every code string executed so far, in issue order
    pub fn calls(&self) -> Vec<String> {
        lock(&self.script).calls.clone()
    }
}

#[async_trait]
impl ExecutionClient for MockExecutionClient {
    async fn execute(&self, code: &str) -> ExecutionOutcome {
        let scripted = {
            let mut script = lock(&self.script);
            script.calls.push(code.to_string());
            script.by_code.get(code).cloned()
        };

        match scripted {
            Some(ScriptedOutcome { outcome, delay }) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                outcome
            }
            None => ExecutionOutcome::Success {
                output: format!("{code}\n"),
            },
        }
    }
}

#[derive(Debug, Default)]
struct SnippetTable {
    by_id: HashMap<String, String>,
    next_id: u64,
    unavailable: bool,
}

/// Snippet store keeping everything in a map.
///
/// Saving contents that are already stored returns the existing identifier.
#[derive(Debug, Clone, Default)]
pub struct MemorySnippetStore {
    table: Arc<Mutex<SnippetTable>>,
}

impl MemorySnippetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a snippet under a chosen identifier
    pub fn insert(&self, identifier: &str, contents: &str) {
        lock(&self.table)
            .by_id
            .insert(identifier.to_string(), contents.to_string());
    }

    pub fn get(&self, identifier: &str) -> Option<String> {
        lock(&self.table).by_id.get(identifier).cloned()
    }

    pub fn len(&self) -> usize {
        lock(&self.table).by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Make every call fail with a transport error
    pub fn set_unavailable(&self, unavailable: bool) {
        lock(&self.table).unavailable = unavailable;
    }
}

#[async_trait]
impl SnippetStore for MemorySnippetStore {
    async fn save(&self, code: &str) -> Result<String, StoreError> {
        let mut table = lock(&self.table);
        if table.unavailable {
            return Err(StoreError::Transport("store unavailable".to_string()));
        }
        if code.is_empty() {
            return Err(StoreError::Rejected {
                message: "missing contents".to_string(),
            });
        }
        if let Some((id, _)) = table.by_id.iter().find(|(_, stored)| stored.as_str() == code) {
            return Ok(id.clone());
        }

        table.next_id += 1;
        let id = format!("snippet-{}", table.next_id);
        table.by_id.insert(id.clone(), code.to_string());
        Ok(id)
    }

    async fn load(&self, identifier: &str) -> Result<Snippet, StoreError> {
        let table = lock(&self.table);
        if table.unavailable {
            return Err(StoreError::Transport("store unavailable".to_string()));
        }
        table
            .by_id
            .get(identifier)
            .map(|contents| Snippet::new(identifier, contents.clone()))
            .ok_or_else(|| StoreError::NotFound {
                id: identifier.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_execution_should_record_calls_and_echo_by_default() {
        let client = MockExecutionClient::new();
        let outcome = client.execute("{}").await;

        assert_eq!(
            outcome,
            ExecutionOutcome::Success {
                output: "{}\n".to_string()
            }
        );
        assert_eq!(client.calls(), vec!["{}".to_string()]);
    }

    #[tokio::test]
    async fn memory_store_should_dedupe_identical_contents() {
        let store = MemorySnippetStore::new();
        let first = store.save("{a:1}").await.unwrap();
        let second = store.save("{a:1}").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(store.len(), 1);
        assert_eq!(store.load(&first).await.unwrap().contents, "{a:1}");
    }

    #[tokio::test]
    async fn memory_store_should_report_unknown_ids() {
        let store = MemorySnippetStore::new();
        assert_eq!(
            store.load("nope").await.unwrap_err(),
            StoreError::NotFound {
                id: "nope".to_string()
            }
        );
    }
}
