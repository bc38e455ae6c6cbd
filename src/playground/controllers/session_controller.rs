//! # Session Controller
//!
//! Owns the session state and sequences the editor mount, deep-link loading,
//! runs and shares.
//!
//! ```text
//! Unmounted ──mount──▶ Mounting ──no deep-link──────────────▶ Idle
//!                          │                                    ▲ │
//!                          └──load + write buffer──▶ Running ───┘ │ run
//!                                                      ▲──────────┘
//! ```
//!
//! Runs and shares are dispatched as tokio tasks and report back over a
//! channel. State is written only while draining that channel, so all
//! writes happen on the caller's logical thread. Every run carries a sequence
//! number and only the result of the most recently issued run is applied;
//! results of superseded runs are dropped. A call whose task panics reports
//! back as a failure, so every dispatched call is eventually accounted for.
//!
//! `run()` and `share()` spawn tasks and must be called inside a tokio runtime.

use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinError;

use crate::playground::deep_link::Location;
use crate::playground::editor::{EditorAdapter, EditorHandle};
use crate::playground::errors::{SessionError, StoreError};
use crate::playground::events::{RunSeq, SessionMessage};
use crate::playground::models::{SessionPhase, SessionSnapshot, SessionState};
use crate::playground::services::{ExecutionOutcome, Services};

const MESSAGE_CHANNEL_CAPACITY: usize = 32;

pub struct SessionController {
    services: Services,
    editor: EditorAdapter,
    location: Location,
    state: SessionState,
    mounting: bool,
    /// Sequence number of the most recently issued run
    last_issued: RunSeq,
    pending_runs: usize,
    pending_shares: usize,
    message_receiver: mpsc::Receiver<SessionMessage>,
    message_sender: mpsc::Sender<SessionMessage>,
}

impl SessionController {
    pub fn new(services: Services, location: Location) -> Self {
        let (message_sender, message_receiver) = mpsc::channel(MESSAGE_CHANNEL_CAPACITY);
        Self {
            services,
            editor: EditorAdapter::new(),
            location,
            state: SessionState::new(),
            mounting: false,
            last_issued: 0,
            pending_runs: 0,
            pending_shares: 0,
            message_receiver,
            message_sender,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn editor(&self) -> &EditorAdapter {
        &self.editor
    }

    pub fn phase(&self) -> SessionPhase {
        if !self.editor.is_bound() {
            SessionPhase::Unmounted
        } else if self.mounting {
            SessionPhase::Mounting
        } else if self.pending_runs > 0 {
            SessionPhase::Running
        } else {
            SessionPhase::Idle
        }
    }

    /// Whether any dispatched run or share has not reported back yet
    pub fn has_pending(&self) -> bool {
        self.pending_runs > 0 || self.pending_shares > 0
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase(),
            result: self.state.result_kind(),
            output: self.state.output_text().to_string(),
            error: self.state.error_text().to_string(),
            href: self.location.href().to_string(),
            deep_link: self.location.deep_link(),
            sharing: self.pending_shares > 0,
        }
    }

    /// Bind a freshly mounted editor.
    ///
    /// When the location carries a deep-link, the snippet is loaded into the
    /// buffer and run straight away. A failed load is reported through the
    /// session error text and leaves the session idle.
    pub async fn mount(&mut self, handle: Box<dyn EditorHandle>) -> Result<(), SessionError> {
        self.editor.bind(handle);
        self.state.set_editor_ready(true);

        let Some(identifier) = self.location.deep_link() else {
            tracing::info!("Editor mounted, no deep-link in {}", self.location.href());
            return Ok(());
        };

        tracing::info!("Editor mounted, loading snippet {identifier}");
        self.mounting = true;
        let loaded = self.services.snippets.load(&identifier).await;
        self.mounting = false;

        match loaded {
            Ok(snippet) => {
                self.editor.write_buffer(&snippet.contents)?;
                self.run()?;
            }
            Err(e) => {
                tracing::warn!("Failed to load snippet {identifier}: {e}");
                self.state
                    .set_error(format!("failed to load snippet {identifier}: {e}"));
            }
        }
        Ok(())
    }

    /// Send the current buffer to the execution service.
    ///
    /// Returns the sequence number the run was issued with.
    pub fn run(&mut self) -> Result<RunSeq, SessionError> {
        let code = self.editor.read_buffer()?;

        self.last_issued += 1;
        let seq = self.last_issued;
        self.pending_runs += 1;
        tracing::debug!("Issuing run {seq} ({} bytes)", code.len());

        let execution = Arc::clone(&self.services.execution);
        self.dispatch(
            async move { execution.execute(&code).await },
            move |joined| {
                let outcome = joined.unwrap_or_else(|e| ExecutionOutcome::Failure {
                    message: format!("execution task failed: {e}"),
                });
                SessionMessage::Executed { seq, outcome }
            },
        );

        Ok(seq)
    }

    /// Save the current buffer and point the location at the new snippet
    pub fn share(&mut self) -> Result<(), SessionError> {
        let code = self.editor.read_buffer()?;
        self.pending_shares += 1;
        tracing::debug!("Issuing share ({} bytes)", code.len());

        let snippets = Arc::clone(&self.services.snippets);
        self.dispatch(
            async move { snippets.save(&code).await },
            |joined| SessionMessage::Shared {
                result: joined.unwrap_or_else(|e| {
                    Err(StoreError::Transport(format!("save task failed: {e}")))
                }),
            },
        );

        Ok(())
    }

    /// Run `work` on its own task and report its completion over the channel.
    ///
    /// A panic inside `work` still produces a message, so every dispatched
    /// call is accounted for by `settle`.
    fn dispatch<T, F, R>(&self, work: F, report: R)
    where
        T: Send + 'static,
        F: Future<Output = T> + Send + 'static,
        R: FnOnce(Result<T, JoinError>) -> SessionMessage + Send + 'static,
    {
        let sender = self.message_sender.clone();
        tokio::spawn(async move {
            let joined = tokio::spawn(work).await;
            if let Err(e) = &joined {
                tracing::error!("Remote call task ended abnormally: {e}");
            }
            // Receiver is gone only when the controller was dropped
            let _ = sender.send(report(joined)).await;
        });
    }

    /// Apply every result that has already arrived, without waiting.
    ///
    /// Returns the number of messages applied.
    pub fn poll_messages(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(message) = self.message_receiver.try_recv() {
            self.apply_message(message);
            applied += 1;
        }
        applied
    }

    /// Wait until every dispatched run and share has reported back
    pub async fn settle(&mut self) {
        while self.has_pending() {
            match self.message_receiver.recv().await {
                Some(message) => self.apply_message(message),
                None => break,
            }
        }
    }

    fn apply_message(&mut self, message: SessionMessage) {
        match message {
            SessionMessage::Executed { seq, outcome } => {
                self.pending_runs = self.pending_runs.saturating_sub(1);
                if seq != self.last_issued {
                    tracing::debug!(
                        "Discarding result of run {seq}, run {} supersedes it",
                        self.last_issued
                    );
                    return;
                }
                match outcome {
                    ExecutionOutcome::Success { output } => {
                        tracing::debug!("Run {seq} succeeded");
                        self.state.set_output(output);
                    }
                    ExecutionOutcome::Failure { message } => {
                        tracing::debug!("Run {seq} failed: {message}");
                        self.state.set_error(message);
                    }
                }
            }
            SessionMessage::Shared { result } => {
                self.pending_shares = self.pending_shares.saturating_sub(1);
                match result {
                    Ok(identifier) => {
                        tracing::info!("Shared as {identifier}");
                        self.location.apply(&identifier);
                    }
                    Err(e) => {
                        tracing::warn!("Share failed: {e}");
                        self.state.set_error(format!("failed to share snippet: {e}"));
                    }
                }
            }
        }
    }
}
