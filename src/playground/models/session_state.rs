//! Visible session state: the last output, the last error and whether an
//! editor is mounted.
//!
//! At most one of output and error is non-empty. Both are replaced together,
//! so a reader never observes a half-applied result.

use serde::Serialize;

/// Which of the result slots is currently filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    Clean,
    HasOutput,
    HasError,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    output_text: String,
    error_text: String,
    editor_ready: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output_text(&self) -> &str {
        &self.output_text
    }

    pub fn error_text(&self) -> &str {
        &self.error_text
    }

    pub fn editor_ready(&self) -> bool {
        self.editor_ready
    }

    pub fn set_editor_ready(&mut self, ready: bool) {
        self.editor_ready = ready;
    }

    /// Show a successful result, clearing any previous error
    pub fn set_output(&mut self, output: impl Into<String>) {
        self.output_text = output.into();
        self.error_text.clear();
    }

    /// Show a failure, clearing any previous output
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_text = message.into();
        self.output_text.clear();
    }

    pub fn result_kind(&self) -> ResultKind {
        if !self.error_text.is_empty() {
            ResultKind::HasError
        } else if !self.output_text.is_empty() {
            ResultKind::HasOutput
        } else {
            ResultKind::Clean
        }
    }
}
