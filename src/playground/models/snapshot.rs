//! Read-only view of a session handed to renderers.

use super::ResultKind;
use serde::Serialize;

/// Control state of the session controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// No editor handle bound yet
    Unmounted,
    /// Handle bound, deep-link snippet still loading
    Mounting,
    /// Nothing in flight that changes the result slots
    Idle,
    /// At least one run has been issued and not resolved
    Running,
}

/// Everything a presentation layer needs to draw the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub result: ResultKind,
    pub output: String,
    pub error: String,
    pub href: String,
    pub deep_link: Option<String>,
    /// True while a share has been issued and not resolved
    pub sharing: bool,
}
