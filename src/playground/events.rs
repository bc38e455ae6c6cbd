//! # Session Messages
//!
//! Results of remote calls travel back to the session controller as
//! messages over an mpsc channel; the controller is the only writer of
//! session state and applies them when it drains the channel.

use crate::playground::errors::StoreError;
use crate::playground::services::ExecutionOutcome;

/// Monotonically increasing tag given to each issued run
pub type RunSeq = u64;

/// Completion of a dispatched remote call
#[derive(Debug)]
pub enum SessionMessage {
    /// An execute call resolved
    Executed {
        seq: RunSeq,
        outcome: ExecutionOutcome,
    },
    /// A save call resolved
    Shared {
        result: Result<String, StoreError>,
    },
}
