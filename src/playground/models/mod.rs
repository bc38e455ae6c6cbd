//! # Session Models
//!
//! Plain data owned by the session controller. Nothing in here performs I/O.

pub mod session_state;
pub mod snapshot;
pub mod snippet;

pub use session_state::{ResultKind, SessionState};
pub use snapshot::{SessionPhase, SessionSnapshot};
pub use snippet::Snippet;
