//! # Error Kinds
//!
//! Typed failures raised by the snippet store client and by the session
//! controller itself. Execution failures are not errors: they travel as
//! [`ExecutionOutcome::Failure`](crate::playground::services::ExecutionOutcome).

/// Failure of a snippet store call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The store has no snippet for this identifier
    #[error("snippet '{id}' not found")]
    NotFound { id: String },

    /// The store answered with an error message of its own
    #[error("{message}")]
    Rejected { message: String },

    /// The buffer exceeds what the store accepts
    #[error("snippet is {len} characters long, the store accepts at most {max}")]
    TooLarge { len: usize, max: usize },

    /// The request never produced a response
    #[error("transport error: {0}")]
    Transport(String),

    /// A response arrived but could not be understood
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Failure of a session controller entry point.
///
/// These are returned to the caller and never written into session state.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// `run()` or `share()` was invoked before an editor handle was bound
    #[error("editor is not mounted")]
    NotMounted,

    /// The editor widget failed to hand over or accept its buffer
    #[error("editor buffer access failed: {0}")]
    Buffer(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_should_render_server_message_verbatim() {
        let err = StoreError::Rejected {
            message: "failed to get code: ent: code not found".to_string(),
        };
        assert_eq!(err.to_string(), "failed to get code: ent: code not found");
    }

    #[test]
    fn too_large_should_mention_both_sizes() {
        let err = StoreError::TooLarge {
            len: 400_001,
            max: 400_000,
        };
        let text = err.to_string();
        assert!(text.contains("400001"));
        assert!(text.contains("400000"));
    }
}
