//! A stored, identifier-addressable copy of buffer contents.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snippet {
    /// Opaque identifier assigned by the store
    pub identifier: String,
    /// Raw source text
    pub contents: String,
}

impl Snippet {
    pub fn new(identifier: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            contents: contents.into(),
        }
    }
}
