//! In-memory editor handle.
//!
//! Clones share one buffer, so a test (or an embedding UI) can keep a copy
//! and edit the text while the controller holds the mounted handle.

use super::EditorHandle;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone, Default)]
pub struct MemoryBuffer {
    text: Arc<Mutex<String>>,
}

impl MemoryBuffer {
    pub fn new(text: &str) -> Self {
        Self {
            text: Arc::new(Mutex::new(text.to_string())),
        }
    }

    /// Snapshot of the current text
    pub fn contents(&self) -> String {
        self.lock().clone()
    }

    /// Simulate a user edit
    pub fn replace(&self, text: &str) {
        *self.lock() = text.to_string();
    }

    fn lock(&self) -> MutexGuard<'_, String> {
        self.text.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl EditorHandle for MemoryBuffer {
    fn get_value(&self) -> io::Result<String> {
        Ok(self.contents())
    }

    fn set_value(&mut self, text: &str) -> io::Result<()> {
        self.replace(text);
        Ok(())
    }

    fn describe(&self) -> String {
        "memory buffer".to_string()
    }
}
