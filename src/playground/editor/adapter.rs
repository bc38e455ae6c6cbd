//! Binds the externally mounted editor handle and gives the controller
//! get/set access to its buffer.

use super::EditorHandle;
use crate::playground::errors::SessionError;

/// Holds the handle of the currently mounted editor, if any
#[derive(Default)]
pub struct EditorAdapter {
    handle: Option<Box<dyn EditorHandle>>,
}

impl EditorAdapter {
    pub fn new() -> Self {
        Self { handle: None }
    }

    /// Record a newly mounted handle, replacing any previous one
    pub fn bind(&mut self, handle: Box<dyn EditorHandle>) {
        tracing::debug!("Binding editor handle: {}", handle.describe());
        self.handle = Some(handle);
    }

    /// The current handle, or `None` while not yet mounted
    pub fn handle(&self) -> Option<&dyn EditorHandle> {
        self.handle.as_deref()
    }

    pub fn is_bound(&self) -> bool {
        self.handle.is_some()
    }

    /// Read the buffer as it is right now
    pub fn read_buffer(&self) -> Result<String, SessionError> {
        let handle = self.handle.as_ref().ok_or(SessionError::NotMounted)?;
        Ok(handle.get_value()?)
    }

    /// Replace the buffer contents
    pub fn write_buffer(&mut self, text: &str) -> Result<(), SessionError> {
        let handle = self.handle.as_mut().ok_or(SessionError::NotMounted)?;
        handle.set_value(text)?;
        Ok(())
    }
}
