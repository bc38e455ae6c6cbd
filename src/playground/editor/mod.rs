//! # Editor Handle Layer
//!
//! The text-editing widget is supplied from outside the controller. This
//! module defines the handle trait such widgets implement and the adapter the
//! session controller reads and writes the buffer through.
//!
//! ```text
//! Production:  SessionController ──▶ EditorAdapter ──▶ FileBuffer   ──▶ file on disk
//! Testing:     SessionController ──▶ EditorAdapter ──▶ MemoryBuffer ──▶ Arc<Mutex<String>>
//! ```

use std::io;

pub mod adapter;
pub mod file_buffer;
pub mod memory;

pub use adapter::EditorAdapter;
pub use file_buffer::FileBuffer;
pub use memory::MemoryBuffer;

/// Access to the live text buffer of a mounted editing widget.
///
/// Implementations must not cache: every `get_value` returns what the user
/// sees at that moment.
pub trait EditorHandle: Send {
    /// Current contents of the buffer
    fn get_value(&self) -> io::Result<String>;

    /// Replace the whole buffer
    fn set_value(&mut self, text: &str) -> io::Result<()>;

    /// Short description used in logs
    fn describe(&self) -> String {
        "editor".to_string()
    }
}
