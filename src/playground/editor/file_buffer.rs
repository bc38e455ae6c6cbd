//! Editor handle backed by a file on disk.
//!
//! The terminal front-end treats the user's file as the editing widget: the
//! file is read on every access, so edits made in another editor between
//! actions are always picked up.

use super::EditorHandle;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileBuffer {
    path: PathBuf,
}

impl FileBuffer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EditorHandle for FileBuffer {
    fn get_value(&self) -> io::Result<String> {
        match fs::read_to_string(&self.path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
            other => other,
        }
    }

    fn set_value(&mut self, text: &str) -> io::Result<()> {
        fs::write(&self.path, text)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_buffer_should_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.jsonnet");
        let mut buffer = FileBuffer::new(&path);

        buffer.set_value("{ hello: 'world' }").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ hello: 'world' }");

        fs::write(&path, "{ edited: true }").unwrap();
        assert_eq!(buffer.get_value().unwrap(), "{ edited: true }");
    }

    #[test]
    fn missing_file_should_read_as_empty_buffer() {
        let dir = tempfile::tempdir().unwrap();
        let buffer = FileBuffer::new(dir.path().join("absent.jsonnet"));
        assert_eq!(buffer.get_value().unwrap(), "");
    }
}
