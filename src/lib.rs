//! # Jsonnet Playground Client
//!
//! Session controller for the Jsonnet playground, plus the terminal
//! front-end built on it.
//!
//! A session wires an editor buffer to two remote services and keeps the
//! visible state consistent:
//!
//! - **Run**: evaluate the buffer on the execution service and show either
//!   its output or its error
//! - **Share**: save the buffer in the snippet store and point the page
//!   location at it (`/#<identifier>`)
//! - **Mount**: when the page location already names a snippet, load it into
//!   the buffer and run it

pub mod cmd_args;
pub mod config;
pub mod playground;

// Re-export main types for easy access
pub use playground::*;
