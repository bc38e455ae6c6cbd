//! # Controllers Module
//!
//! The session controller computes session state; the application
//! controller drives one command-line invocation through it and hands the
//! result to a view.

pub mod app_controller;
pub mod session_controller;

// Re-export main types for convenience
pub use app_controller::AppController;
pub use session_controller::SessionController;
