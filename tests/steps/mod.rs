//! Step definitions for Cucumber tests
//!
//! - `session` - mounting, running and session state
//! - `sharing` - sharing snippets and reopening shared links

pub mod session;
pub mod sharing;
