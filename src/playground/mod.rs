//! # Playground Session
//!
//! Client side of the Jsonnet playground: an editor buffer wired to a remote
//! execution service and a remote snippet store.
//!
//! ```text
//! ┌──────────────┐  read/write  ┌───────────────────┐  execute   ┌──────────────┐
//! │ EditorHandle │◄─────────────│ SessionController │───────────▶│  Execution   │
//! └──────────────┘              │                   │  save/load ├──────────────┤
//!                               │  SessionState     │───────────▶│ SnippetStore │
//! ┌──────────────┐   snapshot   │  Location (#id)   │            └──────────────┘
//! │ SessionView  │◄─────────────│                   │
//! └──────────────┘              └───────────────────┘
//! ```

pub mod controllers;
pub mod deep_link;
pub mod editor;
pub mod errors;
pub mod events;
pub mod models;
pub mod services;
pub mod views;

// Re-export main types for convenience
pub use controllers::{AppController, SessionController};
pub use deep_link::Location;
pub use editor::{EditorHandle, FileBuffer, MemoryBuffer};
pub use errors::{SessionError, StoreError};
pub use models::{ResultKind, SessionPhase, SessionSnapshot, SessionState, Snippet};
pub use services::{ExecutionClient, ExecutionOutcome, Services, SnippetStore};
pub use views::{JsonView, SessionView, TextView};
