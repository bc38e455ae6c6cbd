use std::sync::Arc;

use cucumber::World;
use jsonnet_playground::services::{MemorySnippetStore, MockExecutionClient};
use jsonnet_playground::{
    Location, MemoryBuffer, SessionController, SessionError, Services,
};

/// Session under test together with the doubles standing in for the backend
#[derive(World)]
#[world(init = Self::new)]
pub struct PlaygroundWorld {
    /// Scripted execution service shared with every controller
    pub execution: MockExecutionClient,

    /// In-memory snippet store shared with every controller
    pub store: MemorySnippetStore,

    /// Page address the next session is opened at
    pub href: String,

    /// Buffer of the currently mounted editor
    pub buffer: MemoryBuffer,

    /// Controller of the current session
    pub controller: SessionController,

    /// Last error returned by a controller entry point
    pub last_error: Option<SessionError>,
}

impl std::fmt::Debug for PlaygroundWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaygroundWorld")
            .field("href", &self.href)
            .field("buffer", &self.buffer.contents())
            .field("snapshot", &self.controller.snapshot())
            .field("last_error", &self.last_error)
            .finish()
    }
}

impl PlaygroundWorld {
    pub fn new() -> Self {
        let execution = MockExecutionClient::new();
        let store = MemorySnippetStore::new();
        let controller = Self::build_controller(&execution, &store, "/");

        Self {
            execution,
            store,
            href: "/".to_string(),
            buffer: MemoryBuffer::new(""),
            controller,
            last_error: None,
        }
    }

    fn build_controller(
        execution: &MockExecutionClient,
        store: &MemorySnippetStore,
        href: &str,
    ) -> SessionController {
        let services = Services::new(Arc::new(execution.clone()), Arc::new(store.clone()));
        SessionController::new(services, Location::new(href))
    }

    /// Start a fresh, unmounted session at `href`
    pub fn open_session(&mut self, href: &str) {
        self.href = href.to_string();
        self.controller = Self::build_controller(&self.execution, &self.store, href);
        self.last_error = None;
    }

    /// Mount a new editor holding `text` on the current session
    pub async fn mount(&mut self, text: &str) {
        self.buffer = MemoryBuffer::new(text);
        if let Err(e) = self.controller.mount(Box::new(self.buffer.clone())).await {
            self.last_error = Some(e);
        }
    }
}
