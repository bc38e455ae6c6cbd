//! # Views
//!
//! How a session is drawn is decoupled from how it is computed: the
//! controllers hand a [`SessionSnapshot`] to whichever [`SessionView`] the
//! user picked.
//!
//! - [`TextView`]: human-readable layout
//! - [`JsonView`]: one JSON document per render, for scripts

use anyhow::Result;

use crate::playground::models::SessionSnapshot;

pub mod json;
pub mod text;

pub use json::JsonView;
pub use text::TextView;

/// Rendering capabilities a presentation layer provides
pub trait SessionView {
    /// Draw the session result
    fn render(&mut self, snapshot: &SessionSnapshot) -> Result<()>;

    /// Show a snippet that was loaded into an editor the user cannot see
    fn render_loaded(&mut self, identifier: &str, contents: &str) -> Result<()>;
}

impl<V: SessionView + ?Sized> SessionView for Box<V> {
    fn render(&mut self, snapshot: &SessionSnapshot) -> Result<()> {
        (**self).render(snapshot)
    }

    fn render_loaded(&mut self, identifier: &str, contents: &str) -> Result<()> {
        (**self).render_loaded(identifier, contents)
    }
}
