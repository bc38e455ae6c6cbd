//! Machine-readable layout: one JSON object per line.

use anyhow::Result;
use serde::Serialize;
use std::io::{self, Stdout, Write};

use super::SessionView;
use crate::playground::models::{SessionSnapshot, Snippet};

#[derive(Serialize)]
struct LoadedLine<'a> {
    snippet: &'a Snippet,
}

pub struct JsonView<W: Write> {
    out: W,
}

impl JsonView<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SessionView for JsonView<W> {
    fn render(&mut self, snapshot: &SessionSnapshot) -> Result<()> {
        serde_json::to_writer(&mut self.out, snapshot)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }

    fn render_loaded(&mut self, identifier: &str, contents: &str) -> Result<()> {
        let snippet = Snippet::new(identifier, contents);
        serde_json::to_writer(&mut self.out, &LoadedLine { snippet: &snippet })?;
        writeln!(self.out)?;
        Ok(())
    }
}
