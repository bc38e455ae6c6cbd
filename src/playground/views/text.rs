//! Plain text layout: output on its own, errors and links labelled.

use anyhow::Result;
use std::io::{self, Stdout, Write};

use super::SessionView;
use crate::playground::models::{ResultKind, SessionSnapshot};

pub struct TextView<W: Write> {
    out: W,
}

impl TextView<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TextView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_block(&mut self, text: &str) -> Result<()> {
        self.out.write_all(text.as_bytes())?;
        if !text.ends_with('\n') {
            writeln!(self.out)?;
        }
        Ok(())
    }
}

impl<W: Write> SessionView for TextView<W> {
    fn render(&mut self, snapshot: &SessionSnapshot) -> Result<()> {
        match snapshot.result {
            ResultKind::HasOutput => self.write_block(&snapshot.output)?,
            ResultKind::HasError => writeln!(self.out, "error: {}", snapshot.error)?,
            ResultKind::Clean => {}
        }
        if snapshot.deep_link.is_some() {
            writeln!(self.out, "link: {}", snapshot.href)?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn render_loaded(&mut self, identifier: &str, contents: &str) -> Result<()> {
        writeln!(self.out, "--- snippet {identifier} ---")?;
        self.write_block(contents)?;
        writeln!(self.out, "---")?;
        Ok(())
    }
}
