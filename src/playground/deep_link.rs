//! # Deep-Link Codec
//!
//! A shared snippet is addressed by putting its identifier in the fragment of
//! the page address: `https://jsonnet.dev/#<identifier>`. The fragment is read
//! once when an editor mounts and written once per share.
//!
//! The fragment is percent-encoded: identifiers are decoded on the way out
//! and encoded on the way in, so the store always sees the raw identifier.

use std::borrow::Cow;

/// Identifier carried in `href`: everything after the first `#`, decoded.
///
/// Returns `None` when there is no `#` or nothing follows it. A fragment that
/// does not decode to UTF-8 is returned as written.
pub fn extract(href: &str) -> Option<String> {
    let (_, fragment) = href.split_once('#')?;
    if fragment.is_empty() {
        return None;
    }
    let identifier = urlencoding::decode(fragment).unwrap_or(Cow::Borrowed(fragment));
    Some(identifier.into_owned())
}

/// `href` with its fragment replaced by `identifier`.
pub fn apply(href: &str, identifier: &str) -> String {
    let base = href.split_once('#').map_or(href, |(base, _)| base);
    format!("{base}#{}", urlencoding::encode(identifier))
}

/// The page address a session was opened at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    href: String,
}

impl Location {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    /// Snippet identifier this location points at, if any
    pub fn deep_link(&self) -> Option<String> {
        extract(&self.href)
    }

    /// Rewrite the fragment so the location points at `identifier`
    pub fn apply(&mut self, identifier: &str) {
        self.href = apply(&self.href, identifier);
        tracing::debug!("Location rewritten to {}", self.href);
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new("/")
    }
}
